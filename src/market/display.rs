//! Display Values Module
//! Fixed quote, balance and position figures shown on the screen, plus formatting.

use serde::{Deserialize, Serialize};

/// Format `value` with `decimals` fraction digits and comma thousands separators.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let digits = int_part.as_bytes();
    let mut grouped = String::with_capacity(fixed.len() + digits.len() / 3 + 1);
    if value < 0.0 && fixed.bytes().any(|b| b != b'0' && b != b'.') {
        grouped.push('-');
    }
    for (i, &d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(d as char);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }

    grouped
}

/// Last price of the traded pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quote {
    pub base: String,
    pub quote: String,
    /// Glyph drawn in the coin badge. Must be covered by the UI font.
    pub glyph: String,
    pub price: f64,
    pub change_pct: f64,
}

impl Default for Quote {
    fn default() -> Self {
        Self {
            base: "BTC".to_string(),
            quote: "USDT".to_string(),
            glyph: "B".to_string(),
            price: 90_467.87,
            change_pct: 6.58,
        }
    }
}

impl Quote {
    pub fn pair_text(&self) -> String {
        format!("{} / {}", self.base, self.quote)
    }

    /// Exchange symbol, e.g. `BTCUSDT`.
    pub fn symbol(&self) -> String {
        format!("{}{}", self.base, self.quote)
    }

    pub fn price_text(&self) -> String {
        format!("${}", format_grouped(self.price, 2))
    }

    pub fn change_text(&self) -> String {
        let arrow = if self.is_up() { '↑' } else { '↓' };
        format!("{} {:.2}%", arrow, self.change_pct.abs())
    }

    pub fn is_up(&self) -> bool {
        self.change_pct >= 0.0
    }
}

/// Trading account figures shown beside the order type switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub available: f64,
    pub currency: String,
    pub leverage: u32,
}

impl Default for Account {
    fn default() -> Self {
        Self {
            available: 2_965.65,
            currency: "USDT".to_string(),
            leverage: 100,
        }
    }
}

impl Account {
    pub fn available_text(&self) -> String {
        format!("{} {}", format_grouped(self.available, 2), self.currency)
    }

    pub fn leverage_text(&self) -> String {
        format!("{}x ▼", self.leverage)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionSide {
    Long,
    Short,
}

impl PositionSide {
    pub fn label(&self) -> &'static str {
        match self {
            PositionSide::Long => "Long",
            PositionSide::Short => "Short",
        }
    }
}

/// An open position as shown on the position card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    pub side: PositionSide,
    pub leverage: u32,
    pub unrealized_pnl: f64,
    pub pnl_pct: f64,
    pub size: f64,
    pub notional: f64,
    pub margin: f64,
    pub entry_price: f64,
    pub liq_price: f64,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            side: PositionSide::Long,
            leverage: 100,
            unrealized_pnl: 127.32,
            pnl_pct: 398.23,
            size: 0.034,
            notional: 3195.34,
            margin: 34.23,
            entry_price: 90_721.92,
            liq_price: 80_721.92,
        }
    }
}

impl Position {
    pub fn meta_text(&self) -> (String, String) {
        (self.side.label().to_string(), format!("{}x", self.leverage))
    }

    pub fn is_profitable(&self) -> bool {
        self.unrealized_pnl >= 0.0
    }

    pub fn pnl_text(&self, quote: &str) -> String {
        format!(
            "{:+.2} {} / {:.2}%",
            self.unrealized_pnl, quote, self.pnl_pct
        )
    }

    pub fn size_text(&self, base: &str) -> String {
        format!("{} {} / ${:.2}", self.size, base, self.notional)
    }

    pub fn margin_text(&self, quote: &str) -> String {
        format!("${:.2} {}", self.margin, quote)
    }

    pub fn entry_text(&self) -> String {
        format_grouped(self.entry_price, 2)
    }

    pub fn liq_text(&self) -> String {
        format_grouped(self.liq_price, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping() {
        assert_eq!(format_grouped(90_467.87, 2), "90,467.87");
        assert_eq!(format_grouped(2_965.65, 2), "2,965.65");
        assert_eq!(format_grouped(999.0, 2), "999.00");
        assert_eq!(format_grouped(1_000.0, 0), "1,000");
        assert_eq!(format_grouped(1_234_567.891, 1), "1,234,567.9");
        assert_eq!(format_grouped(0.0, 2), "0.00");
        assert_eq!(format_grouped(-12_345.6, 2), "-12,345.60");
        assert_eq!(format_grouped(-0.001, 2), "0.00");
    }

    #[test]
    fn quote_texts() {
        let quote = Quote::default();
        assert_eq!(quote.pair_text(), "BTC / USDT");
        assert_eq!(quote.symbol(), "BTCUSDT");
        assert_eq!(quote.price_text(), "$90,467.87");
        assert_eq!(quote.change_text(), "↑ 6.58%");
        assert!(quote.glyph.is_ascii());

        let down = Quote {
            change_pct: -1.2,
            ..Quote::default()
        };
        assert!(!down.is_up());
        assert_eq!(down.change_text(), "↓ 1.20%");
    }

    #[test]
    fn account_texts() {
        let account = Account::default();
        assert_eq!(account.available_text(), "2,965.65 USDT");
        assert_eq!(account.leverage_text(), "100x ▼");
    }

    #[test]
    fn position_card_texts() {
        let pos = Position::default();
        assert_eq!(pos.meta_text(), ("Long".to_string(), "100x".to_string()));
        assert_eq!(pos.pnl_text("USDT"), "+127.32 USDT / 398.23%");
        assert_eq!(pos.size_text("BTC"), "0.034 BTC / $3195.34");
        assert_eq!(pos.margin_text("USDT"), "$34.23 USDT");
        assert_eq!(pos.entry_text(), "90,721.92");
        assert_eq!(pos.liq_text(), "80,721.92");
    }

    #[test]
    fn losing_position_shows_minus() {
        let pos = Position {
            unrealized_pnl: -5.5,
            pnl_pct: -17.1,
            ..Position::default()
        };
        assert!(!pos.is_profitable());
        assert_eq!(pos.pnl_text("USDT"), "-5.50 USDT / -17.10%");
    }
}
