//! Toggle value sets
//! The closed enumerations behind each exclusive control on the screen.

use super::toggle::Choice;

/// Chart timeframe shown in the segment row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Timeframe {
    OneMinute,
    #[default]
    FifteenMinutes,
    OneHour,
    OneDay,
    OneWeek,
    OneMonth,
}

impl Choice for Timeframe {
    const ALL: &'static [Self] = &[
        Timeframe::OneMinute,
        Timeframe::FifteenMinutes,
        Timeframe::OneHour,
        Timeframe::OneDay,
        Timeframe::OneWeek,
        Timeframe::OneMonth,
    ];

    fn label(&self) -> &'static str {
        match self {
            Timeframe::OneMinute => "1m",
            Timeframe::FifteenMinutes => "15m",
            Timeframe::OneHour => "1h",
            Timeframe::OneDay => "1d",
            Timeframe::OneWeek => "1w",
            Timeframe::OneMonth => "1M",
        }
    }
}

/// Order direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    #[default]
    Buy,
    Sell,
}

impl Choice for Side {
    const ALL: &'static [Self] = &[Side::Buy, Side::Sell];

    fn label(&self) -> &'static str {
        match self {
            Side::Buy => "Buy",
            Side::Sell => "Sell",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderType {
    #[default]
    Market,
    Limit,
}

impl Choice for OrderType {
    const ALL: &'static [Self] = &[OrderType::Market, OrderType::Limit];

    fn label(&self) -> &'static str {
        match self {
            OrderType::Market => "Market",
            OrderType::Limit => "Limit",
        }
    }
}

/// Tabs above the position list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PositionsTab {
    #[default]
    Positions,
    OpenOrders,
    HideOtherPairs,
}

impl PositionsTab {
    /// Tab caption, with the open position count on the positions tab.
    pub fn caption(&self, position_count: usize) -> String {
        match self {
            PositionsTab::Positions => format!("{} ({})", self.label(), position_count),
            _ => self.label().to_string(),
        }
    }
}

impl Choice for PositionsTab {
    const ALL: &'static [Self] = &[
        PositionsTab::Positions,
        PositionsTab::OpenOrders,
        PositionsTab::HideOtherPairs,
    ];

    fn label(&self) -> &'static str {
        match self {
            PositionsTab::Positions => "Positions",
            PositionsTab::OpenOrders => "Open Orders",
            PositionsTab::HideOtherPairs => "Hide Other Pairs",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeframe_labels_in_display_order() {
        let labels: Vec<&str> = Timeframe::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["1m", "15m", "1h", "1d", "1w", "1M"]);
    }

    #[test]
    fn defaults_match_initial_screen() {
        assert_eq!(Timeframe::default(), Timeframe::FifteenMinutes);
        assert_eq!(Side::default(), Side::Buy);
        assert_eq!(OrderType::default(), OrderType::Market);
        assert_eq!(PositionsTab::default(), PositionsTab::Positions);
    }

    #[test]
    fn positions_caption_carries_count() {
        assert_eq!(PositionsTab::Positions.caption(1), "Positions (1)");
        assert_eq!(PositionsTab::OpenOrders.caption(1), "Open Orders");
        assert_eq!(PositionsTab::HideOtherPairs.caption(3), "Hide Other Pairs");
    }
}
