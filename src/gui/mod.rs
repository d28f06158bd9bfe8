//! GUI module - User interface components

mod app;
mod chart_card;
mod order_panel;
mod positions_panel;
pub mod theme;

pub use app::TradeScreenApp;
pub use chart_card::ChartCard;
pub use order_panel::{OrderPanel, OrderPanelAction};
pub use positions_panel::{PositionsAction, PositionsPanel};
