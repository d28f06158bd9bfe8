//! Selection module - Exclusive toggle state for the screen controls

mod choices;
mod toggle;

pub use choices::{OrderType, PositionsTab, Side, Timeframe};
pub use toggle::{Choice, SelectionState};
