//! Market module - Fixed display values and their text formatting

mod amount;
mod display;

pub use amount::{parse_amount, sanitize};
pub use display::{Account, Position, PositionSide, Quote};
