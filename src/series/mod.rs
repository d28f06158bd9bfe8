//! Series module - Decorative chart data

mod generator;

pub use generator::{Series, SeriesGenerator, SeriesParams, SeriesParamsError};
