pub mod candle_stick;
pub mod price_grid;

pub use candle_stick::CandleStick;
pub use price_grid::PriceGrid;
