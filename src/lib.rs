pub mod error;
pub mod geometry;
pub mod surface;
pub mod widgets;

#[cfg(test)]
pub mod testutils;

pub use error::CandleCanvasError as Error;
pub type Result<T> = std::result::Result<T, Error>;
pub use geometry::*;
pub use surface::*;
pub use widgets::*;
