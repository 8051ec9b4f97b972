#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CandleCanvasError {
    #[error("Invalid view range {start}..{end}. Range end must be non-zero and differ from range start.")]
    InvalidRange { start: f64, end: f64 },
}
