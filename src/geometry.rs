//! Price-to-pixel mapping for a single candlestick.
//!
//! The mapper converts four price values plus a visible price range into
//! geometry on a drawing surface: a body rectangle spanning the open-close
//! interval and a wick segment spanning the high-low interval. The vertical
//! offset formula divides by `(end - start) / end` while the body height
//! divides by `(end - start)` directly. Both formulas are kept as-is for
//! pixel-exact compatibility with existing renders.

use ratatui::style::Color;
use strum_macros::Display;

use crate::error::CandleCanvasError;

/// Open, close, high and low prices of one candle. All values are expected
/// to lie within the visible range, this is not enforced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandleStickData {
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
}

impl Default for CandleStickData {
    fn default() -> Self {
        Self {
            open: 0.60,
            close: 0.70,
            high: 0.80,
            low: 0.55,
        }
    }
}

impl CandleStickData {
    pub fn new(open: f64, close: f64, high: f64, low: f64) -> Self {
        Self {
            open,
            close,
            high,
            low,
        }
    }

    /// Down only when open is strictly greater than close, so a doji
    /// (open == close) counts as Up.
    pub fn trend(&self) -> Trend {
        if self.open > self.close {
            Trend::Down
        } else {
            Trend::Up
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq, Hash)]
pub enum Trend {
    #[default]
    Up,
    Down,
}

impl Trend {
    pub fn color(self) -> Color {
        match self {
            Trend::Up => Color::LightGreen,
            Trend::Down => Color::Red,
        }
    }
}

/// Visible price window mapped onto the vertical extent of the surface.
/// Passed explicitly into every mapping call, there is no ambient range
/// state shared between candles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewRange {
    start: f64,
    end: f64,
}

impl Default for ViewRange {
    fn default() -> Self {
        Self {
            start: 0.5,
            end: 1.0,
        }
    }
}

impl ViewRange {
    /// Both `end == 0` and `end == start` make the mapping arithmetic
    /// divide by zero, so they are rejected here once instead of being
    /// checked on every mapped price.
    pub fn new(start: f64, end: f64) -> crate::Result<Self> {
        if end == 0.0 || end == start {
            return Err(CandleCanvasError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    fn range_diff(&self) -> f64 {
        (self.end - self.start) / self.end
    }

    /// Normalized vertical offset of a price, 0 at range end. Scaled by the
    /// surface height to get a pixel y-coordinate.
    pub fn offset_multiplier(&self, price: f64) -> f64 {
        (self.end - price) / self.range_diff()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Drawable geometry of one candle: a filled body rectangle and a vertical
/// wick line, both in surface pixel coordinates with y growing downwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandleGeometry {
    pub trend: Trend,
    pub body_size: Size,
    pub body_top_left: Point,
    pub wick_start: Point,
    pub wick_end: Point,
}

/// Map one candle into surface coordinates.
///
/// The body spans the full surface width. Its height uses the plain linear
/// scale over the range span while the vertical offsets of body and wick use
/// [`ViewRange::offset_multiplier`]. The wick runs from `high` down to `low`
/// and is centered horizontally.
pub fn candle_geometry(
    data: &CandleStickData,
    range: ViewRange,
    surface: Size,
) -> CandleGeometry {
    let body_height_multiplier = (data.open - data.close) / range.span();

    let body_top_price = if data.open > data.close {
        data.open
    } else {
        data.close
    };
    let body_offset_multiplier = range.offset_multiplier(body_top_price);

    let wick_start_multiplier = range.offset_multiplier(data.high);
    let wick_end_multiplier = range.offset_multiplier(data.low);

    CandleGeometry {
        trend: data.trend(),
        body_size: Size {
            width: surface.width,
            height: (body_height_multiplier * surface.height).abs(),
        },
        body_top_left: Point {
            x: 0.0,
            y: body_offset_multiplier * surface.height,
        },
        wick_start: Point {
            x: surface.width / 2.0,
            y: wick_start_multiplier * surface.height,
        },
        wick_end: Point {
            x: surface.width / 2.0,
            y: wick_end_multiplier * surface.height,
        },
    }
}
