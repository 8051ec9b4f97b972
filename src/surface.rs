//! Drawing surface abstraction.
//!
//! [`Drawable`] exposes the two primitives the candle renderer needs, so the
//! geometry mapper stays independent of any particular canvas API.
//! [`BufferSurface`] is the ratatui implementation rasterizing onto a cell
//! buffer, one cell per pixel unit.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};

use crate::geometry::{CandleGeometry, Point, Size};

const UNICODE_BODY: &str = "█";
const UNICODE_WICK: &str = "│";

pub trait Drawable {
    fn draw_rect(&mut self, color: Color, size: Size, top_left: Point);

    fn draw_line(&mut self, color: Color, start: Point, end: Point, stroke_width: f64);
}

/// Draw one candle onto a surface, body first and then the wick over it,
/// both in the trend color.
pub fn render_candle(geometry: &CandleGeometry, surface: &mut impl Drawable) {
    let color = geometry.trend.color();
    surface.draw_rect(color, geometry.body_size, geometry.body_top_left);
    surface.draw_line(color, geometry.wick_start, geometry.wick_end, 1.0);
}

/// Rasterizes draw calls onto a ratatui [`Buffer`] inside a fixed area.
/// Coordinates are relative to the area origin. Anything falling outside the
/// area is clipped.
pub struct BufferSurface<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferSurface<'a> {
    pub fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn set_cell(&mut self, x: u16, y: u16, symbol: &str, style: Style) {
        if x < self.area.width && y < self.area.height {
            self.buf
                .set_string(self.area.x + x, self.area.y + y, symbol, style);
        }
    }
}

impl Drawable for BufferSurface<'_> {
    fn draw_rect(&mut self, color: Color, size: Size, top_left: Point) {
        let style = Style::default().fg(color);
        // f64 to u16 casts saturate, negative coordinates clip to zero
        let x0 = top_left.x.round() as u16;
        let x1 = (top_left.x + size.width).round() as u16;
        let y0 = top_left.y.round() as u16;
        let y1 = (top_left.y + size.height).round() as u16;
        for y in y0..y1 {
            for x in x0..x1 {
                self.set_cell(x, y, UNICODE_BODY, style);
            }
        }
    }

    fn draw_line(&mut self, color: Color, start: Point, end: Point, _stroke_width: f64) {
        // terminal cells quantize the stroke to a single column
        let style = Style::default().fg(color);
        let x = start.x.round() as u16;
        let y0 = start.y.min(end.y).round() as u16;
        let y1 = start.y.max(end.y).round() as u16;
        for y in y0..=y1 {
            self.set_cell(x, y, UNICODE_WICK, style);
        }
    }
}
