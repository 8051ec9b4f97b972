//! Test utilities for widget and surface testing.
//!
//! Provides a fixed-size test terminal to render widgets and compare the
//! rendered text output, plus a recording surface capturing draw calls.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Color,
};

use crate::geometry::{Point, Size};
use crate::surface::Drawable;

/// A fixed-size test terminal for rendering components and comparing output.
pub struct TestTerminal {
    pub buffer: Buffer,
    pub area: Rect,
}

impl TestTerminal {
    /// Create a test terminal with fixed width and height.
    pub fn new(width: u16, height: u16) -> Self {
        let area = Rect::new(0, 0, width, height);
        let buffer = Buffer::empty(area);
        Self { buffer, area }
    }

    /// Reset the buffer to empty state.
    pub fn clear(&mut self) {
        self.buffer = Buffer::empty(self.area);
    }

    /// Get the rendered terminal output as a string.
    /// Returns exactly what would appear on screen - each row is a line.
    pub fn render_to_string(&self) -> String {
        let mut lines = Vec::new();
        for y in 0..self.area.height {
            let mut line = String::new();
            for x in 0..self.area.width {
                let cell = self.buffer.cell(Position::new(x, y)).unwrap();
                let symbol = cell.symbol();
                // Empty cells are represented as space
                if symbol.is_empty() {
                    line.push(' ');
                } else {
                    line.push_str(symbol);
                }
            }
            // Trim trailing spaces for cleaner comparison
            lines.push(line.trim_end().to_string());
        }
        // Remove trailing empty lines
        while lines.last().map(|l| l.is_empty()).unwrap_or(false) {
            lines.pop();
        }
        lines.join("\n")
    }

    /// Symbol at a buffer position.
    pub fn symbol_at(&self, x: u16, y: u16) -> &str {
        self.buffer
            .cell(Position::new(x, y))
            .map(|cell| cell.symbol())
            .unwrap_or("")
    }

    /// Foreground color at a buffer position.
    pub fn fg_at(&self, x: u16, y: u16) -> Option<Color> {
        self.buffer
            .cell(Position::new(x, y))
            .map(|cell| cell.style().fg.unwrap_or(Color::Reset))
    }
}

/// A draw call captured by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Rect {
        color: Color,
        size: Size,
        top_left: Point,
    },
    Line {
        color: Color,
        start: Point,
        end: Point,
        stroke_width: f64,
    },
}

/// Test implementation of the Drawable trait recording calls in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl Drawable for RecordingSurface {
    fn draw_rect(&mut self, color: Color, size: Size, top_left: Point) {
        self.calls.push(DrawCall::Rect {
            color,
            size,
            top_left,
        });
    }

    fn draw_line(&mut self, color: Color, start: Point, end: Point, stroke_width: f64) {
        self.calls.push(DrawCall::Line {
            color,
            start,
            end,
            stroke_width,
        });
    }
}
