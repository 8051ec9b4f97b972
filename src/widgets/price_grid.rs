use ratatui::{
    style::{Color, Style},
    widgets::Widget,
};

use crate::geometry::ViewRange;

/// Width reserved on the left for price labels, gridlines start after it.
const LABEL_WIDTH: u16 = 6;

/// Horizontal price gridlines with labels, stepping down from the range end.
/// Meant to be rendered behind a [`crate::CandleStick`].
#[derive(Debug)]
pub struct PriceGrid {
    range: ViewRange,
    step_count: u16,
}

impl Default for PriceGrid {
    fn default() -> Self {
        Self::new(ViewRange::default())
    }
}

impl PriceGrid {
    pub fn new(range: ViewRange) -> Self {
        Self {
            range,
            step_count: 10,
        }
    }

    pub fn with_steps(mut self, step_count: u16) -> Self {
        self.step_count = step_count.max(1);
        self
    }
}

impl Widget for &PriceGrid {
    fn render(self, area: ratatui::prelude::Rect, buf: &mut ratatui::prelude::Buffer)
    where
        Self: Sized,
    {
        if area.width <= LABEL_WIDTH || area.height == 0 {
            return;
        }
        let step = self.range.span() / self.step_count as f64;
        let mut price = self.range.end();
        let line = "─".repeat((area.width - LABEL_WIDTH) as usize);
        for i in 1..=self.step_count {
            price -= step;
            let y = ((area.height as u32 * i as u32) / self.step_count as u32) as u16;
            let y = y.min(area.height - 1);
            buf.set_string(
                area.x + LABEL_WIDTH,
                area.y + y,
                &line,
                Style::default().fg(Color::Gray),
            );
            buf.set_string(
                area.x,
                area.y + y,
                format!("{price:>5.2}"),
                Style::default(),
            );
        }
    }
}
