use ratatui::widgets::Widget;

use crate::geometry::{candle_geometry, CandleStickData, Size, ViewRange};
use crate::surface::{render_candle, BufferSurface};

/// Renders a single candle into its widget area. The widget area is the
/// drawing surface: the body spans the full width and prices are mapped onto
/// the full height using the view range.
#[derive(Debug, Default)]
pub struct CandleStick {
    data: CandleStickData,
    range: ViewRange,
}

impl CandleStick {
    pub fn new(data: CandleStickData, range: ViewRange) -> Self {
        Self { data, range }
    }

    pub fn set_data(&mut self, data: CandleStickData) {
        self.data = data;
    }

    pub fn set_range(&mut self, range: ViewRange) {
        self.range = range;
    }

    pub fn data(&self) -> &CandleStickData {
        &self.data
    }

    pub fn range(&self) -> ViewRange {
        self.range
    }
}

impl Widget for &CandleStick {
    fn render(self, area: ratatui::prelude::Rect, buf: &mut ratatui::prelude::Buffer)
    where
        Self: Sized,
    {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let surface = Size {
            width: area.width as f64,
            height: area.height as f64,
        };
        let geometry = candle_geometry(&self.data, self.range, surface);
        let mut canvas = BufferSurface::new(area, buf);
        render_candle(&geometry, &mut canvas);
    }
}
