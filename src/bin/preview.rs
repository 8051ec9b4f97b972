use candle_canvas::{CandleStick, CandleStickData, PriceGrid, ViewRange};
use clap::Parser;
use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEventKind},
    layout::Rect,
    DefaultTerminal,
};

/// Render a single candlestick over a price grid. Quit with `q` or Esc.
#[derive(Parser)]
#[command(name = "preview")]
#[command(about = "Preview a candlestick in the terminal")]
pub struct Cli {
    #[arg(long, default_value_t = 0.60)]
    open: f64,

    #[arg(long, default_value_t = 0.70)]
    close: f64,

    #[arg(long, default_value_t = 0.80)]
    high: f64,

    #[arg(long, default_value_t = 0.55)]
    low: f64,

    /// Lower bound of the visible price range
    #[arg(long, default_value_t = 0.5)]
    range_start: f64,

    /// Upper bound of the visible price range
    #[arg(long, default_value_t = 1.0)]
    range_end: f64,
}

const CANDLE_WIDTH: u16 = 6;

fn run(terminal: &mut DefaultTerminal, data: CandleStickData, range: ViewRange) -> eyre::Result<()> {
    let grid = PriceGrid::new(range);
    let candle = CandleStick::new(data, range);
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(&grid, area);

            let width = CANDLE_WIDTH.min(area.width);
            let x = area.x + (area.width - width) / 2;
            frame.render_widget(&candle, Rect::new(x, area.y, width, area.height));
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press
                && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
            {
                break;
            }
        }
    }
    Ok(())
}

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    let range = ViewRange::new(cli.range_start, cli.range_end)?;
    let data = CandleStickData::new(cli.open, cli.close, cli.high, cli.low);

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, data, range);
    ratatui::restore();
    result
}
