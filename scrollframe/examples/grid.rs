use std::fs::File;

use scrollframe::{
    Color, Event, GridOptions, Key, Label, Platform, ScrollableFrame, Style, Terminal,
};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> std::io::Result<()> {
    let log_file = File::create("grid.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut term = Terminal::new()?;
    let mut frame = ScrollableFrame::new();

    for row in 0..6u16 {
        for col in 0..8u16 {
            let hue = ((row * 8 + col) as f32 * 15.0) % 360.0;
            frame.content_mut().grid(
                Label::new(format!(" Cell \n ({row}, {col}) "))
                    .style(Style::new().background(Color::oklch(0.4, 0.1, hue))),
                GridOptions::at(row, col).padding(2, 1),
            );
        }
    }

    loop {
        let area = term.autoresize()?;
        frame.layout(area);
        term.draw(|buf| frame.render(buf))?;

        for raw in term.poll(None)? {
            let Some(event) = Event::from_crossterm(&raw, Platform::current()) else {
                continue;
            };
            if let Event::Key {
                key: Key::Char('q') | Key::Escape,
                ..
            } = event
            {
                return Ok(());
            }
            frame.handle_event(&event);
        }
    }
}
