use scrollframe::{
    Color, Event, GridOptions, Key, Label, ScrollConfig, ScrollableFrame, Style, Terminal,
};

use crate::args::Args;
use crate::error::DemoError;

/// Build the window, fill a frame with a `dim` x `dim` grid of labels and run
/// until the user quits.
pub fn run(args: &Args) -> Result<(), DemoError> {
    let platform = args.platform();
    let config = ScrollConfig::default()
        .with_wheel_scope(args.wheel_scope)
        .with_platform(platform);

    let mut frame = ScrollableFrame::with_config(config);
    populate(&mut frame, args.dim);

    let mut term = Terminal::new()?;

    loop {
        let area = term.autoresize()?;
        frame.layout(area);
        term.draw(|buf| frame.render(buf))?;

        for raw in term.poll(None)? {
            let Some(event) = Event::from_crossterm(&raw, platform) else {
                continue;
            };
            if is_quit(&event) {
                log::info!("quit requested");
                return Ok(());
            }
            frame.handle_event(&event);
        }
    }
}

/// Labels go into the content area, not the frame.
fn populate(frame: &mut ScrollableFrame, dim: u16) {
    let label_style = Style::new()
        .foreground(Color::oklch(0.92, 0.02, 250.0))
        .background(Color::oklch(0.3, 0.05, 250.0))
        .bold();

    for (i, j) in (0..dim).flat_map(|i| (0..dim).map(move |j| (i, j))) {
        frame.content_mut().grid(
            Label::new(format!("Label\n({i}, {j})")).style(label_style.clone()),
            GridOptions::at(i, j).padding(2, 1),
        );
    }
    log::debug!("populated {} labels", frame.content().len());
}

fn is_quit(event: &Event) -> bool {
    match event {
        Event::Key {
            key: Key::Char('q') | Key::Escape,
            ..
        } => true,
        Event::Key {
            key: Key::Char('c'),
            modifiers,
        } => modifiers.ctrl,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollframe::{Modifiers, Platform, Rect};

    #[test]
    fn test_populate_fills_grid() {
        let mut frame = ScrollableFrame::new();
        populate(&mut frame, 3);
        assert_eq!(frame.content().len(), 9);

        // "Label" / "(i, j)" is 6x2, padded to 10x4 per cell
        assert_eq!(frame.content().size(), (30, 12));
    }

    #[test]
    fn test_default_grid_overflows_small_window() {
        let mut frame = ScrollableFrame::with_config(
            ScrollConfig::default().with_platform(Platform::Unix),
        );
        populate(&mut frame, 10);
        frame.layout(Rect::new(0, 0, 81, 25));

        assert!(!frame.canvas().xview().is_fully_visible());
        assert!(!frame.canvas().yview().is_fully_visible());
    }

    #[test]
    fn test_quit_keys() {
        let key = |key, modifiers| Event::Key { key, modifiers };
        assert!(is_quit(&key(Key::Char('q'), Modifiers::default())));
        assert!(is_quit(&key(Key::Escape, Modifiers::default())));
        assert!(is_quit(&key(
            Key::Char('c'),
            Modifiers {
                ctrl: true,
                ..Default::default()
            }
        )));
        assert!(!is_quit(&key(Key::Char('c'), Modifiers::default())));
    }
}
