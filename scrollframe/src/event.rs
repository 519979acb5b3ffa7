use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::platform::Platform;
use crate::wheel::{WheelDirection, WheelEvent};

/// Input delivered to widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key {
        key: Key,
        modifiers: Modifiers,
    },
    /// Mouse wheel, in the host platform's native encoding
    Wheel {
        x: u16,
        y: u16,
        wheel: WheelEvent,
    },
    Press {
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Mouse moved with a button held
    Drag {
        x: u16,
        y: u16,
        button: MouseButton,
    },
    Release {
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Terminal resized
    Resize { width: u16, height: u16 },
}

impl Event {
    /// Translate a terminal event.
    ///
    /// Terminals report wheel motion as abstract up/down notches; these are
    /// re-encoded the way `platform` delivers them so that downstream
    /// handling sees the native encoding. Returns `None` for input with no
    /// counterpart here (key releases, plain mouse motion, horizontal wheel,
    /// wheel input on unsupported platforms).
    pub fn from_crossterm(event: &CrosstermEvent, platform: Platform) -> Option<Event> {
        match event {
            CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Event::Key {
                key: key.code.into(),
                modifiers: key.modifiers.into(),
            }),
            CrosstermEvent::Mouse(mouse) => {
                let (x, y) = (mouse.column, mouse.row);
                match mouse.kind {
                    MouseEventKind::ScrollUp => WheelEvent::notch(WheelDirection::Up, platform)
                        .map(|wheel| Event::Wheel { x, y, wheel }),
                    MouseEventKind::ScrollDown => {
                        WheelEvent::notch(WheelDirection::Down, platform)
                            .map(|wheel| Event::Wheel { x, y, wheel })
                    }
                    MouseEventKind::Down(button) => Some(Event::Press {
                        x,
                        y,
                        button: button.into(),
                    }),
                    MouseEventKind::Drag(button) => Some(Event::Drag {
                        x,
                        y,
                        button: button.into(),
                    }),
                    MouseEventKind::Up(button) => Some(Event::Release {
                        x,
                        y,
                        button: button.into(),
                    }),
                    _ => None,
                }
            }
            CrosstermEvent::Resize(width, height) => Some(Event::Resize {
                width: *width,
                height: *height,
            }),
            _ => None,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Other,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
