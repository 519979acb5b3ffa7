//! A scrollable container for terminal user interfaces.
//!
//! [`ScrollableFrame`] adds horizontal and vertical scrollbars to a fixed-size
//! area and keeps them in sync with mouse-wheel input from Unix, macOS and
//! Windows hosts. The remaining modules are the small toolkit it is built on.

pub mod buffer;
pub mod canvas;
pub mod config;
pub mod container;
pub mod content;
pub mod error;
pub mod event;
pub mod layout;
pub mod platform;
pub mod scroll;
pub mod scrollbar;
pub mod terminal;
pub mod text;
pub mod types;
pub mod wheel;
pub mod widget;

pub use buffer::{Buffer, Cell};
pub use canvas::Canvas;
pub use config::{ScrollConfig, Theme, WheelScope};
pub use container::{centering_offset, HorizontalScroll, ScrollableFrame};
pub use content::{ContentArea, GridOptions};
pub use error::ParseError;
pub use event::{Event, Key, Modifiers, MouseButton};
pub use layout::Rect;
pub use platform::Platform;
pub use scroll::{Orientation, ScrollCommand, ScrollUnit, View};
pub use scrollbar::{Scrollbar, ScrollbarHit};
pub use terminal::Terminal;
pub use types::*;
pub use wheel::{WheelDirection, WheelEvent};
pub use widget::{Block, Label, Widget};
