//! Mouse wheel encodings and their normalization to scroll units.
//!
//! | Platform | Encoding              | Units        |
//! |----------|-----------------------|--------------|
//! | Unix     | button 4 / button 5   | -1 / +1      |
//! | Apple    | signed delta          | -delta       |
//! | Windows  | signed delta, 120/notch | -delta / 120 |
//!
//! Negative units scroll towards the top of the content.

use crate::platform::Platform;

/// Wheel delta reported by Windows for a single notch.
pub const WINDOWS_NOTCH: i32 = 120;

/// Raw wheel input as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelEvent {
    /// Button press carrying the wheel direction (4 = up, 5 = down).
    Button(u8),
    /// Signed wheel delta, positive away from the user.
    Delta(i32),
}

/// Direction of a single wheel notch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    Up,
    Down,
}

impl WheelEvent {
    /// Vertical scroll units for this event on `platform`.
    ///
    /// Returns `None` when the platform does not deliver wheel input in this
    /// encoding, or is not handled at all.
    ///
    /// Windows deltas are divided truncating toward zero, so a partial notch
    /// (`|delta| < 120`) yields zero units rather than rounding down to -1.
    pub fn normalize(&self, platform: Platform) -> Option<i32> {
        match (platform, *self) {
            (Platform::Unix, WheelEvent::Button(4)) => Some(-1),
            (Platform::Unix, WheelEvent::Button(5)) => Some(1),
            (Platform::Apple, WheelEvent::Delta(delta)) => Some(delta.saturating_neg()),
            (Platform::Windows, WheelEvent::Delta(delta)) => {
                Some((delta / WINDOWS_NOTCH).saturating_neg())
            }
            _ => None,
        }
    }

    /// Encode one notch the way `platform` would report it.
    pub fn notch(direction: WheelDirection, platform: Platform) -> Option<WheelEvent> {
        let up = direction == WheelDirection::Up;
        match platform {
            Platform::Unix => Some(WheelEvent::Button(if up { 4 } else { 5 })),
            Platform::Apple => Some(WheelEvent::Delta(if up { 1 } else { -1 })),
            Platform::Windows => Some(WheelEvent::Delta(if up {
                WINDOWS_NOTCH
            } else {
                -WINDOWS_NOTCH
            })),
            Platform::Other => None,
        }
    }
}
