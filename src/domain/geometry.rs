//! Window Geometry
//!
//! Last known placement and size of the widget window.

use serde::{Deserialize, Serialize};

/// Default window size in logical pixels
pub const DEFAULT_WIDTH: i32 = 300;
pub const DEFAULT_HEIGHT: i32 = 450;

/// Smallest size the window may be interactively resized to (logical
/// pixels). Enforced at resize time only, never when loading a stored
/// geometry.
pub const MIN_WIDTH: i32 = 250;
pub const MIN_HEIGHT: i32 = 300;

/// Reported dimensions of the screen the window lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: i32,
    pub height: i32,
}

/// Window placement and size.
///
/// Width/height are logical (scaling-independent) units; x/y are physical
/// screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub width: i32,
    pub height: i32,
    pub x: i32,
    pub y: i32,
}

impl WindowGeometry {
    /// Default-sized geometry centered on the given screen
    pub fn centered_on(screen: ScreenSize) -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            x: (screen.width - DEFAULT_WIDTH) / 2,
            y: (screen.height - DEFAULT_HEIGHT) / 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_default() {
        let geometry = WindowGeometry::centered_on(ScreenSize {
            width: 1920,
            height: 1080,
        });
        assert_eq!(geometry.width, 300);
        assert_eq!(geometry.height, 450);
        assert_eq!(geometry.x, 810);
        assert_eq!(geometry.y, 315);
    }

    #[test]
    fn test_wire_shape() {
        let geometry = WindowGeometry {
            width: 300,
            height: 450,
            x: 100,
            y: 50,
        };
        let value = serde_json::to_value(geometry).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"width": 300, "height": 450, "x": 100, "y": 50})
        );
    }
}
