//! Viewport geometry reported by the host.

use serde::{Deserialize, Serialize};

/// Fallback viewport width used when the host cannot report one.
pub const DEFAULT_VIEWPORT_WIDTH: i32 = 1024;
/// Fallback viewport height used when the host cannot report one.
pub const DEFAULT_VIEWPORT_HEIGHT: i32 = 768;

/// Current host viewport dimensions in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportSize {
    /// Viewport width.
    pub width: i32,
    /// Viewport height.
    pub height: i32,
}

impl ViewportSize {
    /// Creates a viewport size, flooring negative dimensions at zero.
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width: if width < 0 { 0 } else { width },
            height: if height < 0 { 0 } else { height },
        }
    }
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT)
    }
}
