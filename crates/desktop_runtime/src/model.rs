//! Desktop window-manager data model.

use std::collections::BTreeMap;

use platform_host::ViewportSize;
use serde::{Deserialize, Serialize};

use crate::window_manager::WindowRegistry;

/// Minimum managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 200;
/// Minimum managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 150;
/// Size used for kinds without a configured default.
pub const DEFAULT_WINDOW_SIZE: WindowSize = WindowSize {
    width: 400,
    height: 300,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Window identity, derived from the creation timestamp and strictly increasing.
pub struct WindowId(pub u64);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
/// Content hosted by a window. The registry treats it as an opaque tag.
pub enum WindowKind {
    /// Generic welcome pane.
    #[default]
    Generic,
    /// Terminal prompt hosting the Snake game.
    GameConsole,
    /// Mock web browser.
    Browser,
    /// Plain text editor.
    NoteEditor,
    /// Mail compose form.
    MailCompose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Window dimensions in layout units.
pub struct WindowSize {
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

impl WindowSize {
    /// Raises each dimension to the window minimums.
    pub fn clamped_min(self) -> Self {
        Self {
            width: self.width.max(MIN_WINDOW_WIDTH),
            height: self.height.max(MIN_WINDOW_HEIGHT),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Window geometry.
pub struct WindowRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

impl WindowRect {
    /// Raises width and height to at least the given minimums.
    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }

    /// Size component of the rect.
    pub fn size(self) -> WindowSize {
        WindowSize {
            width: self.w,
            height: self.h,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One open application frame.
pub struct WindowRecord {
    /// Stable id.
    pub id: WindowId,
    /// Hosted content tag.
    pub kind: WindowKind,
    /// Title bar and taskbar caption.
    pub title: String,
    /// Catalog id of the desktop icon that launched the window, if any.
    pub icon_id: Option<String>,
    /// Current geometry.
    pub rect: WindowRect,
    /// Geometry to return to when leaving the maximized state.
    pub restore_rect: Option<WindowRect>,
    /// 1-based stacking position; higher is closer to the user.
    pub z_index: u32,
    /// Whether the window has keyboard focus.
    pub is_focused: bool,
    /// Hidden but still listed on the taskbar.
    pub minimized: bool,
    /// Filling the desktop area.
    pub maximized: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Viewport-relative pointer coordinates.
pub struct PointerPosition {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl PointerPosition {
    /// Creates a pointer position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Layout constants for the window registry.
pub struct WindowManagerConfig {
    /// Top-left corner of the first cascaded window.
    pub cascade_origin: PointerPosition,
    /// Offset applied per already-open window on both axes.
    pub cascade_step: i32,
    /// Horizontal space a window keeps inside the viewport's right edge.
    pub margin_x: i32,
    /// Vertical space a window keeps inside the viewport's bottom edge.
    pub margin_y: i32,
    /// Height reserved for the taskbar when maximizing.
    pub taskbar_height: i32,
    /// Initial size per window kind.
    pub default_sizes: BTreeMap<WindowKind, WindowSize>,
}

impl Default for WindowManagerConfig {
    fn default() -> Self {
        Self {
            cascade_origin: PointerPosition::new(100, 100),
            cascade_step: 30,
            margin_x: 200,
            margin_y: 100,
            taskbar_height: 28,
            default_sizes: BTreeMap::from([
                (WindowKind::Generic, DEFAULT_WINDOW_SIZE),
                (
                    WindowKind::GameConsole,
                    WindowSize {
                        width: 600,
                        height: 400,
                    },
                ),
                (
                    WindowKind::Browser,
                    WindowSize {
                        width: 700,
                        height: 500,
                    },
                ),
                (
                    WindowKind::NoteEditor,
                    WindowSize {
                        width: 500,
                        height: 400,
                    },
                ),
                (
                    WindowKind::MailCompose,
                    WindowSize {
                        width: 500,
                        height: 450,
                    },
                ),
            ]),
        }
    }
}

impl WindowManagerConfig {
    /// Initial size for a new window of `kind`.
    pub fn default_size(&self, kind: WindowKind) -> WindowSize {
        self.default_sizes
            .get(&kind)
            .copied()
            .unwrap_or(DEFAULT_WINDOW_SIZE)
            .clamped_min()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Whole-desktop state mutated by [`crate::reducer::reduce_desktop`].
pub struct DesktopState {
    /// Open windows.
    pub registry: WindowRegistry,
    /// Whether the start menu overlay is shown.
    pub start_menu_open: bool,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::new(WindowManagerConfig::default(), ViewportSize::default())
    }
}

impl DesktopState {
    /// Creates an empty desktop.
    pub fn new(config: WindowManagerConfig, viewport: ViewportSize) -> Self {
        Self {
            registry: WindowRegistry::new(config, viewport),
            start_menu_open: false,
        }
    }

    /// Id of the focused window, if any.
    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.registry.focused_window_id()
    }
}
