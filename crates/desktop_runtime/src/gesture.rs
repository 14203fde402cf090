//! Pointer gesture tracking for window drag and resize.
//!
//! At most one gesture exists at a time. A pointer-down classifies the hit region once; every
//! pointer-move recomputes geometry from the snapshot taken at gesture start, so dropped move
//! events never accumulate error.

use serde::{Deserialize, Serialize};

use crate::{
    model::{PointerPosition, WindowId, WindowRect},
    window_manager::WindowRegistry,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Part of a window frame a pointer-down landed on.
pub enum HitRegion {
    /// Title bar: starts a drag.
    TitleBar,
    /// Bottom-right grip: starts a resize.
    ResizeHandle,
    /// Hosted content: no gesture.
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Kind of an active gesture.
pub enum GestureMode {
    /// Moving the window.
    Dragging,
    /// Changing the window size.
    Resizing,
}

impl HitRegion {
    /// Gesture this region starts, if any.
    pub fn gesture_mode(self) -> Option<GestureMode> {
        match self {
            Self::TitleBar => Some(GestureMode::Dragging),
            Self::ResizeHandle => Some(GestureMode::Resizing),
            Self::Body => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One in-progress drag or resize.
pub struct Gesture {
    /// Drag or resize.
    pub mode: GestureMode,
    /// Window being manipulated.
    pub window_id: WindowId,
    /// Pointer position at gesture start.
    pub origin_pointer: PointerPosition,
    /// Window geometry at gesture start.
    pub origin_rect: WindowRect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Idle or tracking exactly one [`Gesture`].
pub struct GestureTracker {
    active: Option<Gesture>,
}

impl GestureTracker {
    /// The active gesture, if any.
    pub fn active(&self) -> Option<&Gesture> {
        self.active.as_ref()
    }

    /// Whether a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Starts a gesture when idle and the region calls for one.
    ///
    /// Returns the started mode. A pointer-down during an active gesture, on the body region, on
    /// a window that is not open, or on a maximized window starts nothing.
    pub fn pointer_down(
        &mut self,
        registry: &WindowRegistry,
        window_id: WindowId,
        region: HitRegion,
        pointer: PointerPosition,
    ) -> Option<GestureMode> {
        if self.active.is_some() {
            return None;
        }
        let mode = region.gesture_mode()?;
        let window = registry.get(window_id)?;
        if window.maximized {
            return None;
        }

        self.active = Some(Gesture {
            mode,
            window_id,
            origin_pointer: pointer,
            origin_rect: window.rect,
        });
        Some(mode)
    }

    /// Applies the pointer delta since gesture start to the target window.
    pub fn pointer_move(&self, registry: &mut WindowRegistry, pointer: PointerPosition) -> bool {
        let Some(gesture) = self.active else {
            return false;
        };
        let dx = pointer.x.saturating_sub(gesture.origin_pointer.x);
        let dy = pointer.y.saturating_sub(gesture.origin_pointer.y);
        let origin = gesture.origin_rect;

        match gesture.mode {
            GestureMode::Dragging => {
                registry.move_to(
                    gesture.window_id,
                    origin.x.saturating_add(dx),
                    origin.y.saturating_add(dy),
                )
            }
            GestureMode::Resizing => {
                registry.resize(
                    gesture.window_id,
                    origin.w.saturating_add(dx),
                    origin.h.saturating_add(dy),
                )
            }
        }
    }

    /// Ends the gesture unconditionally, returning it if one was active.
    pub fn pointer_up(&mut self) -> Option<Gesture> {
        self.active.take()
    }

    /// Drops the gesture if it targets `window_id`.
    pub fn cancel_for(&mut self, window_id: WindowId) -> bool {
        if self.active.is_some_and(|g| g.window_id == window_id) {
            self.active = None;
            return true;
        }
        false
    }
}
