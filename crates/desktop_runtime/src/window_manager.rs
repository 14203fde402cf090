//! Window registry: the ordered collection of open windows and every geometry/stacking transition.
//!
//! List order is stacking order (last = topmost). Operations naming a window that is not open are
//! silent no-ops and report `false`.

use platform_host::ViewportSize;
use serde::{Deserialize, Serialize};

use crate::model::{
    WindowId, WindowKind, WindowManagerConfig, WindowRecord, WindowRect, MIN_WINDOW_HEIGHT,
    MIN_WINDOW_WIDTH,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Owner of all open [`WindowRecord`]s.
pub struct WindowRegistry {
    windows: Vec<WindowRecord>,
    last_issued_id: u64,
    viewport: ViewportSize,
    config: WindowManagerConfig,
}

impl WindowRegistry {
    /// Creates an empty registry.
    pub fn new(config: WindowManagerConfig, viewport: ViewportSize) -> Self {
        Self {
            windows: Vec::new(),
            last_issued_id: 0,
            viewport,
            config,
        }
    }

    /// Open windows, bottom to top.
    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    /// Looks up one window.
    pub fn get(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    /// Current viewport.
    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    /// Layout constants.
    pub fn config(&self) -> &WindowManagerConfig {
        &self.config
    }

    /// Id of the focused window, if any.
    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.windows.iter().find(|w| w.is_focused).map(|w| w.id)
    }

    /// Opens a window of `kind` on top of the stack and focuses it.
    ///
    /// The id is `opened_at_ms` unless that would not exceed the previously issued id, in which
    /// case the next integer is used. The window cascades from the configured origin by one step
    /// per already-open window, with its position clamped into the viewport.
    pub fn open(
        &mut self,
        kind: WindowKind,
        title: impl Into<String>,
        icon_id: Option<String>,
        opened_at_ms: u64,
    ) -> WindowRecord {
        let id = opened_at_ms.max(self.last_issued_id.saturating_add(1));
        self.last_issued_id = id;

        let offset = self.config.cascade_step * self.windows.len() as i32;
        let size = self.config.default_size(kind);
        let (x, y) = self.clamp_position(
            self.config.cascade_origin.x + offset,
            self.config.cascade_origin.y + offset,
        );

        self.windows.push(WindowRecord {
            id: WindowId(id),
            kind,
            title: title.into(),
            icon_id,
            rect: WindowRect {
                x,
                y,
                w: size.width,
                h: size.height,
            },
            restore_rect: None,
            z_index: 0,
            is_focused: false,
            minimized: false,
            maximized: false,
        });
        self.focus(WindowId(id));

        let index = self.windows.len() - 1;
        self.windows[index].clone()
    }

    /// Removes a window.
    pub fn close(&mut self, window_id: WindowId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|w| w.id != window_id);
        let removed = self.windows.len() != before;
        if removed {
            self.normalize_stack();
        }
        removed
    }

    /// Translates a window, clamping the result into the viewport.
    pub fn move_by(&mut self, window_id: WindowId, dx: i32, dy: i32) -> bool {
        let Some(rect) = self.get(window_id).map(|w| w.rect) else {
            return false;
        };
        self.move_to(window_id, rect.x.saturating_add(dx), rect.y.saturating_add(dy))
    }

    /// Places a window's top-left corner, clamping it into the viewport.
    ///
    /// Maximized windows do not move.
    pub fn move_to(&mut self, window_id: WindowId, x: i32, y: i32) -> bool {
        let (x, y) = self.clamp_position(x, y);
        let Some(window) = self.window_mut(window_id) else {
            return false;
        };
        if window.maximized {
            return false;
        }
        window.rect.x = x;
        window.rect.y = y;
        true
    }

    /// Sets a window's size, raising each dimension to the minimums.
    ///
    /// Maximized windows keep the desktop size.
    pub fn resize(&mut self, window_id: WindowId, width: i32, height: i32) -> bool {
        let Some(window) = self.window_mut(window_id) else {
            return false;
        };
        if window.maximized {
            return false;
        }
        window.rect.w = width.max(MIN_WINDOW_WIDTH);
        window.rect.h = height.max(MIN_WINDOW_HEIGHT);
        true
    }

    /// Raises a window to the top, un-minimizes it and gives it focus.
    pub fn focus(&mut self, window_id: WindowId) -> bool {
        let Some(index) = self.windows.iter().position(|w| w.id == window_id) else {
            return false;
        };

        for window in &mut self.windows {
            window.is_focused = false;
        }
        let mut window = self.windows.remove(index);
        window.is_focused = true;
        window.minimized = false;
        self.windows.push(window);
        self.normalize_stack();
        true
    }

    /// Hides a window, keeping its taskbar entry.
    pub fn minimize(&mut self, window_id: WindowId) -> bool {
        let Some(window) = self.window_mut(window_id) else {
            return false;
        };
        window.minimized = true;
        window.is_focused = false;
        self.normalize_stack();
        true
    }

    /// Fills the desktop area above the taskbar with a window.
    pub fn maximize(&mut self, window_id: WindowId) -> bool {
        let desktop = self.desktop_rect();
        let Some(window) = self.window_mut(window_id) else {
            return false;
        };
        if !window.maximized {
            window.restore_rect = Some(window.rect);
        }
        window.rect = desktop;
        window.maximized = true;
        self.focus(window_id)
    }

    /// Returns a window from maximized or minimized state.
    pub fn restore(&mut self, window_id: WindowId) -> bool {
        let Some(window) = self.window_mut(window_id) else {
            return false;
        };
        if window.maximized {
            if let Some(rect) = window.restore_rect.take() {
                window.rect = rect;
            }
            window.maximized = false;
        }
        self.focus(window_id)
    }

    /// Maximizes a restored window or restores a maximized one.
    pub fn toggle_maximize(&mut self, window_id: WindowId) -> bool {
        match self.get(window_id).map(|w| w.maximized) {
            Some(true) => self.restore(window_id),
            Some(false) => self.maximize(window_id),
            None => false,
        }
    }

    /// Taskbar button behavior: restore a minimized window, minimize the focused one, otherwise
    /// focus.
    pub fn toggle_taskbar(&mut self, window_id: WindowId) -> bool {
        match self.get(window_id).map(|w| (w.minimized, w.is_focused)) {
            Some((true, _)) => self.focus(window_id),
            Some((false, true)) => self.minimize(window_id),
            Some((false, false)) => self.focus(window_id),
            None => false,
        }
    }

    /// Records a new viewport and re-clamps every window into it.
    pub fn set_viewport(&mut self, viewport: ViewportSize) {
        self.viewport = viewport;
        let desktop = self.desktop_rect();
        for index in 0..self.windows.len() {
            let rect = self.windows[index].rect;
            let (x, y) = self.clamp_position(rect.x, rect.y);
            let window = &mut self.windows[index];
            if window.maximized {
                window.rect = desktop;
            } else {
                window.rect.x = x;
                window.rect.y = y;
            }
        }
    }

    fn window_mut(&mut self, window_id: WindowId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| w.id == window_id)
    }

    fn clamp_position(&self, x: i32, y: i32) -> (i32, i32) {
        let max_x = (self.viewport.width - self.config.margin_x).max(0);
        let max_y = (self.viewport.height - self.config.margin_y).max(0);
        (x.clamp(0, max_x), y.clamp(0, max_y))
    }

    fn desktop_rect(&self) -> WindowRect {
        WindowRect {
            x: 0,
            y: 0,
            w: self.viewport.width,
            h: self.viewport.height - self.config.taskbar_height,
        }
        .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)
    }

    /// Renumbers z-indices and keeps exactly one visible window focused when any exists.
    fn normalize_stack(&mut self) {
        let mut has_focused = false;
        for (idx, window) in self.windows.iter_mut().enumerate() {
            window.z_index = (idx + 1) as u32;
            if window.minimized {
                window.is_focused = false;
            }
            if window.is_focused {
                if has_focused {
                    window.is_focused = false;
                } else {
                    has_focused = true;
                }
            }
        }

        if !has_focused {
            if let Some(top_visible) = self.windows.iter_mut().rev().find(|w| !w.minimized) {
                top_visible.is_focused = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::model::WindowSize;

    fn registry() -> WindowRegistry {
        WindowRegistry::new(WindowManagerConfig::default(), ViewportSize::new(1024, 768))
    }

    fn ids(registry: &WindowRegistry) -> Vec<u64> {
        registry.windows().iter().map(|w| w.id.0).collect()
    }

    #[test]
    fn extreme_move_deltas_saturate_into_the_clamp() {
        let mut registry = registry();
        let id = registry.open(WindowKind::Generic, "My Computer", None, 1).id;

        assert!(registry.move_by(id, i32::MAX, i32::MAX));
        let rect = registry.get(id).map(|w| w.rect);
        assert_eq!(rect.map(|r| (r.x, r.y)), Some((824, 668)));

        assert!(registry.move_by(id, i32::MIN, i32::MIN));
        let rect = registry.get(id).map(|w| w.rect);
        assert_eq!(rect.map(|r| (r.x, r.y)), Some((0, 0)));
    }

    #[test]
    fn open_cascades_and_issues_increasing_ids() {
        let mut registry = registry();
        let first = registry.open(WindowKind::GameConsole, "Terminal", None, 5_000);
        let second = registry.open(WindowKind::Browser, "Internet Explorer", None, 5_000);
        let third = registry.open(WindowKind::Generic, "My Computer", None, 4_000);

        assert_eq!(ids(&registry), vec![5_000, 5_001, 5_002]);
        assert_eq!(
            first.rect,
            WindowRect {
                x: 100,
                y: 100,
                w: 600,
                h: 400
            }
        );
        assert_eq!((second.rect.x, second.rect.y), (130, 130));
        assert_eq!((third.rect.x, third.rect.y), (160, 160));
        assert_eq!(third.rect.size(), WindowSize { width: 400, height: 300 });
        assert_eq!(registry.focused_window_id(), Some(third.id));
    }

    #[test]
    fn cascade_position_is_clamped_into_small_viewports() {
        let mut registry =
            WindowRegistry::new(WindowManagerConfig::default(), ViewportSize::new(250, 180));
        let record = registry.open(WindowKind::Generic, "My Computer", None, 1);
        assert_eq!((record.rect.x, record.rect.y), (50, 80));

        let mut tiny = WindowRegistry::new(WindowManagerConfig::default(), ViewportSize::new(100, 50));
        let record = tiny.open(WindowKind::Generic, "My Computer", None, 1);
        assert_eq!((record.rect.x, record.rect.y), (0, 0));
    }

    #[test]
    fn close_removes_exactly_one_record() {
        let mut registry = registry();
        let a = registry.open(WindowKind::Generic, "A", None, 1).id;
        let b = registry.open(WindowKind::Generic, "B", None, 2).id;

        assert!(registry.close(a));
        assert_eq!(ids(&registry), vec![b.0]);
        assert!(!registry.close(a));
        assert!(!registry.close(WindowId(999)));
        assert_eq!(ids(&registry), vec![b.0]);
    }

    #[test]
    fn move_clamps_to_viewport_margins() {
        let mut registry = registry();
        let id = registry.open(WindowKind::Generic, "A", None, 1).id;

        registry.move_by(id, -500, -500);
        assert_eq!(registry.get(id).map(|w| (w.rect.x, w.rect.y)), Some((0, 0)));

        registry.move_by(id, 5_000, 5_000);
        assert_eq!(
            registry.get(id).map(|w| (w.rect.x, w.rect.y)),
            Some((1024 - 200, 768 - 100))
        );
        assert!(!registry.move_by(WindowId(42), 1, 1));
    }

    #[test]
    fn resize_enforces_minimums() {
        let mut registry = registry();
        let id = registry.open(WindowKind::Generic, "A", None, 1).id;

        registry.resize(id, -40, 10);
        assert_eq!(
            registry.get(id).map(|w| w.rect.size()),
            Some(WindowSize {
                width: MIN_WINDOW_WIDTH,
                height: MIN_WINDOW_HEIGHT
            })
        );
        registry.resize(id, 900, 640);
        assert_eq!(
            registry.get(id).map(|w| w.rect.size()),
            Some(WindowSize {
                width: 900,
                height: 640
            })
        );
    }

    #[test]
    fn focus_raises_and_renumbers_stack() {
        let mut registry = registry();
        let a = registry.open(WindowKind::Generic, "A", None, 1).id;
        let b = registry.open(WindowKind::Generic, "B", None, 2).id;

        registry.focus(a);
        assert_eq!(ids(&registry), vec![b.0, a.0]);
        let z: Vec<_> = registry.windows().iter().map(|w| w.z_index).collect();
        assert_eq!(z, vec![1, 2]);
        assert_eq!(registry.focused_window_id(), Some(a));
    }

    #[test]
    fn minimize_moves_focus_to_next_visible_window() {
        let mut registry = registry();
        let a = registry.open(WindowKind::Generic, "A", None, 1).id;
        let b = registry.open(WindowKind::Generic, "B", None, 2).id;

        registry.minimize(b);
        assert_eq!(registry.focused_window_id(), Some(a));
        registry.minimize(a);
        assert_eq!(registry.focused_window_id(), None);

        registry.toggle_taskbar(b);
        assert_eq!(registry.focused_window_id(), Some(b));
        assert_eq!(registry.get(b).map(|w| w.minimized), Some(false));
    }

    #[test]
    fn taskbar_toggle_cycles_focus_and_minimize() {
        let mut registry = registry();
        let a = registry.open(WindowKind::Generic, "A", None, 1).id;
        let b = registry.open(WindowKind::Generic, "B", None, 2).id;

        registry.toggle_taskbar(b);
        assert_eq!(registry.get(b).map(|w| w.minimized), Some(true));
        registry.toggle_taskbar(b);
        assert_eq!(registry.focused_window_id(), Some(b));
        registry.toggle_taskbar(a);
        assert_eq!(registry.focused_window_id(), Some(a));
    }

    #[test]
    fn maximize_fills_desktop_and_restore_returns() {
        let mut registry = registry();
        let id = registry.open(WindowKind::NoteEditor, "Notepad", None, 1).id;
        let original = registry.get(id).map(|w| w.rect);

        registry.maximize(id);
        let window = registry.get(id).cloned().unwrap();
        assert!(window.maximized);
        assert_eq!(
            window.rect,
            WindowRect {
                x: 0,
                y: 0,
                w: 1024,
                h: 768 - registry.config().taskbar_height
            }
        );

        assert!(!registry.move_by(id, 10, 10));
        assert!(!registry.resize(id, 300, 300));

        registry.toggle_maximize(id);
        assert_eq!(registry.get(id).map(|w| w.rect), original);
        assert_eq!(registry.get(id).map(|w| w.maximized), Some(false));
    }

    #[test]
    fn shrinking_viewport_reclamps_windows() {
        let mut registry = registry();
        let a = registry.open(WindowKind::Generic, "A", None, 1).id;
        registry.move_to(a, 800, 600);
        let b = registry.open(WindowKind::Generic, "B", None, 2).id;
        registry.maximize(b);

        registry.set_viewport(ViewportSize::new(640, 480));
        assert_eq!(registry.get(a).map(|w| (w.rect.x, w.rect.y)), Some((440, 380)));
        assert_eq!(
            registry.get(b).map(|w| (w.rect.w, w.rect.h)),
            Some((640, 480 - registry.config().taskbar_height))
        );
    }

    #[derive(Debug, Clone)]
    enum Op {
        Move(i32, i32),
        Resize(i32, i32),
        Viewport(i32, i32),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (-3_000i32..3_000, -3_000i32..3_000).prop_map(|(dx, dy)| Op::Move(dx, dy)),
            (-3_000i32..3_000, -3_000i32..3_000).prop_map(|(w, h)| Op::Resize(w, h)),
            (0i32..2_000, 0i32..2_000).prop_map(|(w, h)| Op::Viewport(w, h)),
        ]
    }

    proptest! {
        #[test]
        fn geometry_stays_within_clamps(ops in prop::collection::vec(op(), 1..64)) {
            let mut registry = registry();
            let id = registry.open(WindowKind::GameConsole, "Terminal", None, 1).id;

            for op in ops {
                match op {
                    Op::Move(dx, dy) => { registry.move_by(id, dx, dy); }
                    Op::Resize(w, h) => { registry.resize(id, w, h); }
                    Op::Viewport(w, h) => registry.set_viewport(ViewportSize::new(w, h)),
                }

                let viewport = registry.viewport();
                let config = registry.config();
                let rect = registry.get(id).map(|w| w.rect).unwrap();
                prop_assert!(rect.w >= MIN_WINDOW_WIDTH);
                prop_assert!(rect.h >= MIN_WINDOW_HEIGHT);
                prop_assert!(rect.x >= 0);
                prop_assert!(rect.y >= 0);
                prop_assert!(rect.x <= (viewport.width - config.margin_x).max(0));
                prop_assert!(rect.y <= (viewport.height - config.margin_y).max(0));
            }
        }
    }
}
