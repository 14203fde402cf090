//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use platform_host::ViewportSize;
use thiserror::Error;

use crate::{
    catalog::desktop_catalog,
    gesture::{GestureTracker, HitRegion},
    model::{DesktopState, PointerPosition, WindowId, WindowKind},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open the window a desktop icon launches.
    ActivateIcon {
        /// Catalog id of the icon.
        icon_id: String,
        /// Host clock reading used to derive the window id.
        opened_at_ms: u64,
    },
    /// Open a window directly.
    OpenWindow {
        /// Hosted content.
        kind: WindowKind,
        /// Title bar caption.
        title: String,
        /// Host clock reading used to derive the window id.
        opened_at_ms: u64,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Focus (and raise) a window by id.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Maximize a window, or restore it when already maximized.
    ToggleMaximizeWindow {
        /// Window to maximize or restore.
        window_id: WindowId,
    },
    /// Restore a minimized or maximized window.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Taskbar button activation (focus, minimize, or restore).
    ToggleTaskbarWindow {
        /// Window associated with the taskbar button.
        window_id: WindowId,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Pointer pressed on a window frame.
    PointerDown {
        /// Window under the pointer.
        window_id: WindowId,
        /// Frame region under the pointer.
        region: HitRegion,
        /// Pointer position.
        pointer: PointerPosition,
    },
    /// Pointer moved anywhere while a gesture may be active.
    PointerMove {
        /// Pointer position.
        pointer: PointerPosition,
    },
    /// Pointer released or capture lost.
    PointerUp,
    /// Host viewport changed size.
    SetViewport {
        /// New viewport.
        viewport: ViewportSize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Move focus into the window's primary input.
    FocusWindowInput(WindowId),
    /// Start listening for window-level pointer move/up events.
    AttachGestureListeners,
    /// Stop listening for window-level pointer move/up events.
    DetachGestureListeners,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that cannot be resolved.
pub enum ReducerError {
    /// An icon activation named an icon the catalog does not list.
    #[error("desktop icon `{0}` is not in the catalog")]
    UnknownIcon(String),
}

/// Applies a [`DesktopAction`] to the desktop state and gesture tracker and collects resulting
/// side effects.
///
/// Window operations naming a window that is not open change nothing.
///
/// # Errors
///
/// Returns [`ReducerError::UnknownIcon`] when an icon activation names an unknown icon.
pub fn reduce_desktop(
    state: &mut DesktopState,
    gestures: &mut GestureTracker,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::ActivateIcon {
            icon_id,
            opened_at_ms,
        } => {
            let icon = desktop_catalog()
                .icon(&icon_id)
                .ok_or_else(|| ReducerError::UnknownIcon(icon_id.clone()))?;
            let record = state.registry.open(
                icon.kind,
                icon.display_name.clone(),
                Some(icon_id),
                opened_at_ms,
            );
            state.start_menu_open = false;
            effects.push(RuntimeEffect::FocusWindowInput(record.id));
        }
        DesktopAction::OpenWindow {
            kind,
            title,
            opened_at_ms,
        } => {
            let record = state.registry.open(kind, title, None, opened_at_ms);
            state.start_menu_open = false;
            effects.push(RuntimeEffect::FocusWindowInput(record.id));
        }
        DesktopAction::CloseWindow { window_id } => {
            if state.registry.close(window_id) && gestures.cancel_for(window_id) {
                effects.push(RuntimeEffect::DetachGestureListeners);
            }
        }
        DesktopAction::FocusWindow { window_id } => {
            if state.registry.focus(window_id) {
                state.start_menu_open = false;
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::MinimizeWindow { window_id } => {
            state.registry.minimize(window_id);
        }
        DesktopAction::ToggleMaximizeWindow { window_id } => {
            state.registry.toggle_maximize(window_id);
        }
        DesktopAction::RestoreWindow { window_id } => {
            if state.registry.restore(window_id) {
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::ToggleTaskbarWindow { window_id } => {
            state.registry.toggle_taskbar(window_id);
            if state.focused_window_id() == Some(window_id) {
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::PointerDown {
            window_id,
            region,
            pointer,
        } => {
            if gestures.is_active() {
                return Ok(effects);
            }
            state.start_menu_open = false;
            let already_focused = state.focused_window_id() == Some(window_id);
            if !state.registry.focus(window_id) {
                return Ok(effects);
            }
            if gestures
                .pointer_down(&state.registry, window_id, region, pointer)
                .is_some()
            {
                effects.push(RuntimeEffect::AttachGestureListeners);
            } else if !already_focused && region == HitRegion::TitleBar {
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::PointerMove { pointer } => {
            gestures.pointer_move(&mut state.registry, pointer);
        }
        DesktopAction::PointerUp => {
            if gestures.pointer_up().is_some() {
                effects.push(RuntimeEffect::DetachGestureListeners);
            }
        }
        DesktopAction::SetViewport { viewport } => {
            state.registry.set_viewport(viewport);
        }
    }

    Ok(effects)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::gesture::GestureMode;

    fn open(state: &mut DesktopState, gestures: &mut GestureTracker, icon_id: &str) -> WindowId {
        let opened_at_ms = state
            .registry
            .windows()
            .iter()
            .map(|w| w.id.0 + 1)
            .max()
            .unwrap_or(1_000);
        let effects = reduce_desktop(
            state,
            gestures,
            DesktopAction::ActivateIcon {
                icon_id: icon_id.to_string(),
                opened_at_ms,
            },
        )
        .expect("open window");
        let id = state.registry.windows().last().expect("window").id;
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(id)]);
        id
    }

    #[test]
    fn icon_activation_opens_catalog_window_with_kind_size() {
        let mut state = DesktopState::default();
        let mut gestures = GestureTracker::default();
        state.start_menu_open = true;

        let id = open(&mut state, &mut gestures, "terminal");
        let window = state.registry.get(id).cloned().expect("window");
        assert_eq!(window.title, "Terminal");
        assert_eq!(window.kind, WindowKind::GameConsole);
        assert_eq!(window.icon_id.as_deref(), Some("terminal"));
        assert_eq!((window.rect.w, window.rect.h), (600, 400));
        assert!(!state.start_menu_open);
    }

    #[test]
    fn unknown_icon_is_an_error_and_changes_nothing() {
        let mut state = DesktopState::default();
        let mut gestures = GestureTracker::default();
        let before = state.clone();

        let err = reduce_desktop(
            &mut state,
            &mut gestures,
            DesktopAction::ActivateIcon {
                icon_id: "solitaire".to_string(),
                opened_at_ms: 1,
            },
        )
        .unwrap_err();
        assert_eq!(err, ReducerError::UnknownIcon("solitaire".to_string()));
        assert_eq!(state, before);
    }

    #[test]
    fn opening_several_windows_yields_distinct_ids_and_positions() {
        let mut state = DesktopState::default();
        let mut gestures = GestureTracker::default();
        for _ in 0..4 {
            reduce_desktop(
                &mut state,
                &mut gestures,
                DesktopAction::OpenWindow {
                    kind: WindowKind::Generic,
                    title: "My Computer".to_string(),
                    opened_at_ms: 42,
                },
            )
            .unwrap();
        }

        let windows = state.registry.windows();
        let mut ids: Vec<_> = windows.iter().map(|w| w.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 4);
        let positions: Vec<_> = windows.iter().map(|w| (w.rect.x, w.rect.y)).collect();
        assert_eq!(positions, vec![(100, 100), (130, 130), (160, 160), (190, 190)]);
    }

    #[test]
    fn title_bar_press_starts_drag_and_release_detaches() {
        let mut state = DesktopState::default();
        let mut gestures = GestureTracker::default();
        let first = open(&mut state, &mut gestures, "notepad");
        let _second = open(&mut state, &mut gestures, "browser");

        let effects = reduce_desktop(
            &mut state,
            &mut gestures,
            DesktopAction::PointerDown {
                window_id: first,
                region: HitRegion::TitleBar,
                pointer: PointerPosition::new(120, 105),
            },
        )
        .unwrap();
        assert_eq!(effects, vec![RuntimeEffect::AttachGestureListeners]);
        assert_eq!(state.focused_window_id(), Some(first));
        assert_eq!(
            gestures.active().map(|g| g.mode),
            Some(GestureMode::Dragging)
        );

        reduce_desktop(
            &mut state,
            &mut gestures,
            DesktopAction::PointerMove {
                pointer: PointerPosition::new(140, 125),
            },
        )
        .unwrap();
        assert_eq!(
            state.registry.get(first).map(|w| (w.rect.x, w.rect.y)),
            Some((120, 120))
        );

        let effects = reduce_desktop(&mut state, &mut gestures, DesktopAction::PointerUp).unwrap();
        assert_eq!(effects, vec![RuntimeEffect::DetachGestureListeners]);
        let effects = reduce_desktop(&mut state, &mut gestures, DesktopAction::PointerUp).unwrap();
        assert!(effects.is_empty());
    }

    #[test]
    fn second_press_during_drag_is_ignored() {
        let mut state = DesktopState::default();
        let mut gestures = GestureTracker::default();
        let first = open(&mut state, &mut gestures, "notepad");
        let second = open(&mut state, &mut gestures, "browser");
        reduce_desktop(
            &mut state,
            &mut gestures,
            DesktopAction::PointerDown {
                window_id: first,
                region: HitRegion::TitleBar,
                pointer: PointerPosition::new(120, 105),
            },
        )
        .unwrap();
        let before = state.clone();

        let effects = reduce_desktop(
            &mut state,
            &mut gestures,
            DesktopAction::PointerDown {
                window_id: second,
                region: HitRegion::TitleBar,
                pointer: PointerPosition::new(150, 135),
            },
        )
        .unwrap();

        assert!(effects.is_empty());
        assert_eq!(state, before);
        assert_eq!(state.focused_window_id(), Some(first));
        assert_eq!(gestures.active().map(|g| g.window_id), Some(first));
    }

    #[test]
    fn body_press_focuses_without_gesture() {
        let mut state = DesktopState::default();
        let mut gestures = GestureTracker::default();
        let first = open(&mut state, &mut gestures, "notepad");
        let _second = open(&mut state, &mut gestures, "contact");

        let effects = reduce_desktop(
            &mut state,
            &mut gestures,
            DesktopAction::PointerDown {
                window_id: first,
                region: HitRegion::Body,
                pointer: PointerPosition::new(200, 200),
            },
        )
        .unwrap();
        assert!(effects.is_empty());
        assert!(!gestures.is_active());
        assert_eq!(state.focused_window_id(), Some(first));
    }

    #[test]
    fn closing_gesture_target_detaches_listeners() {
        let mut state = DesktopState::default();
        let mut gestures = GestureTracker::default();
        let id = open(&mut state, &mut gestures, "computer");
        reduce_desktop(
            &mut state,
            &mut gestures,
            DesktopAction::PointerDown {
                window_id: id,
                region: HitRegion::ResizeHandle,
                pointer: PointerPosition::new(500, 400),
            },
        )
        .unwrap();

        let effects = reduce_desktop(
            &mut state,
            &mut gestures,
            DesktopAction::CloseWindow { window_id: id },
        )
        .unwrap();
        assert_eq!(effects, vec![RuntimeEffect::DetachGestureListeners]);
        assert!(!gestures.is_active());
        assert!(state.registry.windows().is_empty());
    }

    #[test]
    fn missing_window_actions_are_silent_noops() {
        let mut state = DesktopState::default();
        let mut gestures = GestureTracker::default();
        open(&mut state, &mut gestures, "computer");
        let before = state.clone();
        let missing = WindowId(1);

        for action in [
            DesktopAction::CloseWindow { window_id: missing },
            DesktopAction::FocusWindow { window_id: missing },
            DesktopAction::MinimizeWindow { window_id: missing },
            DesktopAction::ToggleMaximizeWindow { window_id: missing },
            DesktopAction::RestoreWindow { window_id: missing },
            DesktopAction::ToggleTaskbarWindow { window_id: missing },
            DesktopAction::PointerMove {
                pointer: PointerPosition::new(3, 3),
            },
        ] {
            let effects = reduce_desktop(&mut state, &mut gestures, action).unwrap();
            assert!(effects.is_empty());
        }
        assert_eq!(state, before);
    }

    #[test]
    fn taskbar_toggle_minimizes_if_focused_and_restores_if_minimized() {
        let mut state = DesktopState::default();
        let mut gestures = GestureTracker::default();
        let id = open(&mut state, &mut gestures, "notepad");

        reduce_desktop(
            &mut state,
            &mut gestures,
            DesktopAction::ToggleTaskbarWindow { window_id: id },
        )
        .unwrap();
        assert_eq!(state.registry.get(id).map(|w| w.minimized), Some(true));

        let effects = reduce_desktop(
            &mut state,
            &mut gestures,
            DesktopAction::ToggleTaskbarWindow { window_id: id },
        )
        .unwrap();
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(id)]);
        assert_eq!(state.focused_window_id(), Some(id));
    }

    #[test]
    fn start_menu_toggles_and_closes() {
        let mut state = DesktopState::default();
        let mut gestures = GestureTracker::default();
        reduce_desktop(&mut state, &mut gestures, DesktopAction::ToggleStartMenu).unwrap();
        assert!(state.start_menu_open);
        reduce_desktop(&mut state, &mut gestures, DesktopAction::CloseStartMenu).unwrap();
        assert!(!state.start_menu_open);
    }
}
