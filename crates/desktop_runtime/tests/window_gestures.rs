use desktop_runtime::{
    desktop_catalog, reduce_desktop, DesktopAction, DesktopState, GestureTracker, HitRegion,
    PointerPosition, ReducerError, RuntimeEffect, WindowId, WindowRect,
};
use platform_host::ViewportSize;
use pretty_assertions::assert_eq;

struct Desktop {
    state: DesktopState,
    gestures: GestureTracker,
}

impl Desktop {
    fn new(width: i32, height: i32) -> Self {
        Self {
            state: DesktopState::new(
                desktop_catalog().window_manager.clone(),
                ViewportSize::new(width, height),
            ),
            gestures: GestureTracker::default(),
        }
    }

    fn apply(&mut self, action: DesktopAction) -> Vec<RuntimeEffect> {
        reduce_desktop(&mut self.state, &mut self.gestures, action).expect("reduce action")
    }

    fn activate(&mut self, icon_id: &str, opened_at_ms: u64) -> WindowId {
        let effects = self.apply(DesktopAction::ActivateIcon {
            icon_id: icon_id.to_string(),
            opened_at_ms,
        });
        match effects.as_slice() {
            [RuntimeEffect::FocusWindowInput(id)] => *id,
            other => panic!("unexpected effects {other:?}"),
        }
    }

    fn rect(&self, id: WindowId) -> WindowRect {
        self.state.registry.get(id).expect("window open").rect
    }

    fn press(&mut self, id: WindowId, region: HitRegion, x: i32, y: i32) -> Vec<RuntimeEffect> {
        self.apply(DesktopAction::PointerDown {
            window_id: id,
            region,
            pointer: PointerPosition::new(x, y),
        })
    }

    fn drag_to(&mut self, x: i32, y: i32) {
        self.apply(DesktopAction::PointerMove {
            pointer: PointerPosition::new(x, y),
        });
    }
}

#[test]
fn icons_open_cascaded_windows_with_catalog_sizes() {
    let mut desktop = Desktop::new(1280, 800);

    let terminal = desktop.activate("terminal", 1_000);
    let notepad = desktop.activate("notepad", 1_000);

    assert_eq!(terminal, WindowId(1_000));
    assert_eq!(notepad, WindowId(1_001));
    assert_eq!(
        desktop.rect(terminal),
        WindowRect {
            x: 100,
            y: 100,
            w: 600,
            h: 400
        }
    );
    assert_eq!(
        desktop.rect(notepad),
        WindowRect {
            x: 130,
            y: 130,
            w: 500,
            h: 400
        }
    );
    assert_eq!(desktop.state.focused_window_id(), Some(notepad));
    assert_eq!(
        desktop.state.registry.get(terminal).map(|w| w.title.as_str()),
        Some("Terminal")
    );
}

#[test]
fn title_bar_drag_moves_window_and_releases_listeners() {
    let mut desktop = Desktop::new(1280, 800);
    let terminal = desktop.activate("terminal", 10);
    desktop.activate("notepad", 20);

    assert_eq!(
        desktop.press(terminal, HitRegion::TitleBar, 150, 110),
        vec![RuntimeEffect::AttachGestureListeners]
    );
    assert_eq!(desktop.state.focused_window_id(), Some(terminal));

    desktop.drag_to(250, 160);
    assert_eq!(desktop.rect(terminal).x, 200);
    assert_eq!(desktop.rect(terminal).y, 150);

    desktop.drag_to(-400, -400);
    assert_eq!((desktop.rect(terminal).x, desktop.rect(terminal).y), (0, 0));

    assert_eq!(
        desktop.apply(DesktopAction::PointerUp),
        vec![RuntimeEffect::DetachGestureListeners]
    );
    desktop.drag_to(600, 600);
    assert_eq!((desktop.rect(terminal).x, desktop.rect(terminal).y), (0, 0));
}

#[test]
fn resize_handle_grows_and_floors_at_minimum_size() {
    let mut desktop = Desktop::new(1280, 800);
    let notepad = desktop.activate("notepad", 10);

    desktop.press(notepad, HitRegion::ResizeHandle, 600, 500);
    desktop.drag_to(700, 560);
    assert_eq!(desktop.rect(notepad).size().width, 600);
    assert_eq!(desktop.rect(notepad).size().height, 460);

    desktop.drag_to(0, 0);
    assert_eq!(desktop.rect(notepad).w, 200);
    assert_eq!(desktop.rect(notepad).h, 150);
    assert_eq!((desktop.rect(notepad).x, desktop.rect(notepad).y), (100, 100));

    desktop.apply(DesktopAction::PointerUp);
    assert!(!desktop.gestures.is_active());
}

#[test]
fn body_press_focuses_without_starting_a_gesture() {
    let mut desktop = Desktop::new(1280, 800);
    let browser = desktop.activate("browser", 10);
    desktop.activate("contact", 20);

    let effects = desktop.press(browser, HitRegion::Body, 300, 300);

    assert!(effects.is_empty());
    assert!(!desktop.gestures.is_active());
    assert_eq!(desktop.state.focused_window_id(), Some(browser));
}

#[test]
fn closing_the_dragged_window_cancels_the_gesture() {
    let mut desktop = Desktop::new(1280, 800);
    let computer = desktop.activate("computer", 10);
    desktop.press(computer, HitRegion::TitleBar, 120, 110);

    let effects = desktop.apply(DesktopAction::CloseWindow {
        window_id: computer,
    });

    assert_eq!(effects, vec![RuntimeEffect::DetachGestureListeners]);
    assert!(desktop.state.registry.windows().is_empty());
    assert!(!desktop.gestures.is_active());
}

#[test]
fn maximized_window_ignores_drag_and_fills_desktop() {
    let mut desktop = Desktop::new(1024, 768);
    let browser = desktop.activate("browser", 10);
    desktop.apply(DesktopAction::ToggleMaximizeWindow { window_id: browser });

    assert!(desktop
        .press(browser, HitRegion::TitleBar, 200, 10)
        .is_empty());
    desktop.drag_to(400, 300);
    assert_eq!(
        desktop.rect(browser),
        WindowRect {
            x: 0,
            y: 0,
            w: 1024,
            h: 740
        }
    );

    desktop.apply(DesktopAction::ToggleMaximizeWindow { window_id: browser });
    assert_eq!(
        desktop.rect(browser),
        WindowRect {
            x: 100,
            y: 100,
            w: 700,
            h: 500
        }
    );
}

#[test]
fn opening_a_window_closes_the_start_menu() {
    let mut desktop = Desktop::new(1280, 800);
    desktop.apply(DesktopAction::ToggleStartMenu);
    assert!(desktop.state.start_menu_open);

    desktop.activate("notepad", 10);

    assert!(!desktop.state.start_menu_open);
}

#[test]
fn unknown_icon_is_rejected_without_side_effects() {
    let mut desktop = Desktop::new(1280, 800);

    let result = reduce_desktop(
        &mut desktop.state,
        &mut desktop.gestures,
        DesktopAction::ActivateIcon {
            icon_id: "recycle-bin".to_string(),
            opened_at_ms: 10,
        },
    );

    assert_eq!(
        result,
        Err(ReducerError::UnknownIcon("recycle-bin".to_string()))
    );
    assert!(desktop.state.registry.windows().is_empty());
}

#[test]
fn taskbar_toggle_cycles_focus_minimize_restore() {
    let mut desktop = Desktop::new(1280, 800);
    let first = desktop.activate("terminal", 10);
    let second = desktop.activate("notepad", 20);

    desktop.apply(DesktopAction::ToggleTaskbarWindow { window_id: second });
    assert!(desktop.state.registry.get(second).is_some_and(|w| w.minimized));
    assert_eq!(desktop.state.focused_window_id(), Some(first));

    desktop.apply(DesktopAction::ToggleTaskbarWindow { window_id: second });
    assert_eq!(desktop.state.focused_window_id(), Some(second));
    assert!(desktop.state.registry.get(second).is_some_and(|w| !w.minimized));
}
