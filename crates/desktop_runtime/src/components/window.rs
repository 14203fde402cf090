use super::*;
use crate::{apps, gesture::HitRegion, model::WindowRecord};
use desktop_app_contract::{WindowControlRequest, WindowControls};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Maps a hosted app's frame request onto the reducer action for `window_id`.
fn control_request_action(window_id: WindowId, request: WindowControlRequest) -> DesktopAction {
    match request {
        WindowControlRequest::Close => DesktopAction::CloseWindow { window_id },
        WindowControlRequest::Minimize => DesktopAction::MinimizeWindow { window_id },
        WindowControlRequest::Maximize => DesktopAction::ToggleMaximizeWindow { window_id },
    }
}

fn window_frame_style(win: &WindowRecord) -> String {
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        win.rect.x, win.rect.y, win.rect.w, win.rect.h, win.z_index
    )
}

fn window_frame_class(win: &WindowRecord) -> String {
    let mut class = String::from("window");
    if win.is_focused {
        class.push_str(" focused");
    }
    if win.minimized {
        class.push_str(" minimized");
    }
    if win.maximized {
        class.push_str(" maximized");
    }
    class
}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window = create_memo(move |_| {
        runtime
            .state
            .with(|desktop| desktop.registry.get(window_id).cloned())
    });

    let frame_style = move || {
        window.with(|win| win.as_ref().map(window_frame_style).unwrap_or_default())
    };
    let frame_class = move || {
        window.with(|win| {
            win.as_ref()
                .map(window_frame_class)
                .unwrap_or_else(|| "window".to_string())
        })
    };
    let title = move || window.with(|win| win.as_ref().map(|w| w.title.clone()).unwrap_or_default());
    let maximized = move || window.with(|win| win.as_ref().is_some_and(|w| w.maximized));

    let press = move |region: HitRegion, ev: &web_sys::PointerEvent| {
        runtime.dispatch_action(DesktopAction::PointerDown {
            window_id,
            region,
            pointer: pointer_from_pointer_event(ev),
        });
    };
    let on_frame_pointerdown = move |ev: web_sys::PointerEvent| {
        if is_primary_press(&ev) {
            press(HitRegion::Body, &ev);
        }
    };
    let on_titlebar_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        try_set_pointer_capture(&ev);
        press(HitRegion::TitleBar, &ev);
    };
    let on_resize_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        try_set_pointer_capture(&ev);
        press(HitRegion::ResizeHandle, &ev);
    };
    let on_titlebar_dblclick = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::ToggleMaximizeWindow { window_id });
    };

    let controls = WindowControls::from_sender(Callback::new(move |request| {
        runtime.dispatch_action(control_request_action(window_id, request));
    }));
    let contents = window
        .get_untracked()
        .map(|win| apps::render_window_contents(&win, controls))
        .unwrap_or_else(|| view! { <p>"Closed"</p> }.into_view());

    view! {
        <section
            class=frame_class
            style=frame_style
            role="dialog"
            aria-label=title
            data-window-id=window_id.0.to_string()
            on:pointerdown=on_frame_pointerdown
        >
            <header
                class="titlebar"
                on:pointerdown=on_titlebar_pointerdown
                on:dblclick=on_titlebar_dblclick
            >
                <span class="titlebar-title">{title}</span>
                <div class="titlebar-controls">
                    <button
                        class="titlebar-button"
                        aria-label="Minimize window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            controls.minimize();
                        }
                    >
                        "_"
                    </button>
                    <button
                        class="titlebar-button"
                        aria-label=move || {
                            if maximized() { "Restore window" } else { "Maximize window" }
                        }
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            controls.maximize();
                        }
                    >
                        {move || { if maximized() { "❐" } else { "□" } }}
                    </button>
                    <button
                        class="titlebar-button close"
                        aria-label="Close window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            controls.close();
                        }
                    >
                        "×"
                    </button>
                </div>
            </header>
            <div class="window-body">{contents}</div>
            <Show when=move || !maximized() fallback=|| ()>
                <div
                    class="window-resize-handle"
                    aria-hidden="true"
                    on:pointerdown=on_resize_pointerdown
                />
            </Show>
        </section>
    }
}
