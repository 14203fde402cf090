//! Desktop shell UI composition and interaction surfaces.

mod menus;
mod taskbar;
mod window;

use leptos::*;

use self::{menus::StartMenu, taskbar::Taskbar, window::DesktopWindow};
use crate::{
    catalog::{desktop_catalog, DesktopIconEntry},
    host::DesktopHostContext,
    model::{DesktopState, PointerPosition, WindowId},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

/// Window ids in open order. Rendering in this order keeps DOM nodes stable while focus changes
/// only touch `z-index`.
fn window_ids_in_open_order(state: &DesktopState) -> Vec<WindowId> {
    let mut ids: Vec<WindowId> = state.registry.windows().iter().map(|win| win.id).collect();
    ids.sort();
    ids
}

fn desktop_icon_style(icon: &DesktopIconEntry) -> String {
    format!("left:{}px;top:{}px;", icon.position.x, icon.position.y)
}

#[component]
/// Renders the full desktop shell UI: icons, windows, start menu, and taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let selected_icon = create_rw_signal(None::<String>);
    let window_ids = create_memo(move |_| state.with(window_ids_in_open_order));

    let resize_listener = window_event_listener(ev::resize, move |_| {
        let viewport = runtime.host.with_value(DesktopHostContext::viewport_size);
        runtime.dispatch_action(DesktopAction::SetViewport { viewport });
    });
    on_cleanup(move || resize_listener.remove());

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && state.with_untracked(|desktop| desktop.start_menu_open) {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
        }
    });
    on_cleanup(move || escape_listener.remove());

    let desktop_icons = desktop_catalog()
        .icons
        .iter()
        .map(|icon| {
            let icon_id = icon.icon_id.clone();
            let activate_id = icon.icon_id.clone();
            let key_id = icon.icon_id.clone();
            let selected_id = icon.icon_id.clone();
            view! {
                <button
                    class=move || {
                        if selected_icon.get().as_deref() == Some(selected_id.as_str()) {
                            "desktop-icon selected"
                        } else {
                            "desktop-icon"
                        }
                    }
                    style=desktop_icon_style(icon)
                    data-icon-id=icon.icon_id.clone()
                    on:mousedown=move |ev| ev.stop_propagation()
                    on:click=move |_| selected_icon.set(Some(icon_id.clone()))
                    on:dblclick=move |ev: web_sys::MouseEvent| {
                        stop_mouse_event(&ev);
                        runtime.activate_icon(&activate_id);
                    }
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            runtime.activate_icon(&key_id);
                        }
                    }
                >
                    <span class="desktop-icon-glyph" aria-hidden="true">{icon.glyph.clone()}</span>
                    <span class="desktop-icon-label">{icon.display_name.clone()}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <div id="desktop-shell-root" class="desktop-shell">
            <div
                class="desktop-surface"
                on:mousedown=move |_| {
                    selected_icon.set(None);
                    if state.with_untracked(|desktop| desktop.start_menu_open) {
                        runtime.dispatch_action(DesktopAction::CloseStartMenu);
                    }
                }
            >
                <div class="desktop-icons">{desktop_icons}</div>
                <div class="desktop-windows">
                    <For each=move || window_ids.get() key=|window_id| window_id.0 let:window_id>
                        <DesktopWindow window_id=window_id />
                    </For>
                </div>
            </div>

            <StartMenu />
            <Taskbar />
        </div>
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition::new(ev.client_x(), ev.client_y())
}
