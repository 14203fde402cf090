//! Host-side runtime helpers for executing reducer effects and querying browser environment state.

use std::{cell::RefCell, rc::Rc};

#[cfg(target_arch = "wasm32")]
use desktop_app_contract::window_primary_input_dom_id;
use leptos::ev::PointerEvent;
use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::*;
use platform_host::{next_monotonic_timestamp_ms, ViewportSize};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{
    model::{PointerPosition, WindowId},
    reducer::{DesktopAction, RuntimeEffect},
};

/// Window-level pointer events observed while a gesture is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GesturePointerEvent {
    Move(PointerPosition),
    Up,
    Cancel,
    LostCapture,
}

impl GesturePointerEvent {
    fn action(self) -> DesktopAction {
        match self {
            Self::Move(pointer) => DesktopAction::PointerMove { pointer },
            Self::Up | Self::Cancel | Self::LostCapture => DesktopAction::PointerUp,
        }
    }
}

#[derive(Clone, Default)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    gesture_listeners: Rc<RefCell<Vec<WindowListenerHandle>>>,
}

impl DesktopHostContext {
    /// Current browser viewport.
    pub fn viewport_size(&self) -> ViewportSize {
        platform_host_web::viewport_size()
    }

    /// Strictly increasing creation timestamp for new windows.
    pub fn next_window_timestamp_ms(&self) -> u64 {
        next_monotonic_timestamp_ms()
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, dispatch: Callback<DesktopAction>, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::FocusWindowInput(window_id) => self.focus_window_input(window_id),
            RuntimeEffect::AttachGestureListeners => self.attach_gesture_listeners(dispatch),
            RuntimeEffect::DetachGestureListeners => self.detach_gesture_listeners(),
        }
    }

    /// Whether window-level gesture listeners are installed.
    pub fn has_gesture_listeners(&self) -> bool {
        !self.gesture_listeners.borrow().is_empty()
    }

    /// Installs pointer move/up/cancel/lost-capture listeners on the browser window that feed the
    /// reducer.
    pub fn attach_gesture_listeners(&self, dispatch: Callback<DesktopAction>) {
        if self.has_gesture_listeners() {
            return;
        }

        let send = move |event: GesturePointerEvent| dispatch.call(event.action());
        let on_move = window_event_listener(ev::pointermove, move |ev: PointerEvent| {
            send(GesturePointerEvent::Move(PointerPosition::new(
                ev.client_x(),
                ev.client_y(),
            )));
        });
        let on_up = window_event_listener(ev::pointerup, move |_: PointerEvent| {
            send(GesturePointerEvent::Up);
        });
        let on_cancel = window_event_listener(ev::pointercancel, move |_: PointerEvent| {
            send(GesturePointerEvent::Cancel);
        });
        let on_lost_capture =
            window_event_listener(ev::lostpointercapture, move |_: PointerEvent| {
                send(GesturePointerEvent::LostCapture);
            });
        self.gesture_listeners
            .borrow_mut()
            .extend([on_move, on_up, on_cancel, on_lost_capture]);
    }

    /// Removes the gesture listeners, if installed.
    pub fn detach_gesture_listeners(&self) {
        let handles = std::mem::take(&mut *self.gesture_listeners.borrow_mut());
        for handle in handles {
            handle.remove();
        }
    }

    /// Moves keyboard focus into a window's primary input on the next task.
    ///
    /// Apps opt in by rendering [`desktop_app_contract::window_primary_input_dom_id`] on their
    /// primary field.
    pub fn focus_window_input(&self, window_id: WindowId) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let dom_id = window_primary_input_dom_id(window_id.0);
            let callback = Closure::once_into_js(move || {
                let Some(element) = web_sys::window()
                    .and_then(|window| window.document())
                    .and_then(|document| document.get_element_by_id(&dom_id))
                else {
                    return;
                };
                if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
                    let _ = element.focus();
                }
            });
            if window
                .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0)
                .is_err()
            {
                logging::warn!("focus scheduling failed for window {}", window_id.0);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = window_id;
    }
}
