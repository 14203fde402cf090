//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the gesture tracker, the runtime effect
//! queue and host wiring. UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    catalog::desktop_catalog,
    effect_executor,
    gesture::GestureTracker,
    host::DesktopHostContext,
    model::DesktopState,
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Active drag/resize gesture.
    pub gestures: RwSignal<GestureTracker>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Opens the window a desktop icon launches, stamping it with the host clock.
    pub fn activate_icon(&self, icon_id: &str) {
        let opened_at_ms = self.host.with_value(DesktopHostContext::next_window_timestamp_ms);
        self.dispatch_action(DesktopAction::ActivateIcon {
            icon_id: icon_id.to_string(),
            opened_at_ms,
        });
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let host = store_value(DesktopHostContext::default());
    let viewport = host.with_value(DesktopHostContext::viewport_size);
    let state = create_rw_signal(DesktopState::new(
        desktop_catalog().window_manager.clone(),
        viewport,
    ));
    let gestures = create_rw_signal(GestureTracker::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut tracker = gestures.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_tracker = tracker;

        match reduce_desktop(&mut desktop, &mut tracker, action) {
            Ok(new_effects) => {
                if desktop != previous_desktop {
                    state.set(desktop);
                }
                if tracker != previous_tracker {
                    gestures.set(tracker);
                }
                if !new_effects.is_empty() {
                    effects.update(|queue| queue.extend(new_effects));
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        gestures,
        effects,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);
    on_cleanup(move || {
        let _ = host.try_with_value(DesktopHostContext::detach_gesture_listeners);
    });

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
