use std::time::Duration;

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TaskbarClockSnapshot {
    hour: u32,
    minute: u32,
}

impl TaskbarClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self { hour: 0, minute: 0 }
        }
    }
}

fn format_taskbar_clock_time(snapshot: TaskbarClockSnapshot) -> String {
    let mut hour = snapshot.hour % 12;
    if hour == 0 {
        hour = 12;
    }
    let suffix = if snapshot.hour >= 12 { "PM" } else { "AM" };
    format!("{:02}:{:02} {}", hour, snapshot.minute, suffix)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TaskbarEntry {
    window_id: WindowId,
    title: String,
    glyph: Option<String>,
    active: bool,
}

fn taskbar_entries(state: &DesktopState) -> Vec<TaskbarEntry> {
    let catalog = desktop_catalog();
    let mut entries: Vec<TaskbarEntry> = state
        .registry
        .windows()
        .iter()
        .map(|win| TaskbarEntry {
            window_id: win.id,
            title: win.title.clone(),
            glyph: win
                .icon_id
                .as_deref()
                .and_then(|icon_id| catalog.icon(icon_id))
                .map(|icon| icon.glyph.clone()),
            active: win.is_focused && !win.minimized,
        })
        .collect();
    entries.sort_by_key(|entry| entry.window_id);
    entries
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock_now = create_rw_signal(TaskbarClockSnapshot::now());
    let entries = create_memo(move |_| state.with(taskbar_entries));
    let start_menu_open = create_memo(move |_| state.with(|desktop| desktop.start_menu_open));

    match set_interval_with_handle(
        move || clock_now.set(TaskbarClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        Ok(interval) => on_cleanup(move || interval.clear()),
        Err(err) => logging::warn!("taskbar clock interval failed: {err:?}"),
    }

    view! {
        <footer class="taskbar" role="toolbar" aria-label="Taskbar">
            <button
                id="taskbar-start-button"
                class=move || {
                    if start_menu_open.get() { "start-button pressed" } else { "start-button" }
                }
                aria-haspopup="menu"
                aria-expanded=move || start_menu_open.get().to_string()
                on:mousedown=move |ev| ev.stop_propagation()
                on:click=move |ev| {
                    stop_mouse_event(&ev);
                    runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                }
            >
                <span class="start-button-logo" aria-hidden="true">"🪟"</span>
                <span>"Start"</span>
            </button>
            <div class="taskbar-windows">
                <For each=move || entries.get() key=|entry| entry.window_id.0 let:entry>
                    {{
                        let window_id = entry.window_id;
                        let is_active = move || {
                            entries.with(|all| {
                                all.iter().any(|e| e.window_id == window_id && e.active)
                            })
                        };
                        view! {
                            <button
                                class=move || {
                                    if is_active() { "taskbar-window pressed" } else { "taskbar-window" }
                                }
                                aria-pressed=move || is_active().to_string()
                                on:click=move |ev| {
                                    stop_mouse_event(&ev);
                                    runtime.dispatch_action(DesktopAction::ToggleTaskbarWindow { window_id });
                                }
                            >
                                {entry.glyph.map(|glyph| view! {
                                    <span class="taskbar-window-glyph" aria-hidden="true">{glyph}</span>
                                })}
                                <span class="taskbar-window-title">{entry.title}</span>
                            </button>
                        }
                    }}
                </For>
            </div>
            <div class="taskbar-tray">
                <span class="taskbar-clock">{move || format_taskbar_clock_time(clock_now.get())}</span>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowKind;

    #[test]
    fn clock_uses_twelve_hour_time() {
        let format = |hour, minute| format_taskbar_clock_time(TaskbarClockSnapshot { hour, minute });

        assert_eq!(format(0, 5), "12:05 AM");
        assert_eq!(format(9, 30), "09:30 AM");
        assert_eq!(format(12, 0), "12:00 PM");
        assert_eq!(format(23, 59), "11:59 PM");
    }

    #[test]
    fn taskbar_lists_windows_in_open_order() {
        let mut state = DesktopState::default();
        let first = state.registry.open(WindowKind::Generic, "My Computer", None, 10).id;
        let second = state
            .registry
            .open(WindowKind::NoteEditor, "Notepad", None, 20)
            .id;
        state.registry.focus(first);
        state.registry.minimize(first);

        let entries = taskbar_entries(&state);

        assert_eq!(
            entries
                .iter()
                .map(|entry| (entry.window_id, entry.title.as_str(), entry.active))
                .collect::<Vec<_>>(),
            vec![(first, "My Computer", false), (second, "Notepad", true)]
        );
    }

    #[test]
    fn focused_window_entry_is_active() {
        let mut state = DesktopState::default();
        let id = state.registry.open(WindowKind::Browser, "Internet Explorer", None, 5).id;

        assert!(taskbar_entries(&state)[0].active);
        state.registry.minimize(id);
        assert!(!taskbar_entries(&state)[0].active);
    }
}
