use super::*;
use crate::catalog::StartMenuEntry;

fn start_menu_item_id(entry: &StartMenuEntry) -> String {
    let slug: String = entry
        .label
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == ' ')
        .collect::<String>()
        .trim()
        .to_ascii_lowercase()
        .replace(' ', "-");
    format!("start-menu-item-{slug}")
}

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let open = create_memo(move |_| runtime.state.with(|desktop| desktop.start_menu_open));

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div
                id="start-menu"
                class="start-menu"
                role="menu"
                aria-label="Start menu"
                on:mousedown=move |ev| ev.stop_propagation()
            >
                <div class="start-menu-banner" aria-hidden="true">
                    <span>"Windows 95"</span>
                </div>
                <ul class="start-menu-items">
                    {desktop_catalog()
                        .start_menu
                        .iter()
                        .map(|entry| {
                            view! {
                                {entry.separator_before.then(|| view! {
                                    <li class="start-menu-separator" role="separator" />
                                })}
                                <li>
                                    <button
                                        id=start_menu_item_id(entry)
                                        class="start-menu-item"
                                        role="menuitem"
                                        on:click=move |ev| {
                                            stop_mouse_event(&ev);
                                            runtime.dispatch_action(DesktopAction::CloseStartMenu);
                                        }
                                    >
                                        <span class="start-menu-glyph" aria-hidden="true">
                                            {entry.glyph.clone()}
                                        </span>
                                        <span>{entry.label.clone()}</span>
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </Show>
    }
}
