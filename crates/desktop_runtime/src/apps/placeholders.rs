//! Built-in placeholder apps: browser, note editor, mail compose and the generic welcome pane.
//!
//! None of them touch the network or storage; all state lives in component signals and is lost
//! when the window closes.

use desktop_app_contract::{window_primary_input_dom_id, AppMountContext};
use leptos::*;

/// Mounts the mock search-engine browser.
pub(super) fn mount_browser_app(context: AppMountContext) -> View {
    view! { <BrowserPlaceholderApp context=context /> }.into_view()
}

/// Mounts the note editor.
pub(super) fn mount_note_editor_app(context: AppMountContext) -> View {
    view! { <NoteEditorApp context=context /> }.into_view()
}

/// Mounts the mail compose form.
pub(super) fn mount_mail_compose_app(context: AppMountContext) -> View {
    view! { <MailComposeApp context=context /> }.into_view()
}

/// Mounts the generic welcome pane.
pub(super) fn mount_generic_app(context: AppMountContext) -> View {
    view! {
        <div class="app-shell app-generic-shell">
            <p>{format!("Welcome to {}!", context.title)}</p>
            <p>"This is a simulated Windows 95 environment."</p>
        </div>
    }
    .into_view()
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MockResult {
    title: String,
    url: String,
    snippet: String,
}

fn mock_results(query: &str) -> Vec<MockResult> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let slug: String = query
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    vec![
        MockResult {
            title: format!("{query} - Encyclopedia entry"),
            url: format!("http://www.encyclopedia.example/{slug}"),
            snippet: format!("Everything you ever wanted to know about {query}, updated in 1996."),
        },
        MockResult {
            title: format!("{query} Fan Club Homepage"),
            url: format!("http://members.geocities.example/{slug}/index.html"),
            snippet: "Under construction! Sign our guestbook.".to_string(),
        },
        MockResult {
            title: format!("Download {query} shareware"),
            url: format!("ftp://ftp.shareware.example/pub/{slug}.zip"),
            snippet: "1.44 MB. Fits on a single floppy.".to_string(),
        },
    ]
}

#[component]
fn BrowserPlaceholderApp(context: AppMountContext) -> impl IntoView {
    let input_id = window_primary_input_dom_id(context.window_id);
    let query = create_rw_signal(String::new());
    let submitted = create_rw_signal::<Option<String>>(None);

    let search = move || {
        let current = query.get_untracked();
        if !current.trim().is_empty() {
            submitted.set(Some(current));
        }
    };

    view! {
        <div class="app-shell app-browser-shell">
            <div class="app-toolbar" role="group" aria-label="Browser controls">
                <button type="button" class="app-action" on:click=move |_| submitted.set(None)>
                    "Back"
                </button>
                <span class="browser-address">
                    {move || match submitted.get() {
                        Some(q) => format!("http://www.search.example/?q={}", q.trim()),
                        None => "http://www.search.example/".to_string(),
                    }}
                </span>
            </div>

            <Show
                when=move || submitted.get().is_some()
                fallback=move || {
                    let input_id = input_id.clone();
                    view! {
                        <form
                            class="browser-search"
                            on:submit=move |ev| {
                                ev.prevent_default();
                                search();
                            }
                        >
                            <h2>"Search the Web"</h2>
                            <input
                                id=input_id
                                class="app-field"
                                type="text"
                                placeholder="Type your search query here..."
                                prop:value=move || query.get()
                                on:input=move |ev| query.set(event_target_value(&ev))
                            />
                            <button type="submit" class="app-action">"Search"</button>
                        </form>
                    }
                }
            >
                <ul class="browser-results">
                    {move || {
                        mock_results(&submitted.get().unwrap_or_default())
                            .into_iter()
                            .map(|result| {
                                view! {
                                    <li>
                                        <span class="browser-result-title">{result.title}</span>
                                        <span class="browser-result-url">{result.url}</span>
                                        <p>{result.snippet}</p>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}

fn text_stats(text: &str) -> String {
    let lines = if text.is_empty() {
        1
    } else {
        text.lines().count() + usize::from(text.ends_with('\n'))
    };
    format!("{} line(s), {} char(s)", lines, text.chars().count())
}

#[component]
fn NoteEditorApp(context: AppMountContext) -> impl IntoView {
    let input_id = window_primary_input_dom_id(context.window_id);
    let text = create_rw_signal(String::new());

    view! {
        <div class="app-shell app-notepad-shell">
            <div class="app-menubar" role="menubar">
                <span>"File"</span>
                <span>"Edit"</span>
                <span>"Search"</span>
                <span>"Help"</span>
            </div>
            <textarea
                id=input_id
                class="notepad-text app-field"
                placeholder="Type your text here..."
                spellcheck="false"
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            ></textarea>
            <div class="app-statusbar">
                <span>{move || text.with(|t| text_stats(t))}</span>
            </div>
        </div>
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct MailDraft {
    from: String,
    subject: String,
    message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SendStatus {
    Sent,
    MissingSubject,
    MissingMessage,
}

impl SendStatus {
    fn message(self) -> &'static str {
        match self {
            Self::Sent => "Message sent successfully!",
            Self::MissingSubject => "Please enter a subject.",
            Self::MissingMessage => "Please enter a message.",
        }
    }
}

fn simulate_send(draft: &MailDraft) -> SendStatus {
    if draft.subject.trim().is_empty() {
        SendStatus::MissingSubject
    } else if draft.message.trim().is_empty() {
        SendStatus::MissingMessage
    } else {
        SendStatus::Sent
    }
}

#[component]
fn MailComposeApp(context: AppMountContext) -> impl IntoView {
    let input_id = window_primary_input_dom_id(context.window_id);
    let controls = context.controls;
    let draft = create_rw_signal(MailDraft::default());
    let status = create_rw_signal::<Option<SendStatus>>(None);

    let send = move || {
        let outcome = draft.with_untracked(simulate_send);
        if outcome == SendStatus::Sent {
            logging::log!("mail compose: simulated send");
            draft.set(MailDraft::default());
        }
        status.set(Some(outcome));
    };

    view! {
        <div class="app-shell app-mail-shell">
            <form
                class="mail-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    send();
                }
            >
                <label>
                    "From: "
                    <input
                        id=input_id
                        class="app-field"
                        type="text"
                        placeholder="your.email@example.com (optional)"
                        prop:value=move || draft.with(|d| d.from.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.from = value);
                        }
                    />
                </label>
                <label>
                    "Subject: "
                    <input
                        class="app-field"
                        type="text"
                        placeholder="Enter subject..."
                        prop:value=move || draft.with(|d| d.subject.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.subject = value);
                        }
                    />
                </label>
                <textarea
                    class="app-field mail-body"
                    placeholder="Type your message here..."
                    prop:value=move || draft.with(|d| d.message.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.message = value);
                    }
                ></textarea>
                <div class="app-toolbar">
                    <button type="submit" class="app-action">"Send"</button>
                    <button type="button" class="app-action" on:click=move |_| controls.close()>
                        "Cancel"
                    </button>
                </div>
            </form>
            <div class="app-statusbar">
                <span>{move || status.get().map(SendStatus::message).unwrap_or("Ready")}</span>
            </div>
        </div>
    }
}
