//! Window-kind to app-module dispatch.

mod placeholders;

use desktop_app_contract::{AppModule, AppMountContext, WindowControls};
use desktop_app_terminal::TerminalApp;
use leptos::*;

use crate::model::{WindowKind, WindowRecord};

fn mount_terminal_app(context: AppMountContext) -> View {
    view! { <TerminalApp context=context /> }.into_view()
}

/// App module hosted by windows of `kind`.
pub fn app_module(kind: WindowKind) -> AppModule {
    match kind {
        WindowKind::GameConsole => AppModule::new(mount_terminal_app),
        WindowKind::Browser => AppModule::new(placeholders::mount_browser_app),
        WindowKind::NoteEditor => AppModule::new(placeholders::mount_note_editor_app),
        WindowKind::MailCompose => AppModule::new(placeholders::mount_mail_compose_app),
        WindowKind::Generic => AppModule::new(placeholders::mount_generic_app),
    }
}

/// Mounts the contents of `window` with the given frame controls.
pub fn render_window_contents(window: &WindowRecord, controls: WindowControls) -> View {
    app_module(window.kind).mount(AppMountContext {
        window_id: window.id.0,
        title: window.title.clone(),
        controls,
    })
}
