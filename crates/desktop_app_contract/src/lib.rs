//! Shared contract types between the desktop window manager runtime and hosted apps.
//!
//! A hosted app never sees window geometry. It is mounted into a manager-owned frame and talks
//! back to the manager only through the three [`WindowControls`] callbacks.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::{Callable, Callback, View};
use serde::{Deserialize, Serialize};

/// Stable identifier for a runtime-managed window.
pub type WindowRuntimeId = u64;

/// Frame-level requests a hosted app may issue for its own window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowControlRequest {
    /// Close the window and destroy the app instance.
    Close,
    /// Hide the window, keeping its taskbar entry.
    Minimize,
    /// Toggle between maximized and restored geometry.
    Maximize,
}

#[derive(Clone, Copy)]
/// Control callbacks handed to every hosted app.
pub struct WindowControls {
    /// Closes the hosting window.
    pub on_close: Callback<()>,
    /// Minimizes the hosting window.
    pub on_minimize: Callback<()>,
    /// Maximizes or restores the hosting window.
    pub on_maximize: Callback<()>,
}

impl WindowControls {
    /// Builds controls that forward every request to one manager callback.
    pub fn from_sender(sender: Callback<WindowControlRequest>) -> Self {
        Self {
            on_close: Callback::new(move |_| sender.call(WindowControlRequest::Close)),
            on_minimize: Callback::new(move |_| sender.call(WindowControlRequest::Minimize)),
            on_maximize: Callback::new(move |_| sender.call(WindowControlRequest::Maximize)),
        }
    }

    /// Requests that the hosting window close.
    pub fn close(&self) {
        self.on_close.call(());
    }

    /// Requests that the hosting window minimize.
    pub fn minimize(&self) {
        self.on_minimize.call(());
    }

    /// Requests that the hosting window maximize or restore.
    pub fn maximize(&self) {
        self.on_maximize.call(());
    }
}

#[derive(Clone)]
/// App mount context injected by the desktop runtime per window instance.
pub struct AppMountContext {
    /// Stable runtime window id.
    pub window_id: WindowRuntimeId,
    /// Window title at mount time.
    pub title: String,
    /// Frame controls for the hosting window.
    pub controls: WindowControls,
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mountable app module descriptor used by the runtime app registry.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

/// DOM id of the element that should receive keyboard focus when a window is focused.
pub fn window_primary_input_dom_id(window_id: WindowRuntimeId) -> String {
    format!("window-primary-input-{window_id}")
}
