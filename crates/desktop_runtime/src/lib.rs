//! Desktop runtime for the Win95 web desktop: window registry, pointer gestures, the reducer
//! that ties them together, and the Leptos shell that renders it all.

pub mod apps;
pub mod catalog;
pub mod components;
mod effect_executor;
pub mod gesture;
mod host;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod window_manager;

pub use catalog::{desktop_catalog, DesktopCatalog, DesktopIconEntry, StartMenuEntry};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use gesture::{GestureMode, GestureTracker, HitRegion};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use window_manager::WindowRegistry;
