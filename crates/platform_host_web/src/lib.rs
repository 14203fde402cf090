//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Every adapter compiles on native targets too; off the browser they degrade to the fallbacks
//! documented on each type so the runtime crates stay testable with plain `cargo test`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod interval;
pub mod random;
pub mod viewport;

pub use interval::WebIntervalScheduler;
pub use random::HostRandomSource;
pub use viewport::viewport_size;
