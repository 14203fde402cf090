//! Typed host-domain contracts shared by the desktop runtime, hosted apps, and browser adapters.
//!
//! This crate is the API-first boundary for the host environment surface the desktop consumes:
//! a monotonic clock, the current viewport size, a periodic timer primitive, and a source of
//! randomness. Concrete browser adapters live in `platform_host_web`; the manual adapters here
//! keep timer- and randomness-driven code deterministic under test.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod interval;
pub mod random;
pub mod time;
pub mod viewport;

pub use interval::{IntervalCallback, IntervalHandle, IntervalScheduler, ManualIntervalScheduler};
pub use random::{RandomSource, SequenceRandomSource};
pub use time::{next_monotonic_timestamp_ms, unix_time_ms_now};
pub use viewport::ViewportSize;
