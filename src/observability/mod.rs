//! Structured logging via `tracing`.
//!
//! The library only emits spans and events; it never installs a subscriber on
//! its own. Binaries (and tests that want output) call [`init_tracing`] once at
//! startup.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Spans
//!
//! - `handle_event` (debug): one per control event, with the event
//! - `derive` (debug): one per derivation, with input size and filter shape
//! - `sort_documents` (trace): the sort step inside a derivation

mod init;

pub use init::init_tracing;
