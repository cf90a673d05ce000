//! Presentation layer: view models, formatting and text rendering.
//!
//! This module turns a [`DocumentList`](crate::engine::DocumentList) into
//! something a screen can show. It holds no state of its own; all filtering
//! happens in the engine.
//!
//! # Architecture
//!
//! ```text
//! DocumentList → compute_viewmodel() → ListViewModel → render()
//! ```
//!
//! # Modules
//!
//! - [`format`]: Deterministic date, count and summary formatting
//! - [`viewmodel`]: Display-ready list state
//! - [`renderer`]: Plain-text output

pub mod format;
pub mod renderer;
pub mod viewmodel;

pub use renderer::{render, render_lines};
pub use viewmodel::{compute_viewmodel, ListViewModel};
