//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `sweep.rs` — the strength × quality sweep against the WaveScribe binary.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate process, image and file work to `services/*`.
//! - Keep behavior and output schema stable.

pub mod sweep;

pub use sweep::handle_sweep;
