//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep plan/report structs in one place.
//! - Make `--json` report schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — sweep plan, step and run report structs.
//! - `constants.rs` — default sweep sets, paths, decode output markers.
//! - `error.rs` — setup errors that abort a run.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/process side effects.

pub mod constants;
pub mod error;
pub mod models;
