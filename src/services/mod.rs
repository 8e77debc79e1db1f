//! Service layer containing sweep logic and side-effect helpers.
//!
//! ## Service map
//! - `config.rs` — config file loading and CLI/config/default merging.
//! - `plan.rs` — sweep plan building and scratch file naming.
//! - `launcher.rs` — WaveScribe invocations, process launching, decode parsing.
//! - `convert.rs` — JPEG round-trip (in-process or external converter).
//! - `storage.rs` — work dir setup and the run log.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod convert;
pub mod launcher;
pub mod output;
pub mod plan;
pub mod storage;
