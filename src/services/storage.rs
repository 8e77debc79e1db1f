use crate::domain::constants::RUN_LOG_FILE;
use crate::domain::models::RunReport;
use std::path::Path;

/// Appends a one-line summary of `report` to `<work_dir>/runs.jsonl`.
/// Best effort: failures are logged, never returned.
pub fn append_run_log(work_dir: &Path, report: &RunReport) {
    let path = work_dir.join(RUN_LOG_FILE);
    let event = serde_json::json!({
        "ts": unix_now(),
        "image": report.image,
        "message": report.message,
        "backend": report.backend,
        "cells": report.strengths.iter().map(|s| s.qualities.len() + 1).sum::<usize>(),
        "failures": report.failures,
    });
    let line = format!("{}\n", event);
    let res = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
    if let Err(e) = res {
        tracing::warn!(path = %path.display(), error = %e, "could not append run log");
    }
}

fn unix_now() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub fn ensure_work_dir(work_dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(work_dir)?;
    Ok(())
}
