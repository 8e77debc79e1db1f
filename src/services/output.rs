use crate::domain::models::{JsonOut, RunReport};
use serde::Serialize;

pub fn print_json<T: Serialize>(ok: bool, data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok, data })?
    );
    Ok(())
}

fn mark(recovered: bool) -> &'static str {
    if recovered {
        "recovered"
    } else {
        "lost"
    }
}

/// Tab-separated rows: strength, quality (`png` for lossless), result.
pub fn summary_rows(report: &RunReport) -> Vec<String> {
    let mut rows = Vec::new();
    for s in &report.strengths {
        rows.push(format!("{}\tpng\t{}", s.strength, mark(s.lossless_recovered)));
        for q in &s.qualities {
            rows.push(format!("{}\t{}\t{}", s.strength, q.quality, mark(q.recovered)));
        }
    }
    rows
}

pub fn print_report(json: bool, report: &RunReport) -> anyhow::Result<()> {
    if json {
        return print_json(report.failures == 0, report);
    }
    if report.dry_run {
        return Ok(());
    }
    println!("summary for {}", report.image);
    for row in summary_rows(report) {
        println!("{row}");
    }
    println!("failures: {}", report.failures);
    Ok(())
}
