use crate::cli::{Backend, Cli};
use crate::domain::error::HarnessError;
use crate::domain::models::{QualityReport, RunReport, StepKind, StepReport, StrengthReport};
use crate::services::config::Settings;
use crate::services::convert::{external_round_trip, library_description, library_round_trip};
use crate::services::launcher::{
    decode_invocation, encode_invocation, parse_recovered, DryRunLauncher, Invocation, Launcher,
    SystemLauncher,
};
use crate::services::output::print_report;
use crate::services::plan::{build_plan, encoded_path, jpeg_path, round_trip_path};
use crate::services::storage::{append_run_log, ensure_work_dir};
use std::path::Path;

pub struct SweepJob<'a> {
    pub image: &'a Path,
    pub message: &'a str,
    pub settings: &'a Settings,
}

pub fn handle_sweep(
    cli: &Cli,
    settings: &Settings,
    image: &Path,
    message: &str,
) -> anyhow::Result<()> {
    if !cli.dry_run {
        if !image.exists() {
            return Err(HarnessError::MissingImage(image.to_path_buf()).into());
        }
        ensure_work_dir(&settings.work_dir)?;
    }

    let job = SweepJob {
        image,
        message,
        settings,
    };
    let report = if cli.dry_run {
        run_sweep(&job, &DryRunLauncher { quiet: cli.json })?
    } else {
        run_sweep(&job, &SystemLauncher { quiet: cli.json })?
    };
    tracing::info!(failures = report.failures, "sweep finished");

    if !report.dry_run {
        append_run_log(&settings.work_dir, &report);
    }
    print_report(cli.json, &report)?;

    if cli.strict && report.failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// Runs every cell of the plan. Step failures are recorded, never propagated.
pub fn run_sweep(job: &SweepJob, launcher: &dyn Launcher) -> Result<RunReport, HarnessError> {
    let settings = job.settings;
    let plan = build_plan(&settings.strengths, &settings.qualities)?;
    let work_dir = settings.work_dir.as_path();
    let mut strengths = Vec::with_capacity(plan.cells.len());

    for cell in &plan.cells {
        let encoded = encoded_path(work_dir, cell);
        let encode = run_step(
            launcher,
            StepKind::Encode,
            &encode_invocation(&settings.binary, cell.strength, job.image, &encoded, job.message),
        );
        let decode = run_step(
            launcher,
            StepKind::Decode,
            &decode_invocation(&settings.binary, cell.strength, &encoded),
        );
        let lossless_recovered = decode.recovered.as_deref() == Some(job.message);

        let mut qualities = Vec::with_capacity(cell.qualities.len());
        for &quality in &cell.qualities {
            let jpg = jpeg_path(work_dir, cell, quality);
            let round_tripped = round_trip_path(work_dir, cell, quality);
            let convert = convert_step(settings, launcher, &encoded, &jpg, &round_tripped, quality);
            let decode = run_step(
                launcher,
                StepKind::DecodeJpeg,
                &decode_invocation(&settings.binary, cell.strength, &round_tripped),
            );
            let recovered = decode.recovered.as_deref() == Some(job.message);
            qualities.push(QualityReport {
                quality,
                convert,
                decode,
                recovered,
            });
        }
        launcher.echo("");

        strengths.push(StrengthReport {
            strength: cell.strength,
            encode,
            decode,
            lossless_recovered,
            qualities,
        });
    }

    let mut report = RunReport {
        image: job.image.to_string_lossy().into_owned(),
        message: job.message.to_string(),
        backend: settings.backend,
        dry_run: launcher.is_dry_run(),
        strengths,
        failures: 0,
    };
    report.failures = report.count_failures();
    Ok(report)
}

fn failed_step(kind: StepKind, command: String, error: String) -> StepReport {
    tracing::warn!(%command, %error, "step failed");
    StepReport {
        kind,
        command,
        status: None,
        recovered: None,
        error: Some(error),
    }
}

fn run_step(launcher: &dyn Launcher, kind: StepKind, inv: &Invocation) -> StepReport {
    let command = inv.to_string();
    match launcher.launch(inv) {
        Ok(out) => {
            let recovered = match kind {
                StepKind::Decode | StepKind::DecodeJpeg => {
                    let input = inv.args.last().map(String::as_str).unwrap_or_default();
                    parse_recovered(&out.stdout, input)
                }
                StepKind::Encode | StepKind::Convert => None,
            };
            StepReport {
                kind,
                command,
                status: out.status,
                recovered,
                error: None,
            }
        }
        Err(e) => failed_step(kind, command, format!("{e:#}")),
    }
}

fn convert_step(
    settings: &Settings,
    launcher: &dyn Launcher,
    src: &Path,
    jpg: &Path,
    dst: &Path,
    quality: u8,
) -> StepReport {
    match settings.backend {
        Backend::Library => {
            let command = library_description(src, jpg, dst, quality);
            launcher.echo(&command);
            if launcher.is_dry_run() {
                return StepReport {
                    kind: StepKind::Convert,
                    command,
                    status: None,
                    recovered: None,
                    error: None,
                };
            }
            match library_round_trip(src, jpg, dst, quality) {
                Ok(()) => StepReport {
                    kind: StepKind::Convert,
                    command,
                    status: Some(0),
                    recovered: None,
                    error: None,
                },
                Err(e) => failed_step(StepKind::Convert, command, format!("{e:#}")),
            }
        }
        Backend::External => {
            let [to_jpeg, to_png] =
                match external_round_trip(&settings.converter, src, jpg, dst, quality) {
                    Ok(invs) => invs,
                    Err(e) => return failed_step(StepKind::Convert, String::new(), e.to_string()),
                };
            let first = run_step(launcher, StepKind::Convert, &to_jpeg);
            let second = run_step(launcher, StepKind::Convert, &to_png);
            StepReport {
                kind: StepKind::Convert,
                command: format!("{} && {}", first.command, second.command),
                status: if first.status == Some(0) {
                    second.status
                } else {
                    first.status
                },
                recovered: None,
                error: first.error.or(second.error),
            }
        }
    }
}
