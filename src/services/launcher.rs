use crate::domain::constants::{DECODE_ERROR, DECODE_MARKER, DECODE_SEPARATOR};
use crate::services::plan::format_strength;
use std::fmt;
use std::path::Path;
use std::process::{Command, Stdio};

/// A single external process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn path_arg(self, path: &Path) -> Self {
        self.arg(path.to_string_lossy())
    }
}

fn quote(word: &str) -> String {
    if word.is_empty() || word.chars().any(|c| c.is_whitespace() || c == '"') {
        format!("\"{}\"", word.replace('"', "\\\""))
    } else {
        word.to_string()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(&self.program))?;
        for a in &self.args {
            write!(f, " {}", quote(a))?;
        }
        Ok(())
    }
}

pub fn encode_invocation(
    binary: &Path,
    strength: f64,
    input: &Path,
    output: &Path,
    message: &str,
) -> Invocation {
    Invocation::new(binary.to_string_lossy())
        .arg(format_strength(strength))
        .path_arg(input)
        .path_arg(output)
        .arg(message)
}

pub fn decode_invocation(binary: &Path, strength: f64, input: &Path) -> Invocation {
    Invocation::new(binary.to_string_lossy())
        .arg(format_strength(strength))
        .path_arg(input)
}

/// What a finished process left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub status: Option<i32>,
    pub stdout: String,
}

pub trait Launcher {
    /// Echoes `inv` and runs it to completion.
    fn launch(&self, inv: &Invocation) -> anyhow::Result<Outcome>;

    /// Echoes a step that does not spawn a process.
    fn echo(&self, line: &str);

    fn is_dry_run(&self) -> bool {
        false
    }
}

/// Runs invocations synchronously; stdout is captured and echoed, stderr inherited.
pub struct SystemLauncher {
    pub quiet: bool,
}

impl Launcher for SystemLauncher {
    fn launch(&self, inv: &Invocation) -> anyhow::Result<Outcome> {
        self.echo(&inv.to_string());
        let out = Command::new(&inv.program)
            .args(&inv.args)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()?;
        let stdout = String::from_utf8_lossy(&out.stdout).into_owned();
        if self.quiet {
            tracing::info!(output = %stdout.trim_end(), "process output");
        } else {
            print!("{stdout}");
        }
        tracing::debug!(status = ?out.status.code(), program = %inv.program, "process exited");
        Ok(Outcome {
            status: out.status.code(),
            stdout,
        })
    }

    fn echo(&self, line: &str) {
        if self.quiet {
            tracing::info!("{line}");
        } else {
            println!("{line}");
        }
    }
}

/// Echoes invocations without running anything.
pub struct DryRunLauncher {
    pub quiet: bool,
}

impl Launcher for DryRunLauncher {
    fn launch(&self, inv: &Invocation) -> anyhow::Result<Outcome> {
        self.echo(&inv.to_string());
        Ok(Outcome::default())
    }

    fn echo(&self, line: &str) {
        if !self.quiet {
            println!("{line}");
        }
    }

    fn is_dry_run(&self) -> bool {
        true
    }
}

/// Extracts the message WaveScribe recovered from `input`, if any.
///
/// WaveScribe pads messages to 32 bytes and prints the padding as spaces,
/// so trailing whitespace is dropped.
pub fn parse_recovered(stdout: &str, input: &str) -> Option<String> {
    let prefix = format!("{DECODE_MARKER}{input}{DECODE_SEPARATOR}");
    stdout.lines().find_map(|line| {
        let message = match line.strip_prefix(prefix.as_str()) {
            Some(m) => m,
            None => line
                .strip_prefix(DECODE_MARKER)?
                .split_once(DECODE_SEPARATOR)?
                .1,
        };
        let message = message.trim_end();
        (message != DECODE_ERROR).then(|| message.to_string())
    })
}
