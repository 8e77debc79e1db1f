use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const USAGE: &str =
    "    usage:  wavescribe-test <test image> <test string> [strength] [quality]";

#[derive(Parser, Debug)]
#[command(
    name = "wavescribe-test",
    version,
    about = "Sweep WaveScribe embedding strength and JPEG quality against a test image"
)]
pub struct Cli {
    #[arg(help = "Source image the test string is embedded into")]
    pub test_image: Option<PathBuf>,
    #[arg(allow_hyphen_values = true, help = "Message to embed and recover")]
    pub test_string: Option<String>,
    #[arg(help = "Single embedding strength instead of the default sweep")]
    pub strength: Option<f64>,
    #[arg(help = "Single JPEG quality instead of the default sweep")]
    pub quality: Option<u8>,
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, help = "WaveScribe executable")]
    pub binary: Option<PathBuf>,
    #[arg(long, help = "Scratch directory for intermediate images")]
    pub work_dir: Option<PathBuf>,
    #[arg(long, value_enum, help = "How the JPEG round-trip is performed")]
    pub backend: Option<Backend>,
    #[arg(long, help = "External converter command line (external backend)")]
    pub converter: Option<String>,
    #[arg(long, help = "Config file (default $HOME/.config/wavescribe-test/config.toml)")]
    pub config: Option<PathBuf>,
    #[arg(long, help = "Print the invocations without running them")]
    pub dry_run: bool,
    #[arg(long, help = "Exit non-zero when any step fails or a message is lost")]
    pub strict: bool,
    #[arg(short, long, action = ArgAction::Count, help = "Raise log verbosity")]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Library,
    External,
}

impl Cli {
    /// The two required positionals, or `None` when either is missing.
    pub fn target(&self) -> Option<(&PathBuf, &str)> {
        Some((self.test_image.as_ref()?, self.test_string.as_deref()?))
    }
}
