use crate::cli::{Backend, Cli};
use crate::domain::constants::{
    CONFIG_PATH, DEFAULT_BINARY, DEFAULT_CONVERTER, DEFAULT_QUALITIES, DEFAULT_STRENGTHS,
    DEFAULT_WORK_DIR,
};
use crate::domain::error::HarnessError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// On-disk config; every key is optional.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct ConfigFile {
    pub binary: Option<PathBuf>,
    pub work_dir: Option<PathBuf>,
    pub backend: Option<Backend>,
    pub converter: Option<Vec<String>>,
    pub strengths: Option<Vec<f64>>,
    pub qualities: Option<Vec<u8>>,
}

/// Effective settings after merging defaults, config file and CLI flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub binary: PathBuf,
    pub work_dir: PathBuf,
    pub backend: Backend,
    pub converter: Vec<String>,
    pub strengths: Vec<f64>,
    pub qualities: Vec<u8>,
}

fn default_config_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(CONFIG_PATH))
}

/// An explicit path must exist; the default location is optional.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<ConfigFile> {
    let path = match explicit {
        Some(p) if !p.exists() => return Err(HarnessError::MissingConfig(p.to_path_buf()).into()),
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(ConfigFile::default()),
        },
    };
    tracing::debug!(path = %path.display(), "loading config");
    let raw = std::fs::read_to_string(&path)?;
    Ok(toml::from_str(&raw)?)
}

pub fn resolve_settings(cli: &Cli, file: ConfigFile) -> Result<Settings, HarnessError> {
    let converter: Vec<String> = match &cli.converter {
        Some(line) => line.split_whitespace().map(str::to_string).collect(),
        None => file
            .converter
            .unwrap_or_else(|| DEFAULT_CONVERTER.iter().map(|s| s.to_string()).collect()),
    };
    let backend = cli.backend.or(file.backend).unwrap_or(Backend::Library);
    if backend == Backend::External && converter.is_empty() {
        return Err(HarnessError::EmptyConverter);
    }

    let strengths = match cli.strength {
        Some(s) => vec![s],
        None => file.strengths.unwrap_or_else(|| DEFAULT_STRENGTHS.to_vec()),
    };
    let qualities = match cli.quality {
        Some(q) => vec![q],
        None => file.qualities.unwrap_or_else(|| DEFAULT_QUALITIES.to_vec()),
    };

    Ok(Settings {
        binary: cli
            .binary
            .clone()
            .or(file.binary)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BINARY)),
        work_dir: cli
            .work_dir
            .clone()
            .or(file.work_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WORK_DIR)),
        backend,
        converter,
        strengths,
        qualities,
    })
}
