use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum HarnessError {
    #[error("strength must be a positive finite number, got {0}")]
    InvalidStrength(f64),
    #[error("no {0} values to sweep")]
    EmptySweep(&'static str),
    #[error("test image not found: {0}")]
    MissingImage(PathBuf),
    #[error("converter command is empty")]
    EmptyConverter,
    #[error("config file not found: {0}")]
    MissingConfig(PathBuf),
}
