pub const DEFAULT_BINARY: &str = "bin/Release/WaveScribe";
pub const DEFAULT_WORK_DIR: &str = "tmp";
pub const DEFAULT_STRENGTHS: &[f64] = &[0.2, 0.4, 0.6, 0.8];
pub const DEFAULT_QUALITIES: &[u8] = &[80, 90, 100];
pub const DEFAULT_CONVERTER: &[&str] = &["go", "run", "convertImage.go"];

/// Relative to `$HOME`.
pub const CONFIG_PATH: &str = ".config/wavescribe-test/config.toml";
pub const RUN_LOG_FILE: &str = "runs.jsonl";

/// WaveScribe prints `Message obtained from image <path> : <message>` on decode.
pub const DECODE_MARKER: &str = "Message obtained from image ";
pub const DECODE_SEPARATOR: &str = " : ";
/// Placeholder WaveScribe prints when decoding failed internally.
pub const DECODE_ERROR: &str = "ERROR";
