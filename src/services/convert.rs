//! JPEG round-trip of an encoded image.
//!
//! `library` does the round-trip in-process with the `image` crate;
//! `external` shells out to a converter taking `<input> <output> [quality]`.

use crate::domain::error::HarnessError;
use crate::services::launcher::Invocation;
use anyhow::Context;
use image::codecs::jpeg::JpegEncoder;
use image::ImageFormat;
use std::path::Path;

/// PNG -> JPEG at `quality` -> PNG. The JPEG bytes are kept at `jpg`.
pub fn library_round_trip(src: &Path, jpg: &Path, dst: &Path, quality: u8) -> anyhow::Result<()> {
    let img = image::open(src).with_context(|| format!("open {}", src.display()))?;
    // JPEG has no alpha channel.
    let rgb = img.to_rgb8();

    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality.clamp(1, 100)).encode_image(&rgb)?;
    std::fs::write(jpg, &bytes).with_context(|| format!("write {}", jpg.display()))?;

    let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Jpeg)?;
    decoded
        .save_with_format(dst, ImageFormat::Png)
        .with_context(|| format!("write {}", dst.display()))?;
    Ok(())
}

pub fn library_description(src: &Path, jpg: &Path, dst: &Path, quality: u8) -> String {
    format!(
        "convert {} -> {} (quality {}) -> {}",
        src.display(),
        jpg.display(),
        quality,
        dst.display()
    )
}

/// The two converter runs: to JPEG with quality, then back to PNG.
pub fn external_round_trip(
    converter: &[String],
    src: &Path,
    jpg: &Path,
    dst: &Path,
    quality: u8,
) -> Result<[Invocation; 2], HarnessError> {
    let (program, fixed) = converter.split_first().ok_or(HarnessError::EmptyConverter)?;
    let base = fixed
        .iter()
        .fold(Invocation::new(program.as_str()), |inv, a| inv.arg(a.as_str()));
    let to_jpeg = base
        .clone()
        .path_arg(src)
        .path_arg(jpg)
        .arg(quality.to_string());
    let to_png = base.path_arg(jpg).path_arg(dst);
    Ok([to_jpeg, to_png])
}
