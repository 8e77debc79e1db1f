use crate::domain::error::HarnessError;
use crate::domain::models::{SweepCell, SweepPlan};
use std::path::{Path, PathBuf};

/// Scratch-file tag for a strength: `trunc(strength * 10)`.
pub fn strength_tag(strength: f64) -> i64 {
    (strength * 10.0) as i64
}

/// Command-line form of a strength; always carries a decimal point.
pub fn format_strength(strength: f64) -> String {
    let s = strength.to_string();
    if s.contains('.') {
        s
    } else {
        format!("{s}.0")
    }
}

pub fn build_plan(strengths: &[f64], qualities: &[u8]) -> Result<SweepPlan, HarnessError> {
    if strengths.is_empty() {
        return Err(HarnessError::EmptySweep("strength"));
    }
    if qualities.is_empty() {
        return Err(HarnessError::EmptySweep("quality"));
    }

    let mut cells: Vec<SweepCell> = Vec::with_capacity(strengths.len());
    for &strength in strengths {
        if !strength.is_finite() || strength <= 0.0 {
            return Err(HarnessError::InvalidStrength(strength));
        }
        if cells.iter().any(|c| c.strength == strength) {
            continue;
        }
        cells.push(SweepCell {
            strength,
            tag: strength_tag(strength),
            qualities: qualities.to_vec(),
        });
    }
    Ok(SweepPlan { cells })
}

pub fn encoded_path(work_dir: &Path, cell: &SweepCell) -> PathBuf {
    work_dir.join(format!("test_{}.png", cell.tag))
}

pub fn jpeg_path(work_dir: &Path, cell: &SweepCell, quality: u8) -> PathBuf {
    work_dir.join(format!("test_{}_q{}.jpg", cell.tag, quality))
}

pub fn round_trip_path(work_dir: &Path, cell: &SweepCell, quality: u8) -> PathBuf {
    work_dir.join(format!("test_jpg_{}_q{}.png", cell.tag, quality))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::constants::{DEFAULT_QUALITIES, DEFAULT_STRENGTHS};

    #[test]
    fn default_plan_sweeps_every_strength_with_every_quality() {
        let plan = build_plan(DEFAULT_STRENGTHS, DEFAULT_QUALITIES).expect("plan");
        let tags: Vec<i64> = plan.cells.iter().map(|c| c.tag).collect();
        assert_eq!(tags, vec![2, 4, 6, 8]);
        assert!(plan.cells.iter().all(|c| c.qualities == vec![80, 90, 100]));
    }

    #[test]
    fn tag_truncates_like_integer_formatting() {
        // 0.6 * 10.0 is slightly above 6 in binary floating point.
        assert_eq!(strength_tag(0.6), 6);
        assert_eq!(strength_tag(0.25), 2);
        assert_eq!(strength_tag(1.5), 15);
    }

    #[test]
    fn strength_always_renders_a_decimal_point() {
        assert_eq!(format_strength(0.2), "0.2");
        assert_eq!(format_strength(1.0), "1.0");
        assert_eq!(format_strength(2.0), "2.0");
    }

    #[test]
    fn duplicate_strengths_collapse_in_order() {
        let plan = build_plan(&[0.4, 0.2, 0.4], &[90]).expect("plan");
        let strengths: Vec<f64> = plan.cells.iter().map(|c| c.strength).collect();
        assert_eq!(strengths, vec![0.4, 0.2]);
    }

    #[test]
    fn rejects_bad_strengths_and_empty_sets() {
        assert!(matches!(
            build_plan(&[0.0], &[90]),
            Err(HarnessError::InvalidStrength(_))
        ));
        assert!(matches!(
            build_plan(&[f64::NAN], &[90]),
            Err(HarnessError::InvalidStrength(_))
        ));
        assert!(matches!(
            build_plan(&[], &[90]),
            Err(HarnessError::EmptySweep("strength"))
        ));
        assert!(matches!(
            build_plan(&[0.2], &[]),
            Err(HarnessError::EmptySweep("quality"))
        ));
    }

    #[test]
    fn scratch_paths_follow_tag_and_quality() {
        let plan = build_plan(&[0.4], &[90]).expect("plan");
        let cell = &plan.cells[0];
        let dir = Path::new("tmp");
        assert_eq!(encoded_path(dir, cell), dir.join("test_4.png"));
        assert_eq!(jpeg_path(dir, cell, 90), dir.join("test_4_q90.jpg"));
        assert_eq!(round_trip_path(dir, cell, 90), dir.join("test_jpg_4_q90.png"));
    }
}
