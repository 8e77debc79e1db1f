use crate::cli::Backend;
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One strength value and the JPEG qualities tested against its output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepCell {
    pub strength: f64,
    /// `trunc(strength * 10)`, used to name scratch files.
    pub tag: i64,
    pub qualities: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct SweepPlan {
    pub cells: Vec<SweepCell>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Encode,
    Decode,
    Convert,
    DecodeJpeg,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub kind: StepKind,
    pub command: String,
    /// Exit code; `None` for dry runs, signals and spawn failures.
    pub status: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovered: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StepReport {
    pub fn succeeded(&self) -> bool {
        self.status == Some(0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QualityReport {
    pub quality: u8,
    pub convert: StepReport,
    pub decode: StepReport,
    pub recovered: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct StrengthReport {
    pub strength: f64,
    pub encode: StepReport,
    pub decode: StepReport,
    pub lossless_recovered: bool,
    pub qualities: Vec<QualityReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub image: String,
    pub message: String,
    pub backend: Backend,
    pub dry_run: bool,
    pub strengths: Vec<StrengthReport>,
    pub failures: usize,
}

impl RunReport {
    /// Failed steps plus decodes that did not return the exact test string.
    /// Dry runs never fail.
    pub fn count_failures(&self) -> usize {
        if self.dry_run {
            return 0;
        }
        let mut n = 0;
        for s in &self.strengths {
            n += [&s.encode, &s.decode].iter().filter(|st| !st.succeeded()).count();
            n += usize::from(!s.lossless_recovered);
            for q in &s.qualities {
                n += [&q.convert, &q.decode]
                    .iter()
                    .filter(|st| !st.succeeded())
                    .count();
                n += usize::from(!q.recovered);
            }
        }
        n
    }
}
