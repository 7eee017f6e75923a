use std::fmt::Display;

use getset::CopyGetters;
use serde::{Deserialize, Serialize};

use crate::helper::marker::classify::{ClassifiedMarkerRecord, Zygosity};

/// Coarse hybrid vigor (heterosis) tier from the share of heterozygous markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VigorScore {
    High,
    Medium,
    Low,
}

impl VigorScore {
    pub const HIGH_THRESHOLD: f64 = 75.0;
    pub const MEDIUM_THRESHOLD: f64 = 40.0;

    /// Both thresholds are exclusive: exactly 75% is Medium, exactly 40% is Low.
    pub fn from_heterozygous_percent(percent: f64) -> Self {
        if percent > Self::HIGH_THRESHOLD {
            VigorScore::High
        } else if percent > Self::MEDIUM_THRESHOLD {
            VigorScore::Medium
        } else {
            VigorScore::Low
        }
    }
}

impl Display for VigorScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            VigorScore::High => "High",
            VigorScore::Medium => "Medium",
            VigorScore::Low => "Low",
        };
        f.write_str(label)
    }
}

/// Table wide totals of one prediction run.
///
/// With no classified markers every count and percentage is zero and the
/// score is `Low`; callers tell this state apart with [`SummaryStatistics::is_empty`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, CopyGetters)]
pub struct SummaryStatistics {
    #[getset(get_copy = "pub")]
    total_markers: usize,
    #[getset(get_copy = "pub")]
    heterozygous_count: usize,
    #[getset(get_copy = "pub")]
    homozygous_count: usize,
    #[getset(get_copy = "pub")]
    heterozygous_percent: f64,
    #[getset(get_copy = "pub")]
    homozygous_percent: f64,
    #[getset(get_copy = "pub")]
    vigor_score: VigorScore,
}

impl SummaryStatistics {
    pub fn from_classified(records: &[ClassifiedMarkerRecord]) -> Self {
        let heterozygous_count = records
            .iter()
            .filter(|r| r.predicted_progeny() == Zygosity::Heterozygous)
            .count();
        Self::from_counts(heterozygous_count, records.len() - heterozygous_count)
    }

    pub fn from_counts(heterozygous_count: usize, homozygous_count: usize) -> Self {
        let total_markers = heterozygous_count + homozygous_count;
        let (heterozygous_percent, homozygous_percent) = if total_markers == 0 {
            (0.0, 0.0)
        } else {
            (
                100.0 * heterozygous_count as f64 / total_markers as f64,
                100.0 * homozygous_count as f64 / total_markers as f64,
            )
        };

        SummaryStatistics {
            total_markers,
            heterozygous_count,
            homozygous_count,
            heterozygous_percent,
            homozygous_percent,
            vigor_score: VigorScore::from_heterozygous_percent(heterozygous_percent),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_markers == 0
    }
}

impl Display for SummaryStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total Markers Analyzed: {}", self.total_markers)?;
        writeln!(
            f,
            "Predicted Heterozygous Markers: {} ({:.1}%)",
            self.heterozygous_count, self.heterozygous_percent
        )?;
        writeln!(
            f,
            "Predicted Homozygous Markers: {} ({:.1}%)",
            self.homozygous_count, self.homozygous_percent
        )?;
        write!(f, "Hybrid Vigor Score: {}", self.vigor_score)
    }
}
