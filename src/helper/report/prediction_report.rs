use std::fmt::Display;

use chrono::{DateTime, Local};
use getset::{Getters, Setters};
use serde::{Deserialize, Serialize};

use crate::helper::marker::{
    ChromosomeRow, MarkerAnalysis, MarkerTable, ParentLabels, ParentRole, SummaryStatistics,
};

#[derive(Debug, Clone, Serialize, Deserialize, Getters, Setters)]
pub struct PredictionReport {
    #[getset(get = "pub", set = "pub")]
    process_start_time: DateTime<Local>,
    #[getset(get = "pub", set = "pub")]
    process_end_time: DateTime<Local>,
    #[getset(get = "pub", set = "pub")]
    current_version: String,
    #[getset(get = "pub", set = "pub")]
    generated_by: String,
    #[getset(get = "pub", set = "pub")]
    output_directory: String,
    #[getset(get = "pub")]
    parents: Vec<ParentReport>,
    #[getset(get = "pub", set = "pub")]
    summary: Option<SummaryStatistics>,
    #[getset(get = "pub", set = "pub")]
    chromosome_distribution: Vec<ChromosomeRow>,
    #[getset(get = "pub")]
    warnings: Vec<PredictionWarnings>,
    #[getset(get = "pub")]
    errors: Vec<String>,
}

impl PredictionReport {
    pub fn new() -> Self {
        PredictionReport {
            process_start_time: Local::now(),
            process_end_time: Local::now(),
            current_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_by: String::new(),
            output_directory: String::new(),
            parents: Vec::new(),
            summary: None,
            chromosome_distribution: Vec::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn is_successful(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: PredictionWarnings) {
        self.warnings.push(warning);
    }

    pub fn add_parent(&mut self, parent: ParentReport) {
        self.parents.push(parent);
    }

    /// Copies the analysis results in and raises the data warnings they imply.
    pub fn record_analysis(&mut self, analysis: &MarkerAnalysis, labels: &ParentLabels) {
        if analysis.is_empty() {
            self.add_warning(PredictionWarnings::EmptyJoin);
        }
        for role in ParentRole::ALL {
            let unmatched = analysis.unmatched(role);
            if unmatched > 0 {
                self.add_warning(PredictionWarnings::UnmatchedMarkers(
                    labels.display(role).to_string(),
                    unmatched,
                ));
            }
        }
        self.summary = Some(analysis.summary().clone());
        self.chromosome_distribution = analysis.distribution().rows();
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Getters, Setters)]
pub struct ParentReport {
    #[getset(get = "pub", set = "pub")]
    role: ParentRole,
    #[getset(get = "pub", set = "pub")]
    strain: String,
    #[getset(get = "pub", set = "pub")]
    input_file: String,
    #[getset(get = "pub", set = "pub")]
    marker_count: usize,
    #[getset(get = "pub", set = "pub")]
    duplicated_marker_ids: usize,
}

impl ParentReport {
    pub fn from_table(table: &MarkerTable, labels: &ParentLabels, input_file: &str) -> Self {
        ParentReport {
            role: *table.role(),
            strain: labels.display(*table.role()).to_string(),
            input_file: input_file.to_string(),
            marker_count: table.len(),
            duplicated_marker_ids: table.duplicated_marker_ids(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PredictionWarnings {
    EmptyJoin,
    UnmatchedMarkers(String, usize),
    DuplicateMarkerIds(String, usize),
    PlotSkipped(String),
}

impl Display for PredictionWarnings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PredictionWarnings::EmptyJoin => {
                write!(
                    f,
                    "No marker is shared by both parents, summary statistics are empty"
                )
            }
            PredictionWarnings::UnmatchedMarkers(parent, n) => {
                write!(
                    f,
                    "{} markers from {} have no match in the other parent and were dropped",
                    n, parent
                )
            }
            PredictionWarnings::DuplicateMarkerIds(parent, n) => {
                write!(
                    f,
                    "{} Marker IDs occur more than once in {}, every pairing of their rows is kept",
                    n, parent
                )
            }
            PredictionWarnings::PlotSkipped(reason) => {
                write!(f, "Chromosome distribution chart skipped: {}", reason)
            }
        }
    }
}
