pub mod analysis;
pub mod classify;
pub mod distribution;
pub mod error;
pub mod genotype;
pub mod merge;
pub mod parent;
pub mod summary;
pub mod table;

pub use analysis::{MarkerAnalysis, analyze_markers};
pub use classify::{ClassifiedMarkerRecord, Zygosity, classify_markers, predict_progeny};
pub use distribution::{ChromosomeDistribution, ChromosomeRow, ZygosityCounts};
pub use error::MarkerError;
pub use merge::{JoinedColumns, JoinedMarkerRecord, MergedMarkers, merge_markers};
pub use parent::{ParentLabels, ParentRole};
pub use summary::{SummaryStatistics, VigorScore};
pub use table::{MarkerRecord, MarkerTable};
