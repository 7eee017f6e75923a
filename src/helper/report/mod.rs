pub mod export;
pub mod plot;
pub mod prediction_report;

pub use export::{Provenance, export_chromosome_distribution, export_classified_table};
pub use plot::{plot_chromosome_distribution, plot_zygosity_split};
pub use prediction_report::{ParentReport, PredictionReport, PredictionWarnings};
