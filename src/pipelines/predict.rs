use std::error::Error;
use std::fs::{self, File, OpenOptions};
use std::io::BufWriter;

use chrono::Local;

use crate::helper::io::read_marker_table;
use crate::helper::json::write_json_pretty;
use crate::helper::marker::{MarkerAnalysis, MarkerTable, ParentRole, analyze_markers};
use crate::helper::params::{Params, ValidatedParams};
use crate::helper::report::{
    ParentReport, PredictionReport, PredictionWarnings, Provenance, export_chromosome_distribution,
    export_classified_table, plot_chromosome_distribution, plot_zygosity_split,
};
use crate::helper::utils::log_line;

pub const RUN_LOG_FILE: &str = "run_log.txt";
pub const CLASSIFIED_TABLE_FILE: &str = "progeny_prediction.csv";
pub const DISTRIBUTION_FILE: &str = "chromosome_distribution.csv";
pub const DISTRIBUTION_PLOT_FILE: &str = "chromosome_distribution.png";
pub const ZYGOSITY_PLOT_FILE: &str = "zygosity_split.png";
pub const REPORT_FILE: &str = "prediction_report.json";

/// Runs a prediction from a JSON parameter file.
pub fn predict_from_param_file(param: &str) -> Result<PredictionReport, Box<dyn Error>> {
    let json = fs::read_to_string(param).map_err(|e| format!("Failed to read {}: {}", param, e))?;
    predict(&Params::from_json_validated(&json)?)
}

/// One full prediction run: read both tables, classify the shared markers
/// and write every artifact into the output directory.
pub fn predict(params: &ValidatedParams) -> Result<PredictionReport, Box<dyn Error>> {
    let output_dir = &params.output_dir;
    if !output_dir.exists() {
        fs::create_dir_all(output_dir)?;
    }

    let logfile = OpenOptions::new()
        .create(true)
        .append(true)
        .open(output_dir.join(RUN_LOG_FILE))?;
    let mut logger = BufWriter::new(logfile);

    let mut report = PredictionReport::new();
    report.set_generated_by(params.generated_by.clone());
    report.set_output_directory(output_dir.display().to_string());

    log_line(&mut logger, "Starting heterosis prediction")?;
    for role in ParentRole::ALL {
        log_line(
            &mut logger,
            &format!(
                "{} ({}) input: {}",
                role,
                params.labels.display(role),
                params.file(role).display()
            ),
        )?;
    }
    log_line(&mut logger, &format!("Output directory: {}", output_dir.display()))?;

    if let Err(e) = run_prediction(params, &mut report, &mut logger) {
        log_line(&mut logger, &format!("Error running prediction: {}", e))?;
        report.add_error(e.to_string());
        report.set_process_end_time(Local::now());
        write_json_pretty(&report, &output_dir.join(REPORT_FILE))?;
        return Err(e);
    }

    report.set_process_end_time(Local::now());
    write_json_pretty(&report, &output_dir.join(REPORT_FILE))?;
    log_line(&mut logger, "Prediction completed")?;
    Ok(report)
}

fn run_prediction(
    params: &ValidatedParams,
    report: &mut PredictionReport,
    logger: &mut BufWriter<File>,
) -> Result<(), Box<dyn Error>> {
    // both tables are schema checked before anything is computed
    let mut tables: Vec<MarkerTable> = Vec::with_capacity(2);
    for role in ParentRole::ALL {
        log_line(logger, &format!("Reading {} marker table", role))?;
        let table = read_marker_table(params.file(role), role)?;
        log_line(
            logger,
            &format!("{} markers read for {}", table.len(), role),
        )?;

        let parent = ParentReport::from_table(
            &table,
            &params.labels,
            &params.file(role).display().to_string(),
        );
        if *parent.duplicated_marker_ids() > 0 {
            report.add_warning(PredictionWarnings::DuplicateMarkerIds(
                parent.strain().clone(),
                *parent.duplicated_marker_ids(),
            ));
        }
        report.add_parent(parent);
        tables.push(table);
    }

    log_line(logger, "Merging and classifying shared markers")?;
    let analysis = analyze_markers(&tables[0], &tables[1]);
    report.record_analysis(&analysis, &params.labels);
    log_line(
        logger,
        &format!(
            "{} shared markers classified, hybrid vigor score: {}",
            analysis.summary().total_markers(),
            analysis.summary().vigor_score()
        ),
    )?;

    write_outputs(params, &analysis, report, logger)?;

    for warning in report.warnings() {
        log_line(logger, &format!("Warning: {}", warning))?;
    }
    Ok(())
}

fn write_outputs(
    params: &ValidatedParams,
    analysis: &MarkerAnalysis,
    report: &mut PredictionReport,
    logger: &mut BufWriter<File>,
) -> Result<(), Box<dyn Error>> {
    let output_dir = &params.output_dir;
    let provenance = Provenance::new(&params.generated_by, params.labels.clone());

    export_classified_table(
        &output_dir.join(CLASSIFIED_TABLE_FILE),
        analysis,
        &provenance,
    )?;
    log_line(logger, &format!("Wrote {}", CLASSIFIED_TABLE_FILE))?;

    export_chromosome_distribution(&output_dir.join(DISTRIBUTION_FILE), analysis.distribution())?;
    log_line(logger, &format!("Wrote {}", DISTRIBUTION_FILE))?;

    if params.plot {
        if analysis.is_empty() {
            report.add_warning(PredictionWarnings::PlotSkipped(
                "no shared markers".to_string(),
            ));
        } else {
            plot_chromosome_distribution(
                analysis.distribution(),
                &output_dir.join(DISTRIBUTION_PLOT_FILE),
            )?;
            log_line(logger, &format!("Wrote {}", DISTRIBUTION_PLOT_FILE))?;

            plot_zygosity_split(analysis.summary(), &output_dir.join(ZYGOSITY_PLOT_FILE))?;
            log_line(logger, &format!("Wrote {}", ZYGOSITY_PLOT_FILE))?;
        }
    }
    Ok(())
}
