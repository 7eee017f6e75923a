use std::process;

use clap::Parser;
use heterosis_predictor::cli::Args;
use heterosis_predictor::cli::Commands;
use heterosis_predictor::helper::params::{Params, ParentParams};
use heterosis_predictor::helper::report::PredictionReport;
use heterosis_predictor::params_generator;
use heterosis_predictor::pipelines::predict::{predict, predict_from_param_file};

fn main() {
    let args = Args::parse();

    match args.command {
        Commands::Predict {
            parent1,
            parent2,
            strain1,
            strain2,
            output,
            plot,
            generated_by,
        } => {
            let params = Params {
                parent1: ParentParams {
                    file: parent1,
                    strain: strain1,
                },
                parent2: ParentParams {
                    file: parent2,
                    strain: strain2,
                },
                output,
                plot,
                generated_by,
            };
            println!("Running heterosis prediction with params: {}", params);

            let validated = match params.validate() {
                Ok(v) => v,
                Err(e) => {
                    eprintln!("Param Validation Error: {}", e);
                    process::exit(1);
                }
            };
            match predict(&validated) {
                Ok(report) => print_report(&report),
                Err(e) => {
                    eprintln!("Error running prediction: {}", e);
                    process::exit(1);
                }
            }
        }
        Commands::Run { param } => {
            println!("Running heterosis prediction with param file: {}", param);
            match predict_from_param_file(&param) {
                Ok(report) => print_report(&report),
                Err(e) => {
                    eprintln!("Error running prediction: {}", e);
                    process::exit(1);
                }
            }
        }
        Commands::Generate {} => {
            if let Err(e) = params_generator::exec() {
                eprintln!("Error generating param file: {}", e);
                process::exit(1);
            }
        }
    }
}

fn print_report(report: &PredictionReport) {
    println!("{}", "-".repeat(58));
    if let Some(summary) = report.summary() {
        println!("{}", summary);
    }
    for warning in report.warnings() {
        println!("Warning: {}", warning);
    }
    println!("Results written to {}", report.output_directory());
}
