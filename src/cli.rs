use clap::builder::styling::{AnsiColor, Color};
use clap::builder::styling::{Style, Styles};
use clap::{ColorChoice, Parser, Subcommand};

use crate::helper::params::DEFAULT_OUTPUT_DIR;

pub const BANNER: &str = "\x1b[0;91m██   ██ ███████ ████████ ███████ ██████   ██████  ███████ ██ ███████\x1b[0m\n\
                      \x1b[0;93m██   ██ ██         ██    ██      ██   ██ ██    ██ ██      ██ ██\x1b[0m\n\
                      \x1b[0;92m███████ █████      ██    █████   ██████  ██    ██ ███████ ██ ███████\x1b[0m\n\
                      \x1b[0;96m██   ██ ██         ██    ██      ██   ██ ██    ██      ██ ██      ██\x1b[0m\n\
                      \x1b[0;95m██   ██ ███████    ██    ███████ ██   ██  ██████  ███████ ██ ███████\x1b[0m\n";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "Heterosis predictor",
    version = env!("CARGO_PKG_VERSION"),
    about = BANNER,
    color = ColorChoice::Always,
    styles = get_styles(),
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Predict progeny zygosity from two parent marker tables
    #[command(alias = "p")]
    Predict {
        /// Parent 1 marker table (.csv or .csv.gz)
        #[arg(short = '1', long)]
        parent1: String,

        /// Parent 2 marker table (.csv or .csv.gz)
        #[arg(short = '2', long)]
        parent2: String,

        /// Strain name of parent 1
        #[arg(long)]
        strain1: Option<String>,

        /// Strain name of parent 2
        #[arg(long)]
        strain2: Option<String>,

        /// Output directory
        #[arg(short, long, default_value_t = String::from(DEFAULT_OUTPUT_DIR))]
        output: String,

        /// draw the chromosome distribution chart
        #[arg(long, default_value_t = false)]
        plot: bool,

        /// Provenance label written into the exported table
        #[arg(long)]
        generated_by: Option<String>,
    },

    /// Run a prediction from a param file
    #[command(alias = "r")]
    Run {
        /// param file path
        #[arg(short, long)]
        param: String,
    },

    /// Generate a param file through CLI
    #[command(alias = "g")]
    Generate {},
}

pub fn get_styles() -> Styles {
    Styles::styled()
        .usage(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Yellow))),
        )
        .header(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Yellow))),
        )
        .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
        .invalid(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
        .error(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
        .valid(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::White))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_predict() {
        let args = Args::try_parse_from([
            "heterosis",
            "p",
            "-1",
            "a.csv",
            "-2",
            "b.csv",
            "--strain1",
            "Skunk",
            "--plot",
        ])
        .unwrap();
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
                assert_eq!(parent1, "a.csv");
                assert_eq!(parent2, "b.csv");
                assert_eq!(strain1.as_deref(), Some("Skunk"));
                assert!(strain2.is_none());
                assert_eq!(output, DEFAULT_OUTPUT_DIR);
                assert!(plot);
                assert!(generated_by.is_none());
            }
            _ => panic!("expected predict"),
        }
    }

    #[test]
    fn test_parse_run_requires_param() {
        assert!(Args::try_parse_from(["heterosis", "run"]).is_err());
        let args = Args::try_parse_from(["heterosis", "r", "-p", "params.json"]).unwrap();
        assert!(matches!(args.command, Commands::Run { ref param } if param == "params.json"));
    }
}
