use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::cli::BANNER;
use crate::helper::json::write_json_pretty;
use crate::helper::marker::ParentRole;
use crate::helper::params::{DEFAULT_OUTPUT_DIR, Params, ParentParams};

const DEFAULT_PARAM_FILE: &str = "heterosis_params.json";

pub fn exec() -> Result<(), Box<dyn Error>> {
    println!("{}", BANNER);

    println!("{}", "-".repeat(58));
    println!(
        "| JSON Parameter Generator for heterosis-predictor {} |",
        env!("CARGO_PKG_VERSION")
    );
    println!("{}", "-".repeat(58));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let params = collect_params(&mut input, &mut output)?;

    prompt(
        &mut output,
        &format!(
            "Save the param file to (default as {}):\n>  ",
            DEFAULT_PARAM_FILE
        ),
    )?;
    let param_file = match collect_input(&mut input)?.as_str() {
        "" => DEFAULT_PARAM_FILE.to_string(),
        path => path.to_string(),
    };

    write_json_pretty(&params, Path::new(&param_file))?;

    println!("Your entered parameters: ");
    println!("{}", params);
    println!("Param file saved to {}", param_file);
    println!("Run it with: heterosis run -p {}", param_file);
    Ok(())
}

/// Walks through the prompts and assembles the run parameters from the answers.
pub fn collect_params<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Params> {
    let mut parents: Vec<ParentParams> = Vec::with_capacity(2);
    for role in ParentRole::ALL {
        let file = loop {
            prompt(
                output,
                &format!(
                    "Enter the path to the {} marker table (.csv or .csv.gz):\n>  ",
                    role
                ),
            )?;
            match collect_input(input)?.as_str() {
                "" => writeln!(output, "A marker table is required.")?,
                path => break path.to_string(),
            }
        };

        prompt(
            output,
            &format!("Enter the strain name of {} (optional):\n>  ", role),
        )?;
        let strain = collect_input(input)?;
        let strain = if strain.is_empty() { None } else { Some(strain) };

        parents.push(ParentParams { file, strain });
    }

    prompt(
        output,
        &format!(
            "Enter the output directory (default as {}):\n>  ",
            DEFAULT_OUTPUT_DIR
        ),
    )?;
    let output_dir = match collect_input(input)?.as_str() {
        "" => DEFAULT_OUTPUT_DIR.to_string(),
        dir => dir.to_string(),
    };

    prompt(
        output,
        "Draw the chromosome distribution chart? (y/n, default as n):\n>  ",
    )?;
    let plot = matches!(collect_input(input)?.as_str(), "y" | "Y");

    prompt(output, "Enter your name for the provenance columns (optional):\n>  ")?;
    let generated_by = collect_input(input)?;
    let generated_by = if generated_by.is_empty() {
        None
    } else {
        Some(generated_by)
    };

    let parent2 = parents.pop();
    let parent1 = parents.pop();
    match (parent1, parent2) {
        (Some(parent1), Some(parent2)) => Ok(Params {
            parent1,
            parent2,
            output: output_dir,
            plot,
            generated_by,
        }),
        _ => Err(io::Error::other("both parent marker tables are required")),
    }
}

fn prompt<W: Write>(output: &mut W, message: &str) -> io::Result<()> {
    write!(output, "{}", message)?;
    output.flush()
}

fn collect_input<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before all parameters were entered",
        ));
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_collect_params() {
        let answers = "tests/data/parent1.csv\nSkunk #1\ntests/data/parent2.csv\n\nout\ny\n\n";
        let mut input = Cursor::new(answers.as_bytes());
        let mut output: Vec<u8> = Vec::new();

        let params = collect_params(&mut input, &mut output).unwrap();
        assert_eq!(params.parent1.file, "tests/data/parent1.csv");
        assert_eq!(params.parent1.strain.as_deref(), Some("Skunk #1"));
        assert!(params.parent2.strain.is_none());
        assert_eq!(params.output, "out");
        assert!(params.plot);
        assert!(params.generated_by.is_none());

        let prompts = String::from_utf8(output).unwrap();
        assert!(prompts.contains("Parent 2 marker table"));
    }

    #[test]
    fn test_collect_params_reprompts_for_missing_table() {
        let answers = "\na.csv\n\nb.csv\n\n\n\nLab A\n";
        let mut input = Cursor::new(answers.as_bytes());
        let mut output: Vec<u8> = Vec::new();

        let params = collect_params(&mut input, &mut output).unwrap();
        assert_eq!(params.parent1.file, "a.csv");
        assert_eq!(params.output, DEFAULT_OUTPUT_DIR);
        assert!(!params.plot);
        assert_eq!(params.generated_by.as_deref(), Some("Lab A"));
        assert!(String::from_utf8(output).unwrap().contains("A marker table is required."));
    }

    #[test]
    fn test_collect_params_eof() {
        let mut input = Cursor::new("a.csv\n".as_bytes());
        let mut output: Vec<u8> = Vec::new();
        let err = collect_params(&mut input, &mut output).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
