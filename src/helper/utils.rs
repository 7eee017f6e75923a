use std::cmp::Ordering;
use std::fs::File;
use std::io::BufWriter;
use std::io::{Result as IoResult, Write};

use chrono::Local;
use once_cell::sync::Lazy;
use regex::Regex;

pub fn log_line(writer: &mut BufWriter<File>, message: &str) -> IoResult<()> {
    let now = Local::now().format("%Y-%m-%d %H:%M:%S");
    writeln!(writer, "[{}] {}", now, message)?;
    writer.flush()?;
    Ok(())
}

static NUMBERED_CHROMOSOME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:chr(?:omosome)?)?[_\-\s]?0*(\d+)$")
        .expect("Failed to compile chromosome number regex")
});

/// Number of a chromosome identifier such as `7`, `chr07` or `Chromosome_7`.
pub fn chromosome_number(chromosome: &str) -> Option<u64> {
    NUMBERED_CHROMOSOME_REGEX
        .captures(chromosome.trim())
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u64>().ok())
}

/// Natural chromosome order: numbered chromosomes by number, then every
/// other name lexicographically. Ties on the number fall back to the raw
/// identifier so distinct spellings never compare equal.
pub fn compare_chromosomes(a: &str, b: &str) -> Ordering {
    match (chromosome_number(a), chromosome_number(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
