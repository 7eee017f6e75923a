use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::helper::marker::{MarkerError, MarkerTable, ParentRole};

#[derive(Debug, PartialEq)]
pub enum DataType {
    Csv,
    CsvGz,
}

impl DataType {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("gz") => DataType::CsvGz,
            _ => DataType::Csv,
        }
    }
}

/// Reads one parent's marker table, decompressing `.gz` files on the fly.
pub fn read_marker_table(path: &Path, role: ParentRole) -> Result<MarkerTable, MarkerError> {
    if !path.is_file() {
        return Err(MarkerError::FileNotFound(path.display().to_string()));
    }

    let file = File::open(path)
        .map_err(|e| MarkerError::UnexpectedError(format!("{}: {}", path.display(), e)))?;

    let stream: Box<dyn Read> = match DataType::from_path(path) {
        DataType::Csv => Box::new(BufReader::new(file)),
        DataType::CsvGz => Box::new(MultiGzDecoder::new(BufReader::new(file))),
    };

    MarkerTable::from_reader(stream, role)
}
