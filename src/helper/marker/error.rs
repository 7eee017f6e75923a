use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MarkerError {
    #[error("Marker table does not exist: {0}")]
    FileNotFound(String),
    #[error("{0} marker table is missing required column: {1}")]
    MissingColumn(String, String),
    #[error("Malformed row in {0} marker table: {1}")]
    MalformedRow(String, String),
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}
