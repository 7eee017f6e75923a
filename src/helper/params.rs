use std::fmt::Display;
use std::path::{Path, PathBuf};

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::helper::json::FromJsonFile;
use crate::helper::marker::{ParentLabels, ParentRole};
use crate::helper::report::export::default_generated_by;

pub const DEFAULT_OUTPUT_DIR: &str = "heterosis_output";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Params {
    #[serde(alias = "Parent1", alias = "parent_1")]
    pub parent1: ParentParams,
    #[serde(alias = "Parent2", alias = "parent_2")]
    pub parent2: ParentParams,

    #[serde(default = "default_output", alias = "output_dir")]
    pub output: String,
    #[serde(default, deserialize_with = "string_or_bool")]
    pub plot: bool,
    #[serde(default, alias = "Generated By")]
    pub generated_by: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ParentParams {
    #[serde(alias = "path", alias = "input")]
    pub file: String,
    #[serde(default, alias = "strain_name", alias = "name")]
    pub strain: Option<String>,
}

/// Parameters checked against the file system, ready for a run.
#[derive(Debug, Clone)]
pub struct ValidatedParams {
    pub parent1_file: PathBuf,
    pub parent2_file: PathBuf,
    pub labels: ParentLabels,
    pub output_dir: PathBuf,
    pub plot: bool,
    pub generated_by: String,
}

impl ValidatedParams {
    pub fn file(&self, role: ParentRole) -> &Path {
        match role {
            ParentRole::Parent1 => &self.parent1_file,
            ParentRole::Parent2 => &self.parent2_file,
        }
    }
}

#[derive(Error, Debug)]
pub enum ParamsValidationError {
    #[error("{0} marker table not found: {1}")]
    ParentFileNotFound(String, String),
    #[error("{0} marker table path is not a file: {1}")]
    ParentPathNotAFile(String, String),
    #[error("Output path exists and is not a directory: {0}")]
    OutputNotADirectory(String),
    #[error("Failed to parse JSON: {0}")]
    JsonParseError(String),
}

fn default_output() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

fn string_or_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrBool {
        Bool(bool),
        Str(String),
    }

    match StringOrBool::deserialize(deserializer)? {
        StringOrBool::Bool(b) => Ok(b),
        StringOrBool::Str(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "y" | "1" => Ok(true),
            "false" | "no" | "n" | "0" | "" => Ok(false),
            other => Err(D::Error::custom(format!("Invalid boolean value: {}", other))),
        },
    }
}

impl Display for Params {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{\n")?;
        write!(f, "  parent1: {},\n", self.parent1)?;
        write!(f, "  parent2: {},\n", self.parent2)?;
        write!(f, "  output: {},\n", self.output)?;
        write!(f, "  plot: {},\n", self.plot)?;
        match &self.generated_by {
            Some(g) => write!(f, "  generated_by: {}\n", g)?,
            None => write!(f, "  generated_by: null\n")?,
        }
        write!(f, "}}")
    }
}

impl Display for ParentParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.strain {
            Some(strain) => write!(f, "{{ file: {}, strain: {} }}", self.file, strain),
            None => write!(f, "{{ file: {}, strain: null }}", self.file),
        }
    }
}

impl Params {
    pub fn new(parent1_file: &str, parent2_file: &str) -> Self {
        Params {
            parent1: ParentParams {
                file: parent1_file.to_string(),
                strain: None,
            },
            parent2: ParentParams {
                file: parent2_file.to_string(),
                strain: None,
            },
            output: default_output(),
            plot: false,
            generated_by: None,
        }
    }

    pub fn parent(&self, role: ParentRole) -> &ParentParams {
        match role {
            ParentRole::Parent1 => &self.parent1,
            ParentRole::Parent2 => &self.parent2,
        }
    }

    /// Checks that both marker tables exist and that the output location is
    /// usable. Column checks happen later, when the tables are read.
    pub fn validate(&self) -> Result<ValidatedParams, ParamsValidationError> {
        for role in ParentRole::ALL {
            let file = &self.parent(role).file;
            let path = Path::new(file);
            if !path.exists() {
                return Err(ParamsValidationError::ParentFileNotFound(
                    role.to_string(),
                    file.clone(),
                ));
            }
            if !path.is_file() {
                return Err(ParamsValidationError::ParentPathNotAFile(
                    role.to_string(),
                    file.clone(),
                ));
            }
        }

        let output_dir = PathBuf::from(&self.output);
        if output_dir.exists() && !output_dir.is_dir() {
            return Err(ParamsValidationError::OutputNotADirectory(
                self.output.clone(),
            ));
        }

        let generated_by = self
            .generated_by
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(str::to_string)
            .unwrap_or_else(default_generated_by);

        Ok(ValidatedParams {
            parent1_file: PathBuf::from(&self.parent1.file),
            parent2_file: PathBuf::from(&self.parent2.file),
            labels: ParentLabels::new(self.parent1.strain.clone(), self.parent2.strain.clone()),
            output_dir,
            plot: self.plot,
            generated_by,
        })
    }

    pub fn from_json_validated(json: &str) -> Result<ValidatedParams, ParamsValidationError> {
        let params = Params::from_json_string(json)
            .map_err(|e| ParamsValidationError::JsonParseError(e.to_string()))?;
        params.validate()
    }
}
