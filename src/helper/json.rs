use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// JSON loading for parameter files and saved run reports.
pub trait FromJsonFile: Sized {
    fn from_json_string(json_str: &str) -> Result<Self, serde_json::Error>;

    fn from_json_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        Ok(Self::from_json_string(&text)?)
    }
}

impl<T> FromJsonFile for T
where
    T: DeserializeOwned,
{
    fn from_json_string(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }
}

pub fn write_json_pretty<T: Serialize>(value: &T, path: &Path) -> Result<(), Box<dyn Error>> {
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}
