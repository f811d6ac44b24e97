//! Snapshot sources
//!
//! The network client that talks to the realtime database lives in the app.
//! It plugs in through [`SnapshotSource`]; this crate ships an in-memory
//! source and one that reads JSON exports from disk.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use crate::RecordError;

/// Anything that can hand over a collection as JSON
pub trait SnapshotSource {
    /// Raw value stored at `collection`; `Value::Null` if it does not exist
    fn load(&self, collection: &str) -> Result<Value, RecordError>;
}

/// Collections held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    collections: HashMap<String, Value>,
}

impl MemorySource {
    /// Source with no collections
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `name`
    pub fn with_collection(mut self, name: impl Into<String>, value: Value) -> Self {
        self.collections.insert(name.into(), value);
        self
    }

    /// Parse `json` and store it under `name`
    pub fn with_json(self, name: impl Into<String>, json: &str) -> Result<Self, RecordError> {
        let value = serde_json::from_str(json)?;
        Ok(self.with_collection(name, value))
    }
}

impl SnapshotSource for MemorySource {
    fn load(&self, collection: &str) -> Result<Value, RecordError> {
        Ok(self.collections.get(collection).cloned().unwrap_or(Value::Null))
    }
}

/// JSON exports on disk, one `<collection>.json` file per collection
#[derive(Debug, Clone)]
pub struct ExportDirSource {
    root: PathBuf,
}

impl ExportDirSource {
    /// Read exports from the directory `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SnapshotSource for ExportDirSource {
    fn load(&self, collection: &str) -> Result<Value, RecordError> {
        let path = self.root.join(format!("{collection}.json"));
        if !path.exists() {
            return Ok(Value::Null);
        }

        let text = fs::read_to_string(&path).map_err(|e| RecordError::Source {
            collection: collection.to_string(),
            reason: e.to_string(),
        })?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_collection_is_null() {
        let source = MemorySource::new().with_collection("sensor_data", json!({}));
        assert_eq!(source.load("weather").unwrap(), Value::Null);
        assert_eq!(source.load("sensor_data").unwrap(), json!({}));
    }

    #[test]
    fn missing_export_file_is_null() {
        let source = ExportDirSource::new("/nonexistent/hydrowatch");
        assert_eq!(source.load("sensor_data").unwrap(), Value::Null);
    }
}
