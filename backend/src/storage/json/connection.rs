use anyhow::Result;
use log::info;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Handle on the data directory holding the JSON array files.
#[derive(Debug, Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Open the data directory, creating it if needed.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_directory = base_directory.as_ref().to_path_buf();
        if !base_directory.exists() {
            fs::create_dir_all(&base_directory)?;
            info!("Created data directory: {:?}", base_directory);
        }
        Ok(Self { base_directory })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub fn animals_file_path(&self) -> PathBuf {
        self.base_directory.join("animals.json")
    }

    pub fn breeding_records_file_path(&self) -> PathBuf {
        self.base_directory.join("breeding-records.json")
    }

    /// Read a whole JSON array file. A missing or empty file reads as the
    /// empty list.
    pub fn read_array<T: DeserializeOwned>(&self, path: &Path) -> Result<Vec<T>> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    /// Rewrite a whole JSON array file atomically (temp file + rename).
    pub fn write_array<T: Serialize>(&self, path: &Path, records: &[T]) -> Result<()> {
        let contents = serde_json::to_string_pretty(records)?;
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, contents)?;
        fs::rename(&temp_path, path)?;
        Ok(())
    }
}

/// Next store-assigned id: the decimal successor of the highest numeric id
/// already present. Non-numeric ids are ignored for the maximum.
pub fn next_record_id<'a>(existing_ids: impl Iterator<Item = &'a str>) -> String {
    let max = existing_ids
        .filter_map(|id| id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    (max + 1).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_as_empty_list() {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        let records: Vec<String> = connection
            .read_array(&connection.animals_file_path())
            .unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_write_replaces_whole_file_and_leaves_no_temp() {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        let path = connection.animals_file_path();

        connection
            .write_array(&path, &["a".to_string(), "b".to_string()])
            .unwrap();
        connection.write_array(&path, &["c".to_string()]).unwrap();

        let records: Vec<String> = connection.read_array(&path).unwrap();
        assert_eq!(records, vec!["c".to_string()]);
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_next_record_id_ignores_non_numeric_ids() {
        assert_eq!(next_record_id(std::iter::empty::<&str>()), "1");
        assert_eq!(next_record_id(["3", "7", "2"].into_iter()), "8");
        assert_eq!(next_record_id(["10", "imported-abc"].into_iter()), "11");
    }
}
