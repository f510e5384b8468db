use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use async_trait::async_trait;
use quiz_core::model::Year;
use regex::Regex;
use thiserror::Error;

use crate::repository::{QuestionBank, QuestionBankRepository, Storage, StorageError};

static BANK_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^questions_(\d{4})\.json$").expect("bank file pattern is valid")
});

/// File name holding the bank for `year`.
#[must_use]
pub fn bank_file_name(year: Year) -> String {
    format!("questions_{year}.json")
}

/// Year encoded in a bank file name, if the name follows the bank pattern.
#[must_use]
pub fn parse_bank_file_name(name: &str) -> Option<Year> {
    let captures = BANK_FILE.captures(name)?;
    captures.get(1)?.as_str().parse().ok()
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JsonInitError {
    #[error("not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },
}

/// Question banks stored as `questions_YYYY.json` files in one directory.
#[derive(Debug, Clone)]
pub struct JsonDirRepository {
    root: PathBuf,
}

impl JsonDirRepository {
    /// Open a bank directory.
    ///
    /// # Errors
    ///
    /// Returns `JsonInitError::NotADirectory` if `root` is not an existing directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, JsonInitError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(JsonInitError::NotADirectory { path: root });
        }
        Ok(Self { root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn bank_path(&self, year: Year) -> PathBuf {
        self.root.join(bank_file_name(year))
    }
}

fn io_error(err: &std::io::Error) -> StorageError {
    if err.kind() == ErrorKind::NotFound {
        StorageError::NotFound
    } else {
        StorageError::Io(err.to_string())
    }
}

#[async_trait]
impl QuestionBankRepository for JsonDirRepository {
    async fn list_years(&self) -> Result<Vec<Year>, StorageError> {
        let mut entries = tokio::fs::read_dir(&self.root)
            .await
            .map_err(|e| io_error(&e))?;

        let mut years = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| io_error(&e))? {
            let name = entry.file_name();
            if let Some(year) = name.to_str().and_then(parse_bank_file_name) {
                years.push(year);
            }
        }
        years.sort_unstable();
        years.dedup();
        tracing::debug!(root = %self.root.display(), count = years.len(), "listed question banks");
        Ok(years)
    }

    async fn load_bank(&self, year: Year) -> Result<QuestionBank, StorageError> {
        let path = self.bank_path(year);
        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| io_error(&e))?;
        let bank = QuestionBank::from_json(year, &text)?;
        for rejected in &bank.rejected {
            tracing::warn!(
                "skipping record {} in {}: {}",
                rejected.position,
                path.display(),
                rejected.reason
            );
        }
        Ok(bank)
    }
}

impl Storage {
    /// Build a `Storage` backed by a directory of JSON bank files.
    ///
    /// # Errors
    ///
    /// Returns `JsonInitError` if the directory does not exist.
    pub fn json_dir(root: impl Into<PathBuf>) -> Result<Self, JsonInitError> {
        Ok(Self::from_repository(JsonDirRepository::open(root)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JsonDirRepository>();
    }

    #[test]
    fn bank_file_names_round_trip() {
        let year = Year::new(2022).unwrap();
        assert_eq!(bank_file_name(year), "questions_2022.json");
        assert_eq!(parse_bank_file_name("questions_2022.json"), Some(year));
        assert_eq!(parse_bank_file_name("questions_22.json"), None);
        assert_eq!(parse_bank_file_name("questions_2022.json.bak"), None);
        assert_eq!(parse_bank_file_name("answers_2022.json"), None);
    }

    #[test]
    fn open_requires_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            JsonDirRepository::open(&missing),
            Err(JsonInitError::NotADirectory { .. })
        ));
    }
}
