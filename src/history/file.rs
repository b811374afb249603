use super::{HistoryStore, SavedDescription};
use crate::error::HistoryError;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// JSON-file history at a single canonical path.
///
/// The file holds the whole list as a pretty-printed array; an absent file
/// reads as an empty history.
pub struct FileHistoryStore {
    path: PathBuf,
}

impl FileHistoryStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl HistoryStore for FileHistoryStore {
    async fn load(&self) -> Result<Vec<SavedDescription>, HistoryError> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(HistoryError::Io(err)),
        };
        serde_json::from_str(&contents)
            .map_err(|err| HistoryError::Store(format!("corrupt history file: {err}")))
    }

    async fn save(&self, entries: &[SavedDescription]) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(entries)
            .map_err(|err| HistoryError::Store(err.to_string()))?;
        fs::write(&self.path, json).await?;
        Ok(())
    }
}
