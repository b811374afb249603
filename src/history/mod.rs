use crate::error::HistoryError;
use crate::form::FormData;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

mod file;

pub use file::FileHistoryStore;

/// One saved generation. Immutable after creation; `form_data` is a full
/// by-value snapshot, so later edits to the live form never reach it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedDescription {
    /// Millisecond-epoch string, unique within the list.
    pub id: String,
    pub date: DateTime<Utc>,
    pub form_data: FormData,
    pub description: String,
}

/// Persistence contract for the history list.
///
/// Injected rather than ambient so stores can be faked in tests. The whole
/// list is written after every mutation; load happens once at startup.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    async fn load(&self) -> Result<Vec<SavedDescription>, HistoryError>;
    async fn save(&self, entries: &[SavedDescription]) -> Result<(), HistoryError>;
}

/// The in-memory history list bound to its backing store.
///
/// Newest entries first. No size cap, dedup, or expiry; unbounded growth is
/// accepted for the expected light usage.
pub struct History {
    entries: Vec<SavedDescription>,
    store: Box<dyn HistoryStore>,
}

impl History {
    pub async fn open(store: Box<dyn HistoryStore>) -> Result<Self, HistoryError> {
        let entries = store.load().await?;
        Ok(Self { entries, store })
    }

    pub fn entries(&self) -> &[SavedDescription] {
        &self.entries
    }

    pub fn find(&self, id: &str) -> Option<&SavedDescription> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Snapshot the current form and description, prepend the entry, and
    /// persist the whole list immediately.
    pub async fn save_entry(
        &mut self,
        form: &FormData,
        description: &str,
    ) -> Result<&SavedDescription, HistoryError> {
        let now = Utc::now();
        let entry = SavedDescription {
            id: self.unique_id(now.timestamp_millis()),
            date: now,
            form_data: form.clone(),
            description: description.to_string(),
        };
        self.entries.insert(0, entry);
        self.store.save(&self.entries).await?;
        Ok(&self.entries[0])
    }

    /// Persist without failing the primary flow; storage trouble is a
    /// diagnostic, not a user-facing error.
    pub async fn save_entry_best_effort(&mut self, form: &FormData, description: &str) -> bool {
        match self.save_entry(form, description).await {
            Ok(_) => true,
            Err(err) => {
                warn!("failed to persist saved description: {err}");
                false
            }
        }
    }

    /// Two saves inside the same millisecond still get distinct ids.
    fn unique_id(&self, mut millis: i64) -> String {
        loop {
            let candidate = millis.to_string();
            if !self.entries.iter().any(|e| e.id == candidate) {
                return candidate;
            }
            millis += 1;
        }
    }
}

/// Volatile store; backs tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryHistoryStore {
    entries: std::sync::Mutex<Vec<SavedDescription>>,
}

#[async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn load(&self) -> Result<Vec<SavedDescription>, HistoryError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| HistoryError::Store("history lock poisoned".into()))?;
        Ok(entries.clone())
    }

    async fn save(&self, entries: &[SavedDescription]) -> Result<(), HistoryError> {
        let mut slot = self
            .entries
            .lock()
            .map_err(|_| HistoryError::Store("history lock poisoned".into()))?;
        *slot = entries.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str) -> FormData {
        FormData {
            product_name: name.into(),
            ..FormData::default()
        }
    }

    #[tokio::test]
    async fn open_on_empty_store_yields_empty_list() {
        let history = History::open(Box::new(MemoryHistoryStore::default()))
            .await
            .unwrap();
        assert!(history.entries().is_empty());
    }

    #[tokio::test]
    async fn save_prepends_newest_first() {
        let mut history = History::open(Box::new(MemoryHistoryStore::default()))
            .await
            .unwrap();
        history.save_entry(&form("First"), "one").await.unwrap();
        history.save_entry(&form("Second"), "two").await.unwrap();

        assert_eq!(history.entries().len(), 2);
        assert_eq!(history.entries()[0].form_data.product_name, "Second");
        assert_eq!(history.entries()[1].form_data.product_name, "First");
    }

    #[tokio::test]
    async fn saved_snapshot_survives_later_form_edits() {
        let mut history = History::open(Box::new(MemoryHistoryStore::default()))
            .await
            .unwrap();
        let mut live = form("Original Name");
        history.save_entry(&live, "the text").await.unwrap();

        live.product_name = "Edited Afterwards".into();
        live.keywords = "brand new, keywords".into();

        let saved = &history.entries()[0];
        assert_eq!(saved.form_data.product_name, "Original Name");
        assert!(saved.form_data.keywords.is_empty());
    }

    #[tokio::test]
    async fn ids_are_unique_even_within_one_millisecond() {
        let mut history = History::open(Box::new(MemoryHistoryStore::default()))
            .await
            .unwrap();
        for i in 0..5 {
            history
                .save_entry(&form("Widget"), &format!("v{i}"))
                .await
                .unwrap();
        }
        let mut ids: Vec<_> = history.entries().iter().map(|e| e.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[tokio::test]
    async fn find_resolves_by_id() {
        let mut history = History::open(Box::new(MemoryHistoryStore::default()))
            .await
            .unwrap();
        let id = history
            .save_entry(&form("Widget"), "text")
            .await
            .unwrap()
            .id
            .clone();
        assert!(history.find(&id).is_some());
        assert!(history.find("0").is_none());
    }
}
