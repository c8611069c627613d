mod bus;
mod kv;

pub use bus::{ChangeBus, StoreEvent};
pub use kv::KvStore;

use anyhow::Result;
use chrono::NaiveDate;
use log::warn;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::models::{CustomExercise, JournalEntry, UserData};

const KEY_ENTRIES: &str = "journal_entries";
const KEY_CUSTOM_EXERCISES: &str = "custom_exercises";
const KEY_USER_DATA: &str = "user_data";
const KEY_ONBOARDED: &str = "onboarded";
const KEY_PROFILE_COMPLETE: &str = "profile_complete";
const KEY_DAILY_QUOTE: &str = "daily_quote";

/// Cached motivational quote, one per calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteCache {
    pub quote: String,
    pub date: NaiveDate,
}

/// Typed facade over the key-value store. Every collection is read whole and
/// written whole; there is no partial-write API. Successful writes publish a
/// change event so other surfaces re-read.
#[derive(Clone)]
pub struct Storage {
    kv: KvStore,
    bus: ChangeBus,
}

impl Storage {
    pub fn new(kv: KvStore) -> Self {
        Self {
            kv,
            bus: ChangeBus::new(),
        }
    }

    pub fn bus(&self) -> &ChangeBus {
        &self.bus
    }

    /// Decode a stored JSON document, substituting the default on a missing
    /// key or malformed data. Corruption is never surfaced to the caller.
    async fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T> {
        let Some(raw) = self.kv.get(key).await? else {
            return Ok(T::default());
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!("Malformed data under '{key}', substituting default: {err}");
                Ok(T::default())
            }
        }
    }

    async fn save_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        self.kv.put(key, serde_json::to_string(value)?).await
    }

    // --- Journal entries ---

    pub async fn load_entries(&self) -> Result<Vec<JournalEntry>> {
        self.load_or_default(KEY_ENTRIES).await
    }

    /// Replace the whole collection. Persisted newest-first; consumers that
    /// want chronological order sort on read.
    pub async fn save_entries(&self, mut entries: Vec<JournalEntry>) -> Result<()> {
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        self.save_json(KEY_ENTRIES, &entries).await?;
        self.bus.publish(StoreEvent::EntriesChanged);
        Ok(())
    }

    /// Write one entry, dropping any previously stored entry for the same
    /// date. This is the only way entries are mutated.
    pub async fn replace_entry(&self, entry: JournalEntry) -> Result<()> {
        let mut entries = self.load_entries().await?;
        entries.retain(|e| e.date != entry.date);
        entries.push(entry);
        self.save_entries(entries).await
    }

    pub async fn entry_for(&self, date: NaiveDate) -> Result<Option<JournalEntry>> {
        Ok(self
            .load_entries()
            .await?
            .into_iter()
            .find(|e| e.date == date))
    }

    // --- Custom exercises ---

    pub async fn load_custom_exercises(&self) -> Result<Vec<CustomExercise>> {
        self.load_or_default(KEY_CUSTOM_EXERCISES).await
    }

    pub async fn save_custom_exercises(&self, exercises: Vec<CustomExercise>) -> Result<()> {
        self.save_json(KEY_CUSTOM_EXERCISES, &exercises).await?;
        self.bus.publish(StoreEvent::ExercisesChanged);
        Ok(())
    }

    pub async fn add_custom_exercise(&self, title: &str) -> Result<CustomExercise> {
        let exercise = CustomExercise::new(title.trim());
        let mut exercises = self.load_custom_exercises().await?;
        exercises.push(exercise.clone());
        self.save_custom_exercises(exercises).await?;
        Ok(exercise)
    }

    /// Removes the exercise from the catalog only. Historical entries that
    /// reference its id keep the dangling reference; display falls back to
    /// the raw id.
    pub async fn delete_custom_exercise(&self, id: &str) -> Result<()> {
        let mut exercises = self.load_custom_exercises().await?;
        exercises.retain(|e| e.id != id);
        self.save_custom_exercises(exercises).await
    }

    // --- User profile ---

    pub async fn load_user_data(&self) -> Result<UserData> {
        self.load_or_default(KEY_USER_DATA).await
    }

    pub async fn save_user_data(&self, data: &UserData) -> Result<()> {
        self.save_json(KEY_USER_DATA, data).await?;
        self.bus.publish(StoreEvent::ProfileChanged);
        Ok(())
    }

    /// Shallow-merge partial profile data over the stored profile. Fields the
    /// partial record leaves unset survive unchanged.
    pub async fn merge_user_data(&self, partial: UserData) -> Result<UserData> {
        let mut data = self.load_user_data().await?;
        data.merge_from(partial);
        self.save_user_data(&data).await?;
        Ok(data)
    }

    // --- Boolean flags ---

    pub async fn is_onboarded(&self) -> Result<bool> {
        self.load_flag(KEY_ONBOARDED).await
    }

    pub async fn set_onboarded(&self, value: bool) -> Result<()> {
        self.save_flag(KEY_ONBOARDED, value).await
    }

    pub async fn is_profile_complete(&self) -> Result<bool> {
        self.load_flag(KEY_PROFILE_COMPLETE).await
    }

    pub async fn set_profile_complete(&self, value: bool) -> Result<()> {
        self.save_flag(KEY_PROFILE_COMPLETE, value).await?;
        self.bus.publish(StoreEvent::ProfileChanged);
        Ok(())
    }

    async fn load_flag(&self, key: &str) -> Result<bool> {
        Ok(self.kv.get(key).await?.as_deref() == Some("true"))
    }

    async fn save_flag(&self, key: &str, value: bool) -> Result<()> {
        self.kv
            .put(key, if value { "true" } else { "false" }.into())
            .await
    }

    // --- Daily quote cache ---

    /// Unlike the other keys, a corrupt quote cache is purged outright so the
    /// next read starts clean.
    pub async fn load_quote_cache(&self) -> Result<Option<QuoteCache>> {
        let Some(raw) = self.kv.get(KEY_DAILY_QUOTE).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(cache) => Ok(Some(cache)),
            Err(err) => {
                warn!("Corrupt daily quote cache, purging: {err}");
                self.kv.delete(KEY_DAILY_QUOTE).await?;
                Ok(None)
            }
        }
    }

    pub async fn save_quote_cache(&self, cache: &QuoteCache) -> Result<()> {
        self.save_json(KEY_DAILY_QUOTE, cache).await
    }

    #[cfg(test)]
    pub(crate) async fn put_raw(&self, key: &str, value: &str) -> Result<()> {
        self.kv.put(key, value.to_string()).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use tempfile::TempDir;

    /// A storage instance backed by a throwaway database. The TempDir must
    /// outlive the store.
    pub(crate) fn storage() -> (TempDir, Storage) {
        let dir = TempDir::new().unwrap();
        let kv = KvStore::new(dir.path().join("anker.sqlite3")).unwrap();
        (dir, Storage::new(kv))
    }
}

#[cfg(test)]
mod tests {
    use super::testing::storage;
    use super::*;
    use crate::models::JournalEntry;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn replace_entry_never_duplicates_a_date() {
        let (_dir, storage) = storage();

        let first = JournalEntry::partial(date("2024-05-01"), vec!["atem_3".into()]);
        storage.replace_entry(first).await.unwrap();

        let mut second = JournalEntry::partial(date("2024-05-01"), vec![]);
        second.mood = 4;
        storage.replace_entry(second).await.unwrap();

        let entries = storage.load_entries().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].mood, 4);
        assert!(entries[0].planned_exercises.is_empty());
    }

    #[tokio::test]
    async fn entries_persist_newest_first() {
        let (_dir, storage) = storage();

        for day in ["2024-05-01", "2024-05-03", "2024-05-02"] {
            storage
                .replace_entry(JournalEntry::partial(date(day), vec![]))
                .await
                .unwrap();
        }

        let dates: Vec<_> = storage
            .load_entries()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.date.to_string())
            .collect();
        assert_eq!(dates, vec!["2024-05-03", "2024-05-02", "2024-05-01"]);
    }

    #[tokio::test]
    async fn malformed_collections_degrade_to_empty() {
        let (_dir, storage) = storage();

        storage.put_raw(KEY_ENTRIES, "not json").await.unwrap();
        storage.put_raw(KEY_CUSTOM_EXERCISES, "[{]").await.unwrap();
        storage.put_raw(KEY_USER_DATA, "42").await.unwrap();

        assert!(storage.load_entries().await.unwrap().is_empty());
        assert!(storage.load_custom_exercises().await.unwrap().is_empty());
        assert_eq!(storage.load_user_data().await.unwrap(), UserData::default());
    }

    #[tokio::test]
    async fn corrupt_quote_cache_is_purged() {
        let (_dir, storage) = storage();

        storage.put_raw(KEY_DAILY_QUOTE, "{broken").await.unwrap();
        assert!(storage.load_quote_cache().await.unwrap().is_none());

        // The purge removed the key entirely.
        let cache = QuoteCache {
            quote: "Ein Schritt nach dem anderen.".into(),
            date: date("2024-05-01"),
        };
        storage.save_quote_cache(&cache).await.unwrap();
        assert_eq!(storage.load_quote_cache().await.unwrap(), Some(cache));
    }

    #[tokio::test]
    async fn save_publishes_change_events() {
        let (_dir, storage) = storage();
        let mut rx = storage.bus().subscribe();

        storage.save_entries(vec![]).await.unwrap();
        assert_eq!(rx.recv().await.unwrap(), StoreEvent::EntriesChanged);

        storage.save_custom_exercises(vec![]).await.unwrap();
        assert_eq!(rx.recv().await.unwrap(), StoreEvent::ExercisesChanged);
    }

    #[tokio::test]
    async fn profile_merge_is_shallow() {
        let (_dir, storage) = storage();

        storage
            .save_user_data(&UserData {
                name: Some("Kilian".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        let merged = storage
            .merge_user_data(UserData {
                custom_symptoms: Some(vec!["Druck im Kopf".into()]),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(merged.name.as_deref(), Some("Kilian"));
        assert_eq!(
            merged.custom_symptoms,
            Some(vec!["Druck im Kopf".to_string()])
        );
    }
}
