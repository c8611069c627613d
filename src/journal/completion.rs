use anyhow::Result;
use chrono::NaiveDate;
use log::{info, warn};

use crate::{models::JournalEntry, store::Storage};

/// Mark an exercise completed from outside the journal flow (e.g. after
/// finishing a tool session). Idempotent: an already-completed exercise is
/// left as is. When no entry exists for the day, a partial entry with the
/// neutral default mood is created so the completion is not lost.
pub async fn log_exercise_completed(
    storage: &Storage,
    exercise_id: &str,
    today: NaiveDate,
) -> Result<()> {
    let mut entries = storage.load_entries().await?;

    match entries.iter_mut().find(|e| e.date == today) {
        Some(entry) => {
            if entry
                .completed_exercises
                .iter()
                .any(|id| id == exercise_id)
            {
                return Ok(());
            }
            entry.completed_exercises.push(exercise_id.to_string());
        }
        None => {
            entries.push(JournalEntry::from_external_completion(
                today,
                exercise_id.to_string(),
            ));
        }
    }

    storage.save_entries(entries).await?;
    info!("Exercise {exercise_id} logged as completed for {today}");
    Ok(())
}

/// Flip an exercise's completed state on today's entry, e.g. from the
/// dashboard todo list. Silently does nothing when today has no entry.
pub async fn toggle_exercise_completion(
    storage: &Storage,
    exercise_id: &str,
    today: NaiveDate,
) -> Result<()> {
    let mut entries = storage.load_entries().await?;

    let Some(entry) = entries.iter_mut().find(|e| e.date == today) else {
        warn!("Could not toggle exercise completion: no journal entry for today");
        return Ok(());
    };

    if let Some(pos) = entry
        .completed_exercises
        .iter()
        .position(|id| id == exercise_id)
    {
        entry.completed_exercises.remove(pos);
    } else {
        entry.completed_exercises.push(exercise_id.to_string());
    }

    storage.save_entries(entries).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{JournalEntry, MOOD_OKAY};
    use crate::store::testing::storage;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn completion_without_entry_creates_mood_three_partial() {
        let (_dir, storage) = storage();
        let today = date("2024-05-01");

        log_exercise_completed(&storage, "atem_3", today)
            .await
            .unwrap();

        let entry = storage.entry_for(today).await.unwrap().unwrap();
        assert_eq!(entry.mood, MOOD_OKAY);
        assert_eq!(entry.planned_exercises, vec!["atem_3"]);
        assert_eq!(entry.completed_exercises, vec!["atem_3"]);
    }

    #[tokio::test]
    async fn completion_is_idempotent() {
        let (_dir, storage) = storage();
        let today = date("2024-05-01");

        log_exercise_completed(&storage, "atem_3", today)
            .await
            .unwrap();
        log_exercise_completed(&storage, "atem_3", today)
            .await
            .unwrap();

        let entry = storage.entry_for(today).await.unwrap().unwrap();
        assert_eq!(entry.completed_exercises, vec!["atem_3"]);
    }

    #[tokio::test]
    async fn completion_appends_to_existing_entry_without_touching_plan() {
        let (_dir, storage) = storage();
        let today = date("2024-05-01");

        storage
            .replace_entry(JournalEntry::partial(today, vec!["body_scan_7".into()]))
            .await
            .unwrap();
        // Completed before it was ever planned; the dangling reference stays.
        log_exercise_completed(&storage, "atem_3", today)
            .await
            .unwrap();

        let entry = storage.entry_for(today).await.unwrap().unwrap();
        assert_eq!(entry.planned_exercises, vec!["body_scan_7"]);
        assert_eq!(entry.completed_exercises, vec!["atem_3"]);
    }

    #[tokio::test]
    async fn toggle_twice_restores_prior_membership() {
        let (_dir, storage) = storage();
        let today = date("2024-05-01");

        storage
            .replace_entry(JournalEntry::partial(today, vec!["atem_3".into()]))
            .await
            .unwrap();

        toggle_exercise_completion(&storage, "atem_3", today)
            .await
            .unwrap();
        let entry = storage.entry_for(today).await.unwrap().unwrap();
        assert_eq!(entry.completed_exercises, vec!["atem_3"]);

        toggle_exercise_completion(&storage, "atem_3", today)
            .await
            .unwrap();
        let entry = storage.entry_for(today).await.unwrap().unwrap();
        assert!(entry.completed_exercises.is_empty());
    }

    #[tokio::test]
    async fn toggle_without_entry_is_a_silent_noop() {
        let (_dir, storage) = storage();

        toggle_exercise_completion(&storage, "atem_3", date("2024-05-01"))
            .await
            .unwrap();

        assert!(storage.load_entries().await.unwrap().is_empty());
    }
}
