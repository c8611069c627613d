use async_trait::async_trait;
use chrono::NaiveDate;
use log::info;
use uuid::Uuid;

use crate::{catalog::SYMPTOM_OPTIONS, models::JournalEntry, store::Storage};

/// Collaborator that suggests symptom labels from free text. Best-effort by
/// contract: implementations return an empty vec on any failure and never
/// block beyond their configured timeout.
#[async_trait]
pub trait SymptomExtractor: Send + Sync {
    async fn extract_symptoms(&self, text: &str) -> Vec<String>;
}

/// The user's answers to the daily form. Planned/completed exercises are
/// tracked separately as working state.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub mood: u8,
    pub notes: String,
    pub had_anxiety_symptoms: bool,
    pub had_panic_attack: Option<bool>,
    pub selected_symptoms: Vec<String>,
    pub symptom_comment: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Mood is a required field; nothing is written until one is picked.
    #[error("a mood must be selected before the entry can be saved")]
    MoodRequired,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Validate and assemble today's entry from the draft, enrich the symptom
/// list from the free-text comment, and persist. The caller has already
/// checked `mood > 0`; this rechecks it as the write gate.
pub(crate) async fn submit(
    storage: &Storage,
    extractor: &dyn SymptomExtractor,
    draft: EntryDraft,
    planned: Vec<String>,
    completed: Vec<String>,
    today: NaiveDate,
) -> Result<JournalEntry, SubmitError> {
    if draft.mood == 0 {
        return Err(SubmitError::MoodRequired);
    }

    let user_data = storage.load_user_data().await?;

    let mut final_symptoms = dedup_preserving_order(draft.selected_symptoms.clone());
    let mut new_custom_symptoms: Vec<String> = Vec::new();

    let comment = draft.symptom_comment.trim();
    if !comment.is_empty() {
        let extracted = extractor.extract_symptoms(comment).await;

        let mut known = user_data.known_symptoms();
        known.extend(SYMPTOM_OPTIONS.iter().map(|s| s.to_string()));

        for label in extracted {
            if !known.contains(&label) && !new_custom_symptoms.contains(&label) {
                new_custom_symptoms.push(label.clone());
            }
            if !final_symptoms.contains(&label) {
                final_symptoms.push(label);
            }
        }
    }

    let existing = storage.entry_for(today).await?;
    let entry = JournalEntry {
        id: existing
            .map(|e| e.id)
            .unwrap_or_else(|| Uuid::new_v4().to_string()),
        date: today,
        mood: draft.mood,
        notes: draft.notes,
        had_anxiety_symptoms: draft.had_anxiety_symptoms,
        // A stray answer to the panic question is dropped once the user says
        // they had no symptoms at all.
        had_panic_attack: if draft.had_anxiety_symptoms {
            draft.had_panic_attack
        } else {
            None
        },
        panic_symptoms: final_symptoms,
        panic_symptom_comment: draft.symptom_comment,
        planned_exercises: planned,
        completed_exercises: completed,
    };

    storage.replace_entry(entry.clone()).await?;

    if !new_custom_symptoms.is_empty() {
        info!(
            "Learned {} new symptom label(s) from free text",
            new_custom_symptoms.len()
        );
        let mut data = storage.load_user_data().await?;
        let mut custom = data.custom_symptoms.take().unwrap_or_default();
        custom.extend(new_custom_symptoms);
        data.custom_symptoms = Some(custom);
        storage.save_user_data(&data).await?;
    }

    Ok(entry)
}

fn dedup_preserving_order(labels: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(labels.len());
    for label in labels {
        if !seen.contains(&label) {
            seen.push(label);
        }
    }
    seen
}
