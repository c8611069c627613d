use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Mood scale used by the journal form. `0` is reserved for partial entries
/// that have not been filled out yet and is not a selectable value.
pub const MOOD_UNSET: u8 = 0;
/// Default mood for entries auto-created by an external exercise completion.
pub const MOOD_OKAY: u8 = 3;

pub const MOOD_LABELS: [(u8, &str); 5] = [
    (1, "Sehr schlecht"),
    (2, "Schlecht"),
    (3, "Okay"),
    (4, "Gut"),
    (5, "Sehr gut"),
];

/// One journal record per calendar date. The date is the entry's identity
/// within the store; the store never holds two entries for the same date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub date: NaiveDate,
    /// 1-5 once the form was submitted, 0 while the entry is partial.
    pub mood: u8,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub had_anxiety_symptoms: bool,
    /// Only meaningful when `had_anxiety_symptoms` is true; null otherwise.
    #[serde(default)]
    pub had_panic_attack: Option<bool>,
    #[serde(default)]
    pub panic_symptoms: Vec<String>,
    #[serde(default)]
    pub panic_symptom_comment: String,
    #[serde(default)]
    pub planned_exercises: Vec<String>,
    #[serde(default)]
    pub completed_exercises: Vec<String>,
}

impl JournalEntry {
    /// A planning-only entry: exercises chosen, mood form not yet submitted.
    pub fn partial(date: NaiveDate, planned: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            mood: MOOD_UNSET,
            notes: String::new(),
            had_anxiety_symptoms: false,
            had_panic_attack: None,
            panic_symptoms: Vec::new(),
            panic_symptom_comment: String::new(),
            planned_exercises: planned,
            completed_exercises: Vec::new(),
        }
    }

    /// An entry auto-created because an exercise was completed outside the
    /// journal flow. Mood defaults to "Okay" (3) so these days stay
    /// distinguishable from unplanned-and-unfilled ones.
    pub fn from_external_completion(date: NaiveDate, exercise_id: String) -> Self {
        Self {
            mood: MOOD_OKAY,
            planned_exercises: vec![exercise_id.clone()],
            completed_exercises: vec![exercise_id],
            ..Self::partial(date, Vec::new())
        }
    }

    pub fn is_complete(&self) -> bool {
        self.mood > MOOD_UNSET
    }
}
