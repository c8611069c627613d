mod entry;
mod exercise;
mod profile;

pub use entry::{JournalEntry, MOOD_LABELS, MOOD_OKAY, MOOD_UNSET};
pub use exercise::{is_custom_id, CustomExercise, CUSTOM_ID_PREFIX};
pub use profile::UserData;
