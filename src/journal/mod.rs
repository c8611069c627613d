mod completion;
mod form;
mod resolver;

pub use completion::{log_exercise_completed, toggle_exercise_completion};
pub use form::{EntryDraft, SubmitError, SymptomExtractor};
pub use resolver::{resolve_view, FlowSnapshot, JournalFlow, JournalView, Resolution};

use chrono::NaiveDate;

/// The journal's day boundary is the local calendar date at evaluation time,
/// so the state machine resets naturally at local midnight.
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
