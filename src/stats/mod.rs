mod quote;

pub use quote::daily_quote;

use anyhow::Result;
use chrono::{Duration, NaiveDate};

use crate::{
    catalog::visible_exercises,
    models::{is_custom_id, JournalEntry},
    store::Storage,
};

/// 7-day rollup for the dashboard. Pure projection over the entry history;
/// recomputed on every read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeeklySummary {
    /// Completed exercises summed over the window.
    pub tools_used: usize,
    /// Journal days in the window without a panic attack.
    pub panic_free_days: usize,
}

/// Aggregate the trailing seven calendar days, `today - 6 ..= today`.
pub fn weekly_summary(entries: &[JournalEntry], today: NaiveDate) -> WeeklySummary {
    let window_start = today - Duration::days(6);

    let mut summary = WeeklySummary::default();
    for entry in entries
        .iter()
        .filter(|e| e.date >= window_start && e.date <= today)
    {
        summary.tools_used += entry.completed_exercises.len();
        if entry.had_panic_attack != Some(true) {
            summary.panic_free_days += 1;
        }
    }
    summary
}

/// One row of the dashboard's "today" todo list.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoItem {
    pub exercise_id: String,
    pub title: String,
    pub is_custom: bool,
    pub completed: bool,
}

/// Everything the dashboard renders, assembled from the current store state.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub daily_quote: String,
    /// Nudge to finish the onboarding questionnaire.
    pub show_profile_banner: bool,
    /// Nudge to write today's journal entry; only once the profile is done.
    pub show_journal_prompt: bool,
    pub journal_done_today: bool,
    pub todo: Vec<TodoItem>,
    pub weekly: WeeklySummary,
}

pub async fn dashboard_snapshot(storage: &Storage, today: NaiveDate) -> Result<DashboardSnapshot> {
    let entries = storage.load_entries().await?;
    let custom_exercises = storage.load_custom_exercises().await?;
    let user_data = storage.load_user_data().await?;
    let profile_complete = storage.is_profile_complete().await?;

    let today_entry = entries.iter().find(|e| e.date == today);
    let journal_done_today = today_entry.map(|e| e.is_complete()).unwrap_or(false);

    let planned: &[String] = today_entry
        .map(|e| e.planned_exercises.as_slice())
        .unwrap_or_default();
    let completed: &[String] = today_entry
        .map(|e| e.completed_exercises.as_slice())
        .unwrap_or_default();

    // Hidden or deleted exercises drop out of the todo list even when
    // planned; their completion history is untouched.
    let todo = visible_exercises(&user_data, &custom_exercises)
        .into_iter()
        .filter(|exercise| planned.iter().any(|id| id == exercise.id()))
        .map(|exercise| TodoItem {
            exercise_id: exercise.id().to_string(),
            title: exercise.display_title().to_string(),
            is_custom: is_custom_id(exercise.id()),
            completed: completed.iter().any(|id| id == exercise.id()),
        })
        .collect();

    Ok(DashboardSnapshot {
        daily_quote: daily_quote(storage, today).await?,
        show_profile_banner: !profile_complete,
        show_journal_prompt: profile_complete && !journal_done_today,
        journal_done_today,
        todo,
        weekly: weekly_summary(&entries, today),
    })
}
