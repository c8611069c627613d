use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use log::{error, warn};
use tokio::{sync::Mutex, task::JoinHandle};

use crate::{
    journal::form::{submit, EntryDraft, SubmitError, SymptomExtractor},
    journal::local_today,
    models::JournalEntry,
    store::Storage,
};

/// The four UI states of the daily journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalView {
    /// No entry for today yet; the user is asked whether they plan exercises.
    Ask,
    /// The user is picking exercises for the day.
    Plan,
    /// A partial entry exists; the mood/symptom form is open.
    Form,
    /// Today's entry is complete, or the user is browsing past entries.
    History,
}

/// Outcome of evaluating today's entry status: the view to show plus the
/// planned/completed lists to preload into the working form.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub view: JournalView,
    pub planned: Vec<String>,
    pub completed: Vec<String>,
}

/// Pure transition rule. Complete entry for today → History; partial entry →
/// Form with its exercise lists preloaded; no entry → Ask with cleared
/// working state.
pub fn resolve_view(entries: &[JournalEntry], today: NaiveDate) -> Resolution {
    match entries.iter().find(|e| e.date == today) {
        Some(entry) if entry.is_complete() => Resolution {
            view: JournalView::History,
            planned: Vec::new(),
            completed: Vec::new(),
        },
        Some(entry) => Resolution {
            view: JournalView::Form,
            planned: entry.planned_exercises.clone(),
            completed: entry.completed_exercises.clone(),
        },
        None => Resolution {
            view: JournalView::Ask,
            planned: Vec::new(),
            completed: Vec::new(),
        },
    }
}

#[derive(Debug, Clone)]
struct FlowState {
    view: JournalView,
    planned: Vec<String>,
    completed: Vec<String>,
}

impl FlowState {
    fn apply(&mut self, resolution: Resolution) {
        self.view = resolution.view;
        self.planned = resolution.planned;
        self.completed = resolution.completed;
    }
}

/// Snapshot of the flow for presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowSnapshot {
    pub view: JournalView,
    pub planned: Vec<String>,
    pub completed: Vec<String>,
}

/// Controller for the daily journal state machine. Shared mutable state lives
/// behind a mutex; a watcher task re-runs `reconcile` on every store event so
/// independently-instantiated surfaces converge on the same view.
#[derive(Clone)]
pub struct JournalFlow {
    storage: Storage,
    extractor: Arc<dyn SymptomExtractor>,
    state: Arc<Mutex<FlowState>>,
    watcher: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl JournalFlow {
    pub fn new(storage: Storage, extractor: Arc<dyn SymptomExtractor>) -> Self {
        Self {
            storage,
            extractor,
            state: Arc::new(Mutex::new(FlowState {
                view: JournalView::Ask,
                planned: Vec::new(),
                completed: Vec::new(),
            })),
            watcher: Arc::new(Mutex::new(None)),
        }
    }

    pub async fn snapshot(&self) -> FlowSnapshot {
        let state = self.state.lock().await;
        FlowSnapshot {
            view: state.view,
            planned: state.planned.clone(),
            completed: state.completed.clone(),
        }
    }

    pub async fn view(&self) -> JournalView {
        self.state.lock().await.view
    }

    /// Re-evaluate the transition rule for the current local date. While the
    /// user is planning, the view is left alone: a store mutation must not
    /// clobber an in-progress planning interaction.
    pub async fn reconcile(&self) -> Result<JournalView> {
        self.reconcile_for(local_today()).await
    }

    pub(crate) async fn reconcile_for(&self, today: NaiveDate) -> Result<JournalView> {
        let mut state = self.state.lock().await;
        if state.view == JournalView::Plan {
            return Ok(state.view);
        }

        let entries = self.storage.load_entries().await?;
        state.apply(resolve_view(&entries, today));
        Ok(state.view)
    }

    /// Answering "yes, I plan exercises" from the Ask prompt.
    pub async fn begin_planning(&self) {
        let mut state = self.state.lock().await;
        state.view = JournalView::Plan;
    }

    /// Answering "no": creates today's partial entry with an empty plan and
    /// opens the form directly.
    pub async fn skip_planning(&self) -> Result<()> {
        self.submit_plan(Vec::new()).await
    }

    /// Persist the plan (possibly empty) as today's partial entry, replacing
    /// any same-date entry, and move on to the form.
    pub async fn submit_plan(&self, planned: Vec<String>) -> Result<()> {
        self.submit_plan_for(planned, local_today()).await
    }

    pub(crate) async fn submit_plan_for(
        &self,
        planned: Vec<String>,
        today: NaiveDate,
    ) -> Result<()> {
        let entry = JournalEntry::partial(today, planned.clone());
        self.storage.replace_entry(entry).await?;

        let mut state = self.state.lock().await;
        state.view = JournalView::Form;
        state.planned = planned;
        state.completed = Vec::new();
        Ok(())
    }

    /// Toggle an exercise in the working form's completed list. Only the
    /// working state changes; nothing is persisted until the form is
    /// submitted.
    pub async fn toggle_form_completion(&self, exercise_id: &str) {
        let mut state = self.state.lock().await;
        if let Some(pos) = state.completed.iter().position(|id| id == exercise_id) {
            state.completed.remove(pos);
        } else {
            state.completed.push(exercise_id.to_string());
        }
    }

    /// Submit the mood/symptom form. On success the flow moves to History and
    /// the working state is cleared.
    pub async fn submit_entry(&self, draft: EntryDraft) -> Result<JournalEntry, SubmitError> {
        self.submit_entry_for(draft, local_today()).await
    }

    pub(crate) async fn submit_entry_for(
        &self,
        draft: EntryDraft,
        today: NaiveDate,
    ) -> Result<JournalEntry, SubmitError> {
        if draft.mood == 0 {
            return Err(SubmitError::MoodRequired);
        }

        let (planned, completed) = {
            let state = self.state.lock().await;
            (state.planned.clone(), state.completed.clone())
        };

        let entry = submit(
            &self.storage,
            self.extractor.as_ref(),
            draft,
            planned,
            completed,
            today,
        )
        .await?;

        let mut state = self.state.lock().await;
        state.view = JournalView::History;
        state.planned = Vec::new();
        state.completed = Vec::new();
        Ok(entry)
    }

    /// Subscribe to store events and reconcile on each one. Replaces any
    /// previously running watcher.
    pub async fn spawn_watcher(&self) {
        let mut watcher_guard = self.watcher.lock().await;
        if let Some(handle) = watcher_guard.take() {
            handle.abort();
        }

        let flow = self.clone();
        let mut receiver = self.storage.bus().subscribe();

        let handle = tokio::spawn(async move {
            loop {
                match receiver.recv().await {
                    Ok(_) => {
                        if let Err(err) = flow.reconcile().await {
                            error!("Journal reconcile failed: {err:#}");
                        }
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!("Journal watcher lagged, skipped {skipped} events");
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                }
            }
        });

        *watcher_guard = Some(handle);
    }

    pub async fn stop_watcher(&self) {
        if let Some(handle) = self.watcher.lock().await.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MOOD_OKAY;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn complete_entry(day: &str) -> JournalEntry {
        let mut entry = JournalEntry::partial(date(day), vec![]);
        entry.mood = 4;
        entry
    }

    #[test]
    fn no_entry_resolves_to_ask_with_cleared_state() {
        let resolution = resolve_view(&[], date("2024-05-01"));
        assert_eq!(resolution.view, JournalView::Ask);
        assert!(resolution.planned.is_empty());
        assert!(resolution.completed.is_empty());
    }

    #[test]
    fn partial_entry_resolves_to_form_with_preloaded_lists() {
        let mut entry = JournalEntry::partial(date("2024-05-01"), vec!["atem_3".into()]);
        entry.completed_exercises = vec!["atem_3".into()];

        let resolution = resolve_view(&[entry], date("2024-05-01"));
        assert_eq!(resolution.view, JournalView::Form);
        assert_eq!(resolution.planned, vec!["atem_3"]);
        assert_eq!(resolution.completed, vec!["atem_3"]);
    }

    #[test]
    fn complete_entry_resolves_to_history() {
        let resolution = resolve_view(&[complete_entry("2024-05-01")], date("2024-05-01"));
        assert_eq!(resolution.view, JournalView::History);
    }

    #[test]
    fn auto_created_mood_three_entry_counts_as_complete() {
        let entry = JournalEntry::from_external_completion(date("2024-05-01"), "atem_3".into());
        assert_eq!(entry.mood, MOOD_OKAY);
        let resolution = resolve_view(&[entry], date("2024-05-01"));
        assert_eq!(resolution.view, JournalView::History);
    }

    #[test]
    fn yesterdays_entry_does_not_leak_into_today() {
        let resolution = resolve_view(&[complete_entry("2024-04-30")], date("2024-05-01"));
        assert_eq!(resolution.view, JournalView::Ask);
    }
}
