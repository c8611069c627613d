//! Local-first core of an anxiety & panic companion app: a daily symptom
//! journal with exercise planning, a guided self-help tool catalog, weekly
//! progress stats, and chat-style assistants backed by a generative-language
//! API. All state lives in a local key-value store; there is no backend and
//! no authentication.

pub mod ai;
pub mod catalog;
pub mod config;
pub mod journal;
pub mod models;
pub mod recommend;
pub mod stats;
pub mod store;

use std::sync::{Arc, Mutex};

use anyhow::Result;
use log::info;

use ai::{Assistant, GeminiBackend};
use config::AppConfig;
use journal::{local_today, JournalFlow};
use recommend::Recommender;
use stats::DashboardSnapshot;
use store::{KvStore, Storage};

const STORAGE_FILE: &str = "anker.sqlite3";

/// One session's worth of application state: the shared store plus the
/// controllers every surface works through.
pub struct App {
    pub storage: Storage,
    pub journal: JournalFlow,
    pub assistant: Assistant,
    pub recommender: Mutex<Recommender>,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let kv = KvStore::new(config.data_dir.join(STORAGE_FILE))?;
        let storage = Storage::new(kv);

        let backend = Arc::new(GeminiBackend::new(config.api_key));
        let assistant = Assistant::new(backend, config.extraction_timeout);
        let journal = JournalFlow::new(storage.clone(), Arc::new(assistant.clone()));

        info!("Application core initialized");

        Ok(Self {
            storage,
            journal,
            assistant,
            recommender: Mutex::new(Recommender::new()),
        })
    }

    /// Resolve the initial journal view and start watching the store so the
    /// journal state stays in sync with mutations from other surfaces.
    pub async fn start(&self) -> Result<()> {
        self.journal.reconcile().await?;
        self.journal.spawn_watcher().await;
        Ok(())
    }

    pub async fn dashboard(&self) -> Result<DashboardSnapshot> {
        stats::dashboard_snapshot(&self.storage, local_today()).await
    }

    /// Mark an exercise completed from a tool session (idempotent).
    pub async fn log_exercise_completed(&self, exercise_id: &str) -> Result<()> {
        journal::log_exercise_completed(&self.storage, exercise_id, local_today()).await
    }

    /// Flip an exercise's completed state from the dashboard todo list.
    pub async fn toggle_exercise_completion(&self, exercise_id: &str) -> Result<()> {
        journal::toggle_exercise_completion(&self.storage, exercise_id, local_today()).await
    }
}
