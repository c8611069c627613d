use std::{path::PathBuf, time::Duration};

/// Environment variable holding the Generative Language API key. Absent key
/// means the assistant surfaces run in their degraded offline mode.
const API_KEY_ENV: &str = "GEMINI_API_KEY";

const DEFAULT_EXTRACTION_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the storage database.
    pub data_dir: PathBuf,
    pub api_key: Option<String>,
    /// Hard cap on the symptom-extraction call; on expiry submission
    /// proceeds without enrichment.
    pub extraction_timeout: Duration,
}

impl AppConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            api_key: std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()),
            extraction_timeout: DEFAULT_EXTRACTION_TIMEOUT,
        }
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn with_extraction_timeout(mut self, timeout: Duration) -> Self {
        self.extraction_timeout = timeout;
        self
    }
}

/// Initialize logging (reads RUST_LOG env var).
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
