use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use super::backend::{AiError, GenerativeBackend};

/// Configurable in-memory backend for tests.
pub struct MockBackend {
    response: Option<String>,
    call_count: AtomicU32,
}

impl MockBackend {
    /// A backend that answers every call with `response`.
    pub fn replying(response: impl Into<String>) -> Self {
        Self {
            response: Some(response.into()),
            call_count: AtomicU32::new(0),
        }
    }

    /// A backend whose every call fails.
    pub fn failing() -> Self {
        Self {
            response: None,
            call_count: AtomicU32::new(0),
        }
    }

    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerativeBackend for MockBackend {
    fn id(&self) -> &str {
        "mock"
    }

    async fn generate(&self, _system_instruction: &str, _prompt: &str) -> Result<String, AiError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Some(text) => Ok(text.clone()),
            None => Err(AiError::RequestFailed("mock failure".into())),
        }
    }
}
