mod backend;
mod gemini;
mod mock;
mod prompts;

pub use backend::{AiError, GenerativeBackend};
pub use gemini::GeminiBackend;
pub use mock::MockBackend;

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use log::{error, warn};
use tokio::time::timeout;

use crate::journal::SymptomExtractor;

/// Which persona the knowledge chat runs as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatMode {
    General,
    QuickHelp,
}

/// Facade over the generative backend for the three assistant surfaces:
/// knowledge Q&A, emergency support, and symptom extraction. Every surface
/// degrades to fixed fallback copy; none propagates a backend failure.
#[derive(Clone)]
pub struct Assistant {
    backend: Arc<dyn GenerativeBackend>,
    extraction_timeout: Duration,
}

impl Assistant {
    pub fn new(backend: Arc<dyn GenerativeBackend>, extraction_timeout: Duration) -> Self {
        Self {
            backend,
            extraction_timeout,
        }
    }

    /// Answer a question about anxiety, personalized by the user context.
    pub async fn knowledge_answer(&self, question: &str, user_context: &str, mode: ChatMode) -> String {
        let role = match mode {
            ChatMode::General => prompts::GENERAL_ROLE,
            ChatMode::QuickHelp => prompts::QUICK_HELP_ROLE,
        };
        let instruction = format!("{}{role}", prompts::user_context_block(user_context));

        match self.backend.generate(&instruction, question).await {
            Ok(answer) => answer,
            Err(AiError::Unavailable(_)) => prompts::KNOWLEDGE_UNAVAILABLE.to_string(),
            Err(err) => {
                error!("Knowledge answer failed: {err}");
                prompts::KNOWLEDGE_ERROR.to_string()
            }
        }
    }

    /// Acute panic support. `follow_up` continues an ongoing exchange; `None`
    /// opens with the fixed first message.
    pub async fn emergency_response(&self, user_context: &str, follow_up: Option<&str>) -> String {
        let instruction = prompts::emergency_instruction(user_context);
        let prompt = follow_up.unwrap_or(prompts::EMERGENCY_DEFAULT_PROMPT);

        match self.backend.generate(&instruction, prompt).await {
            Ok(answer) => answer,
            Err(AiError::Unavailable(_)) => prompts::EMERGENCY_UNAVAILABLE.to_string(),
            Err(err) => {
                error!("Emergency response failed: {err}");
                prompts::EMERGENCY_ERROR.to_string()
            }
        }
    }
}

#[async_trait]
impl SymptomExtractor for Assistant {
    /// Best-effort label extraction, bounded by the configured timeout.
    /// Blank input, backend failure, timeout, and unparseable replies all
    /// resolve to "no suggestions".
    async fn extract_symptoms(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let prompt = prompts::extract_symptoms_prompt(text.trim());
        let call = self
            .backend
            .generate(prompts::EXTRACT_SYMPTOMS_INSTRUCTION, &prompt);

        let reply = match timeout(self.extraction_timeout, call).await {
            Ok(Ok(reply)) => reply,
            Ok(Err(err)) => {
                warn!("Symptom extraction failed: {err}");
                return Vec::new();
            }
            Err(_) => {
                warn!("Symptom extraction timed out");
                return Vec::new();
            }
        };

        match parse_label_array(&reply) {
            Some(labels) => labels,
            None => {
                warn!("Symptom extraction returned unparseable reply");
                Vec::new()
            }
        }
    }
}

/// Pull a JSON string array out of the model reply, tolerating surrounding
/// prose and Markdown code fences.
fn parse_label_array(reply: &str) -> Option<Vec<String>> {
    let start = reply.find('[')?;
    let end = reply.rfind(']')?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&reply[start..=end]).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assistant(backend: MockBackend) -> Assistant {
        Assistant::new(Arc::new(backend), Duration::from_secs(1))
    }

    #[tokio::test]
    async fn extraction_parses_fenced_json_array() {
        let assistant = assistant(MockBackend::replying(
            "```json\n[\"Druck im Kopf\", \"innere Unruhe\"]\n```",
        ));
        assert_eq!(
            assistant.extract_symptoms("Druck im Kopf").await,
            vec!["Druck im Kopf", "innere Unruhe"]
        );
    }

    #[tokio::test]
    async fn extraction_failure_yields_empty() {
        let assistant = assistant(MockBackend::failing());
        assert!(assistant.extract_symptoms("irgendwas").await.is_empty());
    }

    #[tokio::test]
    async fn extraction_skips_blank_input_without_calling_backend() {
        let backend = MockBackend::replying("[]");
        let calls = Arc::new(backend);
        let assistant = Assistant::new(calls.clone(), Duration::from_secs(1));

        assert!(assistant.extract_symptoms("   ").await.is_empty());
        assert_eq!(calls.call_count(), 0);
    }

    #[tokio::test]
    async fn unparseable_reply_yields_empty() {
        let assistant = assistant(MockBackend::replying("Keine Symptome gefunden."));
        assert!(assistant.extract_symptoms("müde").await.is_empty());
    }

    #[tokio::test]
    async fn knowledge_answer_falls_back_on_error() {
        let assistant = assistant(MockBackend::failing());
        let answer = assistant
            .knowledge_answer("Was ist eine Panikattacke?", "Name: Kilian", ChatMode::General)
            .await;
        assert_eq!(answer, prompts::KNOWLEDGE_ERROR);
    }

    #[tokio::test]
    async fn unavailable_backend_uses_unavailable_copy() {
        let assistant = Assistant::new(
            Arc::new(GeminiBackend::new(None)),
            Duration::from_secs(1),
        );
        let answer = assistant
            .knowledge_answer("Frage", "", ChatMode::QuickHelp)
            .await;
        assert_eq!(answer, prompts::KNOWLEDGE_UNAVAILABLE);

        let emergency = assistant.emergency_response("", None).await;
        assert_eq!(emergency, prompts::EMERGENCY_UNAVAILABLE);
    }
}
