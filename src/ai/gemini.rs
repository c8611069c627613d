use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::backend::{AiError, GenerativeBackend};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Backend for the Google Generative Language API.
pub struct GeminiBackend {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
}

impl GeminiBackend {
    /// `api_key: None` yields a backend that reports itself unavailable on
    /// every call; callers degrade with their fallback copy.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.filter(|key| !key.is_empty()),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl GenerativeBackend for GeminiBackend {
    fn id(&self) -> &str {
        &self.model
    }

    async fn generate(&self, system_instruction: &str, prompt: &str) -> Result<String, AiError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AiError::Unavailable("no API key configured".into()))?;

        let url = format!(
            "{API_BASE}/models/{}:generateContent?key={api_key}",
            self.model
        );
        let body = GenerateRequest {
            system_instruction: Content {
                parts: vec![Part {
                    text: system_instruction,
                }],
            },
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|err| AiError::NetworkError(err.to_string()))?;

        if !response.status().is_success() {
            return Err(AiError::RequestFailed(format!(
                "status {}",
                response.status()
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|err| AiError::ParseError(err.to_string()))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| AiError::ParseError("response contained no candidates".into()))?;

        Ok(text)
    }
}
