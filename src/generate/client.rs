// src/generate/client.rs

use anyhow::Context;
use reqwest::{Client, header};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::catalog::Course;
use crate::config::GenerateSection;
use crate::errors::{Result, SkilltreeError};

/// Environment variable holding the generation API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Accepted fallback variable name.
pub const API_KEY_ENV_FALLBACK: &str = "API_KEY";

/// HTTP client for the `generateContent` endpoint.
///
/// The base URL is configurable so tests can point the client at a local
/// mock server instead of the public endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
    ) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .context("building HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            model: model.into(),
            api_key,
        })
    }

    /// Build a client from the `[generate]` settings, reading the API key
    /// from the environment.
    pub fn from_config(section: &GenerateSection) -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .or_else(|_| std::env::var(API_KEY_ENV_FALLBACK))
            .ok();
        Self::new(section.base_url.clone(), section.model.clone(), api_key)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Ask the model for a curriculum on `topic`.
    ///
    /// Refuses before any network traffic when no API key is configured.
    /// A response without candidate text yields an empty list, which
    /// callers treat as "nothing to install". Transport failures,
    /// non-success statuses, and payloads that do not parse as a course
    /// array all come back as `GenerationError`.
    pub async fn generate(&self, topic: &str) -> Result<Vec<Course>> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(SkilltreeError::GenerationError(format!(
                "API key is missing, set {API_KEY_ENV}"
            )));
        };

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(topic),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: response_schema(),
            },
        };

        debug!(model = %self.model, topic = %topic, "sending generation request");

        let response = self
            .client
            .post(self.generate_url())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| SkilltreeError::GenerationError(format!("request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SkilltreeError::GenerationError(format!(
                "HTTP {status}: {body}"
            )));
        }

        let payload: GenerateResponse = response.json().await.map_err(|err| {
            SkilltreeError::GenerationError(format!("invalid response body: {err}"))
        })?;

        let Some(text) = payload.candidate_text() else {
            debug!("generation response had no candidate text");
            return Ok(Vec::new());
        };

        let courses: Vec<Course> = serde_json::from_str(&text).map_err(|err| {
            SkilltreeError::GenerationError(format!("could not parse generated courses: {err}"))
        })?;

        debug!(courses = courses.len(), "generation response parsed");
        Ok(courses)
    }
}

fn build_prompt(topic: &str) -> String {
    format!(
        "Create a detailed curriculum pathway for the topic: \"{topic}\".\n\
         Generate approximately 10 to 15 courses.\n\
         Use standard course codes (e.g., CS101, ART200).\n\
         Ensure there is a logical progression with prerequisites (some courses must be \
         prerequisites for others to create a tree structure).\n\
         Return a raw JSON array."
    )
}

/// Schema constraining the model to an array of course objects with `id`,
/// `title`, and `prerequisites` required.
fn response_schema() -> serde_json::Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "STRING", "description": "Course Code, e.g. CS101" },
                "title": { "type": "STRING", "description": "Course Title" },
                "prerequisites": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "List of prerequisite course IDs"
                },
                "category": {
                    "type": "STRING",
                    "description": "General category, e.g. 'Core', 'Advanced'"
                },
                "description": {
                    "type": "STRING",
                    "description": "Short description of the course"
                }
            },
            "required": ["id", "title", "prerequisites"]
        }
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate, if any.
    fn candidate_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}
