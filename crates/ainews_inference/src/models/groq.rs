use std::fmt;

use ainews_core::{Error, InferenceModel, Result, SearchHit};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{limit_sentences, SUMMARY_SENTENCES};
use crate::Config;

const SYSTEM_PROMPT: &str = "You are an AI News Curator. You write concise, accurate \
summaries of AI news for a team chat channel. Answer with the summary only.";

/// Reply the model gives when a hit is not a concrete news item.
const NO_SUMMARY: &str = "NONE";

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    #[serde(default)]
    content: Option<String>,
}

/// Chat model served through Groq's OpenAI-compatible API.
pub struct GroqModel {
    client: Client,
    api_key: String,
    model_name: String,
    base_url: String,
}

impl GroqModel {
    const BASE_URL: &'static str = "https://api.groq.com/openai/v1";

    pub fn new(config: Config) -> Result<Self> {
        let model_name = config.model_name().to_string();
        Ok(Self {
            client: Client::new(),
            // An empty key is sent as-is; Groq answers 401.
            api_key: config.api_key.unwrap_or_default(),
            model_name,
            base_url: config
                .base_url
                .unwrap_or_else(|| Self::BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        })
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    fn build_request(&self, hit: &SearchHit) -> ChatRequest {
        let prompt = format!(
            "Summarize the following news item in 1-2 sentences capturing the key points. \
If it is not a concrete piece of AI news, reply with {}.\n\n\
Headline: {}\nSource: {}\nURL: {}\nExcerpt: {}\n\nSummary:",
            NO_SUMMARY, hit.title, hit.source, hit.url, hit.excerpt
        );

        ChatRequest {
            model: self.model_name.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt,
                },
            ],
            temperature: 0.2,
        }
    }
}

impl fmt::Debug for GroqModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroqModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("model_name", &self.model_name)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Trims quoting the model sometimes adds and maps the refusal marker to an
/// empty summary.
fn clean_summary(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches(|c: char| c == '"' || c == '\'').trim();
    if trimmed.eq_ignore_ascii_case(NO_SUMMARY) || trimmed.eq_ignore_ascii_case("NONE.") {
        return String::new();
    }
    limit_sentences(trimmed, SUMMARY_SENTENCES)
}

#[async_trait]
impl InferenceModel for GroqModel {
    fn name(&self) -> &str {
        "Groq"
    }

    async fn summarize_hit(&self, hit: &SearchHit) -> Result<String> {
        let request = self.build_request(hit);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatResponse>()
            .await?;

        let content = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::Inference("Model returned no choices".to_string()))?
            .message
            .content
            .unwrap_or_default();

        let summary = clean_summary(&content);
        tracing::debug!("Generated summary for {}: {}", hit.url, summary);
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn hit() -> SearchHit {
        SearchHit {
            title: "Lab releases model".to_string(),
            url: "https://example.com/model".to_string(),
            excerpt: "A new open model was released today.".to_string(),
            source: "Example".to_string(),
            published_at: Some(Utc::now()),
        }
    }

    #[test]
    fn test_request_uses_configured_model() {
        let model = GroqModel::new(Config {
            api_key: Some("gsk-test".to_string()),
            model_name: Some("llama-test".to_string()),
            base_url: Some("http://localhost:1234/v1/".to_string()),
        })
        .unwrap();

        assert_eq!(model.model_name(), "llama-test");
        assert_eq!(model.base_url, "http://localhost:1234/v1");

        let request = model.build_request(&hit());
        assert_eq!(request.model, "llama-test");
        assert_eq!(request.messages.len(), 2);
        assert!(request.messages[1].content.contains("Lab releases model"));
        assert!(request.messages[1].content.contains("https://example.com/model"));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let model = GroqModel::new(Config {
            api_key: Some("gsk-secret".to_string()),
            ..Default::default()
        })
        .unwrap();
        let debug = format!("{:?}", model);
        assert!(!debug.contains("gsk-secret"));
        assert!(debug.contains(ainews_core::config::MODEL_ID));
    }

    #[test]
    fn test_clean_summary() {
        assert_eq!(clean_summary("  \"Lab ships a model. It is fast. It is open.\" "), "Lab ships a model. It is fast.");
        assert_eq!(clean_summary("NONE"), "");
        assert_eq!(clean_summary("none."), "");
        assert_eq!(clean_summary("   "), "");
    }

    #[test]
    fn test_parse_chat_response() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"Summary."}}]}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.choices[0].message.content.as_deref(), Some("Summary."));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_fails() {
        let model = GroqModel::new(Config {
            base_url: Some("http://127.0.0.1:1/v1".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert!(matches!(model.summarize_hit(&hit()).await, Err(Error::Http(_))));
    }
}
