use std::fmt;

use ainews_core::{DistributionResult, Error, Messenger, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct PostMessageRequest<'a> {
    channel: &'a str,
    text: &'a str,
    mrkdwn: bool,
    unfurl_links: bool,
}

#[derive(Debug, Deserialize)]
struct PostMessageResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    channel: Option<String>,
    #[serde(default)]
    ts: Option<String>,
}

impl PostMessageResponse {
    /// Slack reports failures in the body with HTTP 200.
    fn into_result(self, requested_channel: &str) -> Result<DistributionResult> {
        if !self.ok {
            return Err(Error::Distribution(
                self.error.unwrap_or_else(|| "unknown_error".to_string()),
            ));
        }
        Ok(DistributionResult {
            channel: self.channel.unwrap_or_else(|| requested_channel.to_string()),
            timestamp: self.ts,
        })
    }
}

/// Posts messages through Slack's Web API.
pub struct SlackClient {
    client: Client,
    token: String,
    base_url: String,
}

impl SlackClient {
    const BASE_URL: &'static str = "https://slack.com/api";

    pub fn new(token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            // Sent even when empty; Slack answers `not_authed`.
            token: token.unwrap_or_default(),
            base_url: Self::BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

impl fmt::Debug for SlackClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlackClient")
            .field("client", &"<reqwest::Client>")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl Messenger for SlackClient {
    fn name(&self) -> &str {
        "Slack"
    }

    async fn send_message(&self, channel: &str, text: &str) -> Result<DistributionResult> {
        let request = PostMessageRequest {
            channel,
            text,
            mrkdwn: true,
            unfurl_links: false,
        };

        let response = self
            .client
            .post(format!("{}/chat.postMessage", self.base_url))
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<PostMessageResponse>()
            .await?;

        tracing::debug!("Slack replied ok={} for channel {}", response.ok, channel);
        response.into_result(channel)
    }
}
