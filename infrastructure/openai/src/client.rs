use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Shared OpenAI HTTP client configuration.
#[derive(Clone)]
pub struct OpenAIClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
}

impl OpenAIClient {
    /// `timeout` bounds every request made through this client.
    pub fn new(api_key: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    pub fn responses_url(&self) -> String {
        format!("{}/responses", self.base_url)
    }

    /// Posts a JSON body and returns the decoded JSON reply. `None` on
    /// transport errors, non-2xx statuses or undecodable bodies.
    pub async fn post_json(&self, url: String, body: &Value) -> Option<Value> {
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .header("Authorization", self.auth_header())
            .json(body)
            .send()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "OpenAI request failed"))
            .ok()?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "OpenAI returned an error status");
            return None;
        }

        response.json::<Value>().await.ok()
    }
}

/// Text of the first `output_text` block of a Responses API reply.
pub fn responses_output_text(data: &Value) -> Option<&str> {
    data["output"]
        .as_array()
        .and_then(|outputs| outputs.iter().find(|o| o["type"] == "message"))
        .and_then(|msg| msg["content"].as_array())
        .and_then(|contents| contents.iter().find(|c| c["type"] == "output_text"))
        .and_then(|c| c["text"].as_str())
}

/// Message content of the first choice of a Chat Completions reply.
pub fn chat_message_content(data: &Value) -> Option<&str> {
    data["choices"]
        .as_array()
        .and_then(|choices| choices.first())
        .and_then(|choice| choice["message"]["content"].as_str())
}
