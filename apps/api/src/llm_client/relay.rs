//! Relay transport: the credential travels to a relay endpoint, which makes the provider call.
//!
//! Wire contract (also served by this API at `POST /api/v1/generate-rpm`):
//! request `{apiKey, payload: {prompt, responseSchema}}`,
//! success `{success: true, data: "<raw model text>"}`,
//! failure `{success: false, message, detail}`.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::llm_client::{strip_json_fences, ContentProvider, LlmError};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayPayload {
    pub prompt: String,
    pub response_schema: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RelayRequest<'a> {
    api_key: &'a str,
    payload: RelayPayloadRef<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RelayPayloadRef<'a> {
    prompt: &'a str,
    response_schema: &'a Value,
}

#[derive(Debug, Deserialize)]
pub struct RelayResponse {
    #[serde(default)]
    pub success: bool,
    pub data: Option<String>,
    pub message: Option<String>,
    pub detail: Option<String>,
    pub error: Option<String>,
}

impl RelayResponse {
    fn failure_message(&self) -> String {
        let head = self
            .message
            .as_deref()
            .or(self.error.as_deref())
            .unwrap_or("Failed generate RPM");
        match &self.detail {
            Some(detail) => format!("{head}: {detail}"),
            None => head.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct RelayProvider {
    client: Client,
    endpoint: String,
}

impl RelayProvider {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl ContentProvider for RelayProvider {
    async fn complete_json(
        &self,
        api_key: &str,
        prompt: &str,
        schema: &Value,
    ) -> Result<String, LlmError> {
        let body = RelayRequest {
            api_key,
            payload: RelayPayloadRef {
                prompt,
                response_schema: schema,
            },
        };

        let response = self.client.post(&self.endpoint).json(&body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        let parsed: RelayResponse = serde_json::from_str(&text).map_err(|_| LlmError::Api {
            status: status.as_u16(),
            message: text.clone(),
        })?;

        if !status.is_success() || !parsed.success {
            return Err(LlmError::Relay(parsed.failure_message()));
        }

        let data = parsed.data.ok_or(LlmError::EmptyContent)?;
        Ok(strip_json_fences(&data).to_string())
    }

    fn backend(&self) -> &'static str {
        "relay"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_request_shape() {
        let schema = serde_json::json!({"type": "OBJECT"});
        let body = RelayRequest {
            api_key: "k",
            payload: RelayPayloadRef {
                prompt: "p",
                response_schema: &schema,
            },
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["apiKey"], "k");
        assert_eq!(value["payload"]["prompt"], "p");
        assert_eq!(value["payload"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn test_failure_message_includes_detail() {
        let response: RelayResponse = serde_json::from_str(
            r#"{"success": false, "message": "Gemini API failed", "detail": "quota exceeded"}"#,
        )
        .unwrap();
        assert_eq!(response.failure_message(), "Gemini API failed: quota exceeded");
    }

    #[test]
    fn test_failure_message_falls_back_to_error_field() {
        let response: RelayResponse =
            serde_json::from_str(r#"{"success": false, "error": "API key is required"}"#).unwrap();
        assert_eq!(response.failure_message(), "API key is required");
    }
}
