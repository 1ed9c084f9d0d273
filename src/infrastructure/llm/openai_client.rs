use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, LlmClientError};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::config::LlmSettings;

const AUTH_ERROR_CODES: [&str; 3] = [
    "invalid_api_key",
    "authentication_error",
    "invalid_authentication",
];

/// Chat-completions client for OpenAI-compatible providers. One request per
/// call; failures are returned to the caller without retrying.
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Option<Vec<ChatChoice>>,
    error: Option<ProviderErrorBody>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ProviderErrorBody {
    message: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    code: Option<serde_json::Value>,
}

impl ProviderErrorBody {
    fn is_authentication_error(&self) -> bool {
        let code = self.code.as_ref().and_then(|c| c.as_str());
        [self.kind.as_deref(), code]
            .into_iter()
            .flatten()
            .any(|value| AUTH_ERROR_CODES.contains(&value))
    }
}

impl OpenAiClient {
    pub fn new(settings: &LlmSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            model: settings.chat_model.clone(),
            temperature: settings.temperature,
        })
    }

    fn classify_failure(status: StatusCode, body: Option<ProviderErrorBody>) -> LlmClientError {
        let message = body
            .as_ref()
            .and_then(|b| b.message.clone())
            .unwrap_or_else(|| format!("HTTP {status}"));

        let auth_rejected = matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
            || body.as_ref().is_some_and(|b| b.is_authentication_error());

        if auth_rejected {
            LlmClientError::AuthenticationFailed(message)
        } else {
            LlmClientError::ProviderError(message)
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    #[tracing::instrument(skip(self, prompt), fields(model = %self.model))]
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError> {
        tracing::debug!(prompt = %sanitize_prompt(prompt), "Sending chat completion");

        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Chat completion request failed");
                LlmClientError::NetworkFailed(e.to_string())
            })?;

        let status = response.status();
        let raw_bytes = response
            .bytes()
            .await
            .map_err(|e| LlmClientError::NetworkFailed(e.to_string()))?;

        let parsed = serde_json::from_slice::<ChatCompletionResponse>(&raw_bytes);

        let completion = match parsed {
            Ok(completion) if completion.error.is_some() || !status.is_success() => {
                let error = Self::classify_failure(status, completion.error);
                tracing::error!(status = status.as_u16(), error = %error, "Provider rejected request");
                return Err(error);
            }
            Ok(completion) => completion,
            Err(_) if !status.is_success() => {
                let error = Self::classify_failure(status, None);
                tracing::error!(status = status.as_u16(), error = %error, "Provider rejected request");
                return Err(error);
            }
            Err(e) => {
                tracing::error!(
                    raw_response = %String::from_utf8_lossy(&raw_bytes),
                    "Failed to parse provider JSON"
                );
                return Err(LlmClientError::UnexpectedResponseShape(e.to_string()));
            }
        };

        completion
            .choices
            .and_then(|choices| choices.into_iter().next())
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .ok_or_else(|| {
                LlmClientError::UnexpectedResponseShape(
                    "missing choices[0].message.content".to_string(),
                )
            })
    }
}
