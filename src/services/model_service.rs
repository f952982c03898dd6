use std::time::Duration;

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::json;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Opaque text-generation call. Replies are untrusted free text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelGateway: Send + Sync {
    async fn complete(&self, system_instruction: &str, user_turn: &str) -> AppResult<String>;
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletion {
    fn into_text(self) -> Option<String> {
        self.choices.into_iter().next().and_then(|c| c.message.content)
    }
}

pub struct OpenAiModelGateway {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
    timeout: Duration,
}

impl OpenAiModelGateway {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.openai_api_key.expose_secret())
            .with_api_base(&config.openai_api_base);

        Self {
            client: Client::with_config(openai_config),
            model: config.openai_model.clone(),
            temperature: config.openai_temperature,
            timeout: Duration::from_secs(config.openai_timeout_secs),
        }
    }

    fn request_body(&self, system_instruction: &str, user_turn: &str) -> serde_json::Value {
        json!({
            "model": self.model,
            "temperature": self.temperature,
            "messages": [
                { "role": "system", "content": system_instruction },
                { "role": "user", "content": user_turn }
            ]
        })
    }
}

#[async_trait]
impl ModelGateway for OpenAiModelGateway {
    async fn complete(&self, system_instruction: &str, user_turn: &str) -> AppResult<String> {
        let request = self.request_body(system_instruction, user_turn);

        log::debug!(
            "Sending chat completion to model {} ({} prompt chars)",
            self.model,
            system_instruction.len() + user_turn.len()
        );

        let completion: ChatCompletion =
            tokio::time::timeout(self.timeout, self.client.chat().create_byot(request))
                .await
                .map_err(|_| {
                    AppError::GenerationFailed(format!(
                        "Model call timed out after {}s",
                        self.timeout.as_secs()
                    ))
                })??;

        completion
            .into_text()
            .ok_or_else(|| AppError::GenerationFailed("Model returned no content".to_string()))
    }
}
