use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;

use crate::config::constants::timeout_duration_secs;
use crate::enums::ai_provider_error::AiProviderError;
use crate::services::rate_limiter::ApiRateLimiter;
use crate::structs::ai::openai::openai_message::OpenAIMessage;
use crate::structs::ai::openai::openai_request::OpenAIRequest;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::ai_provider::AiProvider;

#[derive(Clone)]
pub struct OpenAIProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    max_tokens: u32,
    temperature: Option<f32>,
    rate_limiter: Arc<ApiRateLimiter>,
}

impl OpenAIProvider {
    pub fn new(api_key: String, config: &AiConfig, rate_limiter: Arc<ApiRateLimiter>) -> Result<Self, AiProviderError> {
        let client = Client::builder()
            .timeout(timeout_duration_secs(config.timeout_secs))
            .build()
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))?;

        Ok(Self {
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            rate_limiter,
        })
    }

    fn get_openai_messages(&self, system_prompt: String, user_prompts: Vec<String>) -> Vec<OpenAIMessage> {
        let mut messages = Vec::new();

        if !system_prompt.is_empty() {
            messages.push(OpenAIMessage {
                role: "system".to_string(),
                content: system_prompt,
            });
        }

        for prompt in user_prompts {
            messages.push(OpenAIMessage {
                role: "user".to_string(),
                content: prompt,
            });
        }

        messages
    }

    fn get_request(&self, system_prompt: String, user_prompts: Vec<String>) -> OpenAIRequest {
        let messages = self.get_openai_messages(system_prompt, user_prompts);

        OpenAIRequest {
            model: self.model.clone(),
            messages,
            max_tokens: Some(self.max_tokens),
            temperature: self.temperature,
            stream: false,
        }
    }

    async fn make_request(&self, url: String, request_body: OpenAIRequest) -> Result<reqwest::Response, AiProviderError> {
        log::debug!("📦 Request model: {}", request_body.model);

        self.client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))
    }

    pub fn extract_content(json: &serde_json::Value) -> Result<String, AiProviderError> {
        json
            .get("choices")
            .and_then(|choices| choices.as_array())
            .and_then(|choices| choices.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .map(String::from)
            .ok_or_else(|| AiProviderError::SerializationError("No content in response".to_string()))
    }
}

#[async_trait]
impl AiProvider for OpenAIProvider {
    async fn chat(&self, system_prompt: String, user_prompts: Vec<String>) -> Result<String, AiProviderError> {
        self.rate_limiter.acquire().await;

        let url = format!("{}/chat/completions", self.base_url);
        let request_body = self.get_request(system_prompt, user_prompts);

        let response = self.make_request(url, request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(match status.as_u16() {
                401 => AiProviderError::AuthenticationError(error_text),
                429 => AiProviderError::ApiError(format!("Rate limit exceeded: {}", error_text)),
                _ => AiProviderError::ApiError(format!("HTTP {}: {}", status, error_text)),
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiProviderError::SerializationError(e.to_string()))?;

        Self::extract_content(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn provider() -> OpenAIProvider {
        provider_for("gpt-4o-mini")
    }

    fn provider_for(model: &str) -> OpenAIProvider {
        let config = AiConfig {
            base_url: "https://llm.example.com/v1/".to_string(),
            model: model.to_string(),
            temperature: Some(0.2),
            ..AiConfig::default()
        };
        OpenAIProvider::new("sk-test".to_string(), &config, Arc::new(ApiRateLimiter::default())).unwrap()
    }

    #[test]
    fn builds_request_from_config() {
        let provider = provider();
        let request = provider.get_request(String::new(), vec!["review this".to_string()]);

        assert_eq!(provider.base_url, "https://llm.example.com/v1");
        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.max_tokens, Some(500));
        assert_eq!(request.temperature, Some(0.2));
        assert!(!request.stream);
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, "user");
    }

    #[test]
    fn system_prompt_leads_when_present() {
        let request = provider_for("gpt-4o")
            .get_request("be terse".to_string(), vec!["a".to_string(), "b".to_string()]);

        let roles: Vec<&str> = request.messages.iter().map(|m| m.role.as_str()).collect();
        assert_eq!(roles, vec!["system", "user", "user"]);
        assert_eq!(request.model, "gpt-4o");
    }

    #[test]
    fn extracts_first_choice_content() {
        let body = json!({ "choices": [{ "message": { "role": "assistant", "content": "{\"good\":[]}" } }] });
        assert_eq!(OpenAIProvider::extract_content(&body).unwrap(), "{\"good\":[]}");

        let empty = json!({ "choices": [] });
        assert!(matches!(OpenAIProvider::extract_content(&empty), Err(AiProviderError::SerializationError(_))));
    }
}
