use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default Ollama endpoint, matching a stock local install.
const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Model selection for a single pipeline stage.
///
/// Passed explicitly into every invocation so two stages of the same run can
/// use different models and temperatures without any process-global state.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Model name (e.g., "gpt-oss:120b-cloud")
    pub model: String,
    /// Temperature (0-1, lower = more deterministic)
    pub temperature: f64,
}

impl ModelConfig {
    pub fn new(model: impl Into<String>, temperature: f64) -> Self {
        Self {
            model: model.into(),
            temperature,
        }
    }
}

/// A synchronous-request/response text completion service.
///
/// The pipeline only ever needs "one prompt in, one text out"; the trait seam
/// exists so tests can substitute stub clients and count invocations.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Send a single prompt and return the model's text response.
    async fn complete(&self, config: &ModelConfig, prompt: &str) -> Result<String>;
}

/// Configuration for the Ollama HTTP client
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Base URL of the Ollama server
    pub endpoint: String,
}

impl OllamaConfig {
    /// Read the endpoint from OLLAMA_HOST, falling back to the local default.
    pub fn from_env() -> Self {
        let endpoint =
            std::env::var("OLLAMA_HOST").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self { endpoint }
    }

    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

/// Ollama API client
pub struct OllamaClient {
    client: Client,
    config: OllamaConfig,
}

impl OllamaClient {
    pub fn new(config: OllamaConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl ModelClient for OllamaClient {
    async fn complete(&self, config: &ModelConfig, prompt: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.config.endpoint);

        let request = OllamaRequest {
            model: config.model.as_str(),
            prompt,
            stream: false,
            options: OllamaOptions {
                temperature: config.temperature,
            },
        };

        debug!(
            "Sending request to {}: model={}, prompt_chars={}",
            url,
            config.model,
            prompt.chars().count()
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to Ollama API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Ollama API error: {} - {}", status, body);
        }

        let response: OllamaResponse = response
            .json()
            .await
            .context("Failed to parse Ollama API response")?;

        if !response.done {
            anyhow::bail!("Ollama returned an incomplete generation");
        }

        Ok(response.response)
    }
}

#[derive(Debug, Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    #[serde(default)]
    response: String,
    #[serde(default)]
    done: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ollama_config_default_endpoint() {
        let config = OllamaConfig::default();
        assert_eq!(config.endpoint, "http://localhost:11434");
    }

    #[test]
    fn test_model_config_new() {
        let config = ModelConfig::new("deepseek-v3.1:671b-cloud", 0.2);
        assert_eq!(config.model, "deepseek-v3.1:671b-cloud");
        assert_eq!(config.temperature, 0.2);
    }

    #[test]
    fn test_request_serialization() {
        let request = OllamaRequest {
            model: "gpt-oss:120b-cloud",
            prompt: "hello",
            stream: false,
            options: OllamaOptions { temperature: 0.3 },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-oss:120b-cloud");
        assert_eq!(json["stream"], false);
        assert_eq!(json["options"]["temperature"], 0.3);
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{"response": "Feature: Login", "done": true, "model": "x"}"#;
        let response: OllamaResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.response, "Feature: Login");
        assert!(response.done);
    }
}
