use crate::config::AppSettings;
use crate::error::AppError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DASHSCOPE_BASE_URL: &str = "https://dashscope.aliyuncs.com";
const GENERATION_PATH: &str = "/api/v1/services/aigc/text-generation/generation";
const GENERATION_MODEL: &str = "qwen-turbo";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    model: &'a str,
    input: GenerationInput<'a>,
    parameters: GenerationParameters<'a>,
}

#[derive(Debug, Serialize)]
struct GenerationInput<'a> {
    prompt: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationParameters<'a> {
    result_format: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerationResponse {
    output: Option<GenerationOutput>,
}

#[derive(Debug, Deserialize)]
struct GenerationOutput {
    text: Option<String>,
}

/// Client for the DashScope text-generation API.
///
/// One outbound call per invocation, bounded by a 30-second timeout, no
/// retries. The API key is checked per call, not at construction.
#[derive(Debug, Clone)]
pub struct DashScopeClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    expose_details: bool,
}

impl DashScopeClient {
    pub fn new(app_settings: &AppSettings) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: app_settings.api_keys.dashscope_api_key.clone(),
            base_url: DASHSCOPE_BASE_URL.to_string(),
            expose_details: app_settings.app.is_development(),
        })
    }

    /// Point the client at a different host. Used by tests to target a mock
    /// server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Send one prompt and return the raw generated text.
    pub async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::Configuration("服务器未配置API密钥".to_string()))?;

        let url = format!("{}{}", self.base_url, GENERATION_PATH);
        let body = GenerationRequest {
            model: GENERATION_MODEL,
            input: GenerationInput { prompt },
            parameters: GenerationParameters {
                result_format: "text",
            },
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                self.upstream_error("AI服务调用失败", format!("DashScope request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(self.upstream_error(
                "AI服务调用失败",
                format!("DashScope API error ({}): {}", status, error_text),
            ));
        }

        let payload: GenerationResponse = response.json().await.map_err(|e| {
            self.upstream_error("AI返回格式异常", format!("Failed to read DashScope response: {}", e))
        })?;

        payload
            .output
            .and_then(|output| output.text)
            .ok_or_else(|| {
                self.upstream_error(
                    "AI返回格式异常",
                    "DashScope response missing output.text".to_string(),
                )
            })
    }

    fn upstream_error(&self, message: &str, details: String) -> AppError {
        log::error!("{}: {}", message, details);
        AppError::Upstream {
            message: message.to_string(),
            details: self.expose_details.then_some(details),
        }
    }
}
