use actix_web::{HttpResponse, error::ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Validation(String),
    Configuration(String),
    Upstream {
        message: String,
        // Populated only in the development environment; production responses
        // carry the public message alone.
        details: Option<String>,
    },
    Internal(String),
}

#[derive(Serialize, Deserialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(e) => write!(f, "Validation error: {}", e),
            AppError::Configuration(e) => write!(f, "Configuration error: {}", e),
            AppError::Upstream { message, details } => match details {
                Some(details) => write!(f, "Upstream error: {} ({})", message, details),
                None => write!(f, "Upstream error: {}", message),
            },
            AppError::Internal(e) => write!(f, "Internal error: {}", e),
        }
    }
}

impl StdError for AppError {}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let error_response = match self {
            AppError::Validation(e)
            | AppError::Configuration(e)
            | AppError::Internal(e) => ErrorResponse {
                error: e.clone(),
                details: None,
            },
            AppError::Upstream { message, details } => ErrorResponse {
                error: message.clone(),
                details: details.clone(),
            },
        };

        HttpResponse::build(self.status_code()).json(error_response)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Define AppResult type alias for Result<T, AppError>
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let err = AppError::Validation("主题不能为空".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn configuration_and_upstream_map_to_internal_server_error() {
        let config = AppError::Configuration("服务器未配置API密钥".to_string());
        let upstream = AppError::Upstream {
            message: "AI服务调用失败".to_string(),
            details: None,
        };
        assert_eq!(config.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(upstream.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_body_omits_details_when_absent() {
        let body = serde_json::to_value(ErrorResponse {
            error: "AI服务调用失败".to_string(),
            details: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "error": "AI服务调用失败" }));
    }

    #[test]
    fn error_body_carries_details_when_present() {
        let body = serde_json::to_value(ErrorResponse {
            error: "AI服务调用失败".to_string(),
            details: Some("connection refused".to_string()),
        })
        .unwrap();
        assert_eq!(body["details"], "connection refused");
    }
}
