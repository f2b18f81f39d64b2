use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while validating pricing inputs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PricingError {
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("check-out {check_out} must be after check-in {check_in}")]
    InvalidDateRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error("{field} must be a finite, non-negative amount (got {value})")]
    InvalidRate { field: &'static str, value: f64 },

    #[error("discount rate must be between 0 and 1 (got {0})")]
    InvalidDiscount(f64),

    #[error("unsupported currency locale '{0}'")]
    UnknownLocale(String),
}

/// Errors surfaced by the HTTP layer.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("room '{0}' not found")]
    RoomNotFound(String),

    #[error("backend request failed: {0}")]
    Backend(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Backend(err.to_string())
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::Backend(format!("invalid backend url: {}", err))
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::Pricing(_) => "invalid_input",
            ApiError::RoomNotFound(_) => "not_found",
            ApiError::Backend(_) => "bad_gateway",
            ApiError::Config(_) => "internal",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Pricing(_) => StatusCode::BAD_REQUEST,
            ApiError::RoomNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Backend(_) => StatusCode::BAD_GATEWAY,
            ApiError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Backend(msg) => log::error!("Backend error: {}", msg),
            ApiError::Config(err) => log::error!("Configuration error: {}", err),
            _ => {}
        }

        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.kind(),
            message: self.to_string(),
        })
    }
}
