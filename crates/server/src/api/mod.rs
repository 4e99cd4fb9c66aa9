mod location;
mod search;
mod stops;

pub use location::*;
pub use search::*;
pub use stops::*;

use crate::dto::ErrorDto;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::collections::HashMap;
use tracing::warn;

pub const BUS_NOT_FOUND: &str = "Bus not found";

/// Failure returned by a handler, rendered as `{ "error": message }`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        let message = message.into();
        warn!("Bad request: {message}");
        Self {
            status: StatusCode::BAD_REQUEST,
            message,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorDto {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

fn required<'a>(params: &'a HashMap<String, String>, key: &str) -> Result<&'a str, ApiError> {
    params
        .get(key)
        .map(|value| value.as_str())
        .ok_or_else(|| ApiError::bad_request(format!("Missing parameter: {key}")))
}

/// Parses a bus id. Integers outside the id range are valid input that
/// simply matches no bus, so they come back as `Ok(None)`.
fn parse_bus_id(value: &str) -> Result<Option<u32>, ApiError> {
    let trimmed = value.trim();
    match trimmed.parse::<i64>() {
        Ok(id) => Ok(u32::try_from(id).ok()),
        Err(_) if is_integer(trimmed) => Ok(None),
        Err(_) => Err(ApiError::bad_request(format!("Invalid bus_id: {value}"))),
    }
}

fn is_integer(value: &str) -> bool {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
