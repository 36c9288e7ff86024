//! Response envelopes shared by the REST handlers.

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

/// `{ success: true, data }` — the shape the dashboard unwraps everywhere.
#[derive(Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}

/// `{ success: true, message }` for mutations with nothing to return.
#[derive(Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            message: message.into(),
        })
    }
}

/// `{ success: true, message, data }` for mutations that echo the entity.
#[derive(Serialize)]
pub struct MessageData<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> MessageData<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Json<Self> {
        Json(Self {
            success: true,
            message: message.into(),
            data,
        })
    }
}

/// `{ success: false, error }` with a status code.
#[derive(Serialize)]
pub struct ApiError {
    pub success: bool,
    pub error: String,
}

impl ApiError {
    pub fn not_found(error: impl Into<String>) -> (StatusCode, Json<Self>) {
        (
            StatusCode::NOT_FOUND,
            Json(Self {
                success: false,
                error: error.into(),
            }),
        )
    }
}

/// One field-level validation failure.
#[derive(Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// `{ errors: [...] }` — the 400 body for request-shape violations.
#[derive(Serialize)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn bad_request(errors: Vec<FieldError>) -> (StatusCode, Json<Self>) {
        (StatusCode::BAD_REQUEST, Json(Self { errors }))
    }
}
