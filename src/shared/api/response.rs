// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// Outcome reported in every response body.
/// `fail` is a client error, `error` is a server error.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Fail,
    Error,
}

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            status: ResponseStatus::Success,
            message: None,
            data: Some(data),
        })
    }
}

impl ApiResponse<()> {
    pub fn message(status: StatusCode, outcome: ResponseStatus, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            status: outcome,
            message: Some(message.to_string()),
            data: None,
        })
    }

    pub fn ok_message(message: &str) -> HttpResponse {
        Self::message(StatusCode::OK, ResponseStatus::Success, message)
    }

    pub fn created(message: &str) -> HttpResponse {
        Self::message(StatusCode::CREATED, ResponseStatus::Success, message)
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::message(StatusCode::BAD_REQUEST, ResponseStatus::Fail, message)
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::message(StatusCode::NOT_FOUND, ResponseStatus::Fail, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::message(
            StatusCode::INTERNAL_SERVER_ERROR,
            ResponseStatus::Error,
            "An unexpected error occurred.",
        )
    }
}
