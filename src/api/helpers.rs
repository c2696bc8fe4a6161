use actix_web::http::StatusCode;
use serde_json::{Value, json};

use crate::api::error::ParamError;
use crate::api::protocols::HttpResponse;
use crate::domain::error::AppError;

fn envelope(error: AppError) -> Value {
    json!({ "message": error.message, "code": error.code })
}

pub fn bad_request(error: ParamError) -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::BAD_REQUEST,
        body: envelope(error.into()),
    }
}

pub fn server_error() -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::INTERNAL_SERVER_ERROR,
        body: envelope(AppError::InternalError()),
    }
}

pub fn ok(body: Value) -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::OK,
        body,
    }
}
