use actix_web::http::StatusCode;
use async_trait::async_trait;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default)]
pub struct HttpRequest {
    pub body: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status_code: StatusCode,
    pub body: Value,
}

#[async_trait]
pub trait Controller: 'static + Sync + Send {
    async fn handle(&self, request: HttpRequest) -> HttpResponse;
}
