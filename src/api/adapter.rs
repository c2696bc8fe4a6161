use actix_web::HttpResponse as ActixResponse;
use serde_json::{Map, Value};

use crate::api::protocols::{Controller, HttpRequest};

pub async fn adapt_route<C>(controller: &C, body: Map<String, Value>) -> ActixResponse
where
    C: Controller + ?Sized,
{
    let response = controller.handle(HttpRequest { body }).await;

    ActixResponse::build(response.status_code).json(response.body)
}
