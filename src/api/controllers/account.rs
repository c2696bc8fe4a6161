use std::sync::Arc;

use crate::api::adapter::adapt_route;
use crate::api::controllers::signup::SignUpController;
use crate::api::middlewares::json::Json;
use crate::domain::error::AppError;

use crate::api::dto::account::{AccountDTO, CreateAccountDTO};

use actix_web::{HttpResponse, post, web::Data as State};
use serde_json::{Map, Value};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(signup);
}

#[utoipa::path(
    responses(
        (status = 200, body = AccountDTO, description = "Account Created"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = CreateAccountDTO,
    tag = "Account",
)]
#[post("/signup")]
pub async fn signup(
    payload: Json<Map<String, Value>>,
    controller: State<Arc<SignUpController>>,
) -> HttpResponse {
    adapt_route(controller.get_ref().as_ref(), payload.into_inner()).await
}
