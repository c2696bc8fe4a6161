use utoipa_actix_web::{scope, service_config::ServiceConfig};

pub mod adapter;
pub mod controllers;
mod dto;
pub mod error;
pub mod helpers;
mod middlewares;
pub mod protocols;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(scope("/api/v1").configure(controllers::account::routes));
}
