use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::api::dto::account::{AccountDTO, CreateAccountDTO};
use crate::api::error::ParamError;
use crate::api::helpers::{bad_request, ok, server_error};
use crate::api::protocols::{Controller, HttpRequest, HttpResponse};
use crate::domain::error::AppResult;
use crate::domain::services::account::AddAccount;
use crate::domain::services::email_validator::EmailValidator;

const REQUIRED_FIELDS: [&str; 3] = ["name", "email", "password"];

pub struct SignUpController {
    email_validator: Arc<dyn EmailValidator>,
    add_account: Arc<dyn AddAccount>,
}

impl SignUpController {
    pub fn new(email_validator: Arc<dyn EmailValidator>, add_account: Arc<dyn AddAccount>) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }

    async fn sign_up(&self, account: CreateAccountDTO) -> AppResult<HttpResponse> {
        if !self.email_validator.is_valid(&account.email)? {
            return Ok(bad_request(ParamError::InvalidParam("email")));
        }

        let created_account = self.add_account.add(account.into()).await?;

        Ok(ok(serde_json::to_value(AccountDTO::from(created_account))?))
    }
}

#[async_trait]
impl Controller for SignUpController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let account = match required_fields(&request.body) {
            Ok(account) => account,
            Err(error) => return bad_request(error),
        };

        match self.sign_up(account).await {
            Ok(response) => response,
            Err(error) => {
                tracing::error!(
                    code = error.code,
                    trace = error.trace.as_deref().unwrap_or_default(),
                    "signup failed"
                );
                server_error()
            }
        }
    }
}

fn required_fields(body: &Map<String, Value>) -> Result<CreateAccountDTO, ParamError> {
    let [name, email, password] = REQUIRED_FIELDS.map(|field| required_field(body, field));

    Ok(CreateAccountDTO {
        name: name?,
        email: email?,
        password: password?,
    })
}

fn required_field(body: &Map<String, Value>, field: &'static str) -> Result<String, ParamError> {
    match body.get(field) {
        None | Some(Value::Null) => Err(ParamError::MissingParam(field)),
        Some(Value::String(value)) if value.is_empty() => Err(ParamError::MissingParam(field)),
        Some(Value::String(value)) => Ok(value.to_owned()),
        Some(_) => Err(ParamError::InvalidParam(field)),
    }
}
