use validator::ValidateEmail;

use crate::domain::error::AppResult;
use crate::domain::services::email_validator::EmailValidator;

const MAX_EMAIL_LENGTH: usize = 255;

#[derive(Default)]
pub struct EmailValidatorImpl;

impl EmailValidatorImpl {
    pub fn new() -> Self {
        Self
    }
}

impl EmailValidator for EmailValidatorImpl {
    fn is_valid(&self, email: &str) -> AppResult<bool> {
        Ok(email.len() <= MAX_EMAIL_LENGTH && email.validate_email())
    }
}
