use thiserror::Error;

use crate::domain::error::AppError;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParamError {
    #[error("Missing param: {0}")]
    MissingParam(&'static str),
    #[error("Invalid param: {0}")]
    InvalidParam(&'static str),
}

impl From<ParamError> for AppError {
    fn from(error: ParamError) -> Self {
        AppError::BadRequest(error)
    }
}
