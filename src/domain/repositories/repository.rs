use thiserror::Error;

pub type RepositoryResult<T> = core::result::Result<T, RepositoryError>;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error(transparent)]
    Database(#[from] surrealdb::Error),
    #[error("no record returned after creating `{0}`")]
    NotCreated(&'static str),
}
