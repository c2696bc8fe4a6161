use async_trait::async_trait;

use crate::domain::error::AppResult;

/// Outputs are not required to be deterministic: two calls with the same
/// plaintext may return different values.
#[async_trait]
pub trait Encrypter: 'static + Sync + Send {
    async fn encrypt(&self, plaintext: &str) -> AppResult<String>;
}
