use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use actix_web::rt::task::spawn_blocking;
use async_trait::async_trait;

use crate::domain::error::{AppError, AppResult};
use crate::domain::services::encrypter::Encrypter;

#[derive(Default)]
pub struct Argon2Encrypter {
    argon2: Argon2<'static>,
}

impl Argon2Encrypter {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Encrypter for Argon2Encrypter {
    async fn encrypt(&self, plaintext: &str) -> AppResult<String> {
        let argon2 = self.argon2.clone();
        let plaintext = plaintext.to_owned();

        // CPU bound, runs on the blocking pool
        let hash = spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(plaintext.as_bytes(), &salt)
                .map(|hash| hash.to_string())
        })
        .await
        .map_err(|err| AppError::InternalError().trace(&err.to_string()))??;

        Ok(hash)
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;

    pub struct EncrypterStub(pub &'static str);

    #[async_trait]
    impl Encrypter for EncrypterStub {
        async fn encrypt(&self, _: &str) -> AppResult<String> {
            Ok(self.0.to_string())
        }
    }

    pub struct FailingEncrypter;

    #[async_trait]
    impl Encrypter for FailingEncrypter {
        async fn encrypt(&self, _: &str) -> AppResult<String> {
            Err(AppError::InternalError().trace("encrypter unavailable"))
        }
    }
}

#[cfg(test)]
mod tests {
    use argon2::password_hash::{PasswordHash, PasswordVerifier};

    use super::*;

    #[tokio::test]
    async fn test_encrypt_produces_verifiable_hash() {
        let encrypter = Argon2Encrypter::new();

        let hash = encrypter.encrypt("p4ssw0rd").await.unwrap();

        assert_ne!(hash, "p4ssw0rd");
        assert!(hash.starts_with("$argon2id$"));

        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(
            Argon2::default()
                .verify_password(b"p4ssw0rd", &parsed)
                .is_ok()
        );
        assert!(
            Argon2::default()
                .verify_password(b"wrongpassword", &parsed)
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_encrypt_leaves_executor_free() {
        let encrypter = Argon2Encrypter::new();
        let order = std::sync::Mutex::new(Vec::new());

        tokio::join!(
            async {
                encrypter.encrypt("p4ssw0rd").await.unwrap();
                order.lock().unwrap().push("hashed");
            },
            async {
                tokio::task::yield_now().await;
                order.lock().unwrap().push("polled");
            }
        );

        assert_eq!(*order.lock().unwrap(), vec!["polled", "hashed"]);
    }

    #[tokio::test]
    async fn test_encrypt_salts_every_call() {
        let encrypter = Argon2Encrypter::new();

        let first = encrypter.encrypt("p4ssw0rd").await.unwrap();
        let second = encrypter.encrypt("p4ssw0rd").await.unwrap();

        assert_ne!(first, second);
    }
}
