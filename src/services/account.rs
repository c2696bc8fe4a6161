use std::sync::Arc;

use crate::domain::{
    error::AppResult,
    models::account::{Account, CreateAccount},
    repositories::account::AccountRepository,
    services::{account::AddAccount, encrypter::Encrypter},
};

use async_trait::async_trait;

pub struct AddAccountImpl {
    encrypter: Arc<dyn Encrypter>,
    repository: Arc<dyn AccountRepository>,
}

impl AddAccountImpl {
    pub fn new(encrypter: Arc<dyn Encrypter>, repository: Arc<dyn AccountRepository>) -> Self {
        Self {
            encrypter,
            repository,
        }
    }
}

#[async_trait]
impl AddAccount for AddAccountImpl {
    #[tracing::instrument(name = "add_account", skip_all, fields(email = %new_account.email))]
    async fn add(&self, new_account: CreateAccount) -> AppResult<Account> {
        let password = self.encrypter.encrypt(&new_account.password).await?;

        let account = self
            .repository
            .add(CreateAccount {
                password,
                ..new_account
            })
            .await?;

        tracing::debug!(id = %account.id, "account stored");

        Ok(account)
    }
}

#[cfg(test)]
pub mod mock {
    use tokio::sync::Mutex;

    use super::*;
    use crate::domain::error::AppError;

    pub struct AddAccountSpy {
        pub calls: Mutex<Vec<CreateAccount>>,
        pub account: Account,
    }

    impl AddAccountSpy {
        pub fn new(account: Account) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                account,
            }
        }
    }

    #[async_trait]
    impl AddAccount for AddAccountSpy {
        async fn add(&self, new_account: CreateAccount) -> AppResult<Account> {
            self.calls.lock().await.push(new_account);
            Ok(self.account.clone())
        }
    }

    pub struct FailingAddAccount;

    #[async_trait]
    impl AddAccount for FailingAddAccount {
        async fn add(&self, _: CreateAccount) -> AppResult<Account> {
            Err(AppError::InternalError().trace("use-case failed"))
        }
    }
}
