use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::models::account::{Account, CreateAccount};
use crate::domain::repositories::account::AccountRepository;
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::infrastructure::models::account::{SurrealAccount, SurrealAccountCreate};

pub struct AccountRepositoryImpl {
    db: Arc<Surreal<Client>>,
}

impl AccountRepositoryImpl {
    pub fn new(db: Arc<Surreal<Client>>) -> Self {
        Self { db }
    }
}

pub const ACCOUNTS: &str = "accounts";

#[async_trait]
impl AccountRepository for AccountRepositoryImpl {
    async fn add(&self, new_account: CreateAccount) -> RepositoryResult<Account> {
        let account: Option<SurrealAccount> = self
            .db
            .create(ACCOUNTS)
            .content(SurrealAccountCreate::from(new_account))
            .await?;

        account
            .map(Into::into)
            .ok_or(RepositoryError::NotCreated(ACCOUNTS))
    }
}
