use crate::domain::models::account::{Account, CreateAccount};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountDTO {
    #[schema(examples("k3v9x0qz2m8yq4w1lj7a"))]
    id: String,
    #[schema(examples("your_name"))]
    name: String,
    #[schema(examples("your@email.com"))]
    email: String,
    #[schema(examples("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA"))]
    password: String,
}

#[derive(Debug, PartialEq, Eq, ToSchema)]
pub struct CreateAccountDTO {
    #[schema(examples("your_name"))]
    pub name: String,

    #[schema(examples("your@email.com"))]
    pub email: String,

    #[schema(examples("stR0ngP4ssw0rd!"))]
    pub password: String,
}

impl From<Account> for AccountDTO {
    fn from(val: Account) -> Self {
        AccountDTO {
            id: val.id,
            name: val.name,
            email: val.email,
            password: val.password,
        }
    }
}

impl From<CreateAccountDTO> for CreateAccount {
    fn from(create_account: CreateAccountDTO) -> Self {
        CreateAccount {
            name: create_account.name,
            email: create_account.email,
            password: create_account.password,
        }
    }
}
