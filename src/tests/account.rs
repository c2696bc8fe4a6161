use actix_web::http::StatusCode;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};
use rstest::*;
use serde::Deserialize;
use serde_json::json;

use crate::infrastructure::repositories::account::ACCOUNTS;
use crate::tests::{Error, TestContext, context};

use crate::app;
use actix_web::test;
use actix_web::test::TestRequest;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Account {
    id: String,
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct StoredAccount {
    name: String,
    email: String,
    password: String,
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_success_signup(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::post()
        .uri("/api/v1/signup")
        .set_json(json!({
                "name": "Oslan Caio",
                "email": "caio.aguiar2528@gmail.com",
                "password": "12345",
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));

    let acc: Account = test::read_body_json(res).await;

    assert!(!acc.id.is_empty());
    assert_eq!(acc.name, "Oslan Caio");
    assert_eq!(acc.email, "caio.aguiar2528@gmail.com");
    assert_ne!(acc.password, "12345");

    let stored: Option<StoredAccount> = context
        .db
        .connection
        .select((ACCOUNTS, acc.id.as_str()))
        .await
        .unwrap();
    let stored = stored.unwrap();

    assert_eq!(stored.name, acc.name);
    assert_eq!(stored.email, acc.email);
    assert_eq!(stored.password, acc.password);

    let hash = PasswordHash::new(&stored.password).unwrap();
    assert!(Argon2::default().verify_password(b"12345", &hash).is_ok());

    let _ = context.db.container.stop().await;
}

#[rstest]
#[case::missing_name(json!({ "email": "caio.aguiar2528@gmail.com", "password": "12345" }), "Missing param: name")]
#[case::missing_password(json!({ "name": "Oslan Caio", "email": "caio.aguiar2528@gmail.com" }), "Missing param: password")]
#[case::invalid_email(json!({ "name": "Oslan Caio", "email": "caio.aguiar228gmail.com", "password": "12345" }), "Invalid param: email")]
#[awt]
#[actix_web::test]
async fn test_invalid_signup(
    #[future] context: TestContext,
    #[case] payload: serde_json::Value,
    #[case] message: &str,
) {
    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::post()
        .uri("/api/v1/signup")
        .set_json(payload)
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let err: Error = test::read_body_json(res).await;
    assert_eq!(
        err,
        Error {
            code: 400,
            message: message.to_string()
        }
    );

    let stored: Vec<StoredAccount> = context.db.connection.select(ACCOUNTS).await.unwrap();
    assert!(stored.is_empty());

    let _ = context.db.container.stop().await;
}
