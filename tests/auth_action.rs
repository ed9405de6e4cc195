//! Sign-in action behavior: friendly mapping vs rethrow.

use billet::prelude::*;
use anyhow::anyhow;

fn context_with(provider: Arc<dyn AuthProvider>) -> ActionContext {
    ActionContext::new(
        Arc::new(InMemoryStore::new()),
        Arc::new(InMemoryCache::new()),
        provider,
    )
}

fn login_form(email: &str, password: &str) -> FormData {
    FormData::new().with("email", email).with("password", password)
}

#[tokio::test]
async fn correct_credentials_sign_in() {
    let ctx = context_with(Arc::new(
        StaticAuthProvider::new().with_user("user@nextmail.com", "123456"),
    ));

    let outcome = authenticate(&ctx, &login_form("user@nextmail.com", "123456"))
        .await
        .unwrap();

    assert_eq!(outcome, ActionOutcome::success("Logged in."));
}

#[tokio::test]
async fn wrong_password_returns_the_literal_message() {
    let ctx = context_with(Arc::new(
        StaticAuthProvider::new().with_user("user@nextmail.com", "123456"),
    ));

    let outcome = authenticate(&ctx, &login_form("user@nextmail.com", "hunter2"))
        .await
        .unwrap();

    assert_eq!(outcome, ActionOutcome::failure("Invalid credentials."));
}

struct BrokenProvider;

#[async_trait]
impl AuthProvider for BrokenProvider {
    async fn sign_in(&self, _credentials: &Credentials) -> Result<(), AuthError> {
        Err(AuthError::Unexpected(anyhow!("database is unreachable")))
    }
}

#[tokio::test]
async fn non_auth_failure_propagates_instead_of_returning_a_string() {
    let ctx = context_with(Arc::new(BrokenProvider));

    let result = authenticate(&ctx, &login_form("a@x.com", "pw")).await;

    let err = result.expect_err("unexpected failures must be rethrown");
    assert_eq!(err.to_string(), "database is unreachable");
}

struct LockedOutProvider;

#[async_trait]
impl AuthProvider for LockedOutProvider {
    async fn sign_in(&self, _credentials: &Credentials) -> Result<(), AuthError> {
        Err(AuthError::Provider("account locked".to_string()))
    }
}

#[tokio::test]
async fn other_auth_errors_return_generic_message() {
    let ctx = context_with(Arc::new(LockedOutProvider));

    let outcome = authenticate(&ctx, &login_form("a@x.com", "pw")).await.unwrap();

    assert_eq!(outcome, ActionOutcome::failure("Something went wrong."));
}
