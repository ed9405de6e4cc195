//! Sign-in action delegating to the external auth provider

use crate::actions::ActionContext;
use crate::core::auth::Credentials;
use crate::core::error::AuthError;
use crate::core::form::FormData;
use crate::core::outcome::ActionOutcome;
use anyhow::Result;

/// Forward submitted credentials to the auth provider.
///
/// Error mapping is deliberately non-uniform: a recognized credential
/// rejection becomes the fixed "Invalid credentials." message, any other
/// auth-specific failure becomes a generic string, and a non-auth failure
/// is rethrown so upstream infrastructure handles it as unexpected.
pub async fn authenticate(ctx: &ActionContext, form: &FormData) -> Result<ActionOutcome> {
    let credentials = Credentials::from_form(form);

    match ctx.auth.sign_in(&credentials).await {
        Ok(()) => Ok(ActionOutcome::success("Logged in.")),
        Err(AuthError::InvalidCredentials) => {
            tracing::debug!(email = %credentials.email, "credentials rejected");
            Ok(ActionOutcome::failure("Invalid credentials."))
        }
        Err(AuthError::Provider(reason)) => {
            tracing::warn!(%reason, "auth provider failure");
            Ok(ActionOutcome::failure("Something went wrong."))
        }
        Err(AuthError::Unexpected(e)) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::test_support::test_context;
    use crate::core::auth::AuthProvider;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct FailingProvider(fn() -> AuthError);

    #[async_trait]
    impl AuthProvider for FailingProvider {
        async fn sign_in(&self, _credentials: &Credentials) -> Result<(), AuthError> {
            Err((self.0)())
        }
    }

    fn login_form(email: &str, password: &str) -> FormData {
        FormData::new().with("email", email).with("password", password)
    }

    #[tokio::test]
    async fn test_valid_credentials_log_in() {
        let t = test_context();
        let outcome = authenticate(&t.ctx, &login_form("user@nextmail.com", "123456"))
            .await
            .unwrap();
        assert_eq!(outcome, ActionOutcome::success("Logged in."));
    }

    #[tokio::test]
    async fn test_wrong_password_returns_fixed_message() {
        let t = test_context();
        let outcome = authenticate(&t.ctx, &login_form("user@nextmail.com", "wrong"))
            .await
            .unwrap();
        assert_eq!(outcome, ActionOutcome::failure("Invalid credentials."));
    }

    #[tokio::test]
    async fn test_missing_fields_are_rejected_as_bad_credentials() {
        let t = test_context();
        let outcome = authenticate(&t.ctx, &FormData::new()).await.unwrap();
        assert_eq!(outcome, ActionOutcome::failure("Invalid credentials."));
    }

    #[tokio::test]
    async fn test_provider_failure_returns_generic_message() {
        let mut t = test_context();
        t.ctx.auth = Arc::new(FailingProvider(|| {
            AuthError::Provider("upstream lockout".to_string())
        }));

        let outcome = authenticate(&t.ctx, &login_form("a@x.com", "pw")).await.unwrap();
        assert_eq!(outcome, ActionOutcome::failure("Something went wrong."));
    }

    #[tokio::test]
    async fn test_unexpected_failure_is_rethrown() {
        let mut t = test_context();
        t.ctx.auth = Arc::new(FailingProvider(|| {
            AuthError::Unexpected(anyhow!("connection reset"))
        }));

        let result = authenticate(&t.ctx, &login_form("a@x.com", "pw")).await;
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "connection reset");
    }
}
