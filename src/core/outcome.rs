//! Tagged outcome of a mutation action
//!
//! The original design signaled "transfer control to the listing view" by
//! aborting the request from inside the action. Outside that framework the
//! same idea is better expressed as a return variant: callers match on
//! [`ActionOutcome`] and decide how to render a redirect, a message, or a
//! field-scoped failure.

use crate::core::form::FieldErrors;
use serde::{Deserialize, Serialize};

/// Result of running a mutation action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionOutcome {
    /// Successful create/update: the caller should navigate to `path`.
    Redirect { path: String },

    /// Successful mutation that does not navigate (deletes, sign-in).
    Success { message: String },

    /// Validation or business-rule failure, recovered locally.
    Failure {
        #[serde(default, skip_serializing_if = "FieldErrors::is_empty")]
        errors: FieldErrors,
        message: String,
    },
}

impl ActionOutcome {
    pub fn redirect(path: impl Into<String>) -> Self {
        ActionOutcome::Redirect { path: path.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        ActionOutcome::Success {
            message: message.into(),
        }
    }

    /// Failure with a generic message and no field errors.
    pub fn failure(message: impl Into<String>) -> Self {
        ActionOutcome::Failure {
            errors: FieldErrors::new(),
            message: message.into(),
        }
    }

    /// Failure with field-scoped errors.
    pub fn failure_with(errors: FieldErrors, message: impl Into<String>) -> Self {
        ActionOutcome::Failure {
            errors,
            message: message.into(),
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, ActionOutcome::Redirect { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ActionOutcome::Failure { .. })
    }

    /// Field errors carried by a failure, if any.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ActionOutcome::Failure { errors, .. } if !errors.is_empty() => Some(errors),
            _ => None,
        }
    }

    /// Message carried by a success or failure.
    pub fn message(&self) -> Option<&str> {
        match self {
            ActionOutcome::Success { message } | ActionOutcome::Failure { message, .. } => {
                Some(message)
            }
            ActionOutcome::Redirect { .. } => None,
        }
    }
}
