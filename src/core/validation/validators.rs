//! Reusable form-field validators
//!
//! Each constructor returns a shareable closure over the raw (optional)
//! string value of one form field. Messages are supplied by the schema,
//! since the wording is field-specific ("Please select a customer.", ...).

use crate::entities::invoice::parse_amount_cents;
use std::sync::Arc;
use uuid::Uuid;
use validator::ValidateEmail;

/// A validator over one form field's raw value.
pub type Validator = Arc<dyn Fn(Option<&str>) -> Result<(), String> + Send + Sync>;

/// Validator: field must be present and non-empty.
pub fn required(message: &str) -> Validator {
    let message = message.to_string();
    Arc::new(move |value: Option<&str>| match value {
        Some(v) if !v.is_empty() => Ok(()),
        _ => Err(message.clone()),
    })
}

/// Validator: field must parse as a UUID.
pub fn uuid(message: &str) -> Validator {
    let message = message.to_string();
    Arc::new(move |value: Option<&str>| {
        match value.map(Uuid::parse_str) {
            Some(Ok(_)) => Ok(()),
            _ => Err(message.clone()),
        }
    })
}

/// Validator: field must coerce from a decimal currency string to a
/// positive number of cents. Rejects missing, non-numeric, and non-positive
/// amounts alike.
pub fn positive_amount(message: &str) -> Validator {
    let message = message.to_string();
    Arc::new(move |value: Option<&str>| {
        match value.and_then(parse_amount_cents) {
            Some(cents) if cents > 0 => Ok(()),
            _ => Err(message.clone()),
        }
    })
}

/// Validator: value must be one of the allowed enumeration values.
pub fn one_of(allowed: &[&str], message: &str) -> Validator {
    let allowed: Vec<String> = allowed.iter().map(|s| s.to_string()).collect();
    let message = message.to_string();
    Arc::new(move |value: Option<&str>| match value {
        Some(v) if allowed.iter().any(|a| a == v) => Ok(()),
        _ => Err(message.clone()),
    })
}

/// Validator: string must be non-empty after trimming.
pub fn non_empty(message: &str) -> Validator {
    let message = message.to_string();
    Arc::new(move |value: Option<&str>| match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(message.clone()),
    })
}

/// Validator: string must be a syntactically valid email address.
pub fn email(message: &str) -> Validator {
    let message = message.to_string();
    Arc::new(move |value: Option<&str>| match value {
        Some(v) if v.validate_email() => Ok(()),
        _ => Err(message.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // === required() ===

    #[test]
    fn test_required_missing_returns_message() {
        let v = required("Please select a customer.");
        assert_eq!(v(None), Err("Please select a customer.".to_string()));
    }

    #[test]
    fn test_required_empty_returns_message() {
        let v = required("Please select a customer.");
        assert!(v(Some("")).is_err());
    }

    #[test]
    fn test_required_present_returns_ok() {
        let v = required("msg");
        assert!(v(Some("anything")).is_ok());
    }

    // === uuid() ===

    #[test]
    fn test_uuid_valid() {
        let v = uuid("Please select a customer.");
        assert!(v(Some("3958dc9e-712f-4377-85e9-fec4b6a6442a")).is_ok());
    }

    #[test]
    fn test_uuid_invalid() {
        let v = uuid("Please select a customer.");
        assert!(v(Some("not-a-uuid")).is_err());
        assert!(v(None).is_err());
    }

    // === positive_amount() ===

    #[test]
    fn test_positive_amount_decimal_ok() {
        let v = positive_amount("Please enter an amount greater than $0.");
        assert!(v(Some("49.99")).is_ok());
        assert!(v(Some("1")).is_ok());
    }

    #[test]
    fn test_positive_amount_zero_rejected() {
        let v = positive_amount("msg");
        assert!(v(Some("0")).is_err());
        assert!(v(Some("0.00")).is_err());
    }

    #[test]
    fn test_positive_amount_negative_rejected() {
        let v = positive_amount("msg");
        assert!(v(Some("-5")).is_err());
        assert!(v(Some("-0.01")).is_err());
    }

    #[test]
    fn test_positive_amount_non_numeric_rejected() {
        let v = positive_amount("msg");
        assert!(v(Some("abc")).is_err());
        assert!(v(Some("")).is_err());
        assert!(v(None).is_err());
    }

    // === one_of() ===

    #[test]
    fn test_one_of_allowed_value() {
        let v = one_of(&["pending", "paid"], "Please select an invoice status.");
        assert!(v(Some("pending")).is_ok());
        assert!(v(Some("paid")).is_ok());
    }

    #[test]
    fn test_one_of_outside_enumeration() {
        let v = one_of(&["pending", "paid"], "Please select an invoice status.");
        assert_eq!(
            v(Some("overdue")),
            Err("Please select an invoice status.".to_string())
        );
        assert!(v(None).is_err());
    }

    // === non_empty() ===

    #[test]
    fn test_non_empty_whitespace_only_rejected() {
        let v = non_empty("Please enter a name.");
        assert!(v(Some("   ")).is_err());
        assert!(v(None).is_err());
    }

    #[test]
    fn test_non_empty_trimmed_value_ok() {
        let v = non_empty("msg");
        assert!(v(Some("  Acme  ")).is_ok());
    }

    // === email() ===

    #[test]
    fn test_email_valid_syntax() {
        let v = email("Please enter a valid email address.");
        assert!(v(Some("a@x.com")).is_ok());
    }

    #[test]
    fn test_email_invalid_syntax() {
        let v = email("Please enter a valid email address.");
        assert!(v(Some("not-an-email")).is_err());
        assert!(v(Some("")).is_err());
        assert!(v(None).is_err());
    }
}
