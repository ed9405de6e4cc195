//! Form schemas: ordered field rules producing field-scoped errors
//!
//! A schema runs every validator of every rule and collects all failures,
//! so a form with a bad amount *and* a missing status reports both at once.
//! Validation failure is a normal return value.

use crate::core::form::{FieldErrors, FormData};
use crate::core::validation::validators::Validator;

/// Validation rules for one mutation's input, derived from the entity shape
/// by omitting server-generated fields (id, date).
#[derive(Clone, Default)]
pub struct FormSchema {
    rules: Vec<(String, Vec<Validator>)>,
}

impl FormSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field with its validator chain. Rule order is preserved; it
    /// has no behavioral effect but keeps logs and errors predictable.
    pub fn field(mut self, name: impl Into<String>, validators: Vec<Validator>) -> Self {
        self.rules.push((name.into(), validators));
        self
    }

    /// Validate submitted fields, collecting every failure.
    pub fn validate(&self, form: &FormData) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        for (field, validators) in &self.rules {
            let value = form.get(field);
            for validator in validators {
                if let Err(message) = validator(value) {
                    errors.push(field.clone(), message);
                }
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::validators::{non_empty, one_of, positive_amount, required};

    fn sample_schema() -> FormSchema {
        FormSchema::new()
            .field("name", vec![non_empty("Please enter a name.")])
            .field(
                "amount",
                vec![positive_amount("Please enter an amount greater than $0.")],
            )
            .field(
                "status",
                vec![one_of(
                    &["pending", "paid"],
                    "Please select an invoice status.",
                )],
            )
    }

    #[test]
    fn test_valid_form_passes() {
        let form = FormData::new()
            .with("name", "Acme")
            .with("amount", "49.99")
            .with("status", "pending");
        assert!(sample_schema().validate(&form).is_ok());
    }

    #[test]
    fn test_collects_all_failing_fields() {
        let form = FormData::new().with("name", "Acme").with("amount", "-1");
        let errors = sample_schema().validate(&form).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.get("amount").is_some());
        assert!(errors.get("status").is_some());
        assert!(errors.get("name").is_none());
    }

    #[test]
    fn test_multiple_validators_per_field() {
        let schema = FormSchema::new().field(
            "status",
            vec![
                required("Status is required."),
                one_of(&["pending", "paid"], "Please select an invoice status."),
            ],
        );
        let errors = schema.validate(&FormData::new()).unwrap_err();
        assert_eq!(
            errors.get("status"),
            Some(
                [
                    "Status is required.".to_string(),
                    "Please select an invoice status.".to_string()
                ]
                .as_slice()
            )
        );
    }

    #[test]
    fn test_empty_schema_accepts_anything() {
        let form = FormData::new().with("whatever", "value");
        assert!(FormSchema::new().validate(&form).is_ok());
    }
}
