//! Customer mutations: create, update, delete
//!
//! Creates and updates are guarded by the application-level email
//! uniqueness check; deletes are refused while any invoice still references
//! the customer.

use crate::actions::ActionContext;
use crate::core::form::{FieldErrors, FormData};
use crate::core::outcome::ActionOutcome;
use crate::core::validation::FormSchema;
use crate::core::validation::validators::{email as email_field, non_empty};
use crate::entities::Customer;
use anyhow::Result;
use uuid::Uuid;

const DUPLICATE_EMAIL: &str = "Email is already is use.";

fn customer_schema() -> FormSchema {
    FormSchema::new()
        .field("name", vec![non_empty("Please enter a name.")])
        .field(
            "email",
            vec![email_field("Please enter a valid email address.")],
        )
}

/// Trimmed, validated customer fields.
struct CustomerInput {
    name: String,
    email: String,
}

fn parse_input(form: &FormData) -> Option<CustomerInput> {
    Some(CustomerInput {
        name: form.get("name")?.trim().to_string(),
        email: form.get("email")?.trim().to_string(),
    })
}

/// Create a customer from submitted form fields.
///
/// The uniqueness check and the insert are two statements with no
/// transaction between them; concurrent submissions of the same email can
/// race past the check.
pub async fn create_customer(ctx: &ActionContext, form: &FormData) -> Result<ActionOutcome> {
    if let Err(errors) = customer_schema().validate(form) {
        return Ok(ActionOutcome::failure_with(
            errors,
            "Missing Fields. Failed to Create Customer.",
        ));
    }
    let Some(input) = parse_input(form) else {
        return Ok(ActionOutcome::failure("Missing Fields. Failed to Create Customer."));
    };

    match ctx.store.email_taken(&input.email, None).await {
        Ok(true) => {
            return Ok(ActionOutcome::failure_with(
                FieldErrors::single("email", DUPLICATE_EMAIL),
                DUPLICATE_EMAIL,
            ));
        }
        Ok(false) => {}
        Err(e) => {
            tracing::error!(error = %e, "email uniqueness check failed");
            return Ok(ActionOutcome::failure(
                "Database Error: Failed to Create Customer.",
            ));
        }
    }

    let image_url = form
        .get("imageUrl")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from);
    let customer = Customer::new(input.name, input.email, image_url);
    if let Err(e) = ctx.store.insert_customer(customer).await {
        tracing::error!(error = %e, "customer insert failed");
        return Ok(ActionOutcome::failure(
            "Database Error: Failed to Create Customer.",
        ));
    }

    ctx.cache.invalidate(&ctx.paths.customers);
    Ok(ActionOutcome::redirect(&ctx.paths.customers))
}

/// Update a customer by id from submitted form fields.
///
/// The uniqueness check excludes the record's own id, so keeping the same
/// email across an update is accepted.
pub async fn update_customer(
    ctx: &ActionContext,
    id: &Uuid,
    form: &FormData,
) -> Result<ActionOutcome> {
    if let Err(errors) = customer_schema().validate(form) {
        return Ok(ActionOutcome::failure_with(
            errors,
            "Missing Fields. Failed to Update Customer.",
        ));
    }
    let Some(input) = parse_input(form) else {
        return Ok(ActionOutcome::failure("Missing Fields. Failed to Update Customer."));
    };

    match ctx.store.email_taken(&input.email, Some(id)).await {
        Ok(true) => {
            return Ok(ActionOutcome::failure_with(
                FieldErrors::single("email", DUPLICATE_EMAIL),
                DUPLICATE_EMAIL,
            ));
        }
        Ok(false) => {}
        Err(e) => {
            tracing::error!(error = %e, customer_id = %id, "email uniqueness check failed");
            return Ok(ActionOutcome::failure(
                "Database Error: Failed to Update Customer.",
            ));
        }
    }

    if let Err(e) = ctx.store.update_customer(id, &input.name, &input.email).await {
        tracing::error!(error = %e, customer_id = %id, "customer update failed");
        return Ok(ActionOutcome::failure(
            "Database Error: Failed to Update Customer.",
        ));
    }

    ctx.cache.invalidate(&ctx.paths.customers);
    Ok(ActionOutcome::redirect(&ctx.paths.customers))
}

/// Delete a customer by id unless an invoice still references it.
pub async fn delete_customer(ctx: &ActionContext, id: &Uuid) -> Result<ActionOutcome> {
    match ctx.store.customer_has_invoices(id).await {
        Ok(true) => {
            return Ok(ActionOutcome::failure(
                "Cannot delete customer: invoices still reference this customer.",
            ));
        }
        Ok(false) => {}
        Err(e) => {
            tracing::error!(error = %e, customer_id = %id, "delete guard check failed");
            return Ok(ActionOutcome::failure(
                "Database Error: Failed to Delete Customer.",
            ));
        }
    }

    if let Err(e) = ctx.store.delete_customer(id).await {
        tracing::error!(error = %e, customer_id = %id, "customer delete failed");
        return Ok(ActionOutcome::failure(
            "Database Error: Failed to Delete Customer.",
        ));
    }

    ctx.cache.invalidate(&ctx.paths.customers);
    Ok(ActionOutcome::success("Deleted Customer."))
}
