//! Invoice mutations: create, update, delete

use crate::actions::ActionContext;
use crate::core::form::FormData;
use crate::core::outcome::ActionOutcome;
use crate::core::validation::FormSchema;
use crate::core::validation::validators::{one_of, positive_amount, uuid as uuid_field};
use crate::entities::invoice::{Invoice, InvoiceStatus, parse_amount_cents};
use anyhow::Result;
use uuid::Uuid;

/// Validated and coerced invoice form input.
struct InvoiceInput {
    customer_id: Uuid,
    amount: i64,
    status: InvoiceStatus,
}

/// Schema for both create and update: the entity shape minus the
/// server-generated fields (id, date).
fn invoice_schema() -> FormSchema {
    FormSchema::new()
        .field("customerId", vec![uuid_field("Please select a customer.")])
        .field(
            "amount",
            vec![positive_amount("Please enter an amount greater than $0.")],
        )
        .field(
            "status",
            vec![one_of(
                InvoiceStatus::ALLOWED,
                "Please select an invoice status.",
            )],
        )
}

/// Coerce the already-validated fields into typed values. Returns `None`
/// only if validation was skipped or the schema and this function drift.
fn parse_input(form: &FormData) -> Option<InvoiceInput> {
    let customer_id = Uuid::parse_str(form.get("customerId")?).ok()?;
    let amount = parse_amount_cents(form.get("amount")?)?;
    let status = form.get("status")?.parse::<InvoiceStatus>().ok()?;
    Some(InvoiceInput {
        customer_id,
        amount,
        status,
    })
}

/// Create an invoice from submitted form fields.
///
/// On success the invoices listing is invalidated and the caller is
/// redirected there. The issue date is set to the current calendar date.
pub async fn create_invoice(ctx: &ActionContext, form: &FormData) -> Result<ActionOutcome> {
    if let Err(errors) = invoice_schema().validate(form) {
        return Ok(ActionOutcome::failure_with(
            errors,
            "Missing Fields. Failed to Create Invoice.",
        ));
    }
    let Some(input) = parse_input(form) else {
        return Ok(ActionOutcome::failure("Missing Fields. Failed to Create Invoice."));
    };

    let invoice = Invoice::new(input.customer_id, input.amount, input.status);
    if let Err(e) = ctx.store.insert_invoice(invoice).await {
        tracing::error!(error = %e, "invoice insert failed");
        return Ok(ActionOutcome::failure(
            "Database Error: Failed to Create Invoice.",
        ));
    }

    ctx.cache.invalidate(&ctx.paths.invoices);
    Ok(ActionOutcome::redirect(&ctx.paths.invoices))
}

/// Update an invoice by id from submitted form fields.
///
/// Issues a single UPDATE touching customer reference, amount, and status;
/// the issue date is never rewritten.
pub async fn update_invoice(
    ctx: &ActionContext,
    id: &Uuid,
    form: &FormData,
) -> Result<ActionOutcome> {
    if let Err(errors) = invoice_schema().validate(form) {
        return Ok(ActionOutcome::failure_with(
            errors,
            "Missing Fields. Failed to Update Invoice.",
        ));
    }
    let Some(input) = parse_input(form) else {
        return Ok(ActionOutcome::failure("Missing Fields. Failed to Update Invoice."));
    };

    if let Err(e) = ctx
        .store
        .update_invoice(id, &input.customer_id, input.amount, input.status)
        .await
    {
        tracing::error!(error = %e, invoice_id = %id, "invoice update failed");
        return Ok(ActionOutcome::failure(
            "Database Error: Failed to Update Invoice.",
        ));
    }

    ctx.cache.invalidate(&ctx.paths.invoices);
    Ok(ActionOutcome::redirect(&ctx.paths.invoices))
}

/// Delete an invoice by id.
///
/// Deletes return a message instead of redirecting; they are typically
/// invoked without a full page navigation.
pub async fn delete_invoice(ctx: &ActionContext, id: &Uuid) -> Result<ActionOutcome> {
    if let Err(e) = ctx.store.delete_invoice(id).await {
        tracing::error!(error = %e, invoice_id = %id, "invoice delete failed");
        return Ok(ActionOutcome::failure(
            "Database Error: Failed to Delete Invoice.",
        ));
    }

    ctx.cache.invalidate(&ctx.paths.invoices);
    Ok(ActionOutcome::success("Deleted Invoice."))
}
