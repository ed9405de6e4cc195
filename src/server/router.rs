//! Router assembly for the form-handler surface

use crate::actions::ActionContext;
use crate::server::handlers::{self, AppState};
use axum::Router;
use axum::routing::post;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the mutation router.
///
/// All routes are POST: the surface exists for form submissions only;
/// listing and rendering belong to the hosting application.
pub fn build_router(ctx: Arc<ActionContext>) -> Router {
    let state = AppState { ctx };

    Router::new()
        .route("/invoices", post(handlers::create_invoice))
        .route("/invoices/{id}", post(handlers::update_invoice))
        .route("/invoices/{id}/delete", post(handlers::delete_invoice))
        .route("/customers", post(handlers::create_customer))
        .route("/customers/{id}", post(handlers::update_customer))
        .route("/customers/{id}/delete", post(handlers::delete_customer))
        .route("/login", post(handlers::login))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
