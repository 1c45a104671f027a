//! Application router configuration.

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::{
    AppState, endpoints,
    internal_server_error::get_internal_server_error_page,
    ledger::{create_transaction_endpoint, delete_row_endpoint, get_ledger_page},
    not_found::get_404_not_found,
    session::{get_reload, get_session_status, post_activity},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_ledger_page))
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint),
        )
        .route(endpoints::DELETE_ROW, delete(delete_row_endpoint))
        .route(endpoints::ACTIVITY, post(post_activity))
        .route(endpoints::SESSION, get(get_session_status))
        .route(endpoints::RELOAD, get(get_reload))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}
