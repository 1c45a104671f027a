//! The page to display for an internal server error.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

/// Renders the 500 page with a description of what went wrong and how to fix it.
pub struct InternalServerError {
    description: &'static str,
    fix: &'static str,
}

impl Default for InternalServerError {
    fn default() -> Self {
        Self {
            description: "Sorry, something went wrong.",
            fix: "Try reloading the page or check the server logs",
        }
    }
}

impl InternalServerError {
    /// The page for when the session lock was poisoned by a panicking request.
    pub fn session_unavailable() -> Self {
        Self {
            description: "The ledger is unavailable.",
            fix: "Restart the server, then reload the page to start a new ledger",
        }
    }
}

impl IntoResponse for InternalServerError {
    fn into_response(self) -> Response {
        let page = error_view("Internal Server Error", "500", self.description, self.fix);

        (StatusCode::INTERNAL_SERVER_ERROR, page).into_response()
    }
}

/// A route handler for the 500 page.
pub async fn get_internal_server_error_page() -> Response {
    InternalServerError::default().into_response()
}
