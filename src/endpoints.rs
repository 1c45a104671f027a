//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/rows/{row_id}', use [format_endpoint].

use std::fmt::Display;

/// The ledger page. Loading it starts a new session.
pub const ROOT: &str = "/";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route for submitting the transaction form.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route to delete a single row.
pub const DELETE_ROW: &str = "/api/rows/{row_id}";
/// The route the page reports pointer movement and key presses to.
pub const ACTIVITY: &str = "/api/activity";
/// The route the page polls to find out whether the session has expired.
pub const SESSION: &str = "/api/session";
/// The route that tells the page to reload itself.
pub const RELOAD: &str = "/api/reload";

/// Replace the `{...}` parameter in `endpoint_path` with `id`.
///
/// For example, '/api/rows/{row_id}' with `id` 3 becomes '/api/rows/3'.
/// Returns `endpoint_path` unchanged if it has no parameter.
pub fn format_endpoint(endpoint_path: &str, id: impl Display) -> String {
    let Some((prefix, rest)) = endpoint_path.split_once('{') else {
        return endpoint_path.to_owned();
    };
    let suffix = rest.split_once('}').map_or("", |(_, suffix)| suffix);

    format!("{prefix}{id}{suffix}")
}
