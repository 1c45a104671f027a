//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    alert::Alert, inactivity::RELOAD_WARNING, internal_server_error::InternalServerError,
    ledger::RowId, not_found::NotFoundError, session::reload_hook,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Could not acquire the session lock.
    #[error("could not acquire the session lock")]
    SessionLockError,

    /// Tried to delete a row that is not in the ledger.
    #[error("tried to delete row {0}, which is not in the ledger")]
    DeleteMissingRow(RowId),

    /// The inactivity timer has fired and the page must be reloaded before
    /// the ledger can be used again.
    #[error("the session expired due to inactivity")]
    SessionExpired,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::SessionLockError => {
                InternalServerError::session_unavailable().into_response()
            }
            Error::SessionExpired => self.into_alert_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::DeleteMissingRow(_) => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not delete entry".to_owned(),
                    details: "The entry could not be found. \
                    Try refreshing the page to see if the entry has already been deleted."
                        .to_owned(),
                },
            ),
            Error::SessionExpired => {
                return (
                    StatusCode::GONE,
                    maud::html! {
                        (Alert::Warning {
                            message: RELOAD_WARNING.to_owned(),
                            details: "The page was left idle for too long.".to_owned(),
                        }
                        .into_html())
                        (reload_hook())
                    },
                )
                    .into_response();
            }
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details:
                        "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                },
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}
