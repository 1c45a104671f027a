//! Route handlers for activity signals, expiry polling and reloading the page.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRefresh;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    inactivity::ActivitySignal,
    session::{SessionState, lock_session},
};

/// The form data sent by the activity hooks.
#[derive(Debug, Serialize, Deserialize)]
pub struct ActivityForm {
    /// What kind of activity was observed.
    pub signal: ActivitySignal,
}

/// A route handler for activity signals, postpones the inactivity timeout.
pub async fn post_activity(
    State(state): State<SessionState>,
    Form(form): Form<ActivityForm>,
) -> Response {
    let mut session = match lock_session(&state.session) {
        Ok(session) => session,
        Err(error) => return error.into_alert_response(),
    };

    match session.observe(form.signal) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error.into_alert_response(),
    }
}

/// A route handler polled by the page, responds with the reload warning once
/// the session has expired.
pub async fn get_session_status(State(state): State<SessionState>) -> Response {
    let session = match lock_session(&state.session) {
        Ok(session) => session,
        Err(error) => return error.into_alert_response(),
    };

    if session.is_expired() {
        Error::SessionExpired.into_alert_response()
    } else {
        StatusCode::NO_CONTENT.into_response()
    }
}

/// A route handler that tells HTMX to reload the page.
pub async fn get_reload() -> Response {
    (HxRefresh(true), StatusCode::OK).into_response()
}
