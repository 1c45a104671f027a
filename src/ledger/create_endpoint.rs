//! The route handler for submitting the transaction form.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;

use crate::{
    ledger::view::ledger_section_view,
    session::{SessionState, lock_session},
    validation::TransactionForm,
};

/// A route handler for adding a transaction to the ledger.
///
/// Responds with the re-rendered ledger section. A valid submission clears the
/// form, while a rejected one keeps the submitted values and lists the
/// validation failures.
pub async fn create_transaction_endpoint(
    State(state): State<SessionState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let mut session = match lock_session(&state.session) {
        Ok(session) => session,
        Err(error) => return error.into_alert_response(),
    };

    match session.submit(&form) {
        Ok(Some(_)) => ledger_section_view(session.ledger(), session.failures(), None),
        Ok(None) => ledger_section_view(session.ledger(), session.failures(), Some(&form)),
        Err(error) => return error.into_alert_response(),
    }
    .into_response()
}
