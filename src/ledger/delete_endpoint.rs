//! The route handler for deleting a row.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    ledger::{RowId, view::totals_view},
    session::{SessionState, lock_session},
};

/// A route handler for deleting a row after the user confirmed the deletion.
///
/// Responds with an empty body that replaces the row, along with the updated
/// totals as an out-of-band swap.
pub async fn delete_row_endpoint(
    State(state): State<SessionState>,
    Path(row_id): Path<RowId>,
) -> Response {
    let mut session = match lock_session(&state.session) {
        Ok(session) => session,
        Err(error) => return error.into_alert_response(),
    };

    match session.remove(row_id) {
        Ok(_) => totals_view(session.ledger().totals(), true).into_response(),
        Err(error) => {
            tracing::warn!("could not delete row {row_id}: {error}");
            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{Arc, Mutex},
        time::Duration,
    };

    use axum::{Router, http::StatusCode, routing::delete};
    use axum_test::TestServer;
    use rust_decimal_macros::dec;
    use scraper::{Html, Selector};
    use tokio::time::advance;

    use super::delete_row_endpoint;
    use crate::{
        endpoints::{self, format_endpoint},
        inactivity::INACTIVITY_TIMEOUT,
        ledger::{LedgerTotals, RowId},
        session::{Session, SessionState},
        validation::TransactionForm,
    };

    fn get_test_state() -> SessionState {
        SessionState {
            session: Arc::new(Mutex::new(Session::start(INACTIVITY_TIMEOUT))),
        }
    }

    fn get_test_server(state: SessionState) -> TestServer {
        let app = Router::new()
            .route(endpoints::DELETE_ROW, delete(delete_row_endpoint))
            .with_state(state);

        TestServer::try_new(app).expect("Could not create test server.")
    }

    fn submit(state: &SessionState, type_: &str, description: &str, amount: &str) -> RowId {
        state
            .session
            .lock()
            .unwrap()
            .submit(&TransactionForm {
                type_: type_.to_owned(),
                description: description.to_owned(),
                amount: amount.to_owned(),
            })
            .unwrap()
            .expect("want row to be recorded")
            .id
    }

    #[tokio::test(start_paused = true)]
    async fn delete_row_updates_totals() {
        let state = get_test_state();
        let coffee = submit(&state, "debit", "coffee", "4.50");
        submit(&state, "credit", "refund", "10.00");
        let server = get_test_server(state.clone());

        let response = server
            .delete(&format_endpoint(endpoints::DELETE_ROW, coffee))
            .await;

        response.assert_status_ok();
        let html = Html::parse_fragment(&response.text());
        let totals = html
            .select(&Selector::parse("#totals").unwrap())
            .next()
            .expect("no totals found");
        assert_eq!(totals.value().attr("hx-swap-oob"), Some("true"));
        assert_eq!(
            state.session.lock().unwrap().ledger().totals(),
            LedgerTotals {
                debits: dec!(0),
                credits: dec!(10.00),
            }
        );
        assert_eq!(state.session.lock().unwrap().ledger().rows().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn delete_missing_row_returns_not_found() {
        let server = get_test_server(get_test_state());

        let response = server
            .delete(&format_endpoint(endpoints::DELETE_ROW, 42))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_text_contains("Could not delete entry");
    }

    #[tokio::test(start_paused = true)]
    async fn deleted_row_cannot_be_deleted_twice() {
        let state = get_test_state();
        let row = submit(&state, "debit", "coffee", "4.50");
        let server = get_test_server(state.clone());
        let url = format_endpoint(endpoints::DELETE_ROW, row);

        server.delete(&url).await.assert_status_ok();
        server.delete(&url).await.assert_status(StatusCode::NOT_FOUND);

        assert_eq!(
            state.session.lock().unwrap().ledger().totals(),
            LedgerTotals::default()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn expired_session_keeps_row() {
        let state = SessionState {
            session: Arc::new(Mutex::new(Session::start(Duration::from_secs(1)))),
        };
        let row = submit(&state, "debit", "coffee", "4.50");
        let server = get_test_server(state.clone());
        advance(Duration::from_secs(1)).await;
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }

        server
            .delete(&format_endpoint(endpoints::DELETE_ROW, row))
            .await
            .assert_status(StatusCode::GONE);

        assert_eq!(state.session.lock().unwrap().ledger().rows().len(), 1);
    }
}
