//! The ledger page. Every page load starts a new session.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    html::{PAGE_CONTAINER_STYLE, base, dollar_input_styles},
    ledger::view::ledger_section_view,
    session::{Session, activity_hooks, lock_session},
};

/// The state needed to load the ledger page.
#[derive(Debug, Clone)]
pub struct LedgerPageState {
    /// The current session, replaced on every page load.
    pub session: Arc<Mutex<Session>>,
    /// How long the page may be idle before it is reloaded.
    pub inactivity_timeout: Duration,
}

impl FromRef<AppState> for LedgerPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            session: state.session.clone(),
            inactivity_timeout: state.inactivity_timeout,
        }
    }
}

/// Start a new session and render the ledger page.
///
/// The previous session, including its rows, totals and pending reload, is
/// discarded.
pub async fn get_ledger_page(State(state): State<LedgerPageState>) -> Result<Response, Error> {
    let mut session = lock_session(&state.session)?;
    *session = Session::start(state.inactivity_timeout);

    Ok(ledger_page_view(&session).into_response())
}

fn ledger_page_view(session: &Session) -> Markup {
    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold mb-6" { "Ledger" }

            (ledger_section_view(session.ledger(), session.failures(), None))
        }

        (activity_hooks())
    };

    base("Ledger", &[dollar_input_styles()], &content)
}
