//! Implements a struct that holds the state of the server.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use crate::session::Session;

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The session of the most recent page load.
    pub session: Arc<Mutex<Session>>,

    /// How long the page may be idle before it is reloaded.
    pub inactivity_timeout: Duration,
}

impl AppState {
    /// Create a new [AppState] with an empty session.
    ///
    /// The session is not started until the ledger page is first loaded.
    pub fn new(inactivity_timeout: Duration) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::new(inactivity_timeout))),
            inactivity_timeout,
        }
    }
}
