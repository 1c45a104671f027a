//! The state of one page load: the ledger, the error list and the inactivity timer.
//!
//! Loading the page starts a new [Session], discarding the previous one.

mod endpoints;
mod hooks;

use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

use axum::extract::FromRef;

use crate::{
    AppState, Error,
    inactivity::{ActivitySignal, InactivityTimer, RELOAD_WARNING, TimerState},
    ledger::{LedgerState, RowId, TransactionRow},
    validation::{TransactionForm, ValidationAggregator, ValidationFailure},
};

pub use endpoints::{get_reload, get_session_status, post_activity};
pub use hooks::{activity_hooks, reload_hook};

/// The ledger, displayed errors and inactivity timer of the current page load.
#[derive(Debug)]
pub struct Session {
    ledger: LedgerState,
    validation: ValidationAggregator,
    timer: InactivityTimer,
}

impl Session {
    /// Create a session with an empty ledger and an idle timer.
    pub fn new(inactivity_timeout: Duration) -> Self {
        let on_fire = Arc::new(|| tracing::warn!("{RELOAD_WARNING}"));

        Self {
            ledger: LedgerState::new(),
            validation: ValidationAggregator::new(),
            timer: InactivityTimer::new(inactivity_timeout, on_fire),
        }
    }

    /// Create a session and start its inactivity timer.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a tokio runtime.
    pub fn start(inactivity_timeout: Duration) -> Self {
        let mut session = Self::new(inactivity_timeout);
        session.timer.start();

        tracing::info!("started a new session");

        session
    }

    /// Handle a submitted transaction form.
    ///
    /// The submission counts as activity even if the form is invalid. Returns
    /// the new row, or `None` if the form was rejected, in which case the
    /// reasons are available from [Session::failures].
    ///
    /// # Errors
    ///
    /// Returns [Error::SessionExpired] if the inactivity timer has fired.
    pub fn submit(&mut self, form: &TransactionForm) -> Result<Option<TransactionRow>, Error> {
        self.ensure_active()?;
        self.timer.reset();

        let Some(transaction) = self.validation.validate(form) else {
            tracing::info!(
                "rejected transaction with {} validation failure(s)",
                self.validation.failures().len()
            );
            return Ok(None);
        };

        let row = self.ledger.insert(
            transaction.description,
            transaction.kind,
            transaction.amount,
        );
        tracing::info!("recorded {} of ${} as row {}", row.kind, row.amount, row.id);

        Ok(Some(row))
    }

    /// Remove a row after the user confirmed the deletion.
    ///
    /// # Errors
    ///
    /// Returns a:
    /// - [Error::SessionExpired] if the inactivity timer has fired,
    /// - or [Error::DeleteMissingRow] if there is no row with `id`.
    pub fn remove(&mut self, id: RowId) -> Result<TransactionRow, Error> {
        self.ensure_active()?;

        let row = self.ledger.remove(id).ok_or(Error::DeleteMissingRow(id))?;
        tracing::info!("removed {} of ${} in row {}", row.kind, row.amount, row.id);

        Ok(row)
    }

    /// Record pointer movement or a key press.
    ///
    /// # Errors
    ///
    /// Returns [Error::SessionExpired] if the inactivity timer has fired.
    pub fn observe(&mut self, signal: ActivitySignal) -> Result<(), Error> {
        self.ensure_active()?;
        self.timer.observe(signal);

        Ok(())
    }

    /// Whether the inactivity timer has fired.
    pub fn is_expired(&self) -> bool {
        self.timer.has_fired()
    }

    /// The rows and totals.
    pub fn ledger(&self) -> &LedgerState {
        &self.ledger
    }

    /// The failures of the most recent submission.
    pub fn failures(&self) -> &[ValidationFailure] {
        self.validation.failures()
    }

    /// Whether a reload is scheduled.
    pub fn timer_state(&self) -> TimerState {
        self.timer.state()
    }

    fn ensure_active(&self) -> Result<(), Error> {
        if self.is_expired() {
            Err(Error::SessionExpired)
        } else {
            Ok(())
        }
    }
}

/// The state needed by handlers that work on the current session.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// The current session.
    pub session: Arc<Mutex<Session>>,
}

impl FromRef<AppState> for SessionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            session: state.session.clone(),
        }
    }
}

/// Acquire the session lock.
///
/// # Errors
///
/// Returns [Error::SessionLockError] if the lock is poisoned.
pub(crate) fn lock_session(session: &Mutex<Session>) -> Result<MutexGuard<'_, Session>, Error> {
    session
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire session lock: {error}"))
        .map_err(|_| Error::SessionLockError)
}
