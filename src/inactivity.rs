//! A single-slot timer that fires once the user has been idle for too long.
//!
//! The timer owns at most one pending fire. Resetting it cancels the pending
//! fire before scheduling a new one, so there is never more than one fire
//! waiting. Firing is terminal: a timer that has fired cannot be armed again.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use serde::{Deserialize, Serialize};
use tokio::{task::JoinHandle, time::Instant};

/// How long the user may be idle before the page is reloaded.
pub const INACTIVITY_TIMEOUT: Duration = Duration::from_millis(120_000);

/// The warning shown to the user just before the page reloads.
pub const RELOAD_WARNING: &str = "Your page is about to reload!";

/// A user input event that postpones the inactivity timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivitySignal {
    /// The pointer moved.
    PointerMove,
    /// A key was pressed.
    KeyPress,
}

/// Whether the timer has a pending fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// A fire is scheduled for `deadline`.
    Armed {
        /// When the pending fire will run.
        deadline: Instant,
    },
    /// No fire is scheduled.
    Idle,
}

/// The action to run when the timer fires.
pub type FireAction = Arc<dyn Fn() + Send + Sync>;

struct PendingFire {
    deadline: Instant,
    handle: JoinHandle<()>,
}

/// Runs a [FireAction] once no activity has been observed for a fixed duration.
///
/// The pending fire is a spawned tokio task, so the timer must be started
/// from within a tokio runtime.
pub struct InactivityTimer {
    duration: Duration,
    pending: Option<PendingFire>,
    listening: bool,
    fired: Arc<AtomicBool>,
    on_fire: FireAction,
}

impl InactivityTimer {
    /// Create an idle timer that will run `on_fire` after `duration` of
    /// inactivity once started.
    pub fn new(duration: Duration, on_fire: FireAction) -> Self {
        Self {
            duration,
            pending: None,
            listening: false,
            fired: Arc::new(AtomicBool::new(false)),
            on_fire,
        }
    }

    /// Schedule a fire `duration` from now.
    ///
    /// The first call also starts listening for activity signals. Does
    /// nothing if the timer has already fired.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a tokio runtime.
    pub fn start(&mut self) {
        if self.has_fired() {
            tracing::debug!("ignoring start for an inactivity timer that has already fired");
            return;
        }

        if !self.listening {
            self.listening = true;
            tracing::debug!("listening for pointer movement and key presses");
        }

        let deadline = Instant::now() + self.duration;
        let fired = self.fired.clone();
        let on_fire = self.on_fire.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;

            if fired.swap(true, Ordering::SeqCst) {
                return;
            }

            tracing::info!("no activity for a while, reloading the page");
            on_fire();
        });

        if let Some(previous) = self.pending.replace(PendingFire { deadline, handle }) {
            previous.handle.abort();
        }

        tracing::trace!("inactivity timer armed");
    }

    /// Cancel the pending fire and schedule a new one `duration` from now.
    pub fn reset(&mut self) {
        self.cancel();
        self.start();
    }

    /// Record an activity signal, which resets the timer.
    ///
    /// Signals are ignored until the timer has been started.
    pub fn observe(&mut self, signal: ActivitySignal) {
        if !self.listening {
            return;
        }

        tracing::trace!("observed {signal:?}");
        self.reset();
    }

    /// Whether a fire is pending.
    pub fn state(&self) -> TimerState {
        match &self.pending {
            Some(pending) if !pending.handle.is_finished() => TimerState::Armed {
                deadline: pending.deadline,
            },
            _ => TimerState::Idle,
        }
    }

    /// Whether the timer has fired.
    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }

    /// The idle duration after which the timer fires.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.abort();
        }
    }
}

impl Drop for InactivityTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for InactivityTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InactivityTimer")
            .field("duration", &self.duration)
            .field("state", &self.state())
            .field("listening", &self.listening)
            .field("fired", &self.has_fired())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{Arc, Mutex},
        time::Duration,
    };

    use tokio::time::{Instant, advance};

    use super::{ActivitySignal, INACTIVITY_TIMEOUT, InactivityTimer, TimerState};

    /// Returns a timer and the times at which it fired.
    fn recording_timer(duration: Duration) -> (InactivityTimer, Arc<Mutex<Vec<Instant>>>) {
        let fires = Arc::new(Mutex::new(Vec::new()));
        let recorded = fires.clone();
        let timer = InactivityTimer::new(
            duration,
            Arc::new(move || recorded.lock().unwrap().push(Instant::now())),
        );

        (timer, fires)
    }

    /// Let spawned tasks run after the clock has moved.
    async fn settle() {
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn new_timer_is_idle() {
        let (timer, fires) = recording_timer(INACTIVITY_TIMEOUT);

        assert_eq!(timer.state(), TimerState::Idle);
        advance(INACTIVITY_TIMEOUT * 2).await;
        settle().await;
        assert!(fires.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn start_arms_timer() {
        let (mut timer, _fires) = recording_timer(INACTIVITY_TIMEOUT);
        let now = Instant::now();

        timer.start();

        assert_eq!(
            timer.state(),
            TimerState::Armed {
                deadline: now + INACTIVITY_TIMEOUT
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn fires_once_after_timeout() {
        let (mut timer, fires) = recording_timer(INACTIVITY_TIMEOUT);
        let started_at = Instant::now();
        timer.start();

        advance(INACTIVITY_TIMEOUT - Duration::from_millis(1)).await;
        settle().await;
        assert!(fires.lock().unwrap().is_empty(), "fired before the deadline");

        advance(Duration::from_millis(1)).await;
        settle().await;
        assert_eq!(*fires.lock().unwrap(), [started_at + INACTIVITY_TIMEOUT]);
        assert!(timer.has_fired());
        assert_eq!(timer.state(), TimerState::Idle);

        advance(INACTIVITY_TIMEOUT * 3).await;
        settle().await;
        assert_eq!(fires.lock().unwrap().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_resets_schedule_a_single_fire_from_the_last_reset() {
        let (mut timer, fires) = recording_timer(INACTIVITY_TIMEOUT);
        timer.start();

        for _ in 0..5 {
            advance(Duration::from_secs(1)).await;
            timer.reset();
        }
        let last_reset = Instant::now();

        assert_eq!(
            timer.state(),
            TimerState::Armed {
                deadline: last_reset + INACTIVITY_TIMEOUT
            }
        );

        advance(INACTIVITY_TIMEOUT - Duration::from_millis(1)).await;
        settle().await;
        assert!(fires.lock().unwrap().is_empty(), "fired before the deadline");

        advance(Duration::from_millis(1)).await;
        settle().await;
        advance(INACTIVITY_TIMEOUT).await;
        settle().await;

        assert_eq!(*fires.lock().unwrap(), [last_reset + INACTIVITY_TIMEOUT]);
    }

    #[tokio::test(start_paused = true)]
    async fn activity_postpones_fire() {
        let (mut timer, fires) = recording_timer(Duration::from_secs(10));
        timer.start();

        advance(Duration::from_secs(8)).await;
        timer.observe(ActivitySignal::PointerMove);
        advance(Duration::from_secs(8)).await;
        timer.observe(ActivitySignal::KeyPress);
        advance(Duration::from_secs(8)).await;
        settle().await;

        assert!(fires.lock().unwrap().is_empty());

        advance(Duration::from_secs(2)).await;
        settle().await;
        assert_eq!(fires.lock().unwrap().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn activity_before_start_is_ignored() {
        let (mut timer, _fires) = recording_timer(INACTIVITY_TIMEOUT);

        timer.observe(ActivitySignal::KeyPress);

        assert_eq!(timer.state(), TimerState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn fired_timer_cannot_be_rearmed() {
        let (mut timer, fires) = recording_timer(Duration::from_secs(1));
        timer.start();
        advance(Duration::from_secs(1)).await;
        settle().await;
        assert!(timer.has_fired());

        timer.reset();
        timer.observe(ActivitySignal::PointerMove);

        assert_eq!(timer.state(), TimerState::Idle);
        advance(Duration::from_secs(5)).await;
        settle().await;
        assert_eq!(fires.lock().unwrap().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_timer_cancels_pending_fire() {
        let (mut timer, fires) = recording_timer(Duration::from_secs(1));
        timer.start();

        drop(timer);
        advance(Duration::from_secs(5)).await;
        settle().await;

        assert!(fires.lock().unwrap().is_empty());
    }
}
