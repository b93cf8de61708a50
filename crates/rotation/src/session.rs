use crate::entry::RotationEntry;
use crate::error::{ErrorKind, Result};
use crate::rotation::Rotation;
use crate::ticker::Ticker;
use interop_catalog::LibraryRecord;
use std::time::Duration;
use tokio::sync::watch;
use tracing::instrument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// No rotation has been started, or the last one was stopped.
    Idle,
    /// A ticker is advancing the rotation.
    Running,
}

/// Owns at most one running [`Ticker`].
///
/// Starting a new rotation always stops the previous ticker first, so
/// restarting can never stack timers. Dropping the session stops it too.
#[derive(Debug)]
pub struct Session {
    period: Duration,
    ticker: Option<Ticker>,
}
impl Session {
    pub fn new(period: Duration) -> Result<Self> {
        if period.is_zero() {
            exn::bail!(ErrorKind::InvalidInterval);
        }
        Ok(Self { period, ticker: None })
    }

    /// Starts a freshly shuffled rotation over `records`.
    #[instrument(skip_all, fields(records = records.len()))]
    pub fn start(&mut self, records: &[LibraryRecord]) -> Result<watch::Receiver<RotationEntry>> {
        self.stop();
        self.start_with(Rotation::shuffled(records)?)
    }

    /// Starts rotating through an already-built `rotation`.
    pub fn start_with(&mut self, rotation: Rotation) -> Result<watch::Receiver<RotationEntry>> {
        self.stop();
        let entries = rotation.len();
        let ticker = Ticker::spawn(rotation, self.period)?;
        let current = ticker.subscribe();
        self.ticker = Some(ticker);
        tracing::info!(entries, period_ms = self.period.as_millis(), "Rotation started");
        Ok(current)
    }

    /// Stops the running ticker, if any.
    pub fn stop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
            tracing::debug!("Rotation stopped");
        }
    }

    pub fn state(&self) -> State {
        match &self.ticker {
            Some(_) => State::Running,
            None => State::Idle,
        }
    }

    /// The highlighted entry, or `None` while idle.
    pub fn current(&self) -> Option<RotationEntry> {
        self.ticker.as_ref().map(Ticker::current)
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_INTERVAL;
    use tokio::time::Instant;

    fn records() -> Vec<LibraryRecord> {
        vec![
            LibraryRecord::new("RustPython", "Python", "Rust", ""),
            LibraryRecord::new("PyO3", "Rust", "Python", ""),
        ]
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_and_stop() {
        let mut session = Session::new(DEFAULT_INTERVAL).unwrap();
        assert_eq!(session.state(), State::Idle);
        assert_eq!(session.current(), None);

        let mut current = session.start(&records()).unwrap();
        assert_eq!(session.state(), State::Running);
        let first = current.borrow().clone();
        assert!(first.label == "Python in Rust" || first.label == "Rust in Python");

        current.changed().await.unwrap();
        assert_ne!(*current.borrow_and_update(), first);

        session.stop();
        assert_eq!(session.state(), State::Idle);
        assert!(current.changed().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_cancels_previous_timer() {
        let mut session = Session::new(DEFAULT_INTERVAL).unwrap();
        let mut first = session.start_with(Rotation::with_permutation(&records(), &[0, 1]).unwrap()).unwrap();
        let start = Instant::now();
        let mut second = session.start_with(Rotation::with_permutation(&records(), &[0, 1]).unwrap()).unwrap();
        assert!(first.changed().await.is_err());

        // A single timer: one tick per period, alternating as usual.
        for expected in ["Rust in Python", "Python in Rust", "Rust in Python"] {
            second.changed().await.unwrap();
            assert_eq!(second.borrow_and_update().label, expected);
        }
        assert!(start.elapsed() >= DEFAULT_INTERVAL * 3 && start.elapsed() < DEFAULT_INTERVAL * 4);
    }

    #[tokio::test]
    async fn test_empty_catalog_fails_to_start() {
        let mut session = Session::new(DEFAULT_INTERVAL).unwrap();
        let err = session.start(&[]).unwrap_err();
        assert_eq!(&*err, &ErrorKind::EmptyCatalog);
        assert_eq!(session.state(), State::Idle);
    }

    #[test]
    fn test_start_outside_runtime_fails() {
        let mut session = Session::new(DEFAULT_INTERVAL).unwrap();
        let err = session.start(&records()).unwrap_err();
        assert_eq!(&*err, &ErrorKind::NoRuntime);
        assert_eq!(session.state(), State::Idle);
    }

    #[test]
    fn test_rejects_zero_period() {
        let err = Session::new(Duration::ZERO).unwrap_err();
        assert_eq!(&*err, &ErrorKind::InvalidInterval);
    }
}
