use crate::entry::RotationEntry;
use crate::error::{ErrorKind, Result};
use crate::rotation::Rotation;
use exn::ResultExt;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Drives a [`Rotation`] from a fixed-period tokio interval.
///
/// The rotation is moved into the background task, which is its only
/// mutator; readers observe the current entry through a [`watch`] channel.
/// The task is aborted by [`stop`](Self::stop) or when the ticker is dropped,
/// whichever happens first.
#[derive(Debug)]
pub struct Ticker {
    handle: JoinHandle<()>,
    current: watch::Receiver<RotationEntry>,
}
impl Ticker {
    /// Spawns the ticking task on the current tokio runtime.
    ///
    /// The first tick fires one full `period` after spawning. Fails with
    /// [`ErrorKind::NoRuntime`] when called outside a runtime.
    pub fn spawn(rotation: Rotation, period: Duration) -> Result<Self> {
        if period.is_zero() {
            exn::bail!(ErrorKind::InvalidInterval);
        }
        let runtime = Handle::try_current().or_raise(|| ErrorKind::NoRuntime)?;
        let (sender, current) = watch::channel(rotation.current().clone());
        let handle = runtime.spawn(run(rotation, period, sender));
        Ok(Self { handle, current })
    }

    /// A receiver notified after every tick. It reports the channel as closed
    /// once the ticker stops.
    pub fn subscribe(&self) -> watch::Receiver<RotationEntry> {
        self.current.clone()
    }

    pub fn current(&self) -> RotationEntry {
        self.current.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Cancels the timer. Idempotent.
    pub fn stop(&self) {
        self.handle.abort();
    }
}
impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn run(mut rotation: Rotation, period: Duration, sender: watch::Sender<RotationEntry>) {
    let mut interval = time::interval_at(Instant::now() + period, period);
    // Missed ticks are skipped rather than replayed in a burst.
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        interval.tick().await;
        rotation.tick();
        let entry = rotation.current().clone();
        tracing::trace!(cursor = rotation.cursor(), label = %entry.label, "Rotation advanced");
        sender.send_replace(entry);
    }
}
