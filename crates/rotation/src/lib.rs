//! Rotating "`guest` in `host`" highlights for the catalog header.
//!
//! [`Rotation`] is the timer-agnostic core: a shuffled, immutable sequence of
//! [`RotationEntry`] plus a cyclic cursor. [`Ticker`] advances a rotation on a
//! tokio interval, and [`Session`] owns at most one ticker at a time.

mod entry;
pub mod error;
mod rotation;
mod session;
mod ticker;

use std::time::Duration;

pub use crate::entry::RotationEntry;
pub use crate::rotation::Rotation;
pub use crate::session::{Session, State};
pub use crate::ticker::Ticker;

/// How long each highlight stays on display.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(3000);
