//! Time sources for expiry computation.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use data_signer_core::Timestamp;

/// A source of the current time in Unix seconds.
///
/// Implementations are shared between threads by every clone of a Signer.
pub trait Clock: Send + Sync + fmt::Debug {
    /// The current instant.
    fn now(&self) -> Timestamp;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let secs = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_secs() as i64,
            // Clock set before 1970: report a negative timestamp.
            Err(e) => -(e.duration().as_secs() as i64),
        };
        Timestamp::from_secs(secs)
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
