//! Strong type definitions for timestamps and lifetimes.
//!
//! Times are whole Unix seconds. The decimal rendering of a [`Timestamp`]
//! is part of the signed message, so `Display` must never change.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;

use crate::error::CoreError;

/// A point in time as signed Unix seconds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// The Unix epoch.
    pub const EPOCH: Self = Self(0);

    /// Create from Unix seconds.
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    /// Get the Unix seconds.
    pub const fn as_secs(&self) -> i64 {
        self.0
    }

    /// The instant `ttl` seconds after this one.
    pub fn checked_add(self, ttl: Ttl) -> Result<Self, CoreError> {
        i64::try_from(ttl.as_secs())
            .ok()
            .and_then(|secs| self.0.checked_add(secs))
            .map(Self)
            .ok_or(CoreError::TimestampOverflow)
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Timestamp {
    fn from(secs: i64) -> Self {
        Self(secs)
    }
}

/// A strictly positive time-to-live in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ttl(NonZeroU64);

impl Ttl {
    /// Create from seconds. Zero is rejected.
    pub fn from_secs(secs: u64) -> Result<Self, CoreError> {
        NonZeroU64::new(secs).map(Self).ok_or(CoreError::InvalidTtl)
    }

    /// Get the seconds.
    pub const fn as_secs(&self) -> u64 {
        self.0.get()
    }
}

impl TryFrom<u64> for Ttl {
    type Error = CoreError;

    fn try_from(secs: u64) -> Result<Self, Self::Error> {
        Self::from_secs(secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_display_is_plain_decimal() {
        assert_eq!(Timestamp::from_secs(123).to_string(), "123");
        assert_eq!(Timestamp::from_secs(-1).to_string(), "-1");
        assert_eq!(Timestamp::EPOCH.to_string(), "0");
    }

    #[test]
    fn test_timestamp_checked_add() {
        let ttl = Ttl::from_secs(1).unwrap();
        assert_eq!(
            Timestamp::from_secs(2).checked_add(ttl).unwrap(),
            Timestamp::from_secs(3)
        );
    }

    #[test]
    fn test_timestamp_overflow() {
        let ttl = Ttl::from_secs(1).unwrap();
        assert!(matches!(
            Timestamp::from_secs(i64::MAX).checked_add(ttl),
            Err(CoreError::TimestampOverflow)
        ));

        let huge = Ttl::from_secs(u64::MAX).unwrap();
        assert!(matches!(
            Timestamp::EPOCH.checked_add(huge),
            Err(CoreError::TimestampOverflow)
        ));
    }

    #[test]
    fn test_zero_ttl_rejected() {
        assert!(matches!(Ttl::from_secs(0), Err(CoreError::InvalidTtl)));
        assert_eq!(Ttl::try_from(60).unwrap().as_secs(), 60);
    }
}
