//! Utilities for serde.

use std::time::Duration;

use serde::{Deserialize, Deserializer};

/// Deserialize a [`Duration`] given as a whole number of seconds.
pub(crate) fn duration_from_secs<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_secs)
}
