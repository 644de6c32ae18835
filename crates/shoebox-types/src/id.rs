use std::fmt;

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Alphabet for the random id suffix (base36, lowercase).
const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random suffix appended to generated ids.
const SUFFIX_LEN: usize = 9;

/// Unique identifier for one image record.
///
/// Ids are composed of the generation timestamp (milliseconds since the UNIX
/// epoch) and a random base36 suffix: `"1724961600000-k3x9q2mfa"`. The
/// timestamp keeps ids roughly sortable; the suffix makes collisions between
/// ids generated in the same millisecond negligible. Ids are immutable once
/// assigned.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(String);

impl ImageId {
    /// Generate a fresh id from the current wall clock and thread-local RNG.
    pub fn generate() -> Self {
        Self::from_parts(Utc::now().timestamp_millis(), &random_suffix())
    }

    /// Build an id from an explicit timestamp and suffix.
    ///
    /// Primarily useful in tests that need deterministic ids.
    pub fn from_parts(timestamp_ms: i64, suffix: &str) -> Self {
        Self(format!("{timestamp_ms}-{suffix}"))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImageId({})", self.0)
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ImageId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ImageId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Produce a random base36 suffix of [`SUFFIX_LEN`] characters.
pub(crate) fn random_suffix() -> String {
    let mut rng = rand::thread_rng();
    (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect()
}
