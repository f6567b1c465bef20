use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::contact::Contact;

/// Opaque contact identifier. New ids are decimal millisecond timestamps, but
/// stored ids are accepted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Mints an id from `now` that does not collide with any id in `existing`.
    ///
    /// Two contacts created within the same millisecond, or a clock that went
    /// backwards, would otherwise produce duplicates; in that case the id is
    /// bumped past the largest numeric id already in the list. When that
    /// would overflow, the lowest free value above `now` is used instead.
    pub fn generate(now: DateTime<Utc>, existing: &[Contact]) -> Self {
        let mut candidate = now.timestamp_millis().max(0) as u64;
        let taken = |value: u64| existing.iter().any(|c| c.id.as_str() == value.to_string());

        if taken(candidate) {
            let highest = existing
                .iter()
                .filter_map(|c| c.id.as_str().parse::<u64>().ok())
                .max()
                .unwrap_or(candidate);
            match highest.max(candidate).checked_add(1) {
                Some(next) => candidate = next,
                None => {
                    // At most existing.len() values are taken, so this ends.
                    while taken(candidate) {
                        candidate = candidate.wrapping_add(1);
                    }
                }
            }
        }

        Self(candidate.to_string())
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ContactId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            anyhow::bail!("contact id must not be empty");
        }
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for ContactId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
