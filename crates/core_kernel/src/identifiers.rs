//! Strongly-typed identifiers for domain entities
//!
//! Identifiers are positive integers handed out by an [`IdSequence`] when the
//! entity is created, so every entity carries one for its whole lifetime.
//! Newtype wrappers keep different identifier kinds from being mixed up.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Creates from a raw value
            pub fn from_raw(value: u64) -> Self {
                Self(value)
            }

            /// Returns the underlying integer
            pub fn get(&self) -> u64 {
                self.0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip prefix if present
                let raw = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(raw.parse()?))
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> u64 {
                id.0
            }
        }
    };
}

define_id!(PolicyId, "POL");

/// Monotonic source of 1-based raw identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    /// Creates a sequence whose first value is 1
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Creates a sequence that continues after `issued` values
    pub fn resume_after(issued: u64) -> Self {
        Self { next: issued + 1 }
    }

    /// Returns the next raw value and advances the sequence
    pub fn next_raw(&mut self) -> u64 {
        let value = self.next;
        self.next += 1;
        value
    }

    /// Number of values handed out so far
    pub fn issued(&self) -> u64 {
        self.next - 1
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_id_display() {
        let id = PolicyId::from_raw(42);
        assert_eq!(id.to_string(), "POL-42");
    }

    #[test]
    fn test_id_parsing() {
        let original = PolicyId::from_raw(7);
        let parsed: PolicyId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
        assert_eq!("7".parse::<PolicyId>().unwrap(), original);
    }

    #[test]
    fn test_sequence_starts_at_one() {
        let mut seq = IdSequence::new();
        assert_eq!(seq.next_raw(), 1);
        assert_eq!(seq.next_raw(), 2);
        assert_eq!(seq.issued(), 2);
    }

    #[test]
    fn test_sequence_resumes() {
        let mut seq = IdSequence::resume_after(3);
        assert_eq!(seq.issued(), 3);
        assert_eq!(seq.next_raw(), 4);
    }
}
