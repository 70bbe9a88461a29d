//! Struct identifiers.

use std::fmt;

/// Position of an operation within one replica's sequence: `(client, clock)`.
///
/// The decoder only marshals the two integers; whether an id refers to an
/// existing struct is for the caller to decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id {
    pub client: u64,
    pub clock: u64,
}

impl Id {
    pub const fn new(client: u64, clock: u64) -> Self {
        Self { client, clock }
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.client, self.clock)
    }
}

/// Create an id.
#[inline]
pub fn id(client: u64, clock: u64) -> Id {
    Id::new(client, clock)
}
