//! Strongly-typed handles for elements materialized in a host document.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies an element (grid, level) created in a host document.
///
/// Hosts assign these when a grid or level spec is materialized.
/// The layout generator itself never produces IDs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ElementId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
