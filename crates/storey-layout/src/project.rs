//! Project information stamped alongside the generated layout.

use serde::{Deserialize, Serialize};

/// Descriptive project metadata written into the host document in the
/// same transaction as the grids and levels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    /// Project name.
    pub name: String,
    /// Project number.
    pub number: String,
    /// Site address or description.
    pub address: String,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            name: "New Project".to_string(),
            number: "001".to_string(),
            address: "Site Area: 10000 sqm".to_string(),
        }
    }
}
