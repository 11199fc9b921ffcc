//! Estates from `estates.json`.
//!
//! Estates scope privileges: the estate filter keeps only privileges granted
//! to the selected estate.

use serde::{Deserialize, Serialize};

/// An estate definition (nobility, clergy, burghers, ...).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Estate {
    /// Key such as `clergy_estate`.
    #[serde(default)]
    pub id: String,
    /// Display name with the `_estate` suffix removed.
    pub name: String,
}
