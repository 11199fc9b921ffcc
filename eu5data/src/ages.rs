//! Ages from `ages.json`.
//!
//! The extraction tool writes ages sorted by start year but without an
//! explicit rank, so ranks are derived from year order when missing.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A game age (e.g. `age_2_renaissance`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Age {
    #[serde(default)]
    pub id: String,

    pub name: String,

    /// Start year of the age.
    #[serde(default)]
    pub year: i32,

    /// Ordinal position, 1 for the first age. Zero means "not yet assigned".
    #[serde(default)]
    pub rank: u32,
}

/// Assigns ranks 1..N by ascending year when any age lacks one.
///
/// Ties on year are broken by id so the result does not depend on map order.
pub fn assign_ranks(ages: &mut HashMap<String, Age>) {
    if ages.values().all(|age| age.rank > 0) {
        return;
    }

    let mut order: Vec<(i32, String)> = ages
        .values()
        .map(|age| (age.year, age.id.clone()))
        .collect();
    order.sort();

    for (idx, (_, id)) in order.iter().enumerate() {
        if let Some(age) = ages.get_mut(id) {
            age.rank = idx as u32 + 1;
        }
    }

    log::debug!("Derived ranks for {} ages from year order", ages.len());
}
