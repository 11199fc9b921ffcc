//! Filter predicate engine.
//!
//! A mover is checked against each filter dimension independently and the
//! verdicts are ANDed. Unset filters never constrain; requirements the mover
//! does not declare never fail.

use crate::availability::age_unlocked;
use eu5data::{Mover, ReferenceData, Requirements};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a mover list is ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Type, then name. Presented grouped by type.
    #[default]
    ByCategory,
    StrengthDesc,
    StrengthAsc,
    ByName,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::ByCategory,
        SortMode::StrengthDesc,
        SortMode::StrengthAsc,
        SortMode::ByName,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::ByCategory => "by-category",
            SortMode::StrengthDesc => "strength-desc",
            SortMode::StrengthAsc => "strength-asc",
            SortMode::ByName => "by-name",
        }
    }

    pub fn is_grouped(self) -> bool {
        self == SortMode::ByCategory
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown sort mode '{}' (expected one of: by-category, strength-desc, strength-asc, by-name)",
                    s
                )
            })
    }
}

/// A structural filter axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Age,
    Government,
    Religion,
    Country,
    Estate,
    Culture,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::Age,
        Dimension::Government,
        Dimension::Religion,
        Dimension::Country,
        Dimension::Estate,
        Dimension::Culture,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Age => "Age",
            Dimension::Government => "Government",
            Dimension::Religion => "Religion",
            Dimension::Country => "Country",
            Dimension::Estate => "Estate",
            Dimension::Culture => "Culture",
        }
    }
}

/// Snapshot of the user's current selections.
///
/// Never edited in place by the core: callers build a new snapshot with the
/// `with_*` methods and pass it by reference into each query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub age: Option<String>,
    pub government: Option<String>,
    pub religion: Option<String>,
    pub country: Option<String>,
    pub estate: Option<String>,
    pub culture: Option<String>,
    pub search: String,
    pub sort: SortMode,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, dimension: Dimension, value: impl Into<String>) -> Self {
        *self.slot(dimension) = Some(value.into());
        self
    }

    pub fn without(mut self, dimension: Dimension) -> Self {
        *self.slot(dimension) = None;
        self
    }

    pub fn with_age(self, age: impl Into<String>) -> Self {
        self.with(Dimension::Age, age)
    }

    pub fn with_government(self, government: impl Into<String>) -> Self {
        self.with(Dimension::Government, government)
    }

    pub fn with_religion(self, religion: impl Into<String>) -> Self {
        self.with(Dimension::Religion, religion)
    }

    pub fn with_country(self, tag: impl Into<String>) -> Self {
        self.with(Dimension::Country, tag)
    }

    pub fn with_estate(self, estate: impl Into<String>) -> Self {
        self.with(Dimension::Estate, estate)
    }

    pub fn with_culture(self, culture: impl Into<String>) -> Self {
        self.with(Dimension::Culture, culture)
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Selects a country and, when no religion is chosen yet, its starting
    /// religion as well.
    pub fn select_country(self, tag: &str, data: &ReferenceData) -> Self {
        let default_religion = data.country(tag).and_then(|c| c.religion.clone());
        let state = self.with_country(tag);
        match default_religion {
            Some(religion) if state.get(Dimension::Religion).is_none() => {
                state.with_religion(religion)
            }
            _ => state,
        }
    }

    /// The active value for a dimension. Empty strings count as unset.
    pub fn get(&self, dimension: Dimension) -> Option<&str> {
        let value = match dimension {
            Dimension::Age => &self.age,
            Dimension::Government => &self.government,
            Dimension::Religion => &self.religion,
            Dimension::Country => &self.country,
            Dimension::Estate => &self.estate,
            Dimension::Culture => &self.culture,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }

    pub fn search_term(&self) -> Option<&str> {
        Some(self.search.trim()).filter(|s| !s.is_empty())
    }

    /// No structural filter and no search.
    pub fn is_unconstrained(&self) -> bool {
        Dimension::ALL.iter().all(|d| self.get(*d).is_none()) && self.search_term().is_none()
    }

    fn slot(&mut self, dimension: Dimension) -> &mut Option<String> {
        match dimension {
            Dimension::Age => &mut self.age,
            Dimension::Government => &mut self.government,
            Dimension::Religion => &mut self.religion,
            Dimension::Country => &mut self.country,
            Dimension::Estate => &mut self.estate,
            Dimension::Culture => &mut self.culture,
        }
    }
}

/// Outcome of the structural filter for one mover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    /// Dimensions that rejected the mover, in [`Dimension::ALL`] order.
    Fail(Vec<Dimension>),
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    pub fn failed(&self) -> &[Dimension] {
        match self {
            Verdict::Pass => &[],
            Verdict::Fail(dimensions) => dimensions,
        }
    }
}

/// Classifies a mover against every dimension.
///
/// Whether a failing mover is hidden or shown dimmed is up to the caller.
pub fn classify(mover: &Mover, filters: &FilterState, data: &ReferenceData) -> Verdict {
    let failed: Vec<Dimension> = Dimension::ALL
        .into_iter()
        .filter(|&dimension| !dimension_passes(dimension, mover, filters, data))
        .collect();

    if failed.is_empty() {
        Verdict::Pass
    } else {
        Verdict::Fail(failed)
    }
}

pub fn passes(mover: &Mover, filters: &FilterState, data: &ReferenceData) -> bool {
    Dimension::ALL
        .into_iter()
        .all(|dimension| dimension_passes(dimension, mover, filters, data))
}

/// Verdict for a single dimension.
pub fn dimension_passes(
    dimension: Dimension,
    mover: &Mover,
    filters: &FilterState,
    data: &ReferenceData,
) -> bool {
    let Some(selected) = filters.get(dimension) else {
        return true;
    };
    let reqs = &mover.requirements;

    match dimension {
        Dimension::Age => age_unlocked(reqs.age.as_deref(), Some(selected), data),
        Dimension::Government => allow_list_admits(&reqs.government, selected),
        Dimension::Religion => religion_admits(reqs, selected, data),
        Dimension::Country => country_admits(reqs, selected),
        // Estate scoping keeps privileges of that estate and nothing else
        Dimension::Estate => mover.is_privilege() && mover.estate.as_deref() == Some(selected),
        Dimension::Culture => allow_list_admits(&reqs.culture, selected),
    }
}

fn allow_list_admits(allowed: &[String], selected: &str) -> bool {
    allowed.is_empty() || allowed.iter().any(|id| id == selected)
}

fn religion_admits(reqs: &Requirements, selected: &str, data: &ReferenceData) -> bool {
    if reqs.religion.is_empty() && reqs.religion_group.is_empty() {
        return true;
    }
    if reqs.religion.iter().any(|id| id == selected) {
        return true;
    }
    match data.religion_group(selected) {
        Some(group) => reqs.religion_group.iter().any(|g| g == group),
        None => false,
    }
}

fn country_admits(reqs: &Requirements, selected: &str) -> bool {
    if reqs.excluded_countries.iter().any(|tag| tag == selected) {
        return false;
    }
    allow_list_admits(&reqs.country, selected)
}

/// Case-insensitive substring search over name, type, category and source.
pub fn matches_search(mover: &Mover, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    [
        Some(mover.name.as_str()),
        Some(mover.mover_type.label()),
        Some(mover.mover_type.id()),
        mover.category_name.as_deref(),
        mover.source.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Structural filter followed by search: whether the mover is listed.
pub fn is_visible(mover: &Mover, filters: &FilterState, data: &ReferenceData) -> bool {
    passes(mover, filters, data) && matches_search(mover, &filters.search)
}
