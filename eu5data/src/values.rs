use serde::{Deserialize, Serialize};
use std::fmt;

/// Which pole of a value pair an effect pushes toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub const BOTH: [Direction; 2] = [Direction::Left, Direction::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One pole of a value pair (e.g. "Centralization").
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ValueSide {
    #[serde(default)]
    pub id: String,
    pub name: String,
}

/// A societal value axis from `values.json`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ValuePair {
    /// Key such as `centralization_vs_decentralization`.
    #[serde(default)]
    pub id: String,

    pub left: ValueSide,
    pub right: ValueSide,

    /// Age id that unlocks this pair, if it is not available from the start.
    #[serde(default, deserialize_with = "crate::de::opt_id")]
    pub age_requirement: Option<String>,

    /// Raw text of the `allow` block for pairs with extra unlock conditions.
    #[serde(default)]
    pub conditions: Option<String>,
}

impl ValuePair {
    pub fn pole(&self, direction: Direction) -> &ValueSide {
        match direction {
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} vs {}", self.left.name, self.right.name)
    }

    pub fn has_conditions(&self) -> bool {
        self.conditions.as_deref().is_some_and(|c| !c.is_empty())
    }
}
