use serde::{Deserialize, Serialize};

/// Represents a country definition from the game setup files.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Country {
    /// Three letter tag, e.g. `FRA`.
    #[serde(default)]
    pub tag: String,

    pub name: String,

    /// Starting religion id (`religion_definition`).
    #[serde(default, deserialize_with = "crate::de::opt_id")]
    pub religion: Option<String>,

    /// Starting culture id (`culture_definition`).
    #[serde(default, deserialize_with = "crate::de::opt_id")]
    pub culture: Option<String>,
}
