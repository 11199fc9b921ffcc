use serde::{Deserialize, Serialize};

/// Group assigned when the game files give none.
pub const UNKNOWN_GROUP: &str = "unknown";

fn unknown_group() -> String {
    UNKNOWN_GROUP.to_string()
}

/// Represents a religion definition.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Religion {
    #[serde(default)]
    pub id: String,

    pub name: String,

    /// Religion group id (e.g. `christian`). Movers may require a group
    /// instead of a specific religion.
    #[serde(default = "unknown_group")]
    pub group: String,
}

impl Religion {
    pub fn has_known_group(&self) -> bool {
        self.group != UNKNOWN_GROUP
    }
}
