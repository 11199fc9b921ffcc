use serde::{Deserialize, Serialize};

/// A government type (monarchy, republic, ...).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Government {
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// Government power resource (e.g. `legitimacy`).
    #[serde(default)]
    pub power_type: Option<String>,
}
