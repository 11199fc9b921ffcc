//! Value movers from `movers.json`.
//!
//! A mover is anything in the game that pushes one or more societal values
//! every month (laws, reforms, privileges, traits, ...) or once (agendas,
//! event choices).

use crate::values::Direction;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Closed set of mover categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoverType {
    Law,
    Reform,
    Privilege,
    ReligiousAspect,
    Trait,
    Building,
    ParliamentIssue,
    EstateModifier,
    CabinetAction,
    Regency,
    EmploymentSystem,
    ReligiousSchool,
    Disaster,
    AutoModifier,
    ParliamentAgenda,
    EventChoice,
    InternationalOrg,
    GenericAction,
    Mission,
    Advance,
    SubjectType,
}

impl MoverType {
    pub const ALL: [MoverType; 21] = [
        MoverType::Law,
        MoverType::Reform,
        MoverType::Privilege,
        MoverType::ReligiousAspect,
        MoverType::Trait,
        MoverType::Building,
        MoverType::ParliamentIssue,
        MoverType::EstateModifier,
        MoverType::CabinetAction,
        MoverType::Regency,
        MoverType::EmploymentSystem,
        MoverType::ReligiousSchool,
        MoverType::Disaster,
        MoverType::AutoModifier,
        MoverType::ParliamentAgenda,
        MoverType::EventChoice,
        MoverType::InternationalOrg,
        MoverType::GenericAction,
        MoverType::Mission,
        MoverType::Advance,
        MoverType::SubjectType,
    ];

    /// Canonical id as written in `movers.json`.
    pub fn id(self) -> &'static str {
        match self {
            MoverType::Law => "law",
            MoverType::Reform => "reform",
            MoverType::Privilege => "privilege",
            MoverType::ReligiousAspect => "religious_aspect",
            MoverType::Trait => "trait",
            MoverType::Building => "building",
            MoverType::ParliamentIssue => "parliament_issue",
            MoverType::EstateModifier => "estate_modifier",
            MoverType::CabinetAction => "cabinet_action",
            MoverType::Regency => "regency",
            MoverType::EmploymentSystem => "employment_system",
            MoverType::ReligiousSchool => "religious_school",
            MoverType::Disaster => "disaster",
            MoverType::AutoModifier => "auto_modifier",
            MoverType::ParliamentAgenda => "parliament_agenda",
            MoverType::EventChoice => "event_choice",
            MoverType::InternationalOrg => "international_org",
            MoverType::GenericAction => "generic_action",
            MoverType::Mission => "mission",
            MoverType::Advance => "advance",
            MoverType::SubjectType => "subject_type",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MoverType::Law => "Law",
            MoverType::Reform => "Government Reform",
            MoverType::Privilege => "Estate Privilege",
            MoverType::ReligiousAspect => "Religious Aspect",
            MoverType::Trait => "Ruler Trait",
            MoverType::Building => "Building",
            MoverType::ParliamentIssue => "Parliament Issue",
            MoverType::EstateModifier => "Estate Modifier",
            MoverType::CabinetAction => "Cabinet Action",
            MoverType::Regency => "Regency",
            MoverType::EmploymentSystem => "Employment System",
            MoverType::ReligiousSchool => "Religious School",
            MoverType::Disaster => "Disaster",
            MoverType::AutoModifier => "Automatic Modifier",
            MoverType::ParliamentAgenda => "Parliament Agenda",
            MoverType::EventChoice => "Event Choice",
            MoverType::InternationalOrg => "International Organization",
            MoverType::GenericAction => "Action",
            MoverType::Mission => "Mission",
            MoverType::Advance => "Advance",
            MoverType::SubjectType => "Subject Type",
        }
    }

    /// One-time effects rather than a monthly drift.
    pub fn is_one_time(self) -> bool {
        matches!(self, MoverType::ParliamentAgenda | MoverType::EventChoice)
    }
}

impl fmt::Display for MoverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Monthly push of an effect.
///
/// The extraction tool maps named strength constants to numbers; anything it
/// could not map is kept as the original text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Strength {
    Numeric(f64),
    Unparsed(String),
}

impl Strength {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Strength::Numeric(v) => Some(*v),
            Strength::Unparsed(_) => None,
        }
    }

    /// Numeric value for ordering; unparsed strengths count as zero.
    pub fn sort_key(&self) -> f64 {
        self.as_f64().unwrap_or(0.0)
    }

    pub fn display(&self, precision: usize) -> String {
        match self {
            Strength::Numeric(v) => format!("{:.*}", precision, v),
            Strength::Unparsed(raw) if raw.is_empty() => "?".to_string(),
            Strength::Unparsed(raw) => raw.clone(),
        }
    }
}

/// Wire shape of a value effect: nullable `strength` plus `strength_raw`.
#[derive(Deserialize)]
struct RawValueEffect {
    value_pair: String,
    direction: Direction,
    #[serde(default, deserialize_with = "crate::de::opt_id")]
    target: Option<String>,
    #[serde(default)]
    strength: Option<Value>,
    #[serde(default)]
    strength_raw: Option<Value>,
}

fn raw_text(value: Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

impl From<RawValueEffect> for ValueEffect {
    fn from(raw: RawValueEffect) -> Self {
        let strength = match raw.strength {
            Some(Value::Number(n)) => match n.as_f64() {
                Some(v) if v.is_finite() => Strength::Numeric(v),
                _ => Strength::Unparsed(n.to_string()),
            },
            Some(Value::String(s)) => match s.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => Strength::Numeric(v),
                _ => Strength::Unparsed(s),
            },
            _ => Strength::Unparsed(raw_text(raw.strength_raw)),
        };

        ValueEffect {
            value_pair: raw.value_pair,
            direction: raw.direction,
            target: raw.target,
            strength,
        }
    }
}

/// One push of a mover on one value pair.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(from = "RawValueEffect")]
pub struct ValueEffect {
    pub value_pair: String,
    pub direction: Direction,
    /// Pole id the effect moves toward (e.g. `decentralization`).
    pub target: Option<String>,
    pub strength: Strength,
}

/// Conditions gating a mover.
///
/// Empty sets mean "unconstrained". Only age, government, religion, country
/// and culture take part in filtering; the rest are shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Requirements {
    /// Minimum age id.
    #[serde(default, deserialize_with = "crate::de::opt_id")]
    pub age: Option<String>,

    #[serde(default, deserialize_with = "crate::de::scoped_id_set")]
    pub government: Vec<String>,

    #[serde(default, deserialize_with = "crate::de::scoped_id_set")]
    pub religion: Vec<String>,

    /// Religion groups accepted when the religion itself is not listed.
    #[serde(default, deserialize_with = "crate::de::scoped_id_set")]
    pub religion_group: Vec<String>,

    /// Country tag allow-list.
    #[serde(default, deserialize_with = "crate::de::scoped_id_set")]
    pub country: Vec<String>,

    /// Country tag deny-list (`NOT = { tag = X }`).
    #[serde(default, deserialize_with = "crate::de::scoped_id_set")]
    pub excluded_countries: Vec<String>,

    #[serde(default, deserialize_with = "crate::de::scoped_id_set")]
    pub culture: Vec<String>,

    #[serde(default, deserialize_with = "crate::de::scoped_id_set")]
    pub culture_group: Vec<String>,

    #[serde(default, deserialize_with = "crate::de::scoped_id_set")]
    pub excluded_culture_groups: Vec<String>,

    #[serde(default, deserialize_with = "crate::de::id_set")]
    pub estate: Vec<String>,

    #[serde(default, deserialize_with = "crate::de::id_set")]
    pub has_reform: Vec<String>,

    #[serde(default, deserialize_with = "crate::de::id_set")]
    pub excluded_reforms: Vec<String>,

    #[serde(default, deserialize_with = "crate::de::id_set")]
    pub has_privilege: Vec<String>,

    #[serde(default, deserialize_with = "crate::de::id_set")]
    pub has_advance: Vec<String>,

    /// Requirements came from an `OR` block, so any one of them may suffice.
    #[serde(default, deserialize_with = "crate::de::flag")]
    pub has_or_condition: bool,

    /// Catch-all for other fields (`related_value`, ...).
    #[serde(flatten, skip_serializing)]
    pub other: HashMap<String, IgnoredAny>,
}

impl Requirements {
    pub fn is_unconstrained(&self) -> bool {
        self.age.is_none()
            && self.government.is_empty()
            && self.religion.is_empty()
            && self.religion_group.is_empty()
            && self.country.is_empty()
            && self.excluded_countries.is_empty()
            && self.culture.is_empty()
    }
}

/// A game item that moves societal values.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Mover {
    pub id: String,

    pub name: String,

    #[serde(rename = "type")]
    pub mover_type: MoverType,

    /// Law category key (laws) or building/trait category.
    #[serde(default, deserialize_with = "crate::de::opt_id")]
    pub category: Option<String>,

    #[serde(default, deserialize_with = "crate::de::opt_id")]
    pub category_name: Option<String>,

    /// Owning estate id (privileges, parliament issues and agendas).
    #[serde(default, deserialize_with = "crate::de::opt_id")]
    pub estate: Option<String>,

    #[serde(default, deserialize_with = "crate::de::opt_id")]
    pub estate_name: Option<String>,

    /// File stem the mover was extracted from.
    #[serde(default, deserialize_with = "crate::de::opt_id")]
    pub source: Option<String>,

    #[serde(default)]
    pub requirements: Requirements,

    #[serde(default, rename = "value_effects")]
    pub effects: Vec<ValueEffect>,

    #[serde(default, deserialize_with = "crate::de::flag")]
    pub is_major: bool,

    #[serde(default, deserialize_with = "crate::de::flag")]
    pub is_unique: bool,

    #[serde(default, deserialize_with = "crate::de::flag")]
    pub is_one_time: bool,

    /// Estates that favour this law.
    #[serde(default, deserialize_with = "crate::de::id_set")]
    pub estate_preferences: Vec<String>,

    #[serde(flatten, skip_serializing)]
    pub other: HashMap<String, IgnoredAny>,
}

impl Mover {
    /// First effect on `value_pair` toward `direction`.
    pub fn effect_for(&self, value_pair: &str, direction: Direction) -> Option<&ValueEffect> {
        self.effects
            .iter()
            .find(|e| e.value_pair == value_pair && e.direction == direction)
    }

    pub fn is_privilege(&self) -> bool {
        self.mover_type == MoverType::Privilege
    }
}
