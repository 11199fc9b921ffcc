use eu5data::{
    prettify_id, Age, Country, Direction, Estate, Government, Mover, MoverType, ReferenceData,
    ReferenceTables, Religion, Requirements, Strength, ValueEffect, ValuePair, ValueSide,
};
use std::collections::HashMap;

pub struct ReferenceDataBuilder {
    tables: ReferenceTables,
}

impl ReferenceDataBuilder {
    pub fn new() -> Self {
        Self {
            tables: ReferenceTables::default(),
        }
    }

    /// Six ages, a handful of governments, religions, countries and estates,
    /// and three value pairs (one locked until the Reformation).
    pub fn standard() -> Self {
        Self::new()
            .with_age("age_1_traditions", 1)
            .with_age("age_2_renaissance", 2)
            .with_age("age_3_discovery", 3)
            .with_age("age_4_reformation", 4)
            .with_age("age_5_absolutism", 5)
            .with_age("age_6_revolutions", 6)
            .with_government("monarchy")
            .with_government("republic")
            .with_government("theocracy")
            .with_religion("catholic", "Catholic", "christian")
            .with_religion("orthodox", "Orthodox", "christian")
            .with_religion("sunni", "Sunni", "muslim")
            .with_country("FRA", "France", Some("catholic"))
            .with_country("ENG", "England", Some("catholic"))
            .with_country("CAS", "Castile", None)
            .with_country("TUR", "Ottomans", Some("sunni"))
            .with_estate("clergy_estate")
            .with_estate("nobility_estate")
            .with_estate("burghers_estate")
            .with_value_pair("centralization_vs_decentralization", None)
            .with_value_pair("land_vs_naval", None)
            .with_value_pair("mercantilism_vs_free_trade", Some("age_4_reformation"))
    }

    /// Adds a pair whose poles are read off the `left_vs_right` id.
    pub fn with_value_pair(mut self, id: &str, age_requirement: Option<&str>) -> Self {
        let (left, right) = id.split_once("_vs_").unwrap_or((id, id));
        let side = |pole: &str| ValueSide {
            id: pole.to_string(),
            name: prettify_id(pole),
        };
        self.tables.values.insert(
            id.to_string(),
            ValuePair {
                id: id.to_string(),
                left: side(left),
                right: side(right),
                age_requirement: age_requirement.map(|s| s.to_string()),
                conditions: None,
            },
        );
        self
    }

    pub fn with_age(mut self, id: &str, rank: u32) -> Self {
        self.tables.ages.insert(
            id.to_string(),
            Age {
                id: id.to_string(),
                name: prettify_id(id),
                year: 1337 + 50 * rank as i32,
                rank,
            },
        );
        self
    }

    pub fn with_government(mut self, id: &str) -> Self {
        self.tables.governments.insert(
            id.to_string(),
            Government {
                id: id.to_string(),
                name: prettify_id(id),
                power_type: None,
            },
        );
        self
    }

    pub fn with_religion(mut self, id: &str, name: &str, group: &str) -> Self {
        self.tables.religions.insert(
            id.to_string(),
            Religion {
                id: id.to_string(),
                name: name.to_string(),
                group: group.to_string(),
            },
        );
        self
    }

    pub fn with_country(mut self, tag: &str, name: &str, religion: Option<&str>) -> Self {
        self.tables.countries.insert(
            tag.to_string(),
            Country {
                tag: tag.to_string(),
                name: name.to_string(),
                religion: religion.map(|s| s.to_string()),
                culture: None,
            },
        );
        self
    }

    pub fn with_estate(mut self, id: &str) -> Self {
        self.tables.estates.insert(
            id.to_string(),
            Estate {
                id: id.to_string(),
                name: prettify_id(id.trim_end_matches("_estate")),
            },
        );
        self
    }

    pub fn with_mover(mut self, mover: Mover) -> Self {
        self.tables.movers.push(mover);
        self
    }

    pub fn build(self) -> ReferenceData {
        ReferenceData::from_tables(self.tables)
    }
}

impl Default for ReferenceDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct MoverBuilder {
    mover: Mover,
}

fn owned(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

impl MoverBuilder {
    pub fn new(id: &str, mover_type: MoverType) -> Self {
        Self {
            mover: Mover {
                id: id.to_string(),
                name: prettify_id(id),
                mover_type,
                category: None,
                category_name: None,
                estate: None,
                estate_name: None,
                source: None,
                requirements: Requirements::default(),
                effects: Vec::new(),
                is_major: false,
                is_unique: false,
                is_one_time: mover_type.is_one_time(),
                estate_preferences: Vec::new(),
                other: HashMap::new(),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.mover.name = name.to_string();
        self
    }

    pub fn effect(self, value_pair: &str, direction: Direction, strength: f64) -> Self {
        self.push_effect(value_pair, direction, Strength::Numeric(strength))
    }

    pub fn unparsed_effect(self, value_pair: &str, direction: Direction, raw: &str) -> Self {
        self.push_effect(value_pair, direction, Strength::Unparsed(raw.to_string()))
    }

    fn push_effect(mut self, value_pair: &str, direction: Direction, strength: Strength) -> Self {
        self.mover.effects.push(ValueEffect {
            value_pair: value_pair.to_string(),
            direction,
            target: None,
            strength,
        });
        self
    }

    pub fn requires_age(mut self, age: &str) -> Self {
        self.mover.requirements.age = Some(age.to_string());
        self
    }

    pub fn governments(mut self, ids: &[&str]) -> Self {
        self.mover.requirements.government = owned(ids);
        self
    }

    pub fn religions(mut self, ids: &[&str]) -> Self {
        self.mover.requirements.religion = owned(ids);
        self
    }

    pub fn religion_groups(mut self, ids: &[&str]) -> Self {
        self.mover.requirements.religion_group = owned(ids);
        self
    }

    pub fn countries(mut self, tags: &[&str]) -> Self {
        self.mover.requirements.country = owned(tags);
        self
    }

    pub fn excluded_countries(mut self, tags: &[&str]) -> Self {
        self.mover.requirements.excluded_countries = owned(tags);
        self
    }

    pub fn cultures(mut self, ids: &[&str]) -> Self {
        self.mover.requirements.culture = owned(ids);
        self
    }

    pub fn has_reform(mut self, ids: &[&str]) -> Self {
        self.mover.requirements.has_reform = owned(ids);
        self
    }

    pub fn estate(mut self, estate: &str) -> Self {
        self.mover.estate = Some(estate.to_string());
        self
    }

    pub fn category_name(mut self, name: &str) -> Self {
        self.mover.category_name = Some(name.to_string());
        self
    }

    pub fn source(mut self, source: &str) -> Self {
        self.mover.source = Some(source.to_string());
        self
    }

    pub fn major(mut self) -> Self {
        self.mover.is_major = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.mover.is_unique = true;
        self
    }

    pub fn estate_preferences(mut self, estates: &[&str]) -> Self {
        self.mover.estate_preferences = owned(estates);
        self
    }

    pub fn build(self) -> Mover {
        self.mover
    }
}
