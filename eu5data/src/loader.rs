//! One-time bulk load of the seven reference tables.
//!
//! The files are independent, so they are read and parsed in parallel and
//! joined before anything else runs. A single failure fails the whole load.

use crate::ages::{self, Age};
use crate::countries::Country;
use crate::error::LoadError;
use crate::estates::Estate;
use crate::governments::Government;
use crate::movers::{Mover, MoverType};
use crate::religions::Religion;
use crate::values::ValuePair;
use indexmap::IndexMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::path::Path;

/// The JSON files making up a data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Values,
    Ages,
    Governments,
    Religions,
    Countries,
    Estates,
    Movers,
}

impl Resource {
    pub const ALL: [Resource; 7] = [
        Resource::Values,
        Resource::Ages,
        Resource::Governments,
        Resource::Religions,
        Resource::Countries,
        Resource::Estates,
        Resource::Movers,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Resource::Values => "values.json",
            Resource::Ages => "ages.json",
            Resource::Governments => "governments.json",
            Resource::Religions => "religions.json",
            Resource::Countries => "countries.json",
            Resource::Estates => "estates.json",
            Resource::Movers => "movers.json",
        }
    }

    pub fn from_file_name(name: &str) -> Option<Resource> {
        Resource::ALL.into_iter().find(|r| r.file_name() == name)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Raw tables as they come off disk, keyed by id (tag for countries).
///
/// Value pairs keep their file order, which is the order the picker shows.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    pub values: IndexMap<String, ValuePair>,
    pub ages: HashMap<String, Age>,
    pub governments: HashMap<String, Government>,
    pub religions: HashMap<String, Religion>,
    pub countries: HashMap<String, Country>,
    pub estates: HashMap<String, Estate>,
    pub movers: Vec<Mover>,
}

/// Immutable reference data shared by every query.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    values: IndexMap<String, ValuePair>,
    ages: HashMap<String, Age>,
    governments: HashMap<String, Government>,
    religions: HashMap<String, Religion>,
    countries: HashMap<String, Country>,
    estates: HashMap<String, Estate>,
    movers: Vec<Mover>,
}

/// Table sizes and mover counts per category.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetStats {
    pub values: usize,
    pub ages: usize,
    pub governments: usize,
    pub religions: usize,
    pub countries: usize,
    pub estates: usize,
    pub movers: usize,
    /// Most common first.
    pub by_type: Vec<(MoverType, usize)>,
}

/// Fills empty ids from the map keys.
fn fill_ids<'a, T: 'a>(
    entries: impl Iterator<Item = (&'a String, &'a mut T)>,
    id_of: impl Fn(&mut T) -> &mut String,
) {
    for (key, item) in entries {
        let id = id_of(item);
        if id.is_empty() {
            *id = key.clone();
        }
    }
}

impl ReferenceData {
    pub fn from_tables(mut tables: ReferenceTables) -> Self {
        fill_ids(tables.values.iter_mut(), |v| &mut v.id);
        fill_ids(tables.ages.iter_mut(), |a| &mut a.id);
        fill_ids(tables.governments.iter_mut(), |g| &mut g.id);
        fill_ids(tables.religions.iter_mut(), |r| &mut r.id);
        fill_ids(tables.countries.iter_mut(), |c| &mut c.tag);
        fill_ids(tables.estates.iter_mut(), |e| &mut e.id);
        ages::assign_ranks(&mut tables.ages);

        Self {
            values: tables.values,
            ages: tables.ages,
            governments: tables.governments,
            religions: tables.religions,
            countries: tables.countries,
            estates: tables.estates,
            movers: tables.movers,
        }
    }

    pub fn value_pair(&self, id: &str) -> Option<&ValuePair> {
        self.values.get(id)
    }

    /// Value pairs in file order.
    pub fn values(&self) -> impl Iterator<Item = &ValuePair> {
        self.values.values()
    }

    pub fn age(&self, id: &str) -> Option<&Age> {
        self.ages.get(id)
    }

    pub fn age_rank(&self, id: &str) -> Option<u32> {
        self.ages.get(id).map(|age| age.rank)
    }

    /// Ages in rank order.
    pub fn ages(&self) -> Vec<&Age> {
        let mut ages: Vec<&Age> = self.ages.values().collect();
        ages.sort_by(|a, b| a.rank.cmp(&b.rank).then_with(|| a.id.cmp(&b.id)));
        ages
    }

    pub fn government(&self, id: &str) -> Option<&Government> {
        self.governments.get(id)
    }

    pub fn governments(&self) -> Vec<&Government> {
        sorted_by_name(self.governments.values(), |g| &g.name)
    }

    pub fn religion(&self, id: &str) -> Option<&Religion> {
        self.religions.get(id)
    }

    pub fn religions(&self) -> Vec<&Religion> {
        sorted_by_name(self.religions.values(), |r| &r.name)
    }

    /// Group of a religion. `None` when the religion is unknown or the
    /// extraction tool could not place it in a group.
    pub fn religion_group(&self, id: &str) -> Option<&str> {
        self.religions
            .get(id)
            .filter(|r| r.has_known_group())
            .map(|r| r.group.as_str())
    }

    pub fn country(&self, tag: &str) -> Option<&Country> {
        self.countries.get(tag)
    }

    pub fn countries(&self) -> Vec<&Country> {
        sorted_by_name(self.countries.values(), |c| &c.name)
    }

    pub fn estate(&self, id: &str) -> Option<&Estate> {
        self.estates.get(id)
    }

    pub fn estates(&self) -> Vec<&Estate> {
        sorted_by_name(self.estates.values(), |e| &e.name)
    }

    pub fn movers(&self) -> &[Mover] {
        &self.movers
    }

    /// Every culture id mentioned by a country or a mover requirement.
    pub fn cultures(&self) -> Vec<String> {
        let mut cultures = BTreeSet::new();
        for country in self.countries.values() {
            if let Some(culture) = &country.culture {
                cultures.insert(culture.clone());
            }
        }
        for mover in &self.movers {
            cultures.extend(mover.requirements.culture.iter().cloned());
        }
        cultures.into_iter().collect()
    }

    pub fn stats(&self) -> DatasetStats {
        let mut counts: HashMap<MoverType, usize> = HashMap::new();
        for mover in &self.movers {
            *counts.entry(mover.mover_type).or_default() += 1;
        }
        let mut by_type: Vec<_> = counts.into_iter().collect();
        by_type.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.id().cmp(b.0.id())));

        DatasetStats {
            values: self.values.len(),
            ages: self.ages.len(),
            governments: self.governments.len(),
            religions: self.religions.len(),
            countries: self.countries.len(),
            estates: self.estates.len(),
            movers: self.movers.len(),
            by_type,
        }
    }

    /// Counts references that point at nothing.
    ///
    /// Dangling ids are tolerated by every query; this only reports them.
    pub fn validate(&self) -> usize {
        let mut dangling = 0;

        for mover in &self.movers {
            for effect in &mover.effects {
                if !self.values.contains_key(&effect.value_pair) {
                    log::debug!(
                        "Mover {} references unknown value pair {}",
                        mover.id,
                        effect.value_pair
                    );
                    dangling += 1;
                }
            }
            if let Some(age) = &mover.requirements.age {
                if !self.ages.contains_key(age) {
                    log::debug!("Mover {} requires unknown age {}", mover.id, age);
                    dangling += 1;
                }
            }
        }

        for pair in self.values.values() {
            if let Some(age) = &pair.age_requirement {
                if !self.ages.contains_key(age) {
                    log::debug!("Value pair {} requires unknown age {}", pair.id, age);
                    dangling += 1;
                }
            }
        }

        if dangling > 0 {
            log::warn!("{} dangling references in reference data", dangling);
        }

        dangling
    }
}

fn sorted_by_name<'a, T>(
    items: impl Iterator<Item = &'a T>,
    name: impl Fn(&T) -> &str,
) -> Vec<&'a T> {
    let mut items: Vec<&T> = items.collect();
    items.sort_by(|a, b| name(a).cmp(name(b)));
    items
}

fn read_table<T: DeserializeOwned>(data_dir: &Path, resource: Resource) -> Result<T, LoadError> {
    let path = data_dir.join(resource.file_name());
    if !path.exists() {
        return Err(LoadError::Missing(path));
    }

    let text = std::fs::read_to_string(&path).map_err(|source| LoadError::Io {
        path: path.clone(),
        source,
    })?;

    // The extraction tool writes plain UTF-8, but hand-edited files may carry a BOM
    serde_json::from_str(text.trim_start_matches('\u{feff}'))
        .map_err(|source| LoadError::Parse { resource, source })
}

/// Loads all seven tables from `data_dir`.
pub fn load_reference_data(data_dir: &Path) -> Result<ReferenceData, LoadError> {
    let ((values, ages), ((governments, religions), ((countries, estates), movers))) =
        rayon::join(
            || {
                rayon::join(
                    || read_table(data_dir, Resource::Values),
                    || read_table(data_dir, Resource::Ages),
                )
            },
            || {
                rayon::join(
                    || {
                        rayon::join(
                            || read_table(data_dir, Resource::Governments),
                            || read_table(data_dir, Resource::Religions),
                        )
                    },
                    || {
                        rayon::join(
                            || {
                                rayon::join(
                                    || read_table(data_dir, Resource::Countries),
                                    || read_table(data_dir, Resource::Estates),
                                )
                            },
                            || read_table(data_dir, Resource::Movers),
                        )
                    },
                )
            },
        );

    let tables = ReferenceTables {
        values: values?,
        ages: ages?,
        governments: governments?,
        religions: religions?,
        countries: countries?,
        estates: estates?,
        movers: movers?,
    };

    let data = ReferenceData::from_tables(tables);
    log::debug!(
        "Loaded {} value pairs, {} movers from {:?}",
        data.values.len(),
        data.movers.len(),
        data_dir
    );

    Ok(data)
}
