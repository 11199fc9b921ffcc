//! View model for one selected value pair.
//!
//! Everything a presentation layer needs to render the two mover columns:
//! counts, ordered (and possibly grouped) items with their display fields,
//! and a summary of the active filters. Failing movers are hidden; the
//! `matching`/`total` counts tell the reader how much was filtered away.

use crate::arrange::{arrange, group_by_type};
use crate::availability::is_value_pair_available;
use crate::config::ViewerConfig;
use crate::filter::{is_visible, Dimension, FilterState, SortMode};
use crate::projection::{project, split_for_display, Projected, StrengthTier};
use eu5data::{prettify_id, Direction, Mover, MoverType, ReferenceData, ValueEffect};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ValueView {
    pub id: String,
    pub name: String,
    pub left_name: String,
    pub right_name: String,
    /// Unlocked at the filtered age.
    pub available: bool,
    /// Extra unlock conditions, as raw script text.
    pub conditions: Option<String>,
    pub left: DirectionView,
    pub right: DirectionView,
    pub active_filters: Vec<ActiveFilter>,
    pub search: Option<String>,
    pub sort: SortMode,
}

#[derive(Debug, Clone, Serialize)]
pub struct DirectionView {
    pub direction: Direction,
    pub pole: String,
    /// Movers left after filters and search.
    pub matching: usize,
    /// Movers pushing this direction before any filtering.
    pub total: usize,
    pub items: Arrangement,
}

impl DirectionView {
    pub fn hidden(&self) -> usize {
        self.total - self.matching
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "layout", content = "entries", rename_all = "snake_case")]
pub enum Arrangement {
    Grouped(Vec<GroupView>),
    Flat(Vec<ItemView>),
}

impl Arrangement {
    pub fn len(&self) -> usize {
        match self {
            Arrangement::Grouped(groups) => groups.iter().map(|g| g.items.len()).sum(),
            Arrangement::Flat(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Items in display order, ignoring grouping.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &ItemView> + '_> {
        match self {
            Arrangement::Grouped(groups) => Box::new(groups.iter().flat_map(|g| g.items.iter())),
            Arrangement::Flat(items) => Box::new(items.iter()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupView {
    pub mover_type: MoverType,
    pub label: String,
    pub items: Vec<ItemView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemView {
    pub id: String,
    pub name: String,
    pub mover_type: MoverType,
    pub type_label: String,
    pub strength: String,
    pub tier: StrengthTier,
    pub source: Option<String>,
    pub category: Option<String>,
    pub requirements: Vec<RequirementTag>,
    pub other_effects: OtherEffectsSummary,
    pub prerequisites: Vec<String>,
    pub one_time: bool,
    pub major: bool,
    pub unique: bool,
    /// Names of the estates that favour this law.
    pub estate_preferences: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    Age,
    Government,
    Religion,
    ReligionGroup,
    Country,
    ExcludedCountry,
    Culture,
    Estate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequirementTag {
    pub kind: TagKind,
    pub label: String,
}

/// "Also affects" list, capped for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OtherEffectsSummary {
    pub shown: Vec<String>,
    pub more: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveFilter {
    pub dimension: Dimension,
    pub label: String,
}

/// One row of the value picker.
#[derive(Debug, Clone, Serialize)]
pub struct ValueSummary {
    pub id: String,
    pub name: String,
    pub available: bool,
    pub left_matching: usize,
    pub right_matching: usize,
}

impl ValueView {
    /// Builds the view for `value_pair`. `None` when the pair id is unknown.
    pub fn build(
        data: &ReferenceData,
        value_pair: &str,
        filters: &FilterState,
        config: &ViewerConfig,
    ) -> Option<ValueView> {
        let pair = data.value_pair(value_pair)?;
        let ctx = Context {
            data,
            value_pair,
            config,
        };

        Some(ValueView {
            id: pair.id.clone(),
            name: pair.display_name(),
            left_name: pair.left.name.clone(),
            right_name: pair.right.name.clone(),
            available: is_value_pair_available(pair, filters.get(Dimension::Age), data),
            conditions: pair.conditions.clone().filter(|c| !c.is_empty()),
            left: ctx.direction_view(Direction::Left, &pair.left.name, filters),
            right: ctx.direction_view(Direction::Right, &pair.right.name, filters),
            active_filters: active_filters(filters, data),
            search: filters.search_term().map(String::from),
            sort: filters.sort,
        })
    }

    pub fn direction(&self, direction: Direction) -> &DirectionView {
        match direction {
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }
}

/// Per-pair availability and matching counts under the current filters.
pub fn overview(data: &ReferenceData, filters: &FilterState) -> Vec<ValueSummary> {
    data.values()
        .map(|pair| {
            let matching = |direction| {
                project(data.movers(), &pair.id, direction)
                    .iter()
                    .filter(|p| is_visible(p.mover, filters, data))
                    .count()
            };
            ValueSummary {
                id: pair.id.clone(),
                name: pair.display_name(),
                available: is_value_pair_available(pair, filters.get(Dimension::Age), data),
                left_matching: matching(Direction::Left),
                right_matching: matching(Direction::Right),
            }
        })
        .collect()
}

/// Set filters with display names. Ids missing from their table are dropped.
pub fn active_filters(filters: &FilterState, data: &ReferenceData) -> Vec<ActiveFilter> {
    Dimension::ALL
        .into_iter()
        .filter_map(|dimension| {
            let id = filters.get(dimension)?;
            let label = match dimension {
                Dimension::Age => data.age(id).map(|a| a.name.clone()),
                Dimension::Government => data.government(id).map(|g| g.name.clone()),
                Dimension::Religion => data.religion(id).map(|r| r.name.clone()),
                Dimension::Country => data.country(id).map(|c| c.name.clone()),
                Dimension::Estate => data.estate(id).map(|e| e.name.clone()),
                // No culture table; the id is the only name there is
                Dimension::Culture => Some(prettify_id(id)),
            }?;
            Some(ActiveFilter { dimension, label })
        })
        .collect()
}

struct Context<'a> {
    data: &'a ReferenceData,
    value_pair: &'a str,
    config: &'a ViewerConfig,
}

impl Context<'_> {
    fn direction_view(&self, direction: Direction, pole: &str, filters: &FilterState) -> DirectionView {
        let projected = project(self.data.movers(), self.value_pair, direction);
        let total = projected.len();

        let visible: Vec<Projected> = projected
            .into_iter()
            .filter(|p| is_visible(p.mover, filters, self.data))
            .collect();
        let matching = visible.len();

        let arranged = arrange(visible, filters.sort);
        let items = if filters.sort.is_grouped() {
            Arrangement::Grouped(
                group_by_type(arranged)
                    .into_iter()
                    .map(|group| GroupView {
                        mover_type: group.mover_type,
                        label: group.mover_type.label().to_string(),
                        items: group.items.iter().map(|p| self.item_view(p)).collect(),
                    })
                    .collect(),
            )
        } else {
            Arrangement::Flat(arranged.iter().map(|p| self.item_view(p)).collect())
        };

        DirectionView {
            direction,
            pole: pole.to_string(),
            matching,
            total,
            items,
        }
    }

    fn item_view(&self, projected: &Projected) -> ItemView {
        let mover = projected.mover;
        ItemView {
            id: mover.id.clone(),
            name: mover.name.clone(),
            mover_type: mover.mover_type,
            type_label: mover.mover_type.label().to_string(),
            strength: projected
                .effect
                .strength
                .display(self.config.strength_precision),
            tier: projected.tier(),
            source: mover.source.clone(),
            category: mover
                .category_name
                .clone()
                .or_else(|| mover.category.as_deref().map(prettify_id)),
            requirements: requirement_tags(mover, self.data),
            other_effects: self.other_effects(&projected.other_effects),
            prerequisites: prerequisites(mover),
            one_time: mover.is_one_time || mover.mover_type.is_one_time(),
            major: mover.is_major,
            unique: mover.is_unique,
            estate_preferences: mover
                .estate_preferences
                .iter()
                .map(|id| {
                    self.data
                        .estate(id)
                        .map(|e| e.name.clone())
                        .unwrap_or_else(|| prettify_id(id))
                })
                .collect(),
        }
    }

    fn other_effects(&self, effects: &[&ValueEffect]) -> OtherEffectsSummary {
        let labels: Vec<String> = effects
            .iter()
            .filter_map(|effect| {
                let pair = self.data.value_pair(&effect.value_pair)?;
                Some(format!(
                    "{} ({})",
                    pair.pole(effect.direction).name,
                    effect.strength.display(self.config.strength_precision)
                ))
            })
            .collect();

        let (shown, more) = split_for_display(&labels, self.config.other_effects_limit);
        OtherEffectsSummary {
            shown: shown.to_vec(),
            more,
        }
    }
}

/// Display tags for the filterable requirements of a mover.
pub fn requirement_tags(mover: &Mover, data: &ReferenceData) -> Vec<RequirementTag> {
    let reqs = &mover.requirements;
    let mut tags = Vec::new();
    let mut push = |kind: TagKind, label: Option<String>| {
        if let Some(label) = label {
            tags.push(RequirementTag { kind, label });
        }
    };

    if let Some(age) = &reqs.age {
        push(TagKind::Age, data.age(age).map(|a| a.name.clone()));
    }
    for id in &reqs.government {
        push(TagKind::Government, data.government(id).map(|g| g.name.clone()));
    }
    for id in &reqs.religion {
        push(TagKind::Religion, data.religion(id).map(|r| r.name.clone()));
    }
    for id in &reqs.religion_group {
        push(TagKind::ReligionGroup, Some(prettify_id(id)));
    }
    for tag in &reqs.country {
        push(TagKind::Country, data.country(tag).map(|c| c.name.clone()));
    }
    for tag in &reqs.excluded_countries {
        push(
            TagKind::ExcludedCountry,
            data.country(tag).map(|c| format!("Not {}", c.name)),
        );
    }
    for id in &reqs.culture {
        push(TagKind::Culture, Some(prettify_id(id)));
    }
    if let Some(estate) = &mover.estate {
        let name = mover
            .estate_name
            .clone()
            .or_else(|| data.estate(estate).map(|e| e.name.clone()));
        push(TagKind::Estate, name);
    }

    tags
}

/// Display-only prerequisites (reforms, privileges, advances).
pub fn prerequisites(mover: &Mover) -> Vec<String> {
    let reqs = &mover.requirements;
    reqs.has_reform
        .iter()
        .chain(&reqs.has_privilege)
        .chain(&reqs.has_advance)
        .map(|id| prettify_id(id))
        .chain(
            reqs.excluded_reforms
                .iter()
                .map(|id| format!("Not {}", prettify_id(id))),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MoverBuilder, ReferenceDataBuilder};

    const PAIR: &str = "centralization_vs_decentralization";

    fn data() -> ReferenceData {
        ReferenceDataBuilder::standard()
            .with_mover(
                MoverBuilder::new("tax_collection_act", MoverType::Law)
                    .name("Tax Collection Act")
                    .category_name("Administration Law")
                    .effect(PAIR, Direction::Left, 0.1)
                    .effect("land_vs_naval", Direction::Right, 0.05)
                    .governments(&["monarchy"])
                    .build(),
            )
            .with_mover(
                MoverBuilder::new("royal_court", MoverType::Reform)
                    .effect(PAIR, Direction::Left, 0.2)
                    .requires_age("age_3_discovery")
                    .has_reform(&["government_reform:feudal_monarchy"])
                    .build(),
            )
            .with_mover(
                MoverBuilder::new("clergy_tithes", MoverType::Privilege)
                    .effect(PAIR, Direction::Right, 0.05)
                    .estate("clergy_estate")
                    .build(),
            )
            .with_mover(
                MoverBuilder::new("local_autonomy", MoverType::Law)
                    .effect(PAIR, Direction::Right, 0.1)
                    .build(),
            )
            .build()
    }

    fn ids(view: &DirectionView) -> Vec<&str> {
        view.items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_unknown_pair() {
        let data = data();
        assert!(ValueView::build(&data, "nope", &FilterState::new(), &ViewerConfig::default()).is_none());
    }

    #[test]
    fn test_unfiltered_view() {
        let data = data();
        let view = ValueView::build(&data, PAIR, &FilterState::new(), &ViewerConfig::default())
            .unwrap();

        assert_eq!(view.name, "Centralization vs Decentralization");
        assert!(view.available);
        assert!(view.active_filters.is_empty());
        assert_eq!(view.left.total, 2);
        assert_eq!(view.left.matching, 2);
        assert_eq!(view.right.matching, 2);

        let Arrangement::Grouped(groups) = &view.left.items else {
            panic!("by-category view should be grouped");
        };
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "Law");
        assert_eq!(groups[1].label, "Government Reform");

        let law = &groups[0].items[0];
        assert_eq!(law.strength, "0.10");
        assert_eq!(law.tier, StrengthTier::Normal);
        assert_eq!(law.category.as_deref(), Some("Administration Law"));
        assert_eq!(law.other_effects.shown, vec!["Naval (0.05)"]);
        assert_eq!(law.other_effects.more, 0);
        assert_eq!(
            law.requirements,
            vec![RequirementTag {
                kind: TagKind::Government,
                label: "Monarchy".to_string()
            }]
        );

        let reform = &groups[1].items[0];
        assert_eq!(reform.prerequisites, vec!["Feudal Monarchy"]);
        assert_eq!(reform.requirements[0].label, "Age 3 Discovery");
    }

    #[test]
    fn test_filters_hide_and_count() {
        let data = data();
        let filters = FilterState::new()
            .with_age("age_2_renaissance")
            .with_government("republic")
            .with_sort(SortMode::StrengthDesc);
        let view = ValueView::build(&data, PAIR, &filters, &ViewerConfig::default()).unwrap();

        assert_eq!(view.left.total, 2);
        assert_eq!(view.left.matching, 0);
        assert_eq!(view.left.hidden(), 2);
        assert!(view.left.items.is_empty());
        assert!(matches!(view.right.items, Arrangement::Flat(_)));
        assert_eq!(ids(&view.right), vec!["local_autonomy", "clergy_tithes"]);

        let labels: Vec<&str> = view.active_filters.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["Age 2 Renaissance", "Republic"]);
    }

    #[test]
    fn test_estate_filter_and_search() {
        let data = data();
        let filters = FilterState::new().with_estate("clergy_estate");
        let view = ValueView::build(&data, PAIR, &filters, &ViewerConfig::default()).unwrap();
        assert_eq!(ids(&view.right), vec!["clergy_tithes"]);
        assert_eq!(view.left.matching, 0);

        let filters = FilterState::new().with_search("tax");
        let view = ValueView::build(&data, PAIR, &filters, &ViewerConfig::default()).unwrap();
        assert_eq!(ids(&view.left), vec!["tax_collection_act"]);
        assert_eq!(view.search.as_deref(), Some("tax"));
    }

    #[test]
    fn test_active_filter_lookup_miss_omitted() {
        let data = data();
        let filters = FilterState::new()
            .with_country("ZZZ")
            .with_religion("catholic")
            .with_culture("breton");
        let active = active_filters(&filters, &data);

        assert_eq!(
            active,
            vec![
                ActiveFilter {
                    dimension: Dimension::Religion,
                    label: "Catholic".to_string()
                },
                ActiveFilter {
                    dimension: Dimension::Culture,
                    label: "Breton".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_other_effects_capped() {
        let data = ReferenceDataBuilder::standard()
            .with_mover(
                MoverBuilder::new("wide", MoverType::Reform)
                    .effect(PAIR, Direction::Left, 0.1)
                    .effect("land_vs_naval", Direction::Left, 0.1)
                    .effect("mercantilism_vs_free_trade", Direction::Right, 0.1)
                    .effect("unknown_vs_pair", Direction::Right, 0.1)
                    .build(),
            )
            .build();
        let config = ViewerConfig {
            other_effects_limit: 1,
            ..ViewerConfig::default()
        };
        let view = ValueView::build(&data, PAIR, &FilterState::new(), &config).unwrap();
        let item = view.left.items.iter().next().unwrap();

        // Unknown pair is dropped before capping
        assert_eq!(item.other_effects.shown, vec!["Land (0.10)"]);
        assert_eq!(item.other_effects.more, 1);
    }

    #[test]
    fn test_unparsed_strength_display() {
        let data = ReferenceDataBuilder::standard()
            .with_mover(
                MoverBuilder::new("odd", MoverType::Disaster)
                    .unparsed_effect(PAIR, Direction::Right, "scripted_value")
                    .build(),
            )
            .build();
        let view = ValueView::build(&data, PAIR, &FilterState::new(), &ViewerConfig::default())
            .unwrap();
        let item = view.right.items.iter().next().unwrap();

        assert_eq!(item.strength, "scripted_value");
        assert_eq!(item.tier, StrengthTier::Unknown);
    }

    #[test]
    fn test_item_flags_and_estate_preferences() {
        let data = ReferenceDataBuilder::standard()
            .with_mover(
                MoverBuilder::new("crown_lands", MoverType::Law)
                    .effect(PAIR, Direction::Left, 0.1)
                    .major()
                    .estate_preferences(&["clergy_estate", "peasants_estate"])
                    .build(),
            )
            .with_mover(
                MoverBuilder::new("holy_empire", MoverType::Reform)
                    .effect(PAIR, Direction::Left, 0.2)
                    .unique()
                    .build(),
            )
            .build();
        let filters = FilterState::new().with_sort(SortMode::ByName);
        let view = ValueView::build(&data, PAIR, &filters, &ViewerConfig::default()).unwrap();
        let items: Vec<&ItemView> = view.left.items.iter().collect();

        assert_eq!(items[0].id, "crown_lands");
        assert!(items[0].major);
        assert!(!items[0].unique);
        assert_eq!(items[0].estate_preferences, vec!["Clergy", "Peasants Estate"]);
        assert_eq!(items[1].id, "holy_empire");
        assert!(items[1].unique);
        assert!(items[1].estate_preferences.is_empty());
    }

    #[test]
    fn test_overview_counts_and_availability() {
        let data = data();
        let filters = FilterState::new().with_age("age_3_discovery");
        let rows = overview(&data, &filters);

        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![PAIR, "land_vs_naval", "mercantilism_vs_free_trade"]
        );

        assert_eq!(rows[0].left_matching, 2);
        assert_eq!(rows[0].right_matching, 2);
        assert_eq!(rows[1].right_matching, 1);
        assert!(!rows[2].available);
    }

    #[test]
    fn test_json_shape() {
        let data = data();
        let filters = FilterState::new().with_sort(SortMode::ByName);
        let view = ValueView::build(&data, PAIR, &filters, &ViewerConfig::default()).unwrap();
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["left"]["items"]["layout"], "flat");
        assert_eq!(json["left"]["items"]["entries"][0]["id"], "royal_court");
        assert_eq!(json["left"]["items"]["entries"][0]["tier"], "large");
        assert_eq!(json["sort"], "by-name");
    }
}
