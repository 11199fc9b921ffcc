//! Ordering and grouping of projected movers.

use crate::filter::SortMode;
use crate::projection::Projected;
use eu5data::MoverType;
use std::cmp::Ordering;

/// Movers of one type, in arranged order.
#[derive(Debug, Clone)]
pub struct MoverGroup<'a> {
    pub mover_type: MoverType,
    pub items: Vec<Projected<'a>>,
}

/// Name order: case-insensitive. Names equal up to case are ordered at their
/// first differing letter, lowercase before uppercase.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| {
        a.chars()
            .zip(b.chars())
            .find(|(x, y)| x != y)
            .map_or(Ordering::Equal, |(x, y)| {
                y.is_lowercase().cmp(&x.is_lowercase())
            })
    })
}

/// Sorts projected movers for display. Equal keys keep their input order.
pub fn arrange(mut items: Vec<Projected<'_>>, mode: SortMode) -> Vec<Projected<'_>> {
    match mode {
        SortMode::ByCategory => items.sort_by(|a, b| {
            a.mover
                .mover_type
                .id()
                .cmp(b.mover.mover_type.id())
                .then_with(|| compare_names(&a.mover.name, &b.mover.name))
        }),
        SortMode::StrengthDesc => items.sort_by(|a, b| {
            b.strength_key()
                .partial_cmp(&a.strength_key())
                .unwrap_or(Ordering::Equal)
        }),
        SortMode::StrengthAsc => items.sort_by(|a, b| {
            a.strength_key()
                .partial_cmp(&b.strength_key())
                .unwrap_or(Ordering::Equal)
        }),
        SortMode::ByName => items.sort_by(|a, b| compare_names(&a.mover.name, &b.mover.name)),
    }
    items
}

/// Splits an arranged list into runs by type, in order of first appearance.
pub fn group_by_type(items: Vec<Projected<'_>>) -> Vec<MoverGroup<'_>> {
    let mut groups: Vec<MoverGroup> = Vec::new();
    for item in items {
        let mover_type = item.mover.mover_type;
        match groups.iter_mut().find(|g| g.mover_type == mover_type) {
            Some(group) => group.items.push(item),
            None => groups.push(MoverGroup {
                mover_type,
                items: vec![item],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project;
    use crate::testing::MoverBuilder;
    use eu5data::{Direction, Mover};

    const PAIR: &str = "land_vs_naval";

    fn ids<'a>(items: &'a [Projected<'_>]) -> Vec<&'a str> {
        items.iter().map(|p| p.mover.id.as_str()).collect()
    }

    fn movers() -> Vec<Mover> {
        vec![
            MoverBuilder::new("standing_army", MoverType::Reform)
                .effect(PAIR, Direction::Left, 0.1)
                .build(),
            MoverBuilder::new("levies", MoverType::Law)
                .effect(PAIR, Direction::Left, 0.05)
                .build(),
            MoverBuilder::new("army_drill", MoverType::Law)
                .effect(PAIR, Direction::Left, 0.2)
                .build(),
            MoverBuilder::new("odd_one", MoverType::Trait)
                .unparsed_effect(PAIR, Direction::Left, "scripted")
                .build(),
        ]
    }

    #[test]
    fn test_by_category() {
        let movers = movers();
        let arranged = arrange(project(&movers, PAIR, Direction::Left), SortMode::ByCategory);
        assert_eq!(
            ids(&arranged),
            vec!["army_drill", "levies", "standing_army", "odd_one"]
        );

        let groups = group_by_type(arranged);
        let types: Vec<MoverType> = groups.iter().map(|g| g.mover_type).collect();
        assert_eq!(types, vec![MoverType::Law, MoverType::Reform, MoverType::Trait]);
        assert_eq!(groups[0].items.len(), 2);
    }

    #[test]
    fn test_strength_orders_treat_unparsed_as_zero() {
        let movers = movers();

        let desc = arrange(project(&movers, PAIR, Direction::Left), SortMode::StrengthDesc);
        assert_eq!(
            ids(&desc),
            vec!["army_drill", "standing_army", "levies", "odd_one"]
        );

        let asc = arrange(project(&movers, PAIR, Direction::Left), SortMode::StrengthAsc);
        assert_eq!(
            ids(&asc),
            vec!["odd_one", "levies", "standing_army", "army_drill"]
        );
    }

    #[test]
    fn test_by_name_is_case_insensitive() {
        let movers = vec![
            MoverBuilder::new("b", MoverType::Law)
                .name("beta")
                .effect(PAIR, Direction::Right, 0.1)
                .build(),
            MoverBuilder::new("a", MoverType::Reform)
                .name("Alpha")
                .effect(PAIR, Direction::Right, 0.1)
                .build(),
            MoverBuilder::new("c", MoverType::Law)
                .name("alpha")
                .effect(PAIR, Direction::Right, 0.1)
                .build(),
        ];

        let arranged = arrange(project(&movers, PAIR, Direction::Right), SortMode::ByName);
        assert_eq!(ids(&arranged), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let movers = vec![
            MoverBuilder::new("first", MoverType::Law)
                .name("Same Name")
                .effect(PAIR, Direction::Left, 0.1)
                .build(),
            MoverBuilder::new("second", MoverType::Law)
                .name("Same Name")
                .effect(PAIR, Direction::Left, 0.1)
                .build(),
        ];

        for mode in SortMode::ALL {
            let arranged = arrange(project(&movers, PAIR, Direction::Left), mode);
            assert_eq!(ids(&arranged), vec!["first", "second"], "{}", mode);
        }
    }

    #[test]
    fn test_compare_names() {
        assert_eq!(compare_names("abc", "ABD"), Ordering::Less);
        assert_eq!(compare_names("abc", "Abc"), Ordering::Less);
        assert_eq!(compare_names("Abc", "abc"), Ordering::Greater);
        assert_eq!(compare_names("aBc", "abC"), Ordering::Greater);
        assert_eq!(compare_names("abc", "abc"), Ordering::Equal);
    }
}
