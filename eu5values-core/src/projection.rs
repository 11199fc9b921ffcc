//! Mover projection onto one value pair and direction.

use eu5data::{Direction, Mover, Strength, ValueEffect};
use serde::Serialize;

/// A mover as seen from one value pair and direction.
#[derive(Debug, Clone)]
pub struct Projected<'a> {
    pub mover: &'a Mover,
    /// First effect matching the pair and direction.
    pub effect: &'a ValueEffect,
    /// Effects on every other value pair, both directions.
    pub other_effects: Vec<&'a ValueEffect>,
}

impl Projected<'_> {
    pub fn strength_key(&self) -> f64 {
        self.effect.strength.sort_key()
    }

    pub fn tier(&self) -> StrengthTier {
        StrengthTier::classify(&self.effect.strength)
    }
}

/// Movers that push `value_pair` toward `direction`, in input order.
pub fn project<'a, I>(movers: I, value_pair: &str, direction: Direction) -> Vec<Projected<'a>>
where
    I: IntoIterator<Item = &'a Mover>,
{
    movers
        .into_iter()
        .filter_map(|mover| {
            let effect = mover.effect_for(value_pair, direction)?;
            let other_effects = mover
                .effects
                .iter()
                .filter(|e| e.value_pair != value_pair)
                .collect();
            Some(Projected {
                mover,
                effect,
                other_effects,
            })
        })
        .collect()
}

/// Splits a list into the part shown and how many are left over.
pub fn split_for_display<T>(items: &[T], limit: usize) -> (&[T], usize) {
    let shown = items.len().min(limit);
    (&items[..shown], items.len() - shown)
}

/// Display tier of an effect strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthTier {
    Unknown,
    Tiny,
    Minor,
    Normal,
    Large,
}

impl StrengthTier {
    pub const LARGE: f64 = 0.20;
    pub const NORMAL: f64 = 0.10;
    pub const MINOR: f64 = 0.05;

    pub fn classify(strength: &Strength) -> StrengthTier {
        StrengthTier::from_value(strength.as_f64())
    }

    pub fn from_value(value: Option<f64>) -> StrengthTier {
        match value {
            None => StrengthTier::Unknown,
            Some(v) if v >= Self::LARGE => StrengthTier::Large,
            Some(v) if v >= Self::NORMAL => StrengthTier::Normal,
            Some(v) if v >= Self::MINOR => StrengthTier::Minor,
            Some(_) => StrengthTier::Tiny,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::Unknown => "unknown",
            StrengthTier::Tiny => "tiny",
            StrengthTier::Minor => "minor",
            StrengthTier::Normal => "normal",
            StrengthTier::Large => "large",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MoverBuilder;
    use eu5data::MoverType;

    const CENTRAL: &str = "centralization_vs_decentralization";
    const LAND: &str = "land_vs_naval";
    const TRADE: &str = "mercantilism_vs_free_trade";

    #[test]
    fn test_project_picks_direction() {
        let movers = vec![
            MoverBuilder::new("a", MoverType::Law)
                .effect(CENTRAL, Direction::Left, 0.1)
                .build(),
            MoverBuilder::new("b", MoverType::Law)
                .effect(CENTRAL, Direction::Right, 0.05)
                .build(),
            MoverBuilder::new("c", MoverType::Law)
                .effect(LAND, Direction::Left, 0.2)
                .build(),
        ];

        let left = project(&movers, CENTRAL, Direction::Left);
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].mover.id, "a");

        let right = project(&movers, CENTRAL, Direction::Right);
        assert_eq!(right.len(), 1);
        assert_eq!(right[0].mover.id, "b");

        assert!(project(&movers, TRADE, Direction::Left).is_empty());
    }

    #[test]
    fn test_duplicate_effects_first_wins() {
        let movers = vec![MoverBuilder::new("dup", MoverType::Reform)
            .effect(CENTRAL, Direction::Left, 0.05)
            .effect(CENTRAL, Direction::Left, 0.2)
            .build()];

        let projected = project(&movers, CENTRAL, Direction::Left);
        assert_eq!(projected.len(), 1);
        assert_eq!(projected[0].strength_key(), 0.05);
        // Same pair is never an "other" effect
        assert!(projected[0].other_effects.is_empty());
    }

    #[test]
    fn test_other_effects_cover_all_other_pairs() {
        let movers = vec![MoverBuilder::new("wide", MoverType::Reform)
            .effect(CENTRAL, Direction::Left, 0.1)
            .effect(LAND, Direction::Left, 0.05)
            .effect(TRADE, Direction::Right, 0.02)
            .effect("quality_vs_quantity", Direction::Right, 0.1)
            .effect("offensive_vs_defensive", Direction::Left, 0.1)
            .build()];

        let projected = project(&movers, CENTRAL, Direction::Left);
        let others: Vec<&str> = projected[0]
            .other_effects
            .iter()
            .map(|e| e.value_pair.as_str())
            .collect();
        assert_eq!(
            others,
            vec![LAND, TRADE, "quality_vs_quantity", "offensive_vs_defensive"]
        );

        let (shown, more) = split_for_display(&projected[0].other_effects, 3);
        assert_eq!(shown.len(), 3);
        assert_eq!(more, 1);
    }

    #[test]
    fn test_split_for_display_short_list() {
        let items = [1, 2];
        assert_eq!(split_for_display(&items, 3), (&items[..], 0));
        assert_eq!(split_for_display(&items, 0), (&items[..0], 2));
    }

    #[test]
    fn test_strength_tiers() {
        assert_eq!(StrengthTier::from_value(None), StrengthTier::Unknown);
        assert_eq!(StrengthTier::from_value(Some(0.5)), StrengthTier::Large);
        // Lower bounds are inclusive
        assert_eq!(StrengthTier::from_value(Some(0.20)), StrengthTier::Large);
        assert_eq!(StrengthTier::from_value(Some(0.10)), StrengthTier::Normal);
        assert_eq!(StrengthTier::from_value(Some(0.05)), StrengthTier::Minor);
        assert_eq!(StrengthTier::from_value(Some(0.02)), StrengthTier::Tiny);
        assert_eq!(StrengthTier::from_value(Some(-1.0)), StrengthTier::Tiny);
        assert_eq!(
            StrengthTier::classify(&Strength::Unparsed("x".into())),
            StrengthTier::Unknown
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::testing::MoverBuilder;
    use eu5data::MoverType;
    use proptest::prelude::*;

    const PAIRS: [&str; 3] = ["a_vs_b", "c_vs_d", "e_vs_f"];

    fn arb_effects() -> impl Strategy<Value = Vec<(usize, bool)>> {
        prop::collection::vec((0..PAIRS.len(), any::<bool>()), 0..5)
    }

    proptest! {
        #[test]
        fn prop_projection_membership(
            effects in prop::collection::vec(arb_effects(), 0..8),
            pair in 0..PAIRS.len(),
            left in any::<bool>(),
        ) {
            let direction = if left { Direction::Left } else { Direction::Right };
            let movers: Vec<Mover> = effects
                .iter()
                .enumerate()
                .map(|(i, list)| {
                    list.iter().fold(
                        MoverBuilder::new(&format!("m{}", i), MoverType::Law),
                        |b, &(p, l)| {
                            let d = if l { Direction::Left } else { Direction::Right };
                            b.effect(PAIRS[p], d, 0.1)
                        },
                    )
                    .build()
                })
                .collect();

            let projected = project(&movers, PAIRS[pair], direction);
            let ids: Vec<&str> = projected.iter().map(|p| p.mover.id.as_str()).collect();

            for mover in &movers {
                let expected = mover
                    .effects
                    .iter()
                    .any(|e| e.value_pair == PAIRS[pair] && e.direction == direction);
                prop_assert_eq!(ids.contains(&mover.id.as_str()), expected);
            }
            for p in &projected {
                prop_assert!(p.other_effects.iter().all(|e| e.value_pair != PAIRS[pair]));
            }
        }
    }
}
