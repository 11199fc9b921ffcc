//! # EU5 Societal Values Core
//!
//! Filtering, projection and ordering of value movers for the societal values
//! viewer.
//!
//! Every query is a pure function of the loaded [`ReferenceData`], a selected
//! value pair and an immutable [`FilterState`] snapshot.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ ReferenceData │────▶│   project    │────▶│   classify   │
//! │  (movers)     │     │ (pair, dir)  │     │ (FilterState)│
//! └───────────────┘     └──────────────┘     └──────┬───────┘
//!                                                   │
//!                       ┌──────────────┐     ┌──────▼───────┐
//!                       │  ValueView   │◀────│   arrange    │
//!                       │ (view model) │     │ (SortMode)   │
//!                       └──────────────┘     └──────────────┘
//! ```
//!
//! ## Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`FilterState`] | Current selections (age, government, religion, ...) |
//! | [`Verdict`] | Per-dimension outcome of the structural filter |
//! | [`Projected`] | A mover seen through one value pair and direction |
//! | [`ValueView`] | Counts, grouped items and active filters for one pair |
//! | [`ViewerConfig`] | Presentation settings |

pub mod arrange;
pub mod availability;
pub mod config;
pub mod filter;
pub mod projection;
pub mod testing;
pub mod view;

pub use arrange::{arrange, compare_names, group_by_type, MoverGroup};
pub use availability::{age_unlocked, is_value_pair_available};
pub use config::{ConfigError, ViewerConfig};
pub use eu5data::ReferenceData;
pub use filter::{
    classify, dimension_passes, is_visible, matches_search, passes, Dimension, FilterState,
    SortMode, Verdict,
};
pub use projection::{project, split_for_display, Projected, StrengthTier};
pub use view::{
    overview, ActiveFilter, Arrangement, DirectionView, GroupView, ItemView, OtherEffectsSummary,
    RequirementTag, TagKind, ValueSummary, ValueView,
};
