//! Reference data for the EU5 societal values viewer.
//!
//! The tables here are produced by the extraction tool as seven JSON files and
//! loaded once with [`load_reference_data`]. Everything is read-only after
//! load; query code borrows a [`ReferenceData`].

pub mod ages;
pub mod countries;
mod de;
pub mod error;
pub mod estates;
pub mod governments;
pub mod loader;
pub mod movers;
pub mod path;
pub mod prettify;
pub mod religions;
pub mod values;

pub use ages::Age;
pub use countries::Country;
pub use error::LoadError;
pub use estates::Estate;
pub use governments::Government;
pub use loader::{DatasetStats, ReferenceData, ReferenceTables, Resource, load_reference_data};
pub use movers::{Mover, MoverType, Requirements, Strength, ValueEffect};
pub use prettify::prettify_id;
pub use religions::Religion;
pub use values::{Direction, ValuePair, ValueSide};
