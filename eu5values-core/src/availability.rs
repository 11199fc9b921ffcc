//! Value pair availability under the age filter.

use eu5data::{ReferenceData, ValuePair};

/// Whether something requiring `required` is unlocked when viewing `selected`.
///
/// Missing requirement, missing selection, or an age id absent from the table
/// all count as unlocked.
pub fn age_unlocked(required: Option<&str>, selected: Option<&str>, data: &ReferenceData) -> bool {
    let (Some(required), Some(selected)) = (required, selected) else {
        return true;
    };

    match (data.age_rank(required), data.age_rank(selected)) {
        (Some(required_rank), Some(selected_rank)) => required_rank <= selected_rank,
        _ => true,
    }
}

/// Whether a value pair can be selected at the filtered age.
///
/// Only flags the value picker; movers are filtered separately.
pub fn is_value_pair_available(
    pair: &ValuePair,
    age_filter: Option<&str>,
    data: &ReferenceData,
) -> bool {
    age_unlocked(
        pair.age_requirement.as_deref(),
        age_filter.filter(|age| !age.is_empty()),
        data,
    )
}
