//! Candidate filter
//!
//! Selects the items eligible for a pick and computes their raw sampling
//! weight.

use pickem_common::{ItemSource, Tier};

/// An eligible item before it is placed on the interval line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedEntry<'a> {
    pub name: &'a str,
    pub category: &'a str,
    pub raw_weight: u64,
}

/// Sampling weight for an interest/effort pair
///
/// Integer floor division of the tier weights, clamped to at least 1 so an
/// item whose effort outweighs its interest stays pickable at minimum odds.
///
/// # Examples
/// ```
/// use pickem_api::pick::filter::raw_weight;
/// use pickem_common::Tier;
///
/// assert_eq!(raw_weight(Tier::High, Tier::Low), 6);
/// assert_eq!(raw_weight(Tier::High, Tier::Medium), 2);
/// assert_eq!(raw_weight(Tier::Low, Tier::High), 1);
/// ```
pub fn raw_weight(interest: Tier, effort: Tier) -> u64 {
    u64::from((interest.weight() / effort.weight()).max(1))
}

/// Collect eligible items in pick order
///
/// Requested categories are walked in the caller's order, items in store
/// order. Categories absent from the store contribute nothing.
pub fn eligible<'a, S>(
    source: &'a S,
    categories: &'a [String],
    min_interest: Tier,
    max_effort: Tier,
) -> Vec<WeightedEntry<'a>>
where
    S: ItemSource + ?Sized,
{
    let interests = min_interest.at_or_above();
    let efforts = max_effort.at_or_below();

    categories
        .iter()
        .flat_map(move |category| {
            source
                .items_in(category)
                .iter()
                .filter(move |item| interests.contains(&item.interest) && efforts.contains(&item.effort))
                .map(move |item| WeightedEntry {
                    name: &item.name,
                    category: category.as_str(),
                    raw_weight: raw_weight(item.interest, item.effort),
                })
        })
        .collect()
}
