//! Weighted random pick
//!
//! Request flow: validate → filter eligible items → lay them out as weighted
//! intervals → draw one point → binary search back to the owning item.
//!
//! The computation is synchronous and holds nothing beyond the per-request
//! candidate list. Callers pass a catalog snapshot that stays consistent for
//! the duration of the call.

pub mod filter;
pub mod intervals;
pub mod sampler;
pub mod search;

use pickem_common::{ItemSource, Tier};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

/// Pick failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PickError {
    /// Malformed request: unknown tier or no categories
    #[error("Invalid pick request: {0}")]
    Validation(String),

    /// Interval search found no owner for a valid draw
    #[error("Interval line is malformed: no candidate owns draw {draw} (total span {total_span})")]
    Inconsistent { draw: u64, total_span: u64 },
}

/// Outcome of a well-formed pick request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PickResult {
    Selected {
        #[serde(rename = "selection")]
        item_name: String,
        category: String,
    },
    /// Nothing in the requested categories passed the tier filter
    NoMatch,
}

/// Validated pick parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickRequest {
    pub categories: Vec<String>,
    pub min_interest: Tier,
    pub max_effort: Tier,
}

impl PickRequest {
    /// Validate raw request values
    ///
    /// Tier names must be one of `low`, `medium`, `high`; at least one
    /// category is required.
    pub fn parse(categories: Vec<String>, interest: &str, effort: &str) -> Result<Self, PickError> {
        let min_interest = parse_tier("interest", interest)?;
        let max_effort = parse_tier("effort", effort)?;
        let request = Self {
            categories,
            min_interest,
            max_effort,
        };
        request.validate()?;
        Ok(request)
    }

    fn validate(&self) -> Result<(), PickError> {
        if self.categories.is_empty() {
            return Err(PickError::Validation(
                "At least one category is required".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_tier(field: &str, value: &str) -> Result<Tier, PickError> {
    value
        .parse()
        .map_err(|_| PickError::Validation(format!("Invalid {} tier '{}'", field, value)))
}

/// Pick one item using the thread-local RNG
pub fn pick<S>(source: &S, request: &PickRequest) -> Result<PickResult, PickError>
where
    S: ItemSource + ?Sized,
{
    pick_with_rng(source, request, &mut rand::thread_rng())
}

/// Pick one item with a caller-supplied RNG
pub fn pick_with_rng<S, R>(source: &S, request: &PickRequest, rng: &mut R) -> Result<PickResult, PickError>
where
    S: ItemSource + ?Sized,
    R: Rng + ?Sized,
{
    request.validate()?;

    let entries = filter::eligible(
        source,
        &request.categories,
        request.min_interest,
        request.max_effort,
    );
    debug!(
        "{} eligible items in {:?} (interest >= {}, effort <= {})",
        entries.len(),
        request.categories,
        request.min_interest,
        request.max_effort
    );

    let Some(line) = intervals::build(entries) else {
        info!("No items matched {:?}", request.categories);
        return Ok(PickResult::NoMatch);
    };

    let draw = sampler::draw(rng, line.total_span());
    let selected = search::locate(line.candidates(), draw)?;

    info!("Picked {} from {}", selected.name, selected.category);
    Ok(PickResult::Selected {
        item_name: selected.name.to_string(),
        category: selected.category.to_string(),
    })
}
