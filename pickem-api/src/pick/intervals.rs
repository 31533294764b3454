//! Weighted interval builder
//!
//! Lays eligible entries end to end on an integer line. Each candidate owns
//! the half-open interval `[start, start + length)`; the first starts at 0 and
//! each next one starts where the previous ended, so the intervals partition
//! `[0, total_span)` exactly.

use std::num::NonZeroU64;

use super::filter::WeightedEntry;

/// One eligible item placed on the interval line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub name: &'a str,
    pub category: &'a str,
    pub start: u64,
    pub length: u64,
}

impl Candidate<'_> {
    /// Exclusive end of this candidate's interval
    pub fn end(&self) -> u64 {
        self.start + self.length
    }

    pub fn contains(&self, x: u64) -> bool {
        self.start <= x && x < self.end()
    }
}

/// Candidates in construction order plus the span they cover
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalLine<'a> {
    candidates: Vec<Candidate<'a>>,
    total_span: NonZeroU64,
}

impl<'a> IntervalLine<'a> {
    pub fn candidates(&self) -> &[Candidate<'a>] {
        &self.candidates
    }

    pub fn total_span(&self) -> NonZeroU64 {
        self.total_span
    }
}

/// Place entries on the line in the order given
///
/// Returns `None` when there is nothing eligible.
pub fn build(entries: Vec<WeightedEntry<'_>>) -> Option<IntervalLine<'_>> {
    let mut next_start = 0u64;
    let candidates: Vec<Candidate<'_>> = entries
        .into_iter()
        .map(|entry| {
            let candidate = Candidate {
                name: entry.name,
                category: entry.category,
                start: next_start,
                length: entry.raw_weight.max(1),
            };
            next_start = candidate.end();
            candidate
        })
        .collect();

    let total_span = NonZeroU64::new(next_start)?;
    Some(IntervalLine {
        candidates,
        total_span,
    })
}
