//! Interval search
//!
//! Binary search from a drawn point back to the candidate that owns it.

use super::intervals::Candidate;
use super::PickError;

/// Find the candidate whose interval contains `x`
///
/// `candidates` must be sorted by `start` with contiguous intervals, which is
/// how the builder lays them out. If no owner is found the line is malformed
/// and `PickError::Inconsistent` is returned.
pub fn locate<'l, 'a>(candidates: &'l [Candidate<'a>], x: u64) -> Result<&'l Candidate<'a>, PickError> {
    // Half-open window [lo, hi) over candidate indices
    let mut lo = 0;
    let mut hi = candidates.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let candidate = &candidates[mid];

        if candidate.contains(x) {
            return Ok(candidate);
        } else if x >= candidate.end() {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    Err(PickError::Inconsistent {
        draw: x,
        total_span: candidates.last().map(|c| c.end()).unwrap_or(0),
    })
}
