//! Uniform draw over the interval line

use std::num::NonZeroU64;

use rand::Rng;

/// Draw one integer uniformly from `[0, total_span)`
pub fn draw<R: Rng + ?Sized>(rng: &mut R, total_span: NonZeroU64) -> u64 {
    rng.gen_range(0..total_span.get())
}
