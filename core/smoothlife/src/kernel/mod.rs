//! The stencil kernel: masked convolution of the field against a mask
//! family, with cache-aligned fast paths for the nine toroidal wrap cases.

mod stencil;

pub mod reference;

use crate::field::Field;
use crate::mask::{MaskFamily, K};

/// Compute the area-weighted filling of `family` around `(x, y)` on `field`,
/// normalized by the family's cached sum.
///
/// Selects the cache-alignment-matched mask variant for column `x`, then
/// dispatches to whichever of the nine wrap-case fast paths applies.
#[must_use]
pub fn fill(field: &Field, x: usize, y: usize, family: &MaskFamily) -> f64 {
    let left_offset_ref = family.variant(0).center_column();
    let off = mask_offset(x, left_offset_ref);
    let mask = family.variant(off);
    f64::from(stencil::masked_sum(field, x, y, mask)) / family.sum()
}

/// `off = ((x - left_offset) mod K + K) mod K`: the family member whose
/// data begins on a cache line aligned with column `x`.
#[must_use]
pub fn mask_offset(x: usize, left_offset: usize) -> usize {
    let diff = x as i64 - left_offset as i64;
    diff.rem_euclid(K as i64) as usize
}
