//! Scalar, unvectorized reference kernel.
//!
//! No mask-offset family, no wrap-case splitting — every cell is visited
//! through [`Field::get_wrapped`] when the bounding rectangle crosses an
//! edge. This is deliberately slow; it exists only as a correctness
//! oracle for the optimized kernel in [`super::stencil`] and as the
//! algorithm the `smoothlife-verification` binary runs for cross-checks.

use crate::field::Field;
use crate::mask::Mask;

/// Compute the normalized filling of `mask` (always its offset-0 variant)
/// around `(x, y)` on `field`, using wrapped scalar accesses throughout.
#[must_use]
pub fn fill_unoptimized(field: &Field, x: usize, y: usize, mask: &Mask) -> f64 {
    let side = mask.side() as i64;
    let x = x as i64;
    let y = y as i64;
    let xb = x - side / 2;
    let xe = x + side / 2;
    let yb = y - side / 2;
    let ye = y + side / 2;

    let w = field.width() as i64;
    let h = field.height() as i64;
    let in_bounds = xb >= 0 && yb >= 0 && xe < w && ye < h;

    let mut f = 0.0_f64;
    for yy in yb..ye {
        let mask_row = yy - yb;
        for xx in xb..xe {
            let mask_col = xx - xb;
            let field_value = if in_bounds {
                field.get(xx as usize, yy as usize)
            } else {
                field.get_wrapped(xx, yy)
            };
            let mask_value = mask.field().get(mask_col as usize, mask_row as usize);
            f += f64::from(field_value) * f64::from(mask_value);
        }
    }
    f / mask.sum()
}
