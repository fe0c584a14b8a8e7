//! Pre-rasterized disk and annulus masks, offset-padded for cache alignment.

use crate::field::{Field, CACHELINE_FLOATS};

/// Number of cache-alignment variants kept per disk (`K`).
pub const K: usize = CACHELINE_FLOATS;

/// One rasterized disk (or annulus), left-padded by `offset` columns so
/// its data begins on a cache-line boundary for a matching scan column.
pub struct Mask {
    field: Field,
    /// Logical column of the disk's center, `ceil(side / 2) + offset`.
    center_column: usize,
    /// Row (from the mask's own top edge) of the disk's vertical center.
    center_row: usize,
}

impl Mask {
    fn new(side: usize, offset: usize) -> Self {
        let field = Field::new(side, side, offset);
        let center_column = side.div_ceil(2) + offset;
        let center_row = side / 2;
        Self {
            field,
            center_column,
            center_row,
        }
    }

    /// The mask's backing field.
    #[must_use]
    pub const fn field(&self) -> &Field {
        &self.field
    }

    /// Logical column of the mask's center (`left_offset` in the stencil
    /// kernel's mask-selection formula).
    #[must_use]
    pub const fn center_column(&self) -> usize {
        self.center_column
    }

    /// Row of the mask's vertical center.
    #[must_use]
    pub const fn center_row(&self) -> usize {
        self.center_row
    }

    /// Number of raw columns to the right of the center column, up to the
    /// end of the mask's row stride (`ld - left_offset`).
    #[must_use]
    pub fn right_offset(&self) -> usize {
        self.field.stride() - self.center_column
    }

    /// Side length of the (square) mask, `2*ra + 2`.
    #[must_use]
    pub const fn side(&self) -> usize {
        self.field.height()
    }

    /// Sum of every cell, used both to cache the family-wide `S` constant
    /// and by tests asserting mask-sum invariance across offsets.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.field.sum()
    }
}

/// A family of `K` cache-alignment variants of the same disk (inner disk
/// of radius `ri`, or annulus between `ri` and `ra`), plus the cached sum
/// that is invariant across every offset in the family.
pub struct MaskFamily {
    masks: Vec<Mask>,
    sum: f64,
}

impl MaskFamily {
    /// Build the `K`-member family for the inner disk of radius `ri`.
    #[must_use]
    pub fn inner_disk(ra: f64, ri: f64) -> Self {
        Self::build(ra, |field, cx, cy| {
            field.draw_disk(cx, cy, ri, 1.0, 1.0);
        })
    }

    /// Build the `K`-member family for the annulus `(ri, ra]`: draw the
    /// full disk of radius `ra` then overdraw the inner disk of radius `ri`
    /// with value 0, leaving only the ring.
    #[must_use]
    pub fn annulus(ra: f64, ri: f64) -> Self {
        Self::build(ra, |field, cx, cy| {
            field.draw_disk(cx, cy, ra, 1.0, 1.0);
            field.draw_disk(cx, cy, ri, 0.0, 1.0);
        })
    }

    fn build(ra: f64, paint: impl Fn(&mut Field, f64, f64)) -> Self {
        let side = (2.0 * ra) as usize + 2;
        let masks: Vec<Mask> = (0..K)
            .map(|o| {
                let mut mask = Mask::new(side, o);
                let cx = side.div_ceil(2) as f64;
                let cy = side as f64 / 2.0;
                paint(&mut mask.field, cx, cy);
                mask
            })
            .collect();
        let sum = masks[0].sum();
        Self { masks, sum }
    }

    /// The mask variant for alignment offset `o`, `0 <= o < K`.
    #[must_use]
    pub fn variant(&self, o: usize) -> &Mask {
        &self.masks[o]
    }

    /// The family-wide sum, cached once from offset 0.
    #[must_use]
    pub const fn sum(&self) -> f64 {
        self.sum
    }
}
