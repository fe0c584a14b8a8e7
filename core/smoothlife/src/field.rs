//! Cache-aligned, toroidal 2-D field of `f32` cells.

use crate::types::DimensionMismatchError;

/// Bytes per cache line. Matches the allocator alignment every [`Field`]
/// and [`crate::mask::Mask`] row is guaranteed to start on.
pub const CACHELINE_SIZE: usize = 64;

/// Number of `f32` values that fit in one cache line (`64 / size_of::<f32>()`).
pub const CACHELINE_FLOATS: usize = CACHELINE_SIZE / size_of::<f32>();

/// 64-byte-aligned backing storage for one row-major slab of `f32`s.
///
/// `#[repr(align(64))]` on a one-element wrapper forces the `Vec<Aligned>`
/// allocation itself onto a cache-line boundary; indexing into it as `f32`
/// is done through [`Field::row_ptr`] and friends.
#[derive(Clone, Copy)]
#[repr(align(64))]
struct Aligned([f32; CACHELINE_FLOATS]);

/// A cache-aligned, toroidally-indexed two-dimensional field of `f32` cells.
///
/// Logical width `width` and height `height` may be smaller than the row
/// stride `stride` (`ld`), which is always padded up to a multiple of
/// [`CACHELINE_FLOATS`] so that every row starts on a 64-byte boundary.
#[derive(Clone)]
pub struct Field {
    data: Vec<Aligned>,
    width: usize,
    height: usize,
    stride: usize,
    left_pad: usize,
}

impl Field {
    /// Allocate a new field of logical size `width x height`, zero-initialized.
    ///
    /// `left_pad` reserves `left_pad` extra columns of storage to the left
    /// of column 0; masks use this to hold `K` differently-offset variants
    /// of the same disk, all cache-aligned. Plain simulation fields always
    /// pass `left_pad = 0`.
    #[must_use]
    pub fn new(width: usize, height: usize, left_pad: usize) -> Self {
        let stride = Self::compute_stride(width, left_pad);
        let rows_of_aligned = stride / CACHELINE_FLOATS;
        let data = vec![Aligned([0.0; CACHELINE_FLOATS]); rows_of_aligned * height];
        Self {
            data,
            width,
            height,
            stride,
            left_pad,
        }
    }

    /// Convenience constructor for the common case of `left_pad = 0`.
    #[must_use]
    pub fn zeros(width: usize, height: usize) -> Self {
        Self::new(width, height, 0)
    }

    /// Smallest multiple of [`CACHELINE_FLOATS`] that is `>= width + left_pad`.
    fn compute_stride(width: usize, left_pad: usize) -> usize {
        let needed = width + left_pad;
        needed.div_ceil(CACHELINE_FLOATS) * CACHELINE_FLOATS
    }

    /// Logical width `W`.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Logical height `H`.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Row stride `ld`, in floats. Always a multiple of [`CACHELINE_FLOATS`].
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Left padding in floats reserved before logical column 0.
    #[must_use]
    pub const fn left_pad(&self) -> usize {
        self.left_pad
    }

    fn raw(&self) -> &[f32] {
        // SAFETY: `Aligned` is `repr(align(64))` wrapping `[f32; CACHELINE_FLOATS]`
        // with no padding beyond the forced alignment, so reinterpreting the
        // slab as a flat `f32` slice of the same total length is valid.
        #[allow(unsafe_code)]
        unsafe {
            std::slice::from_raw_parts(self.data.as_ptr().cast::<f32>(), self.data.len() * CACHELINE_FLOATS)
        }
    }

    fn raw_mut(&mut self) -> &mut [f32] {
        // SAFETY: see `raw`.
        #[allow(unsafe_code)]
        unsafe {
            std::slice::from_raw_parts_mut(
                self.data.as_mut_ptr().cast::<f32>(),
                self.data.len() * CACHELINE_FLOATS,
            )
        }
    }

    /// The full stride-wide row `y`, counted from raw column 0 (i.e.
    /// including any left padding reserved by a nonzero `left_pad`).
    ///
    /// Used only by the stencil kernel's mask access, where the weight
    /// data a mask variant contributes spans its *entire* row stride, not
    /// just the `side`-wide logical window the disk was drawn into — the
    /// reserved left padding is implicitly zero weight, not inaccessible
    /// storage.
    pub(crate) fn raw_row(&self, y: usize) -> &[f32] {
        debug_assert!(y < self.height);
        let start = y * self.stride;
        &self.raw()[start..start + self.stride]
    }

    /// Direct (non-wrapping) access. `0 <= x < width`, `0 <= y < height`.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        debug_assert!(x < self.width && y < self.height);
        self.raw()[self.index(x, y)]
    }

    /// Direct (non-wrapping) write. `0 <= x < width`, `0 <= y < height`.
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        debug_assert!(x < self.width && y < self.height);
        let idx = self.index(x, y);
        self.raw_mut()[idx] = v;
    }

    fn index(&self, x: usize, y: usize) -> usize {
        self.left_pad + x + y * self.stride
    }

    /// Toroidally-wrapped access: negative-looking offsets wrap from the
    /// far edge. Used only on the kernel's slow wrap paths and by tests
    /// as a reference oracle — never on the hot non-wrap path.
    #[must_use]
    pub fn get_wrapped(&self, x: i64, y: i64) -> f32 {
        let w = self.width as i64;
        let h = self.height as i64;
        let wx = x.rem_euclid(w) as usize;
        let wy = y.rem_euclid(h) as usize;
        self.get(wx, wy)
    }

    /// Pointer to logical cell `(0, y)`. Guaranteed 64-byte aligned when
    /// `left_pad` is itself a multiple of [`CACHELINE_FLOATS`] (always true
    /// for plain simulation fields, which use `left_pad = 0`).
    #[must_use]
    pub fn row_ptr(&self, y: usize) -> *const f32 {
        debug_assert!(y < self.height);
        &self.raw()[self.index(0, y)]
    }

    /// Mutable pointer to logical cell `(0, y)`.
    pub fn row_mut_ptr(&mut self, y: usize) -> *mut f32 {
        debug_assert!(y < self.height);
        let idx = self.index(0, y);
        &mut self.raw_mut()[idx]
    }

    /// Row as an immutable slice of exactly `width` logical cells.
    #[must_use]
    pub fn row(&self, y: usize) -> &[f32] {
        let start = self.index(0, y);
        &self.raw()[start..start + self.width]
    }

    /// Row as a mutable slice of exactly `width` logical cells.
    pub fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = self.index(0, y);
        &mut self.raw_mut()[start..start + self.width]
    }

    /// Every row as a disjoint mutable slice of exactly `width` logical
    /// cells, in row order. Unlike calling [`Field::row_mut`] in a loop,
    /// this borrows `self` exactly once, so the returned slices can be
    /// handed out to parallel workers.
    pub fn rows_mut(&mut self) -> Vec<&mut [f32]> {
        let width = self.width;
        let left_pad = self.left_pad;
        let stride = self.stride;
        self.raw_mut()
            .chunks_mut(stride)
            .map(|chunk| &mut chunk[left_pad..left_pad + width])
            .collect()
    }

    /// Paint a disk (or antialiased disk, if `smooth > 0`) of radius `r` and
    /// value `v` centered at `(cx + left_pad, cy)`, blending with the
    /// existing cell value by the disk's antialiasing weight.
    ///
    /// Used exclusively during mask construction.
    pub fn draw_disk(&mut self, cx: f64, cy: f64, r: f64, v: f32, smooth: f64) {
        let cx = cx + self.left_pad as f64;
        for j in 0..self.height {
            for i in 0..self.width {
                let dx = (i as f64 + 0.5) - cx;
                let dy = (j as f64 + 0.5) - cy;
                let d = dx.hypot(dy);
                let w = if smooth > 0.0 {
                    ((r + smooth - d) / smooth).clamp(0.0, 1.0)
                } else if d <= r {
                    1.0
                } else {
                    0.0
                };
                if w > 0.0 {
                    let old = self.get(i, j);
                    self.set(i, j, old * (1.0 - w as f32) + v * w as f32);
                }
            }
        }
    }

    /// Sum of every logical cell (padding columns are never written and
    /// stay zero, so it is equivalent but not necessary to skip them).
    #[must_use]
    pub fn sum(&self) -> f64 {
        let mut total = 0.0_f64;
        for y in 0..self.height {
            for &v in self.row(y) {
                total += f64::from(v);
            }
        }
        total
    }

    /// Bulk-copy `src` into `self`. Both fields must have identical logical
    /// dimensions.
    ///
    /// # Errors
    /// Returns [`DimensionMismatchError`] if `src`'s dimensions differ from
    /// `self`'s.
    pub fn overwrite(&mut self, src: &Self) -> Result<(), DimensionMismatchError> {
        if src.width != self.width || src.height != self.height {
            return Err(DimensionMismatchError::new(
                (self.width, self.height),
                (src.width, src.height),
            ));
        }
        for y in 0..self.height {
            self.row_mut(y).copy_from_slice(src.row(y));
        }
        Ok(())
    }
}
