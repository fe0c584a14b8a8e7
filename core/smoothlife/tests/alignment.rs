//! Alignment invariants: for every field and every row, the row pointer
//! is 64-byte aligned and the row stride in bytes is a multiple of the
//! cache line.

use std::mem::size_of;

use smoothlife::{Field, CACHELINE_SIZE};

#[test]
fn every_row_pointer_is_cacheline_aligned() {
    for (width, height) in [(1, 1), (3, 5), (16, 16), (17, 9), (250, 4), (256, 256)] {
        let field = Field::zeros(width, height);
        for y in 0..height {
            let ptr = field.row_ptr(y) as usize;
            assert_eq!(ptr % CACHELINE_SIZE, 0, "row {y} of {width}x{height} misaligned");
        }
    }
}

#[test]
fn stride_in_bytes_is_cacheline_multiple() {
    for width in [1_usize, 2, 15, 16, 17, 63, 64, 65, 257, 1000] {
        let field = Field::zeros(width, 2);
        let stride_bytes = field.stride() * size_of::<f32>();
        assert_eq!(stride_bytes % CACHELINE_SIZE, 0);
        assert!(field.stride() >= width);
    }
}
