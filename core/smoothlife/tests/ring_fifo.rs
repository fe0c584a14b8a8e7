//! Ring buffer FIFO ordering and backpressure, including a capacity-4,
//! every-third-frame consumer scenario.

use smoothlife::{Field, FrameRingBuffer};

fn push_value(ring: &FrameRingBuffer, value: f32) -> bool {
    // SAFETY: single-threaded test, no concurrent producer/consumer.
    #[allow(unsafe_code)]
    unsafe {
        (*ring.write_ptr()).set(0, 0, value);
    }
    ring.push()
}

#[test]
fn fifo_ordering_holds_for_many_frames() {
    let ring = FrameRingBuffer::new(8, Field::zeros(4, 4));
    for frame in 1..=8 {
        assert!(push_value(&ring, frame as f32));
    }

    let mut dst = Field::zeros(4, 4);
    for frame in 1..=8 {
        assert!(ring.pop(&mut dst));
        assert!((dst.get(0, 0) - frame as f32).abs() < f32::EPSILON);
    }
    assert!(!ring.pop(&mut dst));
}

/// A capacity-4 ring with a producer that always tries to advance, and a
/// consumer that only pops every third generation. The producer observes
/// backpressure once the queue saturates, and no frame is ever skipped
/// or duplicated once the consumer catches up.
#[test]
fn capacity_four_ring_with_every_third_frame_consumer() {
    let ring = FrameRingBuffer::new(4, Field::zeros(4, 4));
    let mut produced = 0_u32;
    let mut consumed_values = Vec::new();
    let mut dst = Field::zeros(4, 4);

    for tick in 1..=30_u32 {
        if push_value(&ring, produced as f32 + 1.0) {
            produced += 1;
        }

        if tick % 3 == 0 && ring.pop(&mut dst) {
            consumed_values.push(dst.get(0, 0));
        }
    }

    while ring.pop(&mut dst) {
        consumed_values.push(dst.get(0, 0));
    }

    for window in consumed_values.windows(2) {
        assert!(window[1] > window[0], "frames out of order: {window:?}");
    }
    assert!(!consumed_values.is_empty());
}

/// W=H=256, a capacity-4 ring, 1000 produced frames; the consumer drains
/// every published frame (so the producer never deadlocks on permanent
/// backpressure) but only records every 3rd one it observes, starting
/// with the first. After all 1000 frames are produced, the consumer has
/// recorded exactly `ceil(1000/3)` frames, and their generation markers
/// are strictly increasing.
#[test]
fn capacity_four_ring_observes_every_third_frame_of_one_thousand() {
    const FIELD_SIZE: usize = 256;
    const TOTAL_FRAMES: u32 = 1000;

    let ring = FrameRingBuffer::new(4, Field::zeros(FIELD_SIZE, FIELD_SIZE));
    let mut produced = 0_u32;
    let mut observed_index = 0_u32;
    let mut recorded = Vec::new();
    let mut dst = Field::zeros(FIELD_SIZE, FIELD_SIZE);

    while produced < TOTAL_FRAMES {
        if push_value(&ring, produced as f32 + 1.0) {
            produced += 1;
        }
        while ring.pop(&mut dst) {
            observed_index += 1;
            if observed_index % 3 == 1 {
                recorded.push(dst.get(0, 0));
            }
        }
    }
    while ring.pop(&mut dst) {
        observed_index += 1;
        if observed_index % 3 == 1 {
            recorded.push(dst.get(0, 0));
        }
    }

    assert_eq!(produced, TOTAL_FRAMES);
    assert_eq!(observed_index, TOTAL_FRAMES);
    let expected = TOTAL_FRAMES.div_ceil(3) as usize;
    assert_eq!(recorded.len(), expected, "expected ceil(1000/3) = {expected} recorded frames");

    for window in recorded.windows(2) {
        assert!(window[1] > window[0], "generation indices out of order: {window:?}");
    }
}

#[test]
fn backpressure_prevents_queue_from_exceeding_capacity() {
    let ring = FrameRingBuffer::new(3, Field::zeros(4, 4));
    let mut accepted = 0;
    for frame in 0..10 {
        if push_value(&ring, frame as f32) {
            accepted += 1;
        }
    }
    assert_eq!(accepted, 3);
    assert_eq!(ring.size(), 3);
    assert_eq!(ring.capacity_left(), 0);
}

#[test]
fn draining_reopens_capacity_for_further_pushes() {
    let ring = FrameRingBuffer::new(2, Field::zeros(4, 4));
    assert!(push_value(&ring, 1.0));
    assert!(push_value(&ring, 2.0));
    assert!(!push_value(&ring, 3.0));

    let mut dst = Field::zeros(4, 4);
    assert!(ring.pop(&mut dst));
    assert!(push_value(&ring, 3.0));
    assert_eq!(ring.size(), 2);
}
