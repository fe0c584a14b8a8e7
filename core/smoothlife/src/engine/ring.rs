//! Single-producer, single-consumer frame ring buffer.
//!
//! Hands computed fields from the compute thread to a consumer thread
//! without copying in the hot loop: `push` only rotates which slot is
//! "read" and which is "write"; the consumer's `pop` is the only place a
//! field is actually copied, into caller-provided storage.
//!
//! Uses wrapped `queue_start`/`buffer_read` indices and an atomic queue
//! length rather than a spinning CAS loop on pop. The disjoint-slot-
//! ownership argument for why concurrent access without a lock is sound:
//! `Release` on the index that publishes data, `Acquire` on the read of
//! that index from the other thread, `Relaxed` on fields only their own
//! thread ever touches.

use std::cell::UnsafeCell;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::field::Field;

/// Fixed-capacity queue of `N + 2` fields (`N` queued + one read slot +
/// one write slot) between exactly one producer and one consumer thread.
pub struct FrameRingBuffer {
    buffer: Vec<UnsafeCell<Field>>,
    capacity: usize,
    /// Consumer-owned: index of the next slot `pop` will read.
    queue_start: AtomicUsize,
    /// Shared: number of slots currently queued between `queue_start`
    /// and `buffer_read`.
    queue_size: AtomicUsize,
    /// Producer-owned: index of the current read slot.
    buffer_read: AtomicUsize,
}

// SAFETY: `buffer` is only ever mutated through `write_ptr`, which always
// points at slot `wrap(buffer_read + 1)`, and that slot is never aliased
// by `read_ptr` (slot `buffer_read`) or by any slot `pop` can observe
// (`queue_start..buffer_read`, which never contains `wrap(buffer_read+1)`
// while `queue_size <= capacity`). Exactly one thread calls `push`/
// `write_ptr`/`read_ptr`; exactly one other calls `pop`.
#[allow(unsafe_code)]
unsafe impl Sync for FrameRingBuffer {}

impl FrameRingBuffer {
    /// Build a ring buffer of queue capacity `capacity`, with `initial`
    /// installed as generation 0's read slot.
    #[must_use]
    pub fn new(capacity: usize, initial: Field) -> Self {
        let width = initial.width();
        let height = initial.height();
        let mut buffer = Vec::with_capacity(capacity + 2);
        buffer.push(UnsafeCell::new(initial));
        buffer.push(UnsafeCell::new(Field::zeros(width, height)));
        for _ in 0..capacity {
            buffer.push(UnsafeCell::new(Field::zeros(width, height)));
        }
        Self {
            buffer,
            capacity,
            queue_start: AtomicUsize::new(0),
            queue_size: AtomicUsize::new(0),
            buffer_read: AtomicUsize::new(0),
        }
    }

    fn wrap(&self, i: usize) -> usize {
        i % self.buffer.len()
    }

    /// Producer-only: pointer to the current write slot.
    #[must_use]
    pub fn write_ptr(&self) -> *mut Field {
        let br = self.buffer_read.load(Ordering::Relaxed);
        self.buffer[self.wrap(br + 1)].get()
    }

    /// Producer-only: pointer to the current read slot.
    #[must_use]
    pub fn read_ptr(&self) -> *const Field {
        let br = self.buffer_read.load(Ordering::Relaxed);
        self.buffer[br].get().cast_const()
    }

    /// Publish the write slot: if the queue is not full, advance
    /// `buffer_read` so the write slot becomes the new read slot and the
    /// old read slot becomes available to `pop`. Returns `false`
    /// (backpressure) if the queue is already at capacity.
    pub fn push(&self) -> bool {
        let mut expected = self.queue_size.load(Ordering::Relaxed);
        loop {
            if expected >= self.capacity {
                return false;
            }
            match self.queue_size.compare_exchange_weak(
                expected,
                expected + 1,
                Ordering::Release,
                Ordering::Relaxed,
            ) {
                Ok(_) => break,
                Err(actual) => expected = actual,
            }
        }
        let br = self.buffer_read.load(Ordering::Relaxed);
        self.buffer_read.store(self.wrap(br + 1), Ordering::Relaxed);
        true
    }

    /// Pop the oldest published field into `dst`. Returns `false` if the
    /// queue is empty.
    pub fn pop(&self, dst: &mut Field) -> bool {
        if self.queue_size.load(Ordering::Acquire) == 0 {
            return false;
        }
        let qs = self.queue_start.load(Ordering::Relaxed);
        // SAFETY: queue_size > 0 guarantees qs != buffer_read (the ring
        // invariant); we are the sole consumer, so no other read of this
        // slot is in flight, and the producer never writes to it again
        // until it is dequeued and later becomes its own write slot.
        #[allow(unsafe_code)]
        let src = unsafe { &*self.buffer[qs].get() };
        let _ = dst.overwrite(src);
        self.queue_start.store(self.wrap(qs + 1), Ordering::Relaxed);
        self.queue_size.fetch_sub(1, Ordering::Release);
        true
    }

    /// Best-effort queue length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.queue_size.load(Ordering::Relaxed)
    }

    /// Best-effort emptiness check.
    #[must_use]
    pub fn empty(&self) -> bool {
        self.size() == 0
    }

    /// Best-effort remaining capacity.
    #[must_use]
    pub fn capacity_left(&self) -> usize {
        self.capacity - self.size().min(self.capacity)
    }
}
