//! The step driver: advances the simulation by one generation.

use crate::engine::ring::FrameRingBuffer;
use crate::field::Field;
use crate::kernel::fill;
use crate::mask::MaskFamily;
use crate::ruleset::Ruleset;
use crate::transition::{discrete_step, euler_step};

/// Both mask families needed by one step: the annulus (`n`) and the
/// inner disk (`m`).
pub struct Masks {
    annulus: MaskFamily,
    inner_disk: MaskFamily,
}

impl Masks {
    /// Build both families from a ruleset's radii.
    #[must_use]
    pub fn new(rules: &Ruleset) -> Self {
        Self {
            annulus: MaskFamily::annulus(rules.ra(), rules.ri()),
            inner_disk: MaskFamily::inner_disk(rules.ra(), rules.ri()),
        }
    }

    /// The annulus family (fills `n`).
    #[must_use]
    pub const fn annulus(&self) -> &MaskFamily {
        &self.annulus
    }

    /// The inner-disk family (fills `m`).
    #[must_use]
    pub const fn inner_disk(&self) -> &MaskFamily {
        &self.inner_disk
    }
}

/// Drives the simulation: owns the ring buffer, the masks and ruleset
/// are borrowed, and `spacetime` tracks the number of completed steps.
pub struct StepDriver<'a> {
    ring: FrameRingBuffer,
    masks: Masks,
    rules: &'a Ruleset,
    spacetime: u64,
}

impl<'a> StepDriver<'a> {
    /// Build a driver whose ring buffer has queue capacity `queue_capacity`
    /// and whose first read slot is `initial`.
    #[must_use]
    pub fn new(rules: &'a Ruleset, queue_capacity: usize, initial: Field) -> Self {
        Self {
            ring: FrameRingBuffer::new(queue_capacity, initial),
            masks: Masks::new(rules),
            rules,
            spacetime: 0,
        }
    }

    /// The underlying ring buffer, for the consumer side of the pipeline.
    #[must_use]
    pub const fn ring(&self) -> &FrameRingBuffer {
        &self.ring
    }

    /// Generations completed so far.
    #[must_use]
    pub const fn spacetime(&self) -> u64 {
        self.spacetime
    }

    /// Advance the simulation by one generation.
    ///
    /// Returns `false` (and leaves `spacetime` unchanged) if the ring
    /// buffer's queue is full and the step was skipped as backpressure.
    pub fn step(&mut self) -> bool {
        if self.spacetime != 0 && !self.ring.push() {
            return false;
        }

        // SAFETY: we are the sole producer thread; `read_ptr` and
        // `write_ptr` never alias (ring buffer invariant), so this
        // shared/exclusive borrow pair is sound.
        #[allow(unsafe_code)]
        let read: &Field = unsafe { &*self.ring.read_ptr() };
        #[allow(unsafe_code)]
        let write: &mut Field = unsafe { &mut *self.ring.write_ptr() };

        compute_generation(read, write, &self.masks, self.rules);

        self.spacetime += 1;
        true
    }

    /// Split into the ring buffer (handed to a consumer thread) and a
    /// [`ComputeHalf`] (kept by the producer thread). The two halves
    /// borrow disjoint fields of `self`, so both can be moved into
    /// separate `std::thread::scope` closures at once.
    pub fn split(&mut self) -> (&FrameRingBuffer, ComputeHalf<'_, 'a>) {
        (
            &self.ring,
            ComputeHalf {
                masks: &self.masks,
                rules: self.rules,
                spacetime: &mut self.spacetime,
            },
        )
    }
}

/// The producer-thread half of a split [`StepDriver`]: everything needed
/// to compute a generation except the ring buffer itself.
pub struct ComputeHalf<'s, 'a> {
    masks: &'s Masks,
    rules: &'a Ruleset,
    spacetime: &'s mut u64,
}

impl ComputeHalf<'_, '_> {
    /// Advance by one generation against the given ring buffer. Same
    /// contract as [`StepDriver::step`].
    pub fn step(&mut self, ring: &FrameRingBuffer) -> bool {
        if *self.spacetime != 0 && !ring.push() {
            return false;
        }

        // SAFETY: see `StepDriver::step`; the producer thread is the only
        // caller of this method for a given ring buffer.
        #[allow(unsafe_code)]
        let read: &Field = unsafe { &*ring.read_ptr() };
        #[allow(unsafe_code)]
        let write: &mut Field = unsafe { &mut *ring.write_ptr() };

        compute_generation(read, write, self.masks, self.rules);

        *self.spacetime += 1;
        true
    }
}

/// Fill every cell of `write` from `read`, one generation of the
/// transition rule. Parallelized over rows when the `multithread`
/// feature is enabled: each row only reads from `read` and writes its
/// own disjoint row of `write`, so no synchronization is needed between
/// workers.
fn compute_generation(read: &Field, write: &mut Field, masks: &Masks, rules: &Ruleset) {
    let width = read.width();
    let rows = write.rows_mut();

    #[cfg(feature = "multithread")]
    {
        use rayon::prelude::*;
        rows.into_par_iter().enumerate().for_each(|(y, row)| {
            compute_row(read, row, width, y, masks, rules);
        });
    }

    #[cfg(not(feature = "multithread"))]
    {
        for (y, row) in rows.into_iter().enumerate() {
            compute_row(read, row, width, y, masks, rules);
        }
    }
}

fn compute_row(read: &Field, row: &mut [f32], width: usize, y: usize, masks: &Masks, rules: &Ruleset) {
    for x in 0..width {
        let n = fill(read, x, y, masks.annulus());
        let m = fill(read, x, y, masks.inner_disk());
        debug_assert!((0.0..=1.0).contains(&n), "n out of range: {n}");
        debug_assert!((0.0..=1.0).contains(&m), "m out of range: {m}");

        let value = f64::from(read.get(x, y));
        let next = if rules.discrete() {
            discrete_step(n, m, rules.b1(), rules.b2(), rules.d1(), rules.d2())
        } else {
            euler_step(
                value,
                n,
                m,
                rules.b1(),
                rules.b2(),
                rules.d1(),
                rules.d2(),
                rules.alpha_m(),
                rules.alpha_n(),
                rules.dt(),
            )
        };
        row[x] = next as f32;
    }
}
