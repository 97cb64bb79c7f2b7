use crate::animation::clock::{AnimationClock, PhasePosition};
use crate::animation::phase::{Phase, PhaseSequence};
use crate::foundation::core::{FrameIndex, Mat2};

/// Partially apply `target` on top of `current`.
///
/// `alpha = 0` leaves `current` unchanged, `alpha = 1` yields `target · current`.
pub fn blend(current: &Mat2, target: &Mat2, alpha: f64) -> Mat2 {
    let partial = Mat2::identity() * (1.0 - alpha) + *target * alpha;
    partial * *current
}

/// Transform for one frame plus the phase it belongs to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTransform {
    /// Net linear map to apply to every plotted point.
    pub matrix: Mat2,
    /// Phase position the matrix was computed from.
    pub position: PhasePosition,
    /// Active phase.
    pub phase: Phase,
}

/// Computes the cumulative transform for each frame of the decomposition animation.
///
/// Phases before the active one are applied in full and in order; the active phase is blended
/// in by its `alpha`. The stepper is pure: the result depends only on the frame index.
#[derive(Clone, Copy, Debug)]
pub struct PhaseStepper {
    phases: PhaseSequence,
    clock: AnimationClock,
}

impl PhaseStepper {
    /// Stepper over `phases` for `total_frames` frames.
    pub fn new(phases: PhaseSequence, total_frames: u64) -> Self {
        Self {
            phases,
            clock: AnimationClock::new(total_frames),
        }
    }

    /// The underlying clock.
    pub fn clock(&self) -> AnimationClock {
        self.clock
    }

    /// The phase sequence.
    pub fn phases(&self) -> &PhaseSequence {
        &self.phases
    }

    /// Net transform at `frame`.
    pub fn transform_at(&self, frame: FrameIndex) -> FrameTransform {
        let position = self.clock.position(frame);
        let mut matrix = Mat2::identity();
        for (index, phase) in self.phases.iter().enumerate() {
            if index < position.phase_index {
                matrix = phase.matrix * matrix;
            } else {
                matrix = blend(&matrix, &phase.matrix, position.alpha);
                break;
            }
        }
        FrameTransform {
            matrix,
            position,
            phase: *self.phases.get(position.phase_index),
        }
    }

    /// Iterate transforms for every frame in order.
    pub fn frames(&self) -> impl Iterator<Item = (FrameIndex, FrameTransform)> + '_ {
        (0..self.clock.total_frames()).map(move |f| {
            let idx = FrameIndex(f);
            (idx, self.transform_at(idx))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/stepper.rs"]
mod tests;
