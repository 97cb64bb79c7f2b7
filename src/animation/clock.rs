use crate::animation::phase::PhaseSequence;
use crate::foundation::core::FrameIndex;

/// Where a frame falls within the phase sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhasePosition {
    /// Active phase, `0..3`.
    pub phase_index: usize,
    /// Progress through the active phase, `[0, 1]`.
    pub alpha: f64,
}

/// Deterministic mapping from frame index to phase position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationClock {
    total_frames: u64,
    frames_per_phase: u64,
}

impl AnimationClock {
    /// Clock for `total_frames` frames; zero is treated as one.
    pub fn new(total_frames: u64) -> Self {
        let total_frames = total_frames.max(1);
        let phases = PhaseSequence::LEN as u64;
        Self {
            total_frames,
            frames_per_phase: total_frames.div_ceil(phases).max(1),
        }
    }

    /// Total frame count.
    pub fn total_frames(self) -> u64 {
        self.total_frames
    }

    /// Frames spent in each phase, `ceil(total / 3)`.
    pub fn frames_per_phase(self) -> u64 {
        self.frames_per_phase
    }

    /// Index of the last frame.
    pub fn last_frame(self) -> FrameIndex {
        FrameIndex(self.total_frames - 1)
    }

    /// Map a frame to its phase position.
    ///
    /// The last frame always maps to the end of the final phase so the animation lands on the
    /// fully composed transform, even when it would otherwise sit mid-phase.
    pub fn position(self, frame: FrameIndex) -> PhasePosition {
        if frame >= self.last_frame() {
            return PhasePosition {
                phase_index: PhaseSequence::LEN - 1,
                alpha: 1.0,
            };
        }
        let f = frame.0;
        let per = self.frames_per_phase;
        let phase_index = ((f / per) as usize).min(PhaseSequence::LEN - 1);
        let alpha = ((f % per) as f64) / (per as f64);
        PhasePosition { phase_index, alpha }
    }
}
