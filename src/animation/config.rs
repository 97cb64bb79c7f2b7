use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::core::{Canvas, Fps, Mat2, mat2_from_rows};
use crate::foundation::error::{SvdVizError, SvdVizResult};

/// Matrix animated when no override is given.
pub const DEFAULT_MATRIX: [[f64; 2]; 2] = [[2.0, 1.2], [0.6, 1.5]];
/// Default output path of the animation.
pub const DEFAULT_OUTPUT: &str = "renders/svd_animation.gif";
/// Default figure size in inches.
pub const DEFAULT_FIGSIZE: [f64; 2] = [6.0, 6.0];
/// Default dots per inch.
pub const DEFAULT_DPI: u32 = 120;
/// Default frames per second.
pub const DEFAULT_FPS: u32 = 24;
/// Default duration in seconds.
pub const DEFAULT_DURATION_SECS: f64 = 12.0;

const MAX_DIM: u32 = 16_384;
// Over an hour at 24 fps.
const MAX_FRAMES: u64 = 100_000;

/// Settings for one animation render.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    /// Output file; `.gif` selects the GIF encoder, anything else goes through `ffmpeg`.
    pub output: PathBuf,
    /// Source matrix, row-major.
    pub matrix: [[f64; 2]; 2],
    /// Frames per second.
    pub fps: u32,
    /// Total duration in seconds.
    pub duration_secs: f64,
    /// Figure size in inches, `[width, height]`.
    pub figsize: [f64; 2],
    /// Output resolution in dots per inch.
    pub dpi: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            matrix: DEFAULT_MATRIX,
            fps: DEFAULT_FPS,
            duration_secs: DEFAULT_DURATION_SECS,
            figsize: DEFAULT_FIGSIZE,
            dpi: DEFAULT_DPI,
        }
    }
}

impl AnimationConfig {
    /// Load a JSON configuration file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> SvdVizResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read animation config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_str(&text)
            .with_context(|| format!("parse animation config '{}'", path.display()))?;
        Ok(cfg)
    }

    /// Reject settings that cannot produce an animation.
    pub fn validate(&self) -> SvdVizResult<()> {
        if self.fps == 0 {
            return Err(SvdVizError::validation("fps must be > 0"));
        }
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            return Err(SvdVizError::validation(
                "duration must be a finite, non-negative number of seconds",
            ));
        }
        if self.figsize.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(SvdVizError::validation(
                "figsize width/height must be finite and > 0",
            ));
        }
        if self.dpi == 0 {
            return Err(SvdVizError::validation("dpi must be > 0"));
        }
        if self.matrix.iter().flatten().any(|v| !v.is_finite()) {
            return Err(SvdVizError::validation("matrix entries must be finite"));
        }
        let frames = self.total_frames()?;
        if frames > MAX_FRAMES {
            return Err(SvdVizError::validation(format!(
                "{} s at {} fps is {frames} frames, more than the maximum of {MAX_FRAMES}",
                self.duration_secs, self.fps
            )));
        }
        let canvas = self.canvas();
        if canvas.width == 0 || canvas.height == 0 {
            return Err(SvdVizError::validation(format!(
                "figsize {:?} at {} dpi rounds to an empty canvas",
                self.figsize, self.dpi
            )));
        }
        if canvas.width > MAX_DIM || canvas.height > MAX_DIM {
            return Err(SvdVizError::validation(format!(
                "canvas {}x{} exceeds the maximum of {MAX_DIM}x{MAX_DIM}",
                canvas.width, canvas.height
            )));
        }
        Ok(())
    }

    /// Source matrix.
    pub fn matrix(&self) -> Mat2 {
        mat2_from_rows(self.matrix)
    }

    /// Frame rate as a rational.
    pub fn fps(&self) -> SvdVizResult<Fps> {
        Fps::new(self.fps, 1)
    }

    /// `max(1, floor(duration · fps))`.
    pub fn total_frames(&self) -> SvdVizResult<u64> {
        Ok(self.fps()?.secs_to_frames_floor(self.duration_secs).max(1))
    }

    /// Pixel size: figure size times dpi, rounded.
    pub fn canvas(&self) -> Canvas {
        let dpi = f64::from(self.dpi);
        let px = |inches: f64| (inches * dpi).round().clamp(0.0, f64::from(u32::MAX)) as u32;
        Canvas {
            width: px(self.figsize[0]),
            height: px(self.figsize[1]),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/config.rs"]
mod tests;
