use crate::foundation::error::{SvdVizError, SvdVizResult};

pub use kurbo::{Affine, BezPath, Point, Vec2};

/// 2x2 real matrix used for every linear map in the animation.
pub type Mat2 = nalgebra::Matrix2<f64>;

/// Build a [`Mat2`] from row-major entries.
pub fn mat2_from_rows(rows: [[f64; 2]; 2]) -> Mat2 {
    Mat2::new(rows[0][0], rows[0][1], rows[1][0], rows[1][1])
}

/// Apply `m` to a point treated as a column vector.
pub fn apply_mat2(m: &Mat2, p: Point) -> Point {
    Point::new(
        m[(0, 0)] * p.x + m[(0, 1)] * p.y,
        m[(1, 0)] * p.x + m[(1, 1)] * p.y,
    )
}

/// Absolute 0-based frame index in animation timeline space.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> SvdVizResult<Self> {
        if den == 0 {
            return Err(SvdVizError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(SvdVizError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Convert seconds to frame count using floor semantics.
    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque color from a packed `0xRRGGBB` value.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a: 255,
        }
    }

    /// Same color with alpha scaled by `opacity` (clamped to `[0, 1]`).
    pub fn with_opacity(self, opacity: f64) -> Self {
        let a = (f64::from(self.a) * opacity.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
