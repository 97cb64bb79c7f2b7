use crate::foundation::core::{Affine, Canvas, Point, Rgba8, Vec2};

/// Data-space limits on both axes.
pub const AXIS_LIMIT: f64 = 5.0;
/// Integer tick positions on both axes.
pub const TICKS: std::ops::RangeInclusive<i32> = -4..=4;

/// Maps data coordinates into canvas pixels.
///
/// The plot area is a square (equal aspect) below a title band, centered horizontally. The y axis
/// points up in data space and down in pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Pixel position of the data origin.
    pub origin: Point,
    /// Pixels per data unit.
    pub scale: f64,
}

impl Viewport {
    /// Lay out the plot area on `canvas`.
    pub fn fit(canvas: Canvas) -> Self {
        let w = f64::from(canvas.width);
        let h = f64::from(canvas.height);
        let top = 0.10 * h;
        let bottom = 0.07 * h;
        let side_margin = 0.08 * w;

        let avail_w = (w - 2.0 * side_margin).max(1.0);
        let avail_h = (h - top - bottom).max(1.0);
        let side = avail_w.min(avail_h);

        Self {
            origin: Point::new(w / 2.0, top + avail_h / 2.0),
            scale: side / (2.0 * AXIS_LIMIT),
        }
    }

    /// Data-to-pixel affine.
    pub fn affine(&self) -> Affine {
        Affine::translate(self.origin.to_vec2()) * Affine::scale_non_uniform(self.scale, -self.scale)
    }

    /// Map one data point to pixels.
    pub fn to_px(&self, p: Point) -> Point {
        Point::new(
            self.origin.x + p.x * self.scale,
            self.origin.y - p.y * self.scale,
        )
    }

    /// Pixel rectangle of the axes area as `(min, max)` corners.
    pub fn axes_rect(&self) -> (Point, Point) {
        let half = Vec2::new(AXIS_LIMIT * self.scale, AXIS_LIMIT * self.scale);
        (self.origin - half, self.origin + half)
    }
}

/// Colors and line weights of the plot. Widths are in points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotStyle {
    /// Figure and axes background.
    pub background: Rgba8,
    /// Axes frame and tick marks.
    pub spine: Rgba8,
    /// Lines through the origin.
    pub axis: Rgba8,
    /// Deformed grid.
    pub grid: Rgba8,
    /// Deformed unit circle.
    pub circle: Rgba8,
    /// Images of `e₁` and `e₂`.
    pub basis: [Rgba8; 2],
    /// Spine width.
    pub spine_width_pt: f64,
    /// Origin line width.
    pub axis_width_pt: f64,
    /// Grid line width.
    pub grid_width_pt: f64,
    /// Circle line width.
    pub circle_width_pt: f64,
    /// Arrow shaft width in data units.
    pub arrow_width: f64,
    /// Tick mark length.
    pub tick_len_pt: f64,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            background: Rgba8::hex(0xffffff),
            spine: Rgba8::hex(0x000000),
            axis: Rgba8::hex(0x888888),
            grid: Rgba8::hex(0xcccccc).with_opacity(0.6),
            circle: Rgba8::hex(0x33aa77),
            basis: [Rgba8::hex(0xee00aa), Rgba8::hex(0x2288cc)],
            spine_width_pt: 0.8,
            axis_width_pt: 0.5,
            grid_width_pt: 0.6,
            circle_width_pt: 2.0,
            arrow_width: 0.02,
            tick_len_pt: 3.5,
        }
    }
}

/// Pixels per typographic point at `dpi`.
pub fn px_per_pt(dpi: u32) -> f64 {
    f64::from(dpi) / 72.0
}

#[cfg(test)]
#[path = "../../tests/unit/scene/plot.rs"]
mod tests;
