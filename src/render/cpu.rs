use kurbo::{BezPath, Cap, Join, PathEl, Stroke, StrokeOpts};

use crate::foundation::core::{Canvas, Mat2, Point, Rgba8, Vec2};
use crate::foundation::error::{SvdVizError, SvdVizResult};
use crate::render::backend::FrameRGBA;
use crate::render::text::TextOverlayCache;
use crate::scene::geometry::PlotGeometry;
use crate::scene::labels::{OverlayText, format_matrix, overlay_svg};
use crate::scene::plot::{AXIS_LIMIT, PlotStyle, TICKS, Viewport, px_per_pt};

const STROKE_TOLERANCE: f64 = 0.1;

/// CPU rasterizer for the decomposition plot, powered by `vello_cpu`.
///
/// Geometry is stroked into fill outlines with `kurbo` and filled in pixel space; text comes
/// from a cached `resvg` overlay per phase caption.
pub struct PlotRenderer {
    canvas: Canvas,
    width: u16,
    height: u16,
    viewport: Viewport,
    style: PlotStyle,
    px_per_pt: f64,
    matrix_text: String,
    ctx: Option<vello_cpu::RenderContext>,
    overlays: TextOverlayCache,
}

impl PlotRenderer {
    /// Renderer for `canvas` at `dpi`, annotating the plot with `source`.
    pub fn new(canvas: Canvas, dpi: u32, source: &Mat2) -> SvdVizResult<Self> {
        Self::with_style(canvas, dpi, source, PlotStyle::default())
    }

    /// Renderer with a custom style.
    pub fn with_style(
        canvas: Canvas,
        dpi: u32,
        source: &Mat2,
        style: PlotStyle,
    ) -> SvdVizResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| SvdVizError::render("canvas width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| SvdVizError::render("canvas height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(SvdVizError::render("canvas must be non-empty"));
        }

        let overlays = TextOverlayCache::new();
        tracing::debug!(font_faces = overlays.font_faces(), "loaded overlay fonts");

        Ok(Self {
            canvas,
            width,
            height,
            viewport: Viewport::fit(canvas),
            style,
            px_per_pt: px_per_pt(dpi),
            matrix_text: format_matrix("A", source),
            ctx: None,
            overlays,
        })
    }

    /// Output dimensions.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Data-to-pixel mapping in use.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Rasterize already-transformed `geometry` with `phase_label` as caption.
    pub fn render(&mut self, geometry: &PlotGeometry, phase_label: &str) -> SvdVizResult<FrameRGBA> {
        let overlay = {
            let canvas = self.canvas;
            let viewport = self.viewport;
            let ppt = self.px_per_pt;
            let matrix_text = self.matrix_text.as_str();
            self.overlays.get_or_rasterize(phase_label, canvas, || {
                overlay_svg(
                    canvas,
                    &viewport,
                    ppt,
                    &OverlayText {
                        phase_label,
                        matrix_text,
                    },
                )
            })?
        };

        let mut ctx = match self.ctx.take() {
            Some(ctx) => ctx,
            None => vello_cpu::RenderContext::new(self.width, self.height),
        };
        ctx.reset();
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        self.draw_background(&mut ctx);
        self.draw_origin_lines(&mut ctx);
        self.draw_geometry(&mut ctx, geometry);
        self.draw_frame(&mut ctx);

        ctx.set_paint(overlay);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        ctx.render_to_pixmap(&mut pixmap);
        self.ctx = Some(ctx);

        Ok(FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn draw_background(&self, ctx: &mut vello_cpu::RenderContext) {
        set_color(ctx, self.style.background);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));
    }

    fn draw_origin_lines(&self, ctx: &mut vello_cpu::RenderContext) {
        let v = &self.viewport;
        let mut path = BezPath::new();
        path.move_to(v.to_px(Point::new(-AXIS_LIMIT, 0.0)));
        path.line_to(v.to_px(Point::new(AXIS_LIMIT, 0.0)));
        path.move_to(v.to_px(Point::new(0.0, -AXIS_LIMIT)));
        path.line_to(v.to_px(Point::new(0.0, AXIS_LIMIT)));
        self.stroke(ctx, &path, self.style.axis, self.style.axis_width_pt, Cap::Butt);
    }

    fn draw_geometry(&self, ctx: &mut vello_cpu::RenderContext, geometry: &PlotGeometry) {
        let v = &self.viewport;

        for line in &geometry.grid {
            let path = polyline(line.iter().map(|&p| v.to_px(p)), false);
            self.stroke(ctx, &path, self.style.grid, self.style.grid_width_pt, Cap::Butt);
        }

        let circle = polyline(geometry.circle.iter().map(|&p| v.to_px(p)), true);
        self.stroke(
            ctx,
            &circle,
            self.style.circle,
            self.style.circle_width_pt,
            Cap::Round,
        );

        for (tip, color) in geometry.basis.iter().zip(self.style.basis) {
            if let Some(arrow) = arrow_path(*tip, self.style.arrow_width) {
                let px_path = self.viewport.affine() * arrow;
                set_color(ctx, color);
                ctx.fill_path(&bezpath_to_cpu(&px_path));
            }
        }
    }

    /// Cover everything outside the axes, then draw spines and tick marks.
    fn draw_frame(&self, ctx: &mut vello_cpu::RenderContext) {
        let (min, max) = self.viewport.axes_rect();
        let w = f64::from(self.width);
        let h = f64::from(self.height);

        set_color(ctx, self.style.background);
        for r in [
            vello_cpu::kurbo::Rect::new(0.0, 0.0, w, min.y),
            vello_cpu::kurbo::Rect::new(0.0, max.y, w, h),
            vello_cpu::kurbo::Rect::new(0.0, min.y, min.x, max.y),
            vello_cpu::kurbo::Rect::new(max.x, min.y, w, max.y),
        ] {
            if r.width() > 0.0 && r.height() > 0.0 {
                ctx.fill_rect(&r);
            }
        }

        let mut spines = BezPath::new();
        spines.move_to(min);
        spines.line_to(Point::new(max.x, min.y));
        spines.line_to(max);
        spines.line_to(Point::new(min.x, max.y));
        spines.close_path();

        let tick = self.style.tick_len_pt * self.px_per_pt;
        let span = max.x - min.x;
        for t in TICKS {
            let frac = (f64::from(t) + AXIS_LIMIT) / (2.0 * AXIS_LIMIT);
            let x = min.x + frac * span;
            let y = max.y - frac * span;
            spines.move_to(Point::new(x, max.y));
            spines.line_to(Point::new(x, max.y + tick));
            spines.move_to(Point::new(min.x, y));
            spines.line_to(Point::new(min.x - tick, y));
        }

        self.stroke(
            ctx,
            &spines,
            self.style.spine,
            self.style.spine_width_pt,
            Cap::Butt,
        );
    }

    fn stroke(
        &self,
        ctx: &mut vello_cpu::RenderContext,
        path: &BezPath,
        color: Rgba8,
        width_pt: f64,
        cap: Cap,
    ) {
        let style = Stroke::new(width_pt * self.px_per_pt)
            .with_caps(cap)
            .with_join(Join::Round);
        let outline = kurbo::stroke(
            path.iter(),
            &style,
            &StrokeOpts::default(),
            STROKE_TOLERANCE,
        );
        set_color(ctx, color);
        ctx.fill_path(&bezpath_to_cpu(&outline));
    }
}

fn set_color(ctx: &mut vello_cpu::RenderContext, c: Rgba8) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
}

fn polyline(points: impl IntoIterator<Item = Point>, closed: bool) -> BezPath {
    let mut path = BezPath::new();
    for (i, p) in points.into_iter().enumerate() {
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    if closed && !path.elements().is_empty() {
        path.close_path();
    }
    path
}

/// Filled arrow from the origin to `tip` in data space, head included in the length.
///
/// Head width is three shaft widths and head length one and a half head widths; short vectors
/// shrink the head to fit. Returns `None` for a degenerate vector.
pub(crate) fn arrow_path(tip: Point, width: f64) -> Option<BezPath> {
    let dir = tip.to_vec2();
    let len = dir.hypot();
    if !len.is_finite() || len < 1e-9 {
        return None;
    }
    let unit = dir / len;
    let normal = Vec2::new(-unit.y, unit.x);

    let head_w = 3.0 * width;
    let head_len = (1.5 * head_w).min(len);
    let shaft_len = len - head_len;

    let half = width / 2.0;
    let base = Point::ORIGIN + unit * shaft_len;

    let mut path = BezPath::new();
    path.move_to(Point::ORIGIN + normal * half);
    path.line_to(base + normal * half);
    path.line_to(base + normal * (head_w / 2.0));
    path.line_to(tip);
    path.line_to(base - normal * (head_w / 2.0));
    path.line_to(base - normal * half);
    path.line_to(Point::ORIGIN - normal * half);
    path.close_path();
    Some(path)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
