use std::fmt::Write as _;

use crate::foundation::core::{Canvas, Mat2};
use crate::scene::plot::{AXIS_LIMIT, TICKS, Viewport};

/// Plot title.
pub const TITLE: &str = "Singular Value Decomposition";

const SANS: &str = "DejaVu Sans, Liberation Sans, Arial, Helvetica, sans-serif";
const MONO: &str = "DejaVu Sans Mono, Liberation Mono, Menlo, Consolas, monospace";

/// Multi-line readout of a matrix with two decimals, sign column kept for positives.
///
/// ```text
/// A = [
///   [ 2.00,  1.20],
///   [ 0.60,  1.50]
/// ]
/// ```
pub fn format_matrix(label: &str, m: &Mat2) -> String {
    format!(
        "{label} = [\n  [{}, {}],\n  [{}, {}]\n]",
        signed(m[(0, 0)]),
        signed(m[(0, 1)]),
        signed(m[(1, 0)]),
        signed(m[(1, 1)]),
    )
}

fn signed(v: f64) -> String {
    if v.is_sign_negative() && v != 0.0 {
        format!("{v:.2}")
    } else {
        format!(" {:.2}", v.abs())
    }
}

/// Text drawn on top of the plot for one phase.
#[derive(Clone, Debug)]
pub struct OverlayText<'a> {
    /// Active phase caption.
    pub phase_label: &'a str,
    /// Output of [`format_matrix`] for the source matrix.
    pub matrix_text: &'a str,
}

/// Build the SVG document for the text overlay (title, tick labels, phase caption, matrix).
///
/// Font sizes are in points and converted with `px_per_pt`.
pub fn overlay_svg(canvas: Canvas, viewport: &Viewport, px_per_pt: f64, text: &OverlayText<'_>) -> String {
    let (min, max) = viewport.axes_rect();
    let w = max.x - min.x;
    let h = max.y - min.y;
    let title_pt = 12.0 * px_per_pt;
    let tick_pt = 10.0 * px_per_pt;
    let phase_pt = 14.0 * px_per_pt;
    let matrix_pt = 12.0 * px_per_pt;

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        canvas.width, canvas.height, canvas.width, canvas.height
    );

    let _ = write!(
        svg,
        r#"<text x="{:.2}" y="{:.2}" font-family="{SANS}" font-size="{title_pt:.2}" text-anchor="middle" fill="black">{}</text>"#,
        (min.x + max.x) / 2.0,
        min.y - 0.5 * title_pt,
        escape(TITLE)
    );

    for tick in TICKS {
        let v = f64::from(tick);
        let x = min.x + (v + AXIS_LIMIT) / (2.0 * AXIS_LIMIT) * w;
        let y = max.y - (v + AXIS_LIMIT) / (2.0 * AXIS_LIMIT) * h;
        let _ = write!(
            svg,
            r#"<text x="{x:.2}" y="{:.2}" font-family="{SANS}" font-size="{tick_pt:.2}" text-anchor="middle" fill="black">{tick}</text>"#,
            max.y + 1.4 * tick_pt
        );
        let _ = write!(
            svg,
            r#"<text x="{:.2}" y="{:.2}" font-family="{SANS}" font-size="{tick_pt:.2}" text-anchor="end" fill="black">{tick}</text>"#,
            min.x - 0.5 * tick_pt,
            y + 0.35 * tick_pt
        );
    }

    // Phase caption in a rounded box anchored at 2 % / 97 % of the axes.
    let pad = 0.3 * phase_pt;
    let px = min.x + 0.02 * w;
    let py = min.y + 0.03 * h;
    let box_w = approx_text_width(text.phase_label, phase_pt) + 2.0 * pad;
    let box_h = phase_pt * 1.2 + 2.0 * pad;
    let _ = write!(
        svg,
        r#"<rect x="{px:.2}" y="{py:.2}" width="{box_w:.2}" height="{box_h:.2}" rx="{pad:.2}" ry="{pad:.2}" fill="white" fill-opacity="0.85" stroke="black" stroke-width="{:.2}"/>"#,
        px_per_pt
    );
    let _ = write!(
        svg,
        r#"<text x="{:.2}" y="{:.2}" font-family="{SANS}" font-size="{phase_pt:.2}" fill="black">{}</text>"#,
        px + pad,
        py + pad + phase_pt,
        escape(text.phase_label)
    );

    // Matrix readout anchored at 2 % / 87 % of the axes.
    let mx = min.x + 0.02 * w;
    let my = min.y + 0.13 * h;
    let _ = write!(
        svg,
        r#"<text xml:space="preserve" font-family="{MONO}" font-size="{matrix_pt:.2}" fill="black">"#
    );
    for (i, line) in text.matrix_text.lines().enumerate() {
        let _ = write!(
            svg,
            r#"<tspan x="{mx:.2}" y="{:.2}">{}</tspan>"#,
            my + matrix_pt * (1.0 + 1.2 * i as f64),
            escape(line)
        );
    }
    svg.push_str("</text></svg>");
    svg
}

fn approx_text_width(s: &str, font_px: f64) -> f64 {
    0.62 * font_px * s.chars().count() as f64
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/scene/labels.rs"]
mod tests;
