use super::*;
use crate::foundation::core::mat2_from_rows;

#[test]
fn format_matrix_pads_positive_values() {
    let m = mat2_from_rows([[2.0, 1.2], [0.6, -1.5]]);
    assert_eq!(
        format_matrix("A", &m),
        "A = [\n  [ 2.00,  1.20],\n  [ 0.60, -1.50]\n]"
    );
}

#[test]
fn overlay_contains_every_label() {
    let c = Canvas {
        width: 720,
        height: 720,
    };
    let v = Viewport::fit(c);
    let m = format_matrix("A", &mat2_from_rows([[2.0, 1.2], [0.6, 1.5]]));
    let svg = overlay_svg(
        c,
        &v,
        120.0 / 72.0,
        &OverlayText {
            phase_label: "Scale by <\u{3a3}>",
            matrix_text: &m,
        },
    );
    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains(TITLE));
    assert!(svg.contains("Scale by &lt;\u{3a3}&gt;"));
    assert!(svg.contains("[ 2.00,  1.20],"));
    assert_eq!(svg.matches("<tspan").count(), 4);
    assert!(svg.contains(">-4</text>"));
    assert!(svg.contains(">4</text>"));
}
