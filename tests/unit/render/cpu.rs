use super::*;

fn close(px: [u8; 4], want: Rgba8, tol: i16) -> bool {
    [px[0], px[1], px[2]]
        .iter()
        .zip([want.r, want.g, want.b])
        .all(|(a, b)| (i16::from(*a) - i16::from(b)).abs() <= tol)
}

#[test]
fn arrow_path_reaches_tip_and_skips_degenerate() {
    assert!(arrow_path(Point::ORIGIN, 0.02).is_none());

    let path = arrow_path(Point::new(2.0, 0.0), 0.02).unwrap();
    let bbox = kurbo::Shape::bounding_box(&path);
    assert!((bbox.x1 - 2.0).abs() < 1e-12);
    assert!((bbox.x0 - 0.0).abs() < 1e-12);
    assert!((bbox.height() - 0.06).abs() < 1e-12);
}

#[test]
fn renders_identity_plot() {
    let canvas = Canvas {
        width: 288,
        height: 288,
    };
    let mut r = PlotRenderer::new(canvas, 144, &Mat2::identity()).unwrap();
    let frame = r.render(&PlotGeometry::standard(), "Apply V").unwrap();

    assert_eq!(frame.width, 288);
    assert_eq!(frame.height, 288);
    assert_eq!(frame.data.len(), 288 * 288 * 4);
    assert!(frame.premultiplied);

    let style = PlotStyle::default();
    assert!(close(frame.pixel(0, 0).unwrap(), style.background, 0));

    let left = r.viewport().to_px(Point::new(-1.0, 0.0));
    let px = frame.pixel(left.x.floor() as u32, left.y.floor() as u32).unwrap();
    assert!(close(px, style.circle, 3), "{px:?}");
}

#[test]
fn rendering_is_deterministic_and_reuses_context() {
    let canvas = Canvas {
        width: 120,
        height: 96,
    };
    let m = Mat2::new(2.0, 1.2, 0.6, 1.5);
    let mut r = PlotRenderer::new(canvas, 72, &m).unwrap();
    let g = PlotGeometry::standard().transformed(&m);
    let a = r.render(&g, "Rotate with U").unwrap();
    let b = r.render(&g, "Rotate with U").unwrap();
    assert_eq!(a.data, b.data);
}

#[test]
fn rejects_oversized_canvas() {
    let canvas = Canvas {
        width: 70_000,
        height: 10,
    };
    assert!(PlotRenderer::new(canvas, 72, &Mat2::identity()).is_err());
}
