use super::*;

fn canvas(width: u32, height: u32) -> Canvas {
    Canvas { width, height }
}

#[test]
fn viewport_is_square_and_inside_canvas() {
    for c in [canvas(720, 720), canvas(1200, 480), canvas(300, 900)] {
        let v = Viewport::fit(c);
        let (min, max) = v.axes_rect();
        assert!(min.x >= 0.0 && min.y >= 0.0);
        assert!(max.x <= f64::from(c.width) && max.y <= f64::from(c.height));
        assert!(((max.x - min.x) - (max.y - min.y)).abs() < 1e-9);
    }
}

#[test]
fn to_px_flips_y_and_matches_affine() {
    let v = Viewport::fit(canvas(720, 720));
    let up = v.to_px(Point::new(0.0, 1.0));
    assert!(up.y < v.origin.y);
    assert_eq!(up.x, v.origin.x);

    let p = Point::new(-3.5, 2.25);
    let a = v.affine() * p;
    let b = v.to_px(p);
    assert!((a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9);
}

#[test]
fn default_style_uses_translucent_grid() {
    let s = PlotStyle::default();
    assert_eq!(s.grid.a, 153);
    assert_eq!(s.circle.a, 255);
}

#[test]
fn points_scale_with_dpi() {
    assert_eq!(px_per_pt(72), 1.0);
    assert_eq!(px_per_pt(144), 2.0);
}
