use super::*;
use crate::foundation::core::mat2_from_rows;

#[test]
fn standard_shape_counts() {
    let g = PlotGeometry::standard();
    assert_eq!(g.circle.len(), 128);
    assert_eq!(g.grid.len(), 18);
    assert!(g.grid.iter().all(|line| line.len() == 9));
    assert_eq!(g.basis, [Point::new(1.0, 0.0), Point::new(0.0, 1.0)]);
}

#[test]
fn circle_points_lie_on_unit_circle() {
    let g = PlotGeometry::standard();
    assert_eq!(g.circle[0], Point::new(1.0, 0.0));
    for p in &g.circle {
        assert!((p.to_vec2().hypot() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn grid_alternates_vertical_and_horizontal() {
    let g = PlotGeometry::standard();
    let vertical = &g.grid[0];
    assert!(vertical.iter().all(|p| p.x == -2.0));
    assert_eq!(vertical.first().unwrap().y, -2.0);
    assert_eq!(vertical.last().unwrap().y, 2.0);

    let horizontal = &g.grid[1];
    assert!(horizontal.iter().all(|p| p.y == -2.0));
}

#[test]
fn transformed_maps_basis_to_matrix_columns() {
    let m = mat2_from_rows([[2.0, 1.2], [0.6, 1.5]]);
    let g = PlotGeometry::standard().transformed(&m);
    assert_eq!(g.basis[0], Point::new(2.0, 0.6));
    assert_eq!(g.basis[1], Point::new(1.2, 1.5));
    assert_eq!(g.circle[0], Point::new(2.0, 0.6));
}
