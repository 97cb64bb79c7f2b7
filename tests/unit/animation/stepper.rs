use super::*;
use crate::decompose::svd::Decomposition;
use crate::foundation::core::mat2_from_rows;

fn assert_close(a: &Mat2, b: &Mat2) {
    for (x, y) in a.iter().zip(b.iter()) {
        assert!((x - y).abs() < 1e-9, "{a} != {b}");
    }
}

fn stepper(rows: [[f64; 2]; 2], total_frames: u64) -> (Decomposition, PhaseStepper) {
    let d = Decomposition::of(mat2_from_rows(rows)).unwrap();
    let s = PhaseStepper::new(d.phases(), total_frames);
    (d, s)
}

#[test]
fn blend_endpoints() {
    let current = mat2_from_rows([[1.0, 2.0], [3.0, 4.0]]);
    let target = mat2_from_rows([[0.0, -1.0], [1.0, 0.0]]);
    assert_close(&blend(&current, &target, 0.0), &current);
    assert_close(&blend(&current, &target, 1.0), &(target * current));

    let half = blend(&Mat2::identity(), &target, 0.5);
    assert_close(&half, &mat2_from_rows([[0.5, -0.5], [0.5, 0.5]]));
}

#[test]
fn first_frame_is_identity() {
    let (_, s) = stepper([[2.0, 1.2], [0.6, 1.5]], 288);
    let t = s.transform_at(FrameIndex(0));
    assert_close(&t.matrix, &Mat2::identity());
    assert_eq!(t.position.phase_index, 0);
    assert_eq!(t.position.alpha, 0.0);
}

#[test]
fn last_frame_is_source_matrix() {
    for total in [2u64, 3, 10, 71, 72, 288] {
        let (d, s) = stepper([[2.0, 1.2], [0.6, 1.5]], total);
        let t = s.transform_at(s.clock().last_frame());
        assert_close(&t.matrix, &d.source);
        assert_eq!(t.position.alpha, 1.0);
        assert_eq!(t.phase.kind, crate::animation::phase::PhaseKind::Rotate);
    }
}

#[test]
fn single_frame_snaps_to_completion() {
    let (d, s) = stepper([[2.0, 1.0], [1.0, 3.0]], 1);
    assert_eq!(s.clock().frames_per_phase(), 1);
    let t = s.transform_at(FrameIndex(0));
    assert_close(&t.matrix, &d.source);
}

#[test]
fn phase_starts_carry_previous_product() {
    let (d, s) = stepper([[2.0, 1.0], [1.0, 3.0]], 72);
    assert_eq!(s.clock().frames_per_phase(), 24);

    let t = s.transform_at(FrameIndex(24));
    assert_eq!(t.position.phase_index, 1);
    assert_eq!(t.position.alpha, 0.0);
    assert_close(&t.matrix, &d.vt);

    let t = s.transform_at(FrameIndex(48));
    assert_eq!(t.position.phase_index, 2);
    assert_close(&t.matrix, &(d.sigma() * d.vt));
}

#[test]
fn mid_phase_alpha_is_fractional() {
    let (d, s) = stepper([[2.0, 1.0], [1.0, 3.0]], 72);
    let t = s.transform_at(FrameIndex(12));
    assert_eq!(t.position.phase_index, 0);
    assert_eq!(t.position.alpha, 0.5);
    assert_close(&t.matrix, &blend(&Mat2::identity(), &d.vt, 0.5));
}

#[test]
fn frames_iterates_every_index_once() {
    let (_, s) = stepper([[1.0, 0.0], [0.0, 1.0]], 7);
    let idx: Vec<u64> = s.frames().map(|(f, _)| f.0).collect();
    assert_eq!(idx, (0..7).collect::<Vec<_>>());
}
