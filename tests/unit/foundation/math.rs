use super::*;

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(255, 128), 128);
    assert_eq!(mul_div255_u16(0, 200), 0);
}

#[test]
fn unpremultiply_restores_straight_color() {
    // 200/100/50 at alpha 128, premultiplied.
    let mut px = vec![100u8, 50, 25, 128, 10, 20, 30, 0, 1, 2, 3, 255];
    unpremultiply_rgba8_in_place(&mut px);
    for (got, want) in px[..3].iter().zip([200u8, 100, 50]) {
        assert!((i16::from(*got) - i16::from(want)).abs() <= 2);
    }
    assert_eq!(&px[4..8], &[0, 0, 0, 0]);
    assert_eq!(&px[8..12], &[1, 2, 3, 255]);
}

#[test]
fn linspace_includes_endpoints() {
    let v = linspace(-2.0, 2.0, 9);
    assert_eq!(v.len(), 9);
    assert_eq!(v[0], -2.0);
    assert_eq!(v[4], 0.0);
    assert_eq!(v[8], 2.0);
    assert!(linspace(0.0, 1.0, 0).is_empty());
    assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
}
