use super::*;

#[test]
fn encodes_like_python_b85encode() {
    assert_eq!(encode(b"hello"), "Xk~0{Zv");
    assert_eq!(encode(&[0, 0, 0, 0]), "00000");
    assert_eq!(encode(&[0xff; 4]), "|NsC0");
    assert_eq!(encode(b"a"), "VE");
    assert_eq!(encode(b""), "");
}

#[test]
fn decodes_partial_groups() {
    assert_eq!(decode("Xk~0{Zv").unwrap(), b"hello");
    assert_eq!(decode("VE").unwrap(), b"a");
    assert_eq!(decode("0").unwrap(), Vec::<u8>::new());
    assert_eq!(decode("").unwrap(), Vec::<u8>::new());
}

#[test]
fn arbitrary_bytes_survive() {
    let bytes: Vec<u8> = (0u16..=300).map(|v| (v * 7 % 256) as u8).collect();
    for len in [0, 1, 2, 3, 4, 5, 77, bytes.len()] {
        assert_eq!(decode(&encode(&bytes[..len])).unwrap(), &bytes[..len]);
    }
}

#[test]
fn reports_bad_character_position() {
    let err = decode("ab\"cd").unwrap_err().to_string();
    assert!(err.contains("position 2"), "{err}");
    let err = decode("Xk~0{ Zv").unwrap_err().to_string();
    assert!(err.contains("position 5"), "{err}");
}

#[test]
fn reports_overflowing_hunk() {
    let err = decode("00000~~~~~").unwrap_err().to_string();
    assert!(err.contains("overflow in hunk starting at byte 5"), "{err}");
}

#[test]
fn wrap_splits_into_fixed_width_lines() {
    assert_eq!(wrap("abcdefg", 3), "abc\ndef\ng\n");
    assert_eq!(wrap("abc", 3), "abc\n");
    assert_eq!(wrap("abcdef", 0), "abcdef\n");
}
