use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SvdVizError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SvdVizError::missing_dependency("ffmpeg")
            .to_string()
            .contains("missing dependency: ffmpeg")
    );
    assert!(SvdVizError::not_found("x").to_string().contains("not found:"));
    assert!(SvdVizError::decode("x").to_string().contains("decode error:"));
    assert!(SvdVizError::encode("x").to_string().contains("encode error:"));
    assert!(SvdVizError::render("x").to_string().contains("render error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SvdVizError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
