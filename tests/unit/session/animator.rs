use super::*;
use crate::encode::sink::InMemorySink;

fn small_config() -> AnimationConfig {
    AnimationConfig {
        fps: 6,
        duration_secs: 1.0,
        figsize: [1.0, 1.0],
        dpi: 96,
        ..AnimationConfig::default()
    }
}

#[test]
fn new_rejects_invalid_config() {
    let cfg = AnimationConfig {
        fps: 0,
        ..small_config()
    };
    assert!(SvdAnimator::new(&cfg).is_err());
}

#[test]
fn render_into_pushes_every_frame() {
    let cfg = small_config();
    let mut animator = SvdAnimator::new(&cfg).unwrap();
    let mut sink = InMemorySink::new();
    let stats = animator.render_into(&mut sink).unwrap();

    assert_eq!(stats.frames, 6);
    assert_eq!(stats.canvas, Canvas { width: 96, height: 96 });
    assert!(sink.is_finished());
    assert_eq!(sink.frames().len(), 6);
    for (i, (idx, frame)) in sink.frames().iter().enumerate() {
        assert_eq!(idx.0, i as u64);
        assert_eq!((frame.width, frame.height), (96, 96));
    }
    let sink_cfg = sink.config().unwrap();
    assert_eq!(sink_cfg.fps.num, 6);
    assert_eq!(sink_cfg.total_frames, 6);
}

#[test]
fn last_frame_transform_is_the_source_matrix() {
    let cfg = small_config();
    let mut animator = SvdAnimator::new(&cfg).unwrap();
    let last = animator.stepper().clock().last_frame();
    let (t, _) = animator.render_frame(last).unwrap();
    let src = animator.decomposition().source;
    assert!((t.matrix - src).abs().max() < 1e-9);
}

#[test]
fn render_frame_rejects_frames_past_the_end() {
    let mut animator = SvdAnimator::new(&small_config()).unwrap();
    let err = animator.render_frame(FrameIndex(6)).unwrap_err();
    assert!(matches!(err, SvdVizError::Validation(_)));
    assert!(err.to_string().contains("out of range"), "{err}");
    assert!(animator.render_frame(FrameIndex(5)).is_ok());
}
