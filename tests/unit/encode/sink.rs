use super::*;

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: Fps::new(24, 1).unwrap(),
        total_frames: 3,
    }
}

fn frame(width: u32, height: u32) -> FrameRGBA {
    FrameRGBA {
        width,
        height,
        data: vec![255u8; (width * height * 4) as usize],
        premultiplied: true,
    }
}

#[test]
fn in_memory_sink_collects_frames_in_order() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg(2, 2)).unwrap();
    for i in 0..3 {
        sink.push_frame(FrameIndex(i), &frame(2, 2)).unwrap();
    }
    sink.end().unwrap();

    assert!(sink.is_finished());
    assert_eq!(sink.config().unwrap().total_frames, 3);
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1, 2]);
}

#[test]
fn push_before_begin_fails() {
    let mut sink = InMemorySink::new();
    assert!(sink.push_frame(FrameIndex(0), &frame(2, 2)).is_err());
    assert!(sink.end().is_err());
}

#[test]
fn out_of_order_and_size_mismatch_are_rejected() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg(2, 2)).unwrap();
    sink.push_frame(FrameIndex(1), &frame(2, 2)).unwrap();
    assert!(sink.push_frame(FrameIndex(1), &frame(2, 2)).is_err());
    assert!(sink.push_frame(FrameIndex(0), &frame(2, 2)).is_err());
    assert!(sink.push_frame(FrameIndex(2), &frame(3, 2)).is_err());
    sink.push_frame(FrameIndex(2), &frame(2, 2)).unwrap();
}

#[test]
fn begin_rejects_empty_canvas() {
    let mut sink = InMemorySink::new();
    assert!(sink.begin(cfg(0, 2)).is_err());
}
