use super::*;
use image::AnimationDecoder as _;

fn solid(width: u32, height: u32, rgb: [u8; 3]) -> FrameRGBA {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for _ in 0..width * height {
        data.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
    }
    FrameRGBA {
        width,
        height,
        data,
        premultiplied: true,
    }
}

#[test]
fn frame_delay_follows_fps() {
    let (n, d) = frame_delay(Fps::new(24, 1).unwrap()).numer_denom_ms();
    assert!((f64::from(n) / f64::from(d) - 1000.0 / 24.0).abs() < 1e-9);
}

#[test]
fn writes_looping_gif_with_every_frame() {
    let dir = PathBuf::from("target").join("unit_gif_sink");
    std::fs::create_dir_all(&dir).unwrap();
    let out = dir.join("two_frames.gif");
    let _ = std::fs::remove_file(&out);

    let mut sink = GifSink::new(GifSinkOpts::new(&out));
    sink.begin(SinkConfig {
        width: 8,
        height: 6,
        fps: Fps::new(10, 1).unwrap(),
        total_frames: 2,
    })
    .unwrap();
    sink.push_frame(FrameIndex(0), &solid(8, 6, [255, 0, 0])).unwrap();
    sink.push_frame(FrameIndex(1), &solid(8, 6, [0, 0, 255])).unwrap();
    sink.end().unwrap();

    let file = std::io::BufReader::new(File::open(&out).unwrap());
    let decoder = image::codecs::gif::GifDecoder::new(file).unwrap();
    let frames = decoder.into_frames().collect_frames().unwrap();
    assert_eq!(frames.len(), 2);

    let (n, d) = frames[0].delay().numer_denom_ms();
    assert!((f64::from(n) / f64::from(d) - 100.0).abs() < 1e-6);

    let first = frames[0].buffer().get_pixel(4, 3).0;
    assert!(first[0] > 200 && first[2] < 50, "{first:?}");
    let second = frames[1].buffer().get_pixel(4, 3).0;
    assert!(second[2] > 200 && second[0] < 50, "{second:?}");
}

#[test]
fn rejects_out_of_range_speed() {
    let mut sink = GifSink::new(GifSinkOpts {
        out_path: PathBuf::from("target/unit_gif_sink/never.gif"),
        speed: 0,
    });
    let err = sink
        .begin(SinkConfig {
            width: 2,
            height: 2,
            fps: Fps::new(10, 1).unwrap(),
            total_frames: 1,
        })
        .unwrap_err();
    assert!(err.to_string().contains("speed"));
}

#[cfg(target_os = "linux")]
#[test]
fn write_failure_is_reported_by_end() {
    let mut sink = GifSink::new(GifSinkOpts::new("/dev/full"));
    sink.begin(SinkConfig {
        width: 8,
        height: 6,
        fps: Fps::new(10, 1).unwrap(),
        total_frames: 2,
    })
    .unwrap();
    sink.push_frame(FrameIndex(0), &solid(8, 6, [255, 0, 0])).unwrap();
    sink.push_frame(FrameIndex(1), &solid(8, 6, [0, 0, 255])).unwrap();

    let err = sink.end().unwrap_err();
    assert!(err.to_string().contains("write gif"), "{err}");
}
