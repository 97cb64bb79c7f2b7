use super::*;

#[test]
fn defaults_validate() {
    let cfg = AnimationConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.total_frames().unwrap(), 288);
    assert_eq!(
        cfg.canvas(),
        Canvas {
            width: 720,
            height: 720
        }
    );
}

#[test]
fn total_frames_is_at_least_one() {
    let cfg = AnimationConfig {
        duration_secs: 0.0,
        ..AnimationConfig::default()
    };
    assert_eq!(cfg.total_frames().unwrap(), 1);

    let cfg = AnimationConfig {
        fps: 24,
        duration_secs: 3.0,
        ..AnimationConfig::default()
    };
    assert_eq!(cfg.total_frames().unwrap(), 72);
}

#[test]
fn validation_catches_bad_values() {
    let bad = [
        AnimationConfig {
            fps: 0,
            ..AnimationConfig::default()
        },
        AnimationConfig {
            duration_secs: f64::INFINITY,
            ..AnimationConfig::default()
        },
        AnimationConfig {
            figsize: [0.0, 6.0],
            ..AnimationConfig::default()
        },
        AnimationConfig {
            dpi: 0,
            ..AnimationConfig::default()
        },
        AnimationConfig {
            matrix: [[f64::NAN, 0.0], [0.0, 1.0]],
            ..AnimationConfig::default()
        },
        AnimationConfig {
            duration_secs: 1e12,
            ..AnimationConfig::default()
        },
        AnimationConfig {
            figsize: [200.0, 200.0],
            dpi: 300,
            ..AnimationConfig::default()
        },
    ];
    for cfg in bad {
        assert!(cfg.validate().is_err(), "{cfg:?} should be rejected");
    }
}

#[test]
fn json_missing_fields_take_defaults() {
    let cfg: AnimationConfig =
        serde_json::from_str(r#"{ "matrix": [[2.0, 1.0], [1.0, 3.0]], "duration_secs": 3.0 }"#)
            .unwrap();
    assert_eq!(cfg.matrix, [[2.0, 1.0], [1.0, 3.0]]);
    assert_eq!(cfg.fps, DEFAULT_FPS);
    assert_eq!(cfg.total_frames().unwrap(), 72);
}

#[test]
fn json_rejects_unknown_fields() {
    assert!(serde_json::from_str::<AnimationConfig>(r#"{ "fsp": 12 }"#).is_err());
}

#[test]
fn from_json_file_reports_missing_path() {
    let err = AnimationConfig::from_json_file(Path::new("target/does/not/exist.json")).unwrap_err();
    assert!(err.to_string().contains("read animation config"));
}

#[test]
fn frame_count_ceiling() {
    let at_limit = AnimationConfig {
        fps: 25,
        duration_secs: 4000.0,
        ..AnimationConfig::default()
    };
    assert_eq!(at_limit.total_frames().unwrap(), 100_000);
    at_limit.validate().unwrap();

    let over = AnimationConfig {
        duration_secs: 4001.0,
        ..at_limit
    };
    let err = over.validate().unwrap_err().to_string();
    assert!(err.contains("more than the maximum"), "{err}");
}

#[test]
fn total_frames_needs_positive_fps() {
    let cfg = AnimationConfig {
        fps: 0,
        ..AnimationConfig::default()
    };
    assert!(cfg.total_frames().is_err());
}
