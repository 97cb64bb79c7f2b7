//! Frame sinks: GIF via the `image` crate, everything else via the system `ffmpeg`.

use std::path::Path;

/// `ffmpeg`-based video sink.
pub mod ffmpeg;
/// GIF sink.
pub mod gif;
/// Generic frame sink trait and the in-memory sink.
pub mod sink;

use self::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use self::gif::{GifSink, GifSinkOpts};
use self::sink::FrameSink;

/// Output container chosen from a file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputKind {
    /// Animated GIF written in-process.
    Gif,
    /// Any other container, encoded by `ffmpeg`.
    Video,
}

impl OutputKind {
    /// `.gif` (any case) selects [`OutputKind::Gif`].
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("gif") => OutputKind::Gif,
            _ => OutputKind::Video,
        }
    }
}

/// Sink matching the extension of `path`.
pub fn sink_for_path(path: &Path) -> Box<dyn FrameSink> {
    match OutputKind::for_path(path) {
        OutputKind::Gif => Box::new(GifSink::new(GifSinkOpts::new(path))),
        OutputKind::Video => Box::new(FfmpegSink::new(FfmpegSinkOpts::new(path))),
    }
}
