use std::cell::RefCell;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Context as _;
use image::codecs::gif::{GifEncoder, Repeat};

use crate::encode::sink::{FrameSink, SinkConfig, SinkState};
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{SvdVizError, SvdVizResult};
use crate::foundation::fs::ensure_parent_dir;
use crate::render::backend::FrameRGBA;

/// Options for [`GifSink`].
#[derive(Clone, Debug)]
pub struct GifSinkOpts {
    /// Output GIF path.
    pub out_path: PathBuf,
    /// NeuQuant speed, `1` (best palette) to `30` (fastest).
    pub speed: i32,
}

impl GifSinkOpts {
    /// Create options for writing a GIF to `out_path`.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            speed: 10,
        }
    }
}

/// In-memory GIF stream shared with the encoder.
///
/// The encoder writes its trailer on drop and has no way to report errors from there, so the
/// bytes are collected here and written to disk by [`GifSink::end`].
#[derive(Clone, Default)]
struct GifBuffer(Rc<RefCell<Vec<u8>>>);

impl GifBuffer {
    fn take(&self) -> Vec<u8> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

impl Write for GifBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Sink that writes an infinitely looping animated GIF through the `image` crate.
///
/// The output file is created in `begin`; the encoded stream is written to it in `end`,
/// so a failed write surfaces as an error there.
pub struct GifSink {
    opts: GifSinkOpts,
    file: Option<File>,
    buffer: GifBuffer,
    encoder: Option<GifEncoder<GifBuffer>>,
    state: SinkState,
    delay: Option<image::Delay>,
}

impl GifSink {
    /// Create a new GIF sink.
    pub fn new(opts: GifSinkOpts) -> Self {
        Self {
            opts,
            file: None,
            buffer: GifBuffer::default(),
            encoder: None,
            state: SinkState::default(),
            delay: None,
        }
    }
}

/// Per-frame delay for `fps`.
pub(crate) fn frame_delay(fps: Fps) -> image::Delay {
    image::Delay::from_numer_denom_ms(1000 * fps.den, fps.num)
}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: SinkConfig) -> SvdVizResult<()> {
        if !(1..=30).contains(&self.opts.speed) {
            return Err(SvdVizError::validation("gif speed must be in 1..=30"));
        }
        let delay = frame_delay(cfg.fps);
        self.state.start(cfg)?;

        ensure_parent_dir(&self.opts.out_path)?;
        let file = File::create(&self.opts.out_path)
            .with_context(|| format!("create gif '{}'", self.opts.out_path.display()))?;

        self.buffer = GifBuffer::default();
        let mut encoder = GifEncoder::new_with_speed(self.buffer.clone(), self.opts.speed);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| SvdVizError::encode(format!("gif repeat: {e}")))?;

        self.file = Some(file);
        self.encoder = Some(encoder);
        self.delay = Some(delay);
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> SvdVizResult<()> {
        self.state.accept(idx, frame)?;
        let (Some(encoder), Some(delay)) = (self.encoder.as_mut(), self.delay) else {
            return Err(SvdVizError::encode("gif sink not started"));
        };

        let img = image::RgbaImage::from_raw(frame.width, frame.height, frame.to_straight_rgba8())
            .ok_or_else(|| SvdVizError::encode("frame buffer does not match its dimensions"))?;
        encoder
            .encode_frame(image::Frame::from_parts(img, 0, 0, delay))
            .map_err(|e| SvdVizError::encode(format!("gif frame {}: {e}", idx.0)))?;
        Ok(())
    }

    fn end(&mut self) -> SvdVizResult<()> {
        self.state.finish()?;
        // Dropping the encoder appends the trailer to the buffer.
        drop(self.encoder.take());
        self.delay = None;
        let bytes = self.buffer.take();

        let mut file = self
            .file
            .take()
            .ok_or_else(|| SvdVizError::encode("gif sink not started"))?;
        let path = &self.opts.out_path;
        file.write_all(&bytes)
            .with_context(|| format!("write gif '{}'", path.display()))?;

        tracing::info!(path = %path.display(), bytes = bytes.len(), "gif written");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
