use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{SvdVizError, SvdVizResult};
use crate::render::backend::FrameRGBA;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frames-per-second.
    pub fps: Fps,
    /// Number of frames that will be pushed.
    pub total_frames: u64,
}

impl SinkConfig {
    /// Reject empty dimensions.
    pub fn validate(&self) -> SvdVizResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SvdVizError::validation("sink width/height must be non-zero"));
        }
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(SvdVizError::validation("fps must be non-zero"));
        }
        Ok(())
    }
}

/// Consumer of rendered frames.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order between
/// one `begin` and one `end`.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> SvdVizResult<()>;
    /// Push one frame in strictly increasing timeline order.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> SvdVizResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> SvdVizResult<()>;
}

/// Shared bookkeeping for sinks: configuration and the ordering check.
#[derive(Debug, Default)]
pub(crate) struct SinkState {
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
}

impl SinkState {
    pub(crate) fn start(&mut self, cfg: SinkConfig) -> SvdVizResult<()> {
        cfg.validate()?;
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    /// Check order and size of an incoming frame; returns the active config.
    pub(crate) fn accept(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> SvdVizResult<&SinkConfig> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| SvdVizError::encode("sink not started"))?;
        if let Some(last) = self.last_idx
            && idx <= last
        {
            return Err(SvdVizError::encode("sink received out-of-order frame index"));
        }
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(SvdVizError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        if frame.data.len() != (cfg.width as usize) * (cfg.height as usize) * 4 {
            return Err(SvdVizError::validation(
                "frame.data size mismatch with width*height*4",
            ));
        }
        self.last_idx = Some(idx);
        Ok(cfg)
    }

    pub(crate) fn finish(&mut self) -> SvdVizResult<SinkConfig> {
        self.last_idx = None;
        self.cfg
            .take()
            .ok_or_else(|| SvdVizError::encode("sink not started"))
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    state: SinkState,
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
    finished: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }

    /// Whether `end` has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> SvdVizResult<()> {
        self.state.start(cfg.clone())?;
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> SvdVizResult<()> {
        self.state.accept(idx, frame)?;
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> SvdVizResult<()> {
        self.state.finish()?;
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
