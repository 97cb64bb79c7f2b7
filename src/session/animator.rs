use crate::animation::config::AnimationConfig;
use crate::animation::phase::PhaseKind;
use crate::animation::stepper::{FrameTransform, PhaseStepper};
use crate::decompose::svd::Decomposition;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::foundation::error::{SvdVizError, SvdVizResult};
use crate::render::backend::FrameRGBA;
use crate::render::cpu::PlotRenderer;
use crate::scene::geometry::PlotGeometry;

/// Summary of a completed render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames pushed into the sink.
    pub frames: u64,
    /// Frame dimensions.
    pub canvas: Canvas,
}

/// Renders the SVD animation frame by frame.
///
/// Construction validates the configuration, decomposes the matrix and prepares the renderer.
/// Frames are produced strictly in order on the calling thread.
pub struct SvdAnimator {
    decomposition: Decomposition,
    stepper: PhaseStepper,
    geometry: PlotGeometry,
    renderer: PlotRenderer,
    fps: Fps,
}

impl SvdAnimator {
    /// Prepare an animator for `config`.
    #[tracing::instrument(skip_all)]
    pub fn new(config: &AnimationConfig) -> SvdVizResult<Self> {
        config.validate()?;
        let total_frames = config.total_frames()?;
        let decomposition = Decomposition::of(config.matrix())?;
        tracing::debug!(
            frames = total_frames,
            sigma = ?decomposition.singular_values,
            "decomposed source matrix"
        );
        let stepper = PhaseStepper::new(decomposition.phases(), total_frames);
        let renderer = PlotRenderer::new(config.canvas(), config.dpi, &decomposition.source)?;
        Ok(Self {
            decomposition,
            stepper,
            geometry: PlotGeometry::standard(),
            renderer,
            fps: config.fps()?,
        })
    }

    /// Decomposition being animated.
    pub fn decomposition(&self) -> &Decomposition {
        &self.decomposition
    }

    /// Frame stepper.
    pub fn stepper(&self) -> &PhaseStepper {
        &self.stepper
    }

    /// Output dimensions.
    pub fn canvas(&self) -> Canvas {
        self.renderer.canvas()
    }

    /// Transform and pixels for a single frame. Frames past the end are rejected.
    pub fn render_frame(&mut self, frame: FrameIndex) -> SvdVizResult<(FrameTransform, FrameRGBA)> {
        let total = self.stepper.clock().total_frames();
        if frame.0 >= total {
            return Err(SvdVizError::validation(format!(
                "frame {} is out of range for a {total}-frame animation",
                frame.0
            )));
        }
        let t = self.stepper.transform_at(frame);
        let geometry = self.geometry.transformed(&t.matrix);
        let pixels = self.renderer.render(&geometry, t.phase.label())?;
        Ok((t, pixels))
    }

    /// Render every frame into `sink`, calling `begin`/`end` around them.
    #[tracing::instrument(skip_all)]
    pub fn render_into(&mut self, sink: &mut dyn FrameSink) -> SvdVizResult<RenderStats> {
        let canvas = self.canvas();
        let total = self.stepper.clock().total_frames();
        sink.begin(SinkConfig {
            width: canvas.width,
            height: canvas.height,
            fps: self.fps,
            total_frames: total,
        })?;

        let mut current: Option<PhaseKind> = None;
        for f in 0..total {
            let idx = FrameIndex(f);
            let (t, pixels) = self.render_frame(idx)?;
            if current != Some(t.phase.kind) {
                tracing::debug!(frame = f, phase = t.phase.label(), "entering phase");
                current = Some(t.phase.kind);
            }
            sink.push_frame(idx, &pixels)?;
        }

        sink.end()?;
        Ok(RenderStats {
            frames: total,
            canvas,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/animator.rs"]
mod tests;
