//! Animated visualisation of the singular value decomposition of a 2x2 matrix.
//!
//! The animation applies `Vᵀ`, then `Σ`, then `U` to the unit circle, a coordinate grid and the
//! standard basis, one phase at a time:
//!
//! - Build an [`AnimationConfig`] and create an [`SvdAnimator`]
//! - Render single frames, or stream every frame into a [`FrameSink`] (GIF, `ffmpeg`, memory)
//!
//! The crate also carries the text-encoded animation bundle ([`asset`]) and a launcher for an
//! external scene renderer ([`launch`]).
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
/// Packing and unpacking the text-encoded animation.
pub mod asset;
pub(crate) mod decompose;
/// Frame sinks.
pub mod encode;
/// External renderer launcher.
pub mod launch;
pub(crate) mod render;
pub(crate) mod scene;
pub(crate) mod session;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, Mat2, Point, Rgba8, Vec2, apply_mat2, mat2_from_rows,
};
pub use crate::foundation::error::{SvdVizError, SvdVizResult};
pub use crate::foundation::logging::init_logging;

pub use crate::animation::clock::{AnimationClock, PhasePosition};
pub use crate::animation::config::{
    AnimationConfig, DEFAULT_DPI, DEFAULT_DURATION_SECS, DEFAULT_FIGSIZE, DEFAULT_FPS,
    DEFAULT_MATRIX, DEFAULT_OUTPUT,
};
pub use crate::animation::phase::{Phase, PhaseKind, PhaseSequence};
pub use crate::animation::stepper::{FrameTransform, PhaseStepper, blend};
pub use crate::decompose::svd::Decomposition;

pub use crate::asset::bundle::{
    DEFAULT_DATA_PATH, DEFAULT_LINE_WIDTH, DEFAULT_OUTPUT_PATH, compress, decode_animation_bytes,
    decode_compressed, decompress, encode_animation_bytes, pack_animation, write_animation,
};
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
pub use crate::encode::gif::{GifSink, GifSinkOpts};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::encode::{OutputKind, sink_for_path};
pub use crate::launch::process::find_on_path;
pub use crate::launch::scene_render::{
    DEFAULT_RENDERER, PreparedCommand, SceneRenderRequest, XVFB_RUN, XvfbScreen,
};
pub use crate::render::backend::FrameRGBA;
pub use crate::render::cpu::PlotRenderer;
pub use crate::scene::geometry::PlotGeometry;
pub use crate::scene::labels::format_matrix;
pub use crate::scene::plot::{PlotStyle, Viewport};
pub use crate::session::animator::{RenderStats, SvdAnimator};
