//! Launching the external scene renderer, optionally under a virtual X display.

pub mod process;
pub(crate) mod scene_render;
