use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::str::FromStr;

use crate::foundation::error::{SvdVizError, SvdVizResult};
use crate::launch::process::{exit_code_of, find_on_path};

/// Renderer looked up on `PATH` when none is given.
pub const DEFAULT_RENDERER: &str = "manimgl";
/// Virtual display wrapper.
pub const XVFB_RUN: &str = "xvfb-run";

/// Screen geometry handed to the virtual X server, `WIDTHxHEIGHTxDEPTH`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct XvfbScreen {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Color depth in bits.
    pub depth: u32,
}

impl Default for XvfbScreen {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            depth: 24,
        }
    }
}

impl std::fmt::Display for XvfbScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.depth)
    }
}

impl FromStr for XvfbScreen {
    type Err = SvdVizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            SvdVizError::validation(format!(
                "invalid screen geometry '{s}', expected WIDTHxHEIGHTxDEPTH (e.g. 1920x1080x24)"
            ))
        };
        let parts: Vec<u32> = s
            .split('x')
            .map(|p| p.parse::<u32>().map_err(|_| invalid()))
            .collect::<Result<_, _>>()?;
        match parts.as_slice() {
            &[width, height, depth] if width > 0 && height > 0 && depth > 0 => Ok(Self {
                width,
                height,
                depth,
            }),
            _ => Err(invalid()),
        }
    }
}

/// What to render and how to launch the renderer.
#[derive(Clone, Debug)]
pub struct SceneRenderRequest {
    /// Python module containing the scene.
    pub module: PathBuf,
    /// Scene class name.
    pub scene: String,
    /// Explicit renderer binary; `manimgl` is searched on `PATH` when unset.
    pub renderer: Option<PathBuf>,
    /// Wrap the renderer in `xvfb-run`.
    pub use_xvfb: bool,
    /// Virtual screen geometry.
    pub xvfb_screen: XvfbScreen,
    /// Arguments passed through to the renderer unchanged.
    pub extra_args: Vec<OsString>,
}

impl SceneRenderRequest {
    /// Request with the default renderer lookup and virtual display.
    pub fn new(module: impl Into<PathBuf>, scene: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            scene: scene.into(),
            renderer: None,
            use_xvfb: true,
            xvfb_screen: XvfbScreen::default(),
            extra_args: Vec::new(),
        }
    }

    /// Check every prerequisite and resolve binaries. Nothing is spawned here.
    pub fn prepare(&self) -> SvdVizResult<PreparedCommand> {
        if !self.module.is_file() {
            return Err(SvdVizError::not_found(format!(
                "could not find scene module '{}'",
                self.module.display()
            )));
        }

        let renderer = resolve_renderer(self.renderer.as_deref())?;

        let xvfb = if self.use_xvfb {
            Some(find_on_path(XVFB_RUN).ok_or_else(|| {
                SvdVizError::missing_dependency(format!(
                    "{XVFB_RUN} was not found on PATH; install xvfb or pass --no-xvfb"
                ))
            })?)
        } else {
            None
        };

        Ok(PreparedCommand {
            xvfb,
            screen: self.xvfb_screen,
            renderer,
            module: self.module.clone(),
            scene: self.scene.clone(),
            extra_args: self.extra_args.clone(),
        })
    }
}

fn resolve_renderer(explicit: Option<&Path>) -> SvdVizResult<PathBuf> {
    let Some(path) = explicit else {
        return find_on_path(DEFAULT_RENDERER).ok_or_else(|| {
            SvdVizError::missing_dependency(format!(
                "{DEFAULT_RENDERER} was not found on PATH; install it or pass --renderer"
            ))
        });
    };
    if path.is_file() {
        return Ok(path.to_path_buf());
    }
    // Bare names are looked up on PATH.
    if path.components().count() == 1
        && let Some(found) = find_on_path(&path.to_string_lossy())
    {
        return Ok(found);
    }
    Err(SvdVizError::missing_dependency(format!(
        "renderer '{}' was not found",
        path.display()
    )))
}

/// Fully resolved renderer invocation.
#[derive(Clone, Debug)]
pub struct PreparedCommand {
    xvfb: Option<PathBuf>,
    screen: XvfbScreen,
    renderer: PathBuf,
    module: PathBuf,
    scene: String,
    extra_args: Vec<OsString>,
}

impl PreparedCommand {
    /// Program followed by its arguments.
    pub fn argv(&self) -> Vec<OsString> {
        let mut argv = Vec::with_capacity(8 + self.extra_args.len());
        if let Some(xvfb) = &self.xvfb {
            argv.push(xvfb.clone().into_os_string());
            argv.push("-a".into());
            argv.push("--server-args".into());
            argv.push(format!("-screen 0 {}", self.screen).into());
        }
        argv.push(self.renderer.clone().into_os_string());
        argv.push(self.module.clone().into_os_string());
        argv.push(self.scene.clone().into());
        argv.extend(self.extra_args.iter().cloned());
        argv
    }

    /// `std::process::Command` for [`Self::argv`].
    pub fn command(&self) -> Command {
        let argv = self.argv();
        let mut cmd = Command::new(&argv[0]);
        cmd.args(&argv[1..]);
        cmd
    }

    /// Run to completion and return the child's exit code.
    pub fn run(&self) -> SvdVizResult<i32> {
        tracing::debug!(argv = ?self.argv(), "launching renderer");
        let status = self.command().status().map_err(|e| {
            SvdVizError::missing_dependency(format!(
                "failed to launch '{}': {e}",
                self.argv()[0].to_string_lossy()
            ))
        })?;
        let code = exit_code_of(status);
        if code != 0 {
            tracing::warn!(code, "renderer exited with failure");
        }
        Ok(code)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/launch/scene_render.rs"]
mod tests;
