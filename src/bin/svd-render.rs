use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

/// Render a scene with an external renderer, inside a virtual X display by default.
#[derive(Parser, Debug)]
#[command(name = "svd-render", version)]
struct Cli {
    /// Python module that defines the scene.
    module: PathBuf,

    /// Scene class to render.
    scene: String,

    /// Renderer binary (default: `manimgl` from PATH).
    #[arg(long)]
    renderer: Option<PathBuf>,

    /// Run the renderer directly instead of under `xvfb-run`.
    #[arg(long, default_value_t = false)]
    no_xvfb: bool,

    /// Virtual screen geometry, WIDTHxHEIGHTxDEPTH.
    #[arg(long, default_value = "1920x1080x24")]
    xvfb_screen: svd_viz::XvfbScreen,

    /// Log the resolved command.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Extra arguments passed to the renderer unchanged.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    extra: Vec<OsString>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    svd_viz::init_logging(cli.verbose);

    let request = svd_viz::SceneRenderRequest {
        module: cli.module,
        scene: cli.scene,
        renderer: cli.renderer,
        use_xvfb: !cli.no_xvfb,
        xvfb_screen: cli.xvfb_screen,
        extra_args: cli.extra,
    };
    let command = request.prepare()?;
    let code = command.run()?;

    Ok(match u8::try_from(code) {
        Ok(code) => ExitCode::from(code),
        Err(_) => ExitCode::FAILURE,
    })
}
