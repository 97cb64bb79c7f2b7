use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

/// Render an animation of `Vᵀ`, `Σ` and `U` acting on the plane.
#[derive(Parser, Debug)]
#[command(name = "svd-animation", version)]
struct Cli {
    /// Output path; `.gif` is written directly, other extensions need `ffmpeg`.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Override the 2x2 matrix entries (row-major order).
    #[arg(long, num_args = 4, value_names = ["A", "B", "C", "D"], allow_negative_numbers = true)]
    matrix: Option<Vec<f64>>,

    /// Frames per second.
    #[arg(long)]
    fps: Option<u32>,

    /// Total duration in seconds.
    #[arg(long)]
    duration: Option<f64>,

    /// Figure size in inches; smaller values shrink the output resolution.
    #[arg(long, num_args = 2, value_names = ["WIDTH", "HEIGHT"])]
    figsize: Option<Vec<f64>>,

    /// Dots per inch of the saved animation.
    #[arg(long)]
    dpi: Option<u32>,

    /// Load settings from a JSON file; flags given on the command line take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit.
    #[arg(long, default_value_t = false)]
    dump_config: bool,

    /// Log progress at debug level.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    svd_viz::init_logging(cli.verbose);

    let cfg = effective_config(&cli)?;
    if cli.dump_config {
        println!("{}", serde_json::to_string_pretty(&cfg)?);
        return Ok(());
    }

    let mut animator = svd_viz::SvdAnimator::new(&cfg)?;
    let mut sink = svd_viz::sink_for_path(&cfg.output);
    animator
        .render_into(sink.as_mut())
        .with_context(|| format!("render '{}'", cfg.output.display()))?;

    eprintln!("wrote {}", cfg.output.display());
    Ok(())
}

fn effective_config(cli: &Cli) -> anyhow::Result<svd_viz::AnimationConfig> {
    let mut cfg = match &cli.config {
        Some(path) => svd_viz::AnimationConfig::from_json_file(path)?,
        None => svd_viz::AnimationConfig::default(),
    };

    if let Some(output) = &cli.output {
        cfg.output = output.clone();
    }
    if let Some(&[a, b, c, d]) = cli.matrix.as_deref() {
        cfg.matrix = [[a, b], [c, d]];
    }
    if let Some(fps) = cli.fps {
        cfg.fps = fps;
    }
    if let Some(duration) = cli.duration {
        cfg.duration_secs = duration;
    }
    if let Some(&[w, h]) = cli.figsize.as_deref() {
        cfg.figsize = [w, h];
    }
    if let Some(dpi) = cli.dpi {
        cfg.dpi = dpi;
    }

    cfg.validate()?;
    Ok(cfg)
}
