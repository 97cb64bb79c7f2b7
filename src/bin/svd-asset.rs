use std::path::PathBuf;

use clap::Parser;

/// Decode the text-encoded SVD animation and write it to disk, or pack a GIF into that format.
#[derive(Parser, Debug)]
#[command(name = "svd-asset", version)]
struct Cli {
    /// Destination for the decoded GIF; parent directories are created.
    #[arg(long, default_value = svd_viz::DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Encoded animation data.
    #[arg(long, default_value = svd_viz::DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// Encode this GIF into `--data` instead of decoding.
    #[arg(long, value_name = "GIF")]
    pack: Option<PathBuf>,

    /// Column width of the encoded text when packing.
    #[arg(long, default_value_t = svd_viz::DEFAULT_LINE_WIDTH)]
    line_width: usize,

    /// Log at debug level.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    svd_viz::init_logging(cli.verbose);

    let written = match &cli.pack {
        Some(gif) => svd_viz::pack_animation(gif, &cli.data, cli.line_width)?,
        None => svd_viz::write_animation(&cli.output, &cli.data)?,
    };
    eprintln!("wrote {}", written.display());
    Ok(())
}
