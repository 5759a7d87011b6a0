use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use raster::CircleIcon;

/// Render the 1024px app icon (purple circle on white) as PNG.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Output path
    #[arg(default_value = "icon-1024.png")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let canvas = CircleIcon::default().rasterize();
    if let Some(dir) = args.out.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    raster::write_png(&canvas, &args.out)?;
    println!("Wrote {}", args.out.display());
    Ok(())
}
