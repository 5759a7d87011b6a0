use clap::Parser;
use raster::CircleIcon;

const OUT: &str = "icon-1024.ppm";

/// Render the 1024px app icon as a plain-text PPM (P3) into ./icon-1024.ppm.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let _args = Args::parse();

    let canvas = CircleIcon::default().rasterize();
    raster::save_ppm(&canvas, OUT)?;
    println!("Wrote {}", OUT);
    Ok(())
}
