use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use pwa::{Options, PatchError};

/// Add PWA assets + patch index.html for Unity WebGL builds.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to WebGL build folder (contains index.html)
    #[arg(long, env = "PWA_BUILD_DIR")]
    build: PathBuf,

    /// Path to pwa assets folder
    #[arg(long, env = "PWA_ASSETS_DIR", default_value = pwa::DEFAULT_PWA_DIR)]
    pwa: PathBuf,

    /// Print a JSON report of what was copied and patched
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let opts = Options {
        build_dir: args.build,
        pwa_dir: args.pwa,
    };
    let report = match pwa::run(&opts) {
        Ok(report) => report,
        Err(e @ (PatchError::BuildDirNotFound(_) | PatchError::AssetDirNotFound(_))) => {
            eprintln!("{e}");
            return Ok(ExitCode::from(1));
        }
        Err(e) => return Err(e).context("PWA post-build failed"),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("PWA post-build complete for: {}", report.build_dir.display());
    }
    Ok(ExitCode::SUCCESS)
}
