//! fwgather - assemble the Linux firmware tree for the Xiaomi Book 12.4.
//!
//! Copies vendor firmware out of a mounted Windows installation's driver
//! store, downloads the remaining files, then re-encodes, splits and aliases
//! what the kernel drivers expect (see the patch modules).

use anyhow::{bail, Result};
use clap::Parser;
use nix::unistd::Uid;
use std::path::PathBuf;

use fwgather::config::Config;
use fwgather::context::{Context, ToolPaths};
use fwgather::logger::Logger;
use fwgather::{manifest, pipeline, preflight};

#[derive(Parser)]
#[command(name = "fwgather")]
#[command(about = "Gather firmware files for the Xiaomi Book 12.4 (8cx Gen 2)")]
struct Cli {
    /// Root of a mounted Windows installation
    #[arg(short, long)]
    windows: PathBuf,

    /// Output directory for the assembled firmware tree
    #[arg(short, long, default_value = "out")]
    output: PathBuf,
}

fn main() -> Result<()> {
    // Everything here works on user-owned trees; running as root only risks
    // writing root-owned files into the output.
    if Uid::effective().is_root() {
        bail!("please do not run fwgather as root");
    }

    let cli = Cli::parse();

    // Load .env if present
    dotenvy::dotenv().ok();
    let base_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let config = Config::load(&base_dir);

    let ctx = Context {
        driver_store: cli.windows.join(&config.driver_store_subdir),
        output: cli.output,
        tools: ToolPaths::new(&config.tools_dir),
    };

    preflight::check(&ctx)?;

    let sources = manifest::sources()?;
    let patches = manifest::patches();

    let log = Logger::new();
    pipeline::run(&log, &ctx, &sources, &patches)?;

    log.info("done!");
    Ok(())
}
