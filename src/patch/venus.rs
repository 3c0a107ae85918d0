//! Venus video firmware extraction.
//!
//! The vendor ships the venus firmware as one signed container
//! (qcvss8180.mbn). The remoteproc driver loads the split sub-images, so run
//! pil-splitter over the container and keep a copy of the original alongside
//! under its upstream name.

use anyhow::{Context as _, Result};
use std::fs;

use crate::context::Context;
use crate::logger::Logger;
use crate::manifest::{PATH_PLATFORM, PATH_VENUS};
use crate::process::Cmd;

pub fn extract(log: &Logger, ctx: &Context) -> Result<()> {
    let container = ctx
        .output
        .join("qcom")
        .join(PATH_PLATFORM)
        .join("qcvss8180.mbn");
    let venus_dir = ctx.output.join("qcom").join(PATH_VENUS);

    fs::create_dir_all(&venus_dir)
        .with_context(|| format!("failed to create '{}'", venus_dir.display()))?;

    log.info(format!("splitting '{}'", container.display()));
    Cmd::new("python3")
        .arg_path(&ctx.tools.pil_splitter)
        .arg_path(&container)
        .arg_path(&venus_dir.join("venus"))
        .error_msg("pil-splitter failed")
        .run()?;

    fs::copy(&container, venus_dir.join("venus.mbn"))
        .with_context(|| format!("failed to copy '{}'", container.display()))?;
    Ok(())
}
