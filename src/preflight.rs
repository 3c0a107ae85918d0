//! Preflight checks for external collaborators.
//!
//! Run before the gather phase so missing prerequisites fail with an
//! actionable message instead of halfway through a populated output tree.

use anyhow::{bail, Result};

use crate::context::Context;

/// Verify that every external collaborator the pipeline will invoke exists.
pub fn check(ctx: &Context) -> Result<()> {
    if !ctx.driver_store.is_dir() {
        bail!(
            "driver store not found at '{}'.\n\
             Pass the root of a mounted Windows installation via --windows.",
            ctx.driver_store.display()
        );
    }

    for program in ["curl", "python3"] {
        if which::which(program).is_err() {
            bail!("required program '{program}' not found in PATH");
        }
    }

    let tools = [
        ("pil-splitter", &ctx.tools.pil_splitter),
        ("ath10k-bdencoder", &ctx.tools.bdencoder),
        ("ath10k-fwencoder", &ctx.tools.fwencoder),
    ];
    for (name, path) in tools {
        if !path.is_file() {
            bail!(
                "{name} not found at '{}'.\n\
                 Clone the third-party tool repositories, or point \
                 FWGATHER_TOOLS_DIR at an existing checkout.",
                path.display()
            );
        }
    }

    Ok(())
}
