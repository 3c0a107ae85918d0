//! Two-phase pipeline orchestration.
//!
//! GATHER materializes every declared bundle, then PATCH applies the
//! transformation steps, both strictly sequential in declared order. The
//! first failure anywhere aborts the run. There is no retry, rollback or
//! checkpoint; a failed run leaves the output tree partially populated and a
//! re-run starts both phases from scratch.

use anyhow::{Context as _, Result};

use crate::context::Context;
use crate::logger::Logger;
use crate::patch::PatchStep;
use crate::source::FirmwareSource;

/// Run both phases to completion.
pub fn run(
    log: &Logger,
    ctx: &Context,
    sources: &[FirmwareSource],
    patches: &[PatchStep],
) -> Result<()> {
    log.info("retrieving base firmware files");
    gather(&log.sub(), ctx, sources)?;

    log.info("patching firmware files");
    patch(&log.sub(), ctx, patches)?;
    Ok(())
}

/// Phase 1: materialize every bundle, in declared order.
pub fn gather(log: &Logger, ctx: &Context, sources: &[FirmwareSource]) -> Result<()> {
    for source in sources {
        log.info(source.name());
        source
            .gather(&log.sub(), ctx)
            .with_context(|| format!("failed to gather '{}'", source.name()))?;
    }
    Ok(())
}

/// Phase 2: apply every patch step, in declared order.
pub fn patch(log: &Logger, ctx: &Context, patches: &[PatchStep]) -> Result<()> {
    for step in patches {
        log.info(step.name);
        step.apply(&log.sub(), ctx)
            .with_context(|| format!("patch '{}' failed", step.name))?;
    }
    Ok(())
}
