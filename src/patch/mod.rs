//! Post-gather transformations over the shared output tree.
//!
//! Each step is a named function applied in place, in declared order, after
//! every bundle has been gathered. Later steps may read what earlier steps
//! (or the gather phase) wrote; nothing verifies those inputs exist up
//! front, so a missing input fails the step.

pub mod ath10k;
pub mod qca_bt;
pub mod venus;

use anyhow::Result;

use crate::context::Context;
use crate::logger::Logger;

/// A named transformation applied in place to the output tree.
pub struct PatchStep {
    /// Identifier for logging.
    pub name: &'static str,
    /// The transformation body; free-form side effects on the output tree.
    pub run: fn(&Logger, &Context) -> Result<()>,
}

impl PatchStep {
    pub fn apply(&self, log: &Logger, ctx: &Context) -> Result<()> {
        (self.run)(log, ctx)
    }
}
