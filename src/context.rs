//! Explicit pipeline context.
//!
//! Everything a retrieval or patch invocation needs travels in one value
//! passed down from `main`. There is no ambient or global state.

use std::path::{Path, PathBuf};

/// Paths to the external encoder/splitter scripts.
#[derive(Debug, Clone)]
pub struct ToolPaths {
    /// qcom-mbn-tools pil-splitter, splits signed firmware containers.
    pub pil_splitter: PathBuf,
    /// qca-swiss-army-knife ath10k board-2.bin encoder.
    pub bdencoder: PathBuf,
    /// qca-swiss-army-knife ath10k firmware-N.bin encoder.
    pub fwencoder: PathBuf,
}

impl ToolPaths {
    /// Resolve the tool scripts under a third-party checkout directory.
    pub fn new(tools_dir: &Path) -> Self {
        let ath10k_scripts = tools_dir.join("qca-swiss-army-knife/tools/scripts/ath10k");
        Self {
            pil_splitter: tools_dir.join("qcom-mbn-tools/pil-splitter.py"),
            bdencoder: ath10k_scripts.join("ath10k-bdencoder"),
            fwencoder: ath10k_scripts.join("ath10k-fwencoder"),
        }
    }
}

/// Shared pipeline inputs, fixed for the lifetime of one run.
#[derive(Debug, Clone)]
pub struct Context {
    /// Driver-store file repository (read-only input).
    pub driver_store: PathBuf,
    /// Output tree root. The tree itself is the deliverable artifact.
    pub output: PathBuf,
    /// External encoder/splitter scripts.
    pub tools: ToolPaths,
}
