//! Firmware bundles and their retrieval strategies.
//!
//! A bundle names a target directory under the output root, a file map, and
//! one of two ways to materialize the files: copying out of a vendor driver
//! store or downloading from a base URL. No third variant is anticipated, so
//! the strategies are a closed enum rather than a trait hierarchy.

use anyhow::{bail, Context as _, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::context::Context;
use crate::filemap::FileMap;
use crate::logger::Logger;
use crate::process::Cmd;

/// How a bundle's files are materialized into the output tree.
#[derive(Debug, Clone)]
pub enum Retrieval {
    /// Copy out of a driver-store package directory, located by name prefix
    /// under the driver-store root.
    DriverStore { prefix: String },
    /// Download from a base URL, one request per file.
    Download { base_url: String },
}

/// One declared firmware bundle.
///
/// Constructed once at startup from the static declarations, consumed exactly
/// once by the gather phase.
#[derive(Debug, Clone)]
pub struct FirmwareSource {
    name: String,
    target_directory: PathBuf,
    files: FileMap,
    retrieval: Retrieval,
}

impl FirmwareSource {
    /// Bundle copied from the Windows driver store.
    pub fn driver_store(
        name: impl Into<String>,
        target_directory: impl Into<PathBuf>,
        prefix: impl Into<String>,
        files: FileMap,
    ) -> Self {
        Self {
            name: name.into(),
            target_directory: target_directory.into(),
            files,
            retrieval: Retrieval::DriverStore {
                prefix: prefix.into(),
            },
        }
    }

    /// Bundle downloaded from a remote firmware repository.
    pub fn download(
        name: impl Into<String>,
        target_directory: impl Into<PathBuf>,
        base_url: impl Into<String>,
        files: FileMap,
    ) -> Self {
        Self {
            name: name.into(),
            target_directory: target_directory.into(),
            files,
            retrieval: Retrieval::Download {
                base_url: base_url.into(),
            },
        }
    }

    /// Human-readable identifier, used for logging only.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Materialize every mapped file into the output tree.
    ///
    /// Files land at `output/target_directory/target`, overwriting whatever
    /// is already there. The first failure aborts the bundle.
    pub fn gather(&self, log: &Logger, ctx: &Context) -> Result<()> {
        match &self.retrieval {
            Retrieval::DriverStore { prefix } => {
                let base = resolve_source_directory(&ctx.driver_store, prefix)?;
                for (source, target) in self.files.entries() {
                    let src = base.join(source);
                    let tgt = self.target_path(ctx, target)?;

                    log.info(format!(
                        "copying '{}' to '{}'",
                        src.display(),
                        self.target_directory.join(target).display()
                    ));
                    fs::copy(&src, &tgt).with_context(|| {
                        format!("failed to copy '{}'", src.display())
                    })?;
                }
            }
            Retrieval::Download { base_url } => {
                for (source, target) in self.files.entries() {
                    let url = format!("{base_url}/{source}");
                    let tgt = self.target_path(ctx, target)?;

                    log.info(format!(
                        "downloading '{}' to '{}'",
                        url,
                        self.target_directory.join(target).display()
                    ));
                    Cmd::new("curl")
                        .args(["-L", "-f", "-sS", "-o"])
                        .arg_path(&tgt)
                        .arg(&url)
                        .error_msg(format!("download of '{url}' failed"))
                        .run()?;
                }
            }
        }
        Ok(())
    }

    /// Absolute target path for a mapped file, with parents created.
    fn target_path(&self, ctx: &Context, target: &str) -> Result<PathBuf> {
        let tgt = ctx.output.join(&self.target_directory).join(target);
        if let Some(parent) = tgt.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create '{}'", parent.display()))?;
        }
        Ok(tgt)
    }
}

/// Locate the driver-store package directory for a prefix.
///
/// Immediate children of the driver-store root are scanned in sorted order,
/// so when several package directories share a prefix the lexicographically
/// first one wins. No match fails here rather than at first file access.
pub fn resolve_source_directory(root: &Path, prefix: &str) -> Result<PathBuf> {
    let mut names = Vec::new();
    for entry in fs::read_dir(root)
        .with_context(|| format!("cannot read driver store at '{}'", root.display()))?
    {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name());
        }
    }
    names.sort();

    for name in names {
        if name.to_string_lossy().starts_with(prefix) {
            return Ok(root.join(name));
        }
    }
    bail!(
        "no driver-store package matches prefix '{}' under '{}'",
        prefix,
        root.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn resolve_picks_matching_child() {
        let store = TempDir::new().unwrap();
        fs::create_dir(store.path().join("qcwlan8180-v2.inf_arm64_abc")).unwrap();
        fs::create_dir(store.path().join("qcbtfmuart8180.inf_arm64_def")).unwrap();

        let dir = resolve_source_directory(store.path(), "qcwlan8180").unwrap();
        assert_eq!(
            dir,
            store.path().join("qcwlan8180-v2.inf_arm64_abc")
        );
    }

    #[test]
    fn resolve_ties_break_lexicographically() {
        let store = TempDir::new().unwrap();
        fs::create_dir(store.path().join("qcdx8180_b")).unwrap();
        fs::create_dir(store.path().join("qcdx8180_a")).unwrap();

        let dir = resolve_source_directory(store.path(), "qcdx8180").unwrap();
        assert_eq!(dir, store.path().join("qcdx8180_a"));
    }

    #[test]
    fn resolve_no_match_fails_with_prefix() {
        let store = TempDir::new().unwrap();
        fs::create_dir(store.path().join("unrelated")).unwrap();

        let err = resolve_source_directory(store.path(), "qcwlan8180").unwrap_err();
        assert!(err.to_string().contains("qcwlan8180"));
    }

    #[test]
    fn resolve_ignores_plain_files() {
        let store = TempDir::new().unwrap();
        fs::write(store.path().join("qcwlan8180.txt"), "not a package").unwrap();
        fs::create_dir(store.path().join("qcwlan8180_pkg")).unwrap();

        let dir = resolve_source_directory(store.path(), "qcwlan8180").unwrap();
        assert_eq!(dir, store.path().join("qcwlan8180_pkg"));
    }
}
