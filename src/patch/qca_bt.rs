//! Bluetooth firmware aliases.
//!
//! The chip revision reads back as 0x01 instead of 0x21, but the Windows
//! drivers only ship revision 0x21 files and no 0x01 revision seems to
//! exist. Symlinking 0x01 names to the 0x21 counterparts works.

use anyhow::{Context as _, Result};
use std::fs;
use std::io;
use std::os::unix::fs as unix_fs;

use crate::context::Context;
use crate::logger::Logger;

/// Revision 0x21 files gathered from the driver store.
const BT_FILES: &[&str] = &[
    "crbtfw21.tlv",
    "crnv21.b3c",
    "crnv21.b44",
    "crnv21.b45",
    "crnv21.b46",
    "crnv21.b47",
    "crnv21.b71",
    "crnv21.bin",
];

/// Create the 0x01 alias symlinks. Safe to re-run: an existing alias is
/// replaced.
pub fn symlink_aliases(log: &Logger, ctx: &Context) -> Result<()> {
    let base = ctx.output.join("qca");

    for file in BT_FILES {
        let alias_name = file.replace("21", "01");
        let alias = base.join(&alias_name);

        match fs::remove_file(&alias) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("cannot replace alias '{}'", alias.display()))
            }
        }

        log.info(format!("linking '{alias_name}' to '{file}'"));
        unix_fs::symlink(file, &alias)
            .with_context(|| format!("failed to link '{}'", alias.display()))?;
    }
    Ok(())
}
