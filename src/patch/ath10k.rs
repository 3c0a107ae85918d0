//! ath10k WLAN firmware re-encoding.

use anyhow::{Context as _, Result};
use serde::Serialize;
use std::fs;
use std::io::Write;

use crate::context::Context;
use crate::logger::Logger;
use crate::manifest::{ATH10K_BOARD_FILE, ATH10K_BOARD_NAME};
use crate::process::Cmd;

/// Feature flags the ath10k driver expects in firmware-5.bin.
const ATH10K_FEATURES: &str = "wowlan,mgmt-tx-by-ref,non-bmi,single-chan-info-per-channel";

/// One record of the bdencoder specification: a board data file and the
/// identifier strings it is indexed under.
#[derive(Serialize)]
struct BoardRecord {
    data: String,
    names: Vec<String>,
}

/// Create ath10k board-2.bin from a single bdf file.
///
/// The entry has to match the chip ID instead of the board ID. The board ID
/// is 0xff, which shows up on multiple chips and appears to mean "match the
/// chip ID instead". It is unclear which bdf file is the right one; anything
/// except the '.b5f' files works, those crash the remote processor instantly.
pub fn encode_board(log: &Logger, ctx: &Context) -> Result<()> {
    let hw_dir = ctx.output.join("ath10k/WCN3990/hw1.0");
    let boards_dir = hw_dir.join("boards");
    let board_out = hw_dir.join("board-2.bin");

    let spec = vec![BoardRecord {
        data: boards_dir.join(ATH10K_BOARD_FILE).display().to_string(),
        names: vec![ATH10K_BOARD_NAME.to_string()],
    }];

    let mut spec_file = tempfile::NamedTempFile::new()
        .context("failed to create bdencoder spec file")?;
    serde_json::to_writer(&mut spec_file, &spec)
        .context("failed to write bdencoder spec")?;
    spec_file.flush()?;

    log.info(format!("encoding '{}'", board_out.display()));
    Cmd::new("python3")
        .arg_path(&ctx.tools.bdencoder)
        .arg("-c")
        .arg_path(spec_file.path())
        .arg("-o")
        .arg_path(&board_out)
        .error_msg("ath10k-bdencoder failed")
        .run()?;

    // The raw bdf files are folded into board-2.bin now; the kernel must not
    // see them alongside it.
    fs::remove_dir_all(&boards_dir)
        .with_context(|| format!("failed to remove '{}'", boards_dir.display()))?;
    Ok(())
}

/// Patch the upstream firmware-5.bin in place.
///
/// The firmware running on the WiFi processor sends single events per
/// channel instead of event pairs. Without 'single-chan-info-per-channel'
/// set in firmware-5.bin the ath10k driver complains (somewhat cryptically)
/// that it only received a single event.
///
/// See also: https://www.spinics.net/lists/linux-wireless/msg178387.html.
pub fn enable_features(log: &Logger, ctx: &Context) -> Result<()> {
    let fw5_bin = ctx.output.join("ath10k/WCN3990/hw1.0/firmware-5.bin");

    log.info(format!("setting feature flags on '{}'", fw5_bin.display()));
    Cmd::new("python3")
        .arg_path(&ctx.tools.fwencoder)
        .arg("--modify")
        .arg(format!("--features={ATH10K_FEATURES}"))
        .arg_path(&fw5_bin)
        .error_msg("ath10k-fwencoder failed")
        .run()?;
    Ok(())
}
