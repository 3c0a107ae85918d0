//! Integration tests for the patch steps.
//!
//! External encoder/splitter tools are replaced with small python scripts
//! that record their invocation through file side effects.

mod helpers;

use helpers::{assert_file_exists, assert_symlink, install_tool, TestEnv};
use serde_json::Value;
use std::fs;

use fwgather::logger::Logger;
use fwgather::manifest::{ATH10K_BOARD_FILE, ATH10K_BOARD_NAME};
use fwgather::patch::{ath10k, qca_bt, venus};

/// Mock bdencoder: copies the `-c` spec file to the `-o` output path.
const MOCK_BDENCODER: &str = r#"
import shutil, sys
args = sys.argv[1:]
spec = args[args.index("-c") + 1]
out = args[args.index("-o") + 1]
shutil.copy(spec, out)
"#;

/// Mock fwencoder: appends a marker to the file it is told to modify.
const MOCK_FWENCODER: &str = r#"
import sys
with open(sys.argv[-1], "a") as f:
    f.write("|features-set")
"#;

/// Mock pil-splitter: writes one split segment next to the output prefix.
const MOCK_PIL_SPLITTER: &str = r#"
import sys
with open(sys.argv[2] + ".b00", "w") as f:
    f.write("segment")
"#;

#[test]
fn qca_bt_aliases_point_at_revision_21_files() {
    let env = TestEnv::new();
    let files = [
        "crbtfw21.tlv",
        "crnv21.b3c",
        "crnv21.b44",
        "crnv21.b45",
        "crnv21.b46",
        "crnv21.b47",
        "crnv21.b71",
        "crnv21.bin",
    ];
    for file in files {
        env.seed_output(&format!("qca/{file}"), "bt firmware");
    }

    qca_bt::symlink_aliases(&Logger::new(), &env.context()).unwrap();

    assert_symlink(&env.output.join("qca/crbtfw01.tlv"), "crbtfw21.tlv");
    assert_symlink(&env.output.join("qca/crnv01.bin"), "crnv21.bin");
    assert_symlink(&env.output.join("qca/crnv01.b71"), "crnv21.b71");

    // Aliases resolve to real content through the link.
    assert_eq!(
        fs::read_to_string(env.output.join("qca/crnv01.bin")).unwrap(),
        "bt firmware"
    );
}

#[test]
fn qca_bt_aliasing_is_idempotent() {
    let env = TestEnv::new();
    for file in [
        "crbtfw21.tlv",
        "crnv21.b3c",
        "crnv21.b44",
        "crnv21.b45",
        "crnv21.b46",
        "crnv21.b47",
        "crnv21.b71",
        "crnv21.bin",
    ] {
        env.seed_output(&format!("qca/{file}"), "bt firmware");
    }

    let ctx = env.context();
    qca_bt::symlink_aliases(&Logger::new(), &ctx).unwrap();
    qca_bt::symlink_aliases(&Logger::new(), &ctx)
        .expect("second run must succeed against an already-patched tree");

    assert_symlink(&env.output.join("qca/crbtfw01.tlv"), "crbtfw21.tlv");
    assert_symlink(&env.output.join("qca/crnv01.bin"), "crnv21.bin");
}

#[test]
fn ath10k_board_encoder_gets_single_record_spec() {
    let env = TestEnv::new();
    let ctx = env.context();
    install_tool(&ctx.tools.bdencoder, MOCK_BDENCODER);

    env.seed_output(
        &format!("ath10k/WCN3990/hw1.0/boards/{ATH10K_BOARD_FILE}"),
        "board data",
    );

    ath10k::encode_board(&Logger::new(), &ctx).unwrap();

    // The mock copied the spec file to board-2.bin, so we can inspect it.
    let board_out = env.output.join("ath10k/WCN3990/hw1.0/board-2.bin");
    assert_file_exists(&board_out);
    let spec: Value = serde_json::from_str(&fs::read_to_string(&board_out).unwrap()).unwrap();

    let records = spec.as_array().expect("spec must be a list of records");
    assert_eq!(records.len(), 1, "exactly one board record");
    let record = &records[0];
    assert_eq!(
        record["names"],
        serde_json::json!([ATH10K_BOARD_NAME]),
        "record must be indexed under the chip-ID name"
    );
    assert!(
        record["data"]
            .as_str()
            .unwrap()
            .ends_with(ATH10K_BOARD_FILE),
        "record must point at the board file"
    );

    // The raw boards directory is deleted after encoding.
    assert!(
        !env.output.join("ath10k/WCN3990/hw1.0/boards").exists(),
        "boards directory should be removed after encoding"
    );
}

#[test]
fn ath10k_firmware_features_modify_in_place() {
    let env = TestEnv::new();
    let ctx = env.context();
    install_tool(&ctx.tools.fwencoder, MOCK_FWENCODER);

    let fw5 = env.seed_output("ath10k/WCN3990/hw1.0/firmware-5.bin", "fw5");

    ath10k::enable_features(&Logger::new(), &ctx).unwrap();

    assert_eq!(fs::read_to_string(&fw5).unwrap(), "fw5|features-set");
}

#[test]
fn venus_extraction_splits_and_keeps_original() {
    let env = TestEnv::new();
    let ctx = env.context();
    install_tool(&ctx.tools.pil_splitter, MOCK_PIL_SPLITTER);

    env.seed_output("qcom/XIAOMI/BOOK124/qcvss8180.mbn", "venus container");

    venus::extract(&Logger::new(), &ctx).unwrap();

    let venus_dir = env.output.join("qcom/venus-5.2");
    assert_file_exists(&venus_dir.join("venus.b00"));
    assert_eq!(
        fs::read_to_string(venus_dir.join("venus.mbn")).unwrap(),
        "venus container",
        "the original container is duplicated under its upstream name"
    );
}

#[test]
fn ath10k_board_fails_without_gathered_input() {
    let env = TestEnv::new();
    let ctx = env.context();
    install_tool(&ctx.tools.bdencoder, MOCK_BDENCODER);

    // No boards directory was gathered; removing it after encoding fails.
    let result = ath10k::encode_board(&Logger::new(), &ctx);
    assert!(
        result.is_err(),
        "a patch with missing inputs must fail, not silently succeed"
    );
}
