//! Integration tests for the two-phase orchestrator.

mod helpers;

use anyhow::Result;
use helpers::{assert_symlink, TestEnv};
use std::fs;

use fwgather::context::Context;
use fwgather::filemap::FileMap;
use fwgather::logger::Logger;
use fwgather::patch::{qca_bt, PatchStep};
use fwgather::pipeline;
use fwgather::source::FirmwareSource;

fn bluetooth_source() -> FirmwareSource {
    FirmwareSource::driver_store(
        "bluetooth",
        "qca",
        "qcbtfmuart8180",
        FileMap::from_list([
            "crbtfw21.tlv",
            "crnv21.b3c",
            "crnv21.b44",
            "crnv21.b45",
            "crnv21.b46",
            "crnv21.b47",
            "crnv21.b71",
            "crnv21.bin",
        ])
        .unwrap(),
    )
}

fn marker_patch(_log: &Logger, ctx: &Context) -> Result<()> {
    fs::write(ctx.output.join("patch-ran"), "x")?;
    Ok(())
}

#[test]
fn pipeline_gathers_then_patches() {
    let env = TestEnv::new();
    env.add_package(
        "qcbtfmuart8180.inf_arm64",
        &[
            ("crbtfw21.tlv", "tlv"),
            ("crnv21.b3c", "nv"),
            ("crnv21.b44", "nv"),
            ("crnv21.b45", "nv"),
            ("crnv21.b46", "nv"),
            ("crnv21.b47", "nv"),
            ("crnv21.b71", "nv"),
            ("crnv21.bin", "nv"),
        ],
    );

    let sources = [bluetooth_source()];
    let patches = [PatchStep {
        name: "qca/bt",
        run: qca_bt::symlink_aliases,
    }];

    pipeline::run(&Logger::new(), &env.context(), &sources, &patches).unwrap();

    // Gather placed the vendor files, then the patch aliased them.
    assert_eq!(
        fs::read_to_string(env.output.join("qca/crbtfw21.tlv")).unwrap(),
        "tlv"
    );
    assert_symlink(&env.output.join("qca/crbtfw01.tlv"), "crbtfw21.tlv");
}

#[test]
fn first_source_failure_skips_later_sources_and_all_patches() {
    let env = TestEnv::new();
    // First source's package directory exists but its file is missing;
    // second source is fully present.
    env.add_package("qcwlan8180-v2", &[]);
    env.add_package("qcdx8180.inf_arm64", &[("qcdxkmsuc8180.mbn", "gpu")]);

    let sources = [
        FirmwareSource::driver_store(
            "wlan/vendor",
            "qcom",
            "qcwlan8180",
            FileMap::from_list(["wlanmdsp.mbn"]).unwrap(),
        ),
        FirmwareSource::driver_store(
            "gpu/vendor",
            "qcom",
            "qcdx8180",
            FileMap::from_list(["qcdxkmsuc8180.mbn"]).unwrap(),
        ),
    ];
    let patches = [PatchStep {
        name: "marker",
        run: marker_patch,
    }];

    let result = pipeline::run(&Logger::new(), &env.context(), &sources, &patches);
    assert!(result.is_err(), "pipeline must abort on the first failure");

    assert!(
        !env.output.join("qcom/qcdxkmsuc8180.mbn").exists(),
        "later sources must not be attempted after a failure"
    );
    assert!(
        !env.output.join("patch-ran").exists(),
        "no patch step may run if the gather phase failed"
    );
}

#[test]
fn patch_failure_skips_later_patches() {
    let env = TestEnv::new();

    fn failing_patch(_log: &Logger, _ctx: &Context) -> Result<()> {
        anyhow::bail!("boom")
    }

    let patches = [
        PatchStep {
            name: "broken",
            run: failing_patch,
        },
        PatchStep {
            name: "marker",
            run: marker_patch,
        },
    ];

    let err = pipeline::patch(&Logger::new(), &env.context(), &patches).unwrap_err();
    assert!(format!("{err:#}").contains("broken"));
    assert!(
        !env.output.join("patch-ran").exists(),
        "later patches must not run after a failure"
    );
}

#[test]
fn shipped_declarations_construct_without_error() {
    let sources = fwgather::manifest::sources().unwrap();
    assert!(!sources.is_empty());
    let patches = fwgather::manifest::patches();
    assert_eq!(patches.len(), 4);
}
