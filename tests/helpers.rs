//! Shared test utilities for fwgather tests.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use fwgather::context::{Context, ToolPaths};

/// Test environment with a mock driver store, output tree and tool checkout.
pub struct TestEnv {
    /// Temporary directory (kept alive for lifetime of TestEnv)
    pub _temp_dir: TempDir,
    /// Mock driver-store file repository (source of vendor files)
    pub driver_store: PathBuf,
    /// Output tree root (gather/patch destination)
    pub output: PathBuf,
    /// Mock third-party tool checkout directory
    pub tools_dir: PathBuf,
}

impl TestEnv {
    /// Create a new test environment with temporary directories.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base = temp_dir.path();

        let driver_store = base.join("FileRepository");
        let output = base.join("out");
        let tools_dir = base.join("third-party");

        fs::create_dir_all(&driver_store).expect("Failed to create driver store dir");
        fs::create_dir_all(&output).expect("Failed to create output dir");
        fs::create_dir_all(&tools_dir).expect("Failed to create tools dir");

        Self {
            _temp_dir: temp_dir,
            driver_store,
            output,
            tools_dir,
        }
    }

    /// Create the pipeline context for testing.
    pub fn context(&self) -> Context {
        Context {
            driver_store: self.driver_store.clone(),
            output: self.output.clone(),
            tools: ToolPaths::new(&self.tools_dir),
        }
    }

    /// Create a driver-store package directory holding the given files.
    ///
    /// Source names may contain subdirectories (e.g. `MCFG/mcfg_hw.mbn.1`).
    pub fn add_package(&self, dir_name: &str, files: &[(&str, &str)]) {
        let package = self.driver_store.join(dir_name);
        for (name, content) in files {
            let path = package.join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("Failed to create package dir");
            }
            fs::write(&path, content).expect("Failed to write package file");
        }
        // A package may legitimately be empty of the files under test.
        fs::create_dir_all(&package).expect("Failed to create package dir");
    }

    /// Write a file into the output tree, as if gathered by a source.
    pub fn seed_output(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.output.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create output dir");
        }
        fs::write(&path, content).expect("Failed to seed output file");
        path
    }
}

/// Install a mock python tool script at the given path.
pub fn install_tool(path: &Path, body: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create tool dir");
    }
    fs::write(path, body).expect("Failed to write tool script");
}

/// Install a mock executable at the given path (e.g. a curl stand-in placed
/// ahead of the real one in PATH).
pub fn install_executable(path: &Path, script: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create executable dir");
    }
    fs::write(path, script).expect("Failed to write executable");

    let mut perms = fs::metadata(path)
        .expect("Failed to get metadata")
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to set permissions");
}

/// Assert that a file exists.
pub fn assert_file_exists(path: &Path) {
    assert!(
        path.is_file(),
        "Expected file at {}, but it does not exist",
        path.display()
    );
}

/// Assert that a symlink exists and points to the expected target.
pub fn assert_symlink(path: &Path, expected_target: &str) {
    assert!(
        path.is_symlink(),
        "Expected symlink at {}, but it's not a symlink",
        path.display()
    );
    let target = fs::read_link(path).expect("Failed to read symlink");
    assert_eq!(
        target.to_string_lossy(),
        expected_target,
        "Symlink {} points at the wrong target",
        path.display()
    );
}
