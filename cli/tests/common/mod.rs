#![allow(dead_code)]
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub fn clex_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_clex"));
    cmd.current_dir(manifest_dir());
    cmd
}

pub fn manifest_dir() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

pub fn fixture(relative: &str) -> PathBuf {
    manifest_dir().join("tests").join(relative)
}

/// A fresh, empty directory under the system temp dir.
pub fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("clex_test_{name}_{}", std::process::id()));
    if dir.exists() {
        std::fs::remove_dir_all(&dir).ok();
    }
    std::fs::create_dir_all(&dir).expect("Failed to create temp dir");
    dir
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn expect_success(output: &Output) -> Result<String, String> {
    if output.status.success() {
        Ok(stdout_of(output))
    } else {
        Err(format!(
            "Command failed. stderr: {}, stdout: {}",
            stderr_of(output),
            stdout_of(output)
        ))
    }
}
