use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn chronicles_cmd() -> Command {
    let mut cmd = Command::cargo_bin("chronicles").unwrap();
    cmd.env_remove("CHRONICLES_ROOT");
    cmd.env_remove("CHRONICLES_TZ");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Initialize a UTC, Monday-start journal at `root`
#[allow(dead_code)]
pub fn init_utc(root: &Path) {
    chronicles_cmd()
        .arg("init")
        .arg(root)
        .arg("--timezone")
        .arg("utc")
        .assert()
        .success();
}

#[allow(dead_code)]
pub fn write_entries(root: &Path, name: &str, contents: &str) {
    fs::write(root.join(name), contents).unwrap();
}
