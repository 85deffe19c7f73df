use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn print_divider_cmd(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("print-divider").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd.arg("--config").arg(config);
    cmd
}

/// A temp directory with a config path and a source file inside it
pub fn workspace(file_name: &str, contents: &str) -> (TempDir, PathBuf, PathBuf) {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config").join("config.toml");
    let file = temp.path().join(file_name);
    std::fs::write(&file, contents).unwrap();
    (temp, config, file)
}
