use std::path::PathBuf;

use tempfile::TempDir;

/// A config file inside a temporary directory that lives as long as the value.
pub struct TempConfig {
    _dir: TempDir,
    pub path: PathBuf,
}

pub fn write_temp_config(contents: &str) -> TempConfig {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("dashrates.toml");
    std::fs::write(&path, contents).expect("write temp config");
    TempConfig { _dir: dir, path }
}

/// A path that is guaranteed not to exist.
pub fn missing_config() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("absent.toml");
    (dir, path)
}
