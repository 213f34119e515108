#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn tagcombo_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tagcombo").unwrap();
    cmd.env_remove("TAGCOMBO_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Initialized wiki in a fresh temp directory
pub fn init_wiki() -> TempDir {
    let temp = TempDir::new().unwrap();
    tagcombo_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

/// Write a page with a tag directive
pub fn write_page(root: &Path, relative: &str, tags: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, format!("Some text\n\n{{{{tag>{}}}}}\n", tags)).unwrap();
}

/// stdout of a successful run, split into lines
pub fn stdout_lines(cmd: &mut Command) -> Vec<String> {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
