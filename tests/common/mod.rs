use assert_cmd::Command;
use std::path::PathBuf;

pub fn tripday_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tripday").unwrap();
    cmd.env_remove("TRIPDAY_CONFIG");
    cmd.env_remove("TRIPDAY_LOG");
    cmd
}

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
