use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn write_pom(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("pom.xml");
    fs::write(
        &path,
        "<project><modelVersion>4.0.0</modelVersion>\
         <dependencies><dependency><groupId>a</groupId></dependency>\
         <dependency><groupId>b</groupId></dependency></dependencies></project>",
    )
    .unwrap();
    path
}

#[test]
fn inspect_prints_tree() {
    let dir = tempdir().unwrap();
    let path = write_pom(&dir);

    let mut cmd = cargo_bin_cmd!("stratum");
    cmd.arg("inspect").arg(&path);

    cmd.assert().success().stdout(
        "└─ project\n  \
         ├─ modelVersion: 4.0.0\n  \
         └─ dependencies\n    \
         └─ dependency\n      \
         ├─ groupId: a\n      \
         └─ groupId: b\n",
    );
}

#[test]
fn inspect_respects_depth_and_scalars() {
    let dir = tempdir().unwrap();
    let path = write_pom(&dir);

    let mut cmd = cargo_bin_cmd!("stratum");
    cmd.arg("inspect")
        .arg(&path)
        .arg("--extra-max-depth")
        .arg("2")
        .arg("--extra-show-scalars")
        .arg("false");

    cmd.assert()
        .success()
        .stdout("└─ project\n  ├─ modelVersion\n  └─ dependencies\n");
}

#[test]
fn verbose_logs_to_stderr() {
    let dir = tempdir().unwrap();
    let path = write_pom(&dir);

    let mut cmd = cargo_bin_cmd!("stratum");
    cmd.arg("inspect").arg(&path).arg("--verbose");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("└─ project"))
        .stderr(predicate::str::contains("DEBUG"));
}
