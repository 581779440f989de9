//! Integration tests for the `debug` subcommand.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;

fn cmd() -> Command {
    Command::cargo_bin("colbox").unwrap()
}

const ONE_PAGE: &str = r#"{"pages": [{"width": 612, "height": 792,
    "images": [[400, 500, 560, 600]],
    "blocks": [
        {"bbox": [72, 100, 300, 300], "lines": [
            {"bbox": [72, 100, 300, 300], "spans": [{"text": "Left column"}]}]},
        {"bbox": [20, 200, 40, 600], "lines": [
            {"bbox": [20, 200, 40, 600], "dir": [0, -1], "spans": [{"text": "Margin note"}]}]}
    ]}]}"#;

fn write_dump(dir: &tempfile::TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("dump.json");
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(json.as_bytes()).unwrap();
    path
}

#[test]
fn writes_single_svg() {
    let dir = tempfile::tempdir().unwrap();
    let dump = write_dump(&dir, ONE_PAGE);
    let out = dir.path().join("overlay.svg");

    cmd()
        .args(["debug", dump.to_str().unwrap(), "-o", out.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote"));

    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("stroke=\"red\""));
    assert!(svg.contains("<text x=\"77\" y=\"115\""));
    assert!(!svg.contains("stroke=\"blue\""));
}

#[test]
fn obstacles_drawn_on_request() {
    let dir = tempfile::tempdir().unwrap();
    let dump = write_dump(&dir, ONE_PAGE);
    let out = dir.path().join("overlay.svg");

    cmd()
        .args([
            "debug",
            dump.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
            "--obstacles",
            "--scale",
            "2",
        ])
        .assert()
        .success();

    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.contains("width=\"1224\""));
    assert!(svg.contains("stroke=\"blue\""));
    assert!(svg.contains("stroke=\"green\""));
}

#[test]
fn multiple_pages_get_numbered_files() {
    let dir = tempfile::tempdir().unwrap();
    let json = r#"{"pages": [{"width": 612, "height": 792}, {"width": 612, "height": 792}]}"#;
    let dump = write_dump(&dir, json);
    let out = dir.path().join("overlay.svg");

    cmd()
        .args(["debug", dump.to_str().unwrap(), "-o", out.to_str().unwrap()])
        .assert()
        .success();

    assert!(dir.path().join("overlay_page1.svg").exists());
    assert!(dir.path().join("overlay_page2.svg").exists());
    assert!(!out.exists());
}

#[test]
fn bad_scale_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let dump = write_dump(&dir, ONE_PAGE);
    let out = dir.path().join("overlay.svg");

    cmd()
        .args([
            "debug",
            dump.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
            "--scale",
            "0",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("scale"));
    assert!(!out.exists());
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("overlay.svg");
    cmd()
        .args(["debug", "/nonexistent/colbox/dump.json", "-o", out.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("file not found"));
}
