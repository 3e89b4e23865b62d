use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("bitconv"))
}

fn z64_image() -> Vec<u8> {
    let mut rom = vec![0u8; 0x40];
    rom[..4].copy_from_slice(&[0x80, 0x37, 0x12, 0x40]);
    rom[0x10..0x14].copy_from_slice(&0xEC70_11B7u32.to_be_bytes());
    rom[0x20..0x34].copy_from_slice(b"BITCONV TEST ROM    ");
    rom[0x3B..0x3F].copy_from_slice(b"NBTE");
    rom.extend_from_slice(&[0x3F, 0x80, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF]);
    rom
}

fn swapped(bytes: &[u8], unit: usize) -> Vec<u8> {
    bytes
        .chunks(unit)
        .flat_map(|chunk| chunk.iter().rev().copied())
        .collect()
}

fn write_fixture(temp: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = temp.path().join(name);
    fs::write(&path, bytes).expect("write fixture");
    path
}

fn stdout_json(output: &std::process::Output) -> Value {
    let stdout = String::from_utf8(output.stdout.clone()).expect("utf8 stdout");
    serde_json::from_str(&stdout).expect("valid json")
}

#[test]
fn help_supports_normalize_and_normalise() {
    cmd()
        .args(["rom", "normalize", "--help"])
        .assert()
        .success();
    cmd()
        .args(["rom", "normalise", "--help"])
        .assert()
        .success();
}

#[test]
fn missing_input_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.z64");
    let output = temp.path().join("out.z64");

    cmd()
        .args(["rom", "normalize"])
        .arg(missing)
        .arg("-o")
        .arg(output)
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn normalize_v64_writes_canonical_image() {
    let temp = TempDir::new().expect("tempdir");
    let expected = z64_image();
    let input = write_fixture(&temp, "game.v64", &swapped(&expected, 2));
    let output = temp.path().join("out").join("game.z64");

    cmd()
        .args(["rom", "normalize"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stderr(contains("OK: v64 -> z64"));

    assert_eq!(fs::read(&output).expect("read output"), expected);
}

#[test]
fn normalize_in_place_n64() {
    let temp = TempDir::new().expect("tempdir");
    let expected = z64_image();
    let input = write_fixture(&temp, "game.n64", &swapped(&expected, 4));

    cmd()
        .args(["rom", "normalize", "--in-place", "--quiet"])
        .arg(&input)
        .assert()
        .success()
        .stderr(contains("OK:").not());

    assert_eq!(fs::read(&input).expect("read input"), expected);
}

#[test]
fn normalize_rejects_unknown_signature() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_fixture(&temp, "junk.bin", &[0x12, 0x34, 0x56, 0x78]);
    let output = temp.path().join("out.z64");

    cmd()
        .args(["rom", "normalize"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(contains("unrecognized ROM format").and(contains("hint:")));
    assert!(!output.exists());
}

#[test]
fn normalize_output_must_differ_from_input() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_fixture(&temp, "game.z64", &z64_image());

    cmd()
        .args(["rom", "normalize"])
        .arg(&input)
        .arg("-o")
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("must differ from input"));
}

#[test]
fn inspect_reports_format_and_header() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_fixture(&temp, "game.v64", &swapped(&z64_image(), 2));

    let assert = cmd()
        .args(["rom", "inspect", "--stdout"])
        .arg(&input)
        .assert()
        .success();
    let report = stdout_json(assert.get_output());

    assert_eq!(report["tool"]["name"], "bitconv");
    assert_eq!(report["format"]["name"], "v64");
    assert_eq!(report["format"]["signature"], "0x37");
    assert_eq!(report["format"]["unit_bytes"], 2);
    assert_eq!(report["header"]["pi_config"], 0x8037_1240u32);
    assert_eq!(report["header"]["crc1"], 0xEC70_11B7u32);
    assert_eq!(report["header"]["title"], "BITCONV TEST ROM");
    assert_eq!(report["header"]["game_code"], "NBTE");
}

#[test]
fn inspect_writes_report_file() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_fixture(&temp, "game.z64", &z64_image());
    let report = temp.path().join("report.json");

    cmd()
        .args(["rom", "inspect"])
        .arg(&input)
        .arg("-o")
        .arg(&report)
        .arg("--pretty")
        .assert()
        .success()
        .stderr(contains("OK: report written"));

    let json = fs::read_to_string(&report).expect("read report");
    let value: Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["format"]["swapped"], false);
}

#[test]
fn inspect_stdout_and_report_conflict() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_fixture(&temp, "game.z64", &z64_image());
    let report = temp.path().join("report.json");

    cmd()
        .args(["rom", "inspect", "--stdout"])
        .arg(&input)
        .arg("-o")
        .arg(report)
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn inspect_rejects_unknown_extension() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_fixture(&temp, "game.txt", &z64_image());

    cmd()
        .args(["rom", "inspect", "--stdout"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("unsupported input format"));
}

#[test]
fn decode_prints_values() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_fixture(&temp, "data.raw", &[0x00, 0x00, 0x00, 0x01, 0xFF, 0xFF, 0xFF, 0xFF]);

    let assert = cmd()
        .arg("decode")
        .arg(&input)
        .args(["--type", "i32", "--count", "2"])
        .assert()
        .success();
    let fields = stdout_json(assert.get_output());

    assert_eq!(fields[0]["offset"], 0);
    assert_eq!(fields[0]["type"], "i32");
    assert_eq!(fields[0]["value"], 1);
    assert_eq!(fields[1]["offset"], 4);
    assert_eq!(fields[1]["value"], -1);
    assert_eq!(fields[1]["raw"], "0xffffffff");
}

#[test]
fn decode_float_after_normalize() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_fixture(&temp, "game.n64", &swapped(&z64_image(), 4));

    let assert = cmd()
        .arg("decode")
        .arg(&input)
        .args(["--normalize", "--type", "float", "--offset", "0x40"])
        .assert()
        .success();
    let fields = stdout_json(assert.get_output());

    assert_eq!(fields[0]["type"], "f32");
    assert_eq!(fields[0]["value"], 1.0);
    assert_eq!(fields[0]["raw"], "0x3f800000");
}

#[test]
fn decode_out_of_bounds_fails() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_fixture(&temp, "data.raw", &[0x00, 0x01, 0x02, 0x03]);

    cmd()
        .arg("decode")
        .arg(&input)
        .args(["--type", "u32", "--offset", "1"])
        .assert()
        .failure()
        .stderr(contains("read out of bounds").and(contains("hint:")));
}

#[test]
fn decode_huge_count_fails_cleanly() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_fixture(&temp, "data.raw", &[0x00, 0x00, 0x00, 0x01]);

    cmd()
        .arg("decode")
        .arg(&input)
        .args(["--type", "u32", "--count", "1000000000000"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("read out of bounds").and(contains("hint:")));
}

#[test]
fn decode_rejects_unknown_type() {
    let temp = TempDir::new().expect("tempdir");
    let input = write_fixture(&temp, "data.raw", &[0x00]);

    cmd()
        .arg("decode")
        .arg(&input)
        .args(["--type", "u128"])
        .assert()
        .failure()
        .stderr(contains("unknown scalar type"));
}

#[test]
fn glob_input_resolves_single_match() {
    let temp = TempDir::new().expect("tempdir");
    let only = write_fixture(&temp, "only.z64", &z64_image());
    let pattern = temp.path().join("*.z64");

    let assert = cmd()
        .args(["rom", "inspect", "--stdout"])
        .arg(pattern)
        .assert()
        .success();
    let report = stdout_json(assert.get_output());
    assert_eq!(report["format"]["name"], "z64");
    assert_eq!(report["input"]["path"], &*only.to_string_lossy());
}
