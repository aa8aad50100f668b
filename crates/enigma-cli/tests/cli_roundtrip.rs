//! Black-box tests of the `enigma` binary.
//!
//! Each test writes a configuration and messages into a temporary directory,
//! runs the binary, and checks exit status and output.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

const DEFAULT_CONF: &str = include_str!("../../enigma-core/tests/fixtures/default.conf");

const SETUP: &str = "* B Beta III IV I AXLE (HQ) (EX) (IP) (TR) (BY)";

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let p = dir.path().join(name);
    fs::write(&p, contents).unwrap();
    p
}

fn enigma() -> Command {
    let mut cmd = Command::cargo_bin("enigma").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn stderr_of(cmd: &mut Command) -> (i32, String) {
    let out = cmd.output().unwrap();
    (out.status.code().unwrap_or(-1), String::from_utf8_lossy(&out.stderr).into_owned())
}

fn hiawatha(dir: &TempDir, message: &str) -> PathBuf {
    write(dir, "input.txt", &format!("{SETUP}\n{message}\n"))
}

#[test]
fn encrypts_file_to_stdout() {
    let dir = TempDir::new().unwrap();
    let conf = write(&dir, "default.conf", DEFAULT_CONF);
    let input = hiawatha(&dir, "FROM HIS SHOULDER HIAWATHA");

    enigma()
        .arg(&conf)
        .arg(&input)
        .assert()
        .success()
        .stdout("QVPQS OKOIL PUBKJ ZPISF XDW\n");
}

#[test]
fn reads_stdin_and_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let conf = write(&dir, "default.conf", DEFAULT_CONF);
    let input = hiawatha(&dir, "QVPQS OKOIL PUBKJ ZPISF XDW");
    let output = dir.path().join("plain.txt");

    enigma().arg(&conf).arg(&input).arg(&output).assert().success().stdout("");
    assert_eq!(fs::read_to_string(&output).unwrap(), "FROMH ISSHO ULDER HIAWA THA\n");

    enigma()
        .arg(&conf)
        .write_stdin(fs::read_to_string(&input).unwrap())
        .assert()
        .success()
        .stdout("FROMH ISSHO ULDER HIAWA THA\n");
}

#[test]
fn verbose_traces_keystrokes() {
    let dir = TempDir::new().unwrap();
    let conf = write(&dir, "default.conf", DEFAULT_CONF);
    let input = hiawatha(&dir, "FROM HIS SHOULDER HIAWATHA");

    let (code, stderr) = stderr_of(enigma().arg("--verbose").arg(&conf).arg(&input));
    assert_eq!(code, 0);
    assert!(stderr.contains("[AXLF] F -> F -> Q"), "{stderr}");
}

#[test]
fn lowercase_outside_alphabet_fails() {
    let dir = TempDir::new().unwrap();
    let conf = write(&dir, "default.conf", DEFAULT_CONF);
    let input = hiawatha(&dir, "FROM his shoulder Hiawatha");

    let (code, stderr) = stderr_of(enigma().arg(&conf).arg(&input));
    assert_eq!(code, 1);
    assert!(stderr.starts_with("Error: line 2"), "{stderr}");
}

#[test]
fn malformed_config_exits_with_one() {
    let dir = TempDir::new().unwrap();
    let conf = write(&dir, "bad.conf", "AB(D 2 1\n");
    let input = hiawatha(&dir, "FROM HIS SHOULDER HIAWATHA");

    let (code, stderr) = stderr_of(enigma().arg(&conf).arg(&input));
    assert_eq!(code, 1);
    assert!(stderr.starts_with("Error: bad configuration"), "{stderr}");
}

#[test]
fn missing_files_reported() {
    let dir = TempDir::new().unwrap();
    let missing: &Path = &dir.path().join("nope.conf");

    let (code, stderr) = stderr_of(enigma().arg(missing));
    assert_eq!(code, 1);
    assert!(stderr.contains("could not open"), "{stderr}");
}

#[test]
fn message_before_setup_fails() {
    let dir = TempDir::new().unwrap();
    let conf = write(&dir, "default.conf", DEFAULT_CONF);
    let input = write(&dir, "input.txt", "HELLO\n");

    let (code, stderr) = stderr_of(enigma().arg(&conf).arg(&input));
    assert_eq!(code, 1);
    assert!(stderr.contains("not configured"), "{stderr}");
}

#[test]
fn usage_error_exits_with_one() {
    let (code, _) = stderr_of(&mut enigma());
    assert_eq!(code, 1);
}

#[test]
fn oversized_slot_count_exits_with_one() {
    let dir = TempDir::new().unwrap();
    let conf = write(&dir, "big.conf", "ABCD 1000000000000 1 R1 R (AB) (CD) M1 MA (ABCD)\n");
    let input = write(&dir, "input.txt", "* R1 M1 A\nAAAA\n");

    let (code, stderr) = stderr_of(enigma().arg(&conf).arg(&input));
    assert_eq!(code, 1);
    assert!(stderr.contains("rotor slots but only 2 rotors"), "{stderr}");
}
