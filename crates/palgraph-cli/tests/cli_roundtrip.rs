use std::fs;
use std::process::{Command, Output};

const DEFAULT_PATH: &str = "h-IAAK1GI-IAAU1GI-s-IAAK1GI-IAAU1GI-l-IAAK1GI-IAAU1GI-p-AK";

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_palgraph-cli"))
}

fn run_ok(cmd: &mut Command) -> Output {
    let out = cmd.output().expect("spawn command");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    out
}

fn stdout_line(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).trim().to_owned()
}

#[test]
fn default_prints_known_path() {
    let out = run_ok(cli().arg("default"));
    assert_eq!(stdout_line(&out), DEFAULT_PATH);
    assert!(String::from_utf8_lossy(&out.stderr).contains("default ok:"));
}

#[test]
fn normalize_reads_file_and_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("palette.txt");
    let output = dir.path().join("normalized.txt");
    fs::write(&input, format!("{DEFAULT_PATH}\n")).unwrap();

    let out = run_ok(cli().args([
        "normalize",
        "--in",
        input.to_str().unwrap(),
        "--out",
        output.to_str().unwrap(),
    ]));
    assert_eq!(fs::read_to_string(&output).unwrap().trim(), DEFAULT_PATH);
    assert!(String::from_utf8_lossy(&out.stderr).contains("changed=false"));
}

#[test]
fn inspect_reports_valid_default() {
    let out = run_ok(cli().args(["inspect", "--path", DEFAULT_PATH]));
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("inspect ok: valid=true warnings=0"), "{err}");
    assert!(err.contains("pointers   = [10]"), "{err}");
}

#[test]
fn malformed_path_fails() {
    let out = cli().args(["inspect", "--path", "h-nope-p"]).output().unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("format error"));
}

#[test]
fn insert_then_move_roundtrips_through_cli() {
    let out = run_ok(cli().args([
        "insert-point",
        "--path",
        DEFAULT_PATH,
        "--channel",
        "h",
        "--after",
        "0",
        "--at",
        "512,406",
    ]));
    let inserted = stdout_line(&out);
    assert_eq!(inserted.split('-').filter(|t| t.len() == 14).count(), 1, "{inserted}");

    let out = run_ok(cli().args([
        "move-point",
        "--path",
        &inserted,
        "--channel",
        "hue",
        "--point",
        "1",
        "--to",
        "512,-500",
        "--drag",
    ]));
    let moved = stdout_line(&out);
    assert_ne!(moved, inserted);

    let out = run_ok(cli().args(["inspect", "--path", &moved]));
    assert!(String::from_utf8_lossy(&out.stderr).contains("valid=true"));
}

#[test]
fn move_handle_keeps_side() {
    let out = run_ok(cli().args([
        "move-handle",
        "--path",
        DEFAULT_PATH,
        "--channel",
        "s",
        "--point",
        "0",
        "--to",
        "-50,300",
    ]));
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("at=(0, 300)"), "{err}");
}

#[test]
fn bounds_clamps_requested_position() {
    let out = run_ok(cli().args([
        "bounds",
        "--path",
        DEFAULT_PATH,
        "--channel",
        "l",
        "--segment",
        "0",
        "--control",
        "p1",
        "--to",
        "10,5000",
    ]));
    let line = stdout_line(&out);
    assert!(line.starts_with("min=(10, 456) max=(10, "), "{line}");
    assert!(!line.ends_with("clamped=(10, 5000)"), "{line}");
}

#[test]
fn sample_writes_full_channel_csv() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("hue.csv");
    run_ok(cli().args([
        "sample",
        "--path",
        DEFAULT_PATH,
        "--channel",
        "h",
        "--out",
        csv.to_str().unwrap(),
    ]));
    let text = fs::read_to_string(&csv).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("x,y"));
    assert_eq!(lines.clone().count(), 1025);
    assert_eq!(lines.last(), Some("1024,256"));
}

#[test]
fn zero_inaccuracy_is_rejected() {
    let out = cli().args(["default", "--inaccuracy", "0"]).output().unwrap();
    assert!(!out.status.success());
}

#[test]
fn bounds_accepts_far_request() {
    let out = run_ok(cli().args([
        "bounds",
        "--path",
        DEFAULT_PATH,
        "--channel",
        "h",
        "--segment",
        "0",
        "--control",
        "p2",
        "--to",
        "700,-2147483648",
    ]));
    assert!(stdout_line(&out).starts_with("min=("));
}
