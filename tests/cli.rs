use std::process::Command;

fn fwcodes() -> Command {
    Command::new(env!("CARGO_BIN_EXE_fwcodes"))
}

fn stdout_of(args: &[&str]) -> String {
    let out = fwcodes().args(args).output().expect("failed to run fwcodes");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    String::from_utf8_lossy(&out.stdout).into_owned()
}

// --- Emit ---

#[test]
fn default_emit_is_json() {
    let stdout = stdout_of(&[]);
    let v: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(v["tilt_home_failed"]["code"], 101);
    assert!(v["none"]["message"].is_null());
}

#[test]
fn emit_enum() {
    let stdout = stdout_of(&["--emit", "enum"]);
    assert!(stdout.starts_with("// Generated error code enum\nenum class Errors {\n"));
    assert!(stdout.contains("\tTILT_HOME_FAILED = 101;\n"));
    assert!(stdout.ends_with("};\n"));
}

#[test]
fn emit_messages_skips_codes_without_message() {
    let stdout = stdout_of(&["--emit", "messages"]);
    assert!(stdout.contains("static QMap<int, QString> error_messages{"));
    assert!(stdout.contains("\t{101, \""));
    assert!(!stdout.contains("{500,"), "NONE has no message: {stdout}");
}

#[test]
fn emit_ts() {
    let stdout = stdout_of(&["--emit", "ts"]);
    let mut lines = stdout.lines();
    assert_eq!(
        lines.next(),
        Some("// Generated translation string definitions for all defined error messages")
    );
    assert!(lines.all(|l| l.starts_with("tr(\"") && l.ends_with("\");")));
}

#[test]
fn emit_is_reproducible() {
    for format in ["json", "enum", "messages", "ts"] {
        assert_eq!(stdout_of(&["--emit", format]), stdout_of(&["--emit", format]), "{format}");
    }
}

#[test]
fn emit_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("errors.json");
    let out = fwcodes()
        .args(["--emit", "json", "-o"])
        .arg(&path)
        .output()
        .expect("failed to run fwcodes");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(out.stdout.is_empty());

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, stdout_of(&["--emit", "json"]));
}

// --- Inspection ---

#[test]
fn list_prints_every_code() {
    let stdout = stdout_of(&["--list"]);
    assert!(stdout.lines().next().unwrap().starts_with("TILT_HOME_FAILED: Code: 101 ("));
    assert!(stdout.contains("NONE: Code: 500\n"));
}

#[test]
fn explain_known_code() {
    let stdout = stdout_of(&["--explain", "205"]);
    assert!(stdout.starts_with("TEMP_SENSOR_FAILED\n"));
    assert!(stdout.contains("Category: temperature Value: 5 Code: 205"));
}

// --- Error cases ---

#[test]
fn explain_unknown_code_fails() {
    let out = fwcodes().args(["--explain", "999"]).output().expect("failed to run fwcodes");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("unknown code 999"));
}

#[test]
fn unknown_format_rejected() {
    let out = fwcodes().args(["--emit", "python"]).output().expect("failed to run fwcodes");
    assert!(!out.status.success());
}

#[test]
fn unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("errors.h");
    let out = fwcodes()
        .args(["--emit", "enum", "-o"])
        .arg(&path)
        .output()
        .expect("failed to run fwcodes");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("error: writing enum output"));
}
