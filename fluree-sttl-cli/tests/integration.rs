use assert_cmd::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const UNSORTED: &str = r#"@prefix ex: <http://example.org/> .
ex:b ex:p 2 .
ex:a ex:q "x" ; ex:p 1 .
"#;

const SORTED: &str = "@prefix ex:    <http://example.org/> .

ex:a ex:p         1 ;
    ex:q          \"x\" .

ex:b ex:p         2 .
";

/// `sttl` running in an isolated temp directory with color disabled.
fn sttl_cmd(work_dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("sttl");
    cmd.current_dir(work_dir.path());
    cmd.env("NO_COLOR", "1");
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) {
    fs::write(dir.path().join(name), content).unwrap();
}

// ============================================================================
// Global flags
// ============================================================================

#[test]
fn help_flag() {
    cargo_bin_cmd!("sttl")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sorted Turtle"))
        .stdout(predicate::str::contains("format"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn verbose_quiet_conflict() {
    cargo_bin_cmd!("sttl")
        .args(["--verbose", "--quiet", "check", "-e", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

// ============================================================================
// format
// ============================================================================

#[test]
fn format_file_to_stdout() {
    let tmp = TempDir::new().unwrap();
    write(&tmp, "data.ttl", UNSORTED);
    sttl_cmd(&tmp)
        .args(["format", "data.ttl"])
        .assert()
        .success()
        .stdout(SORTED);
}

#[test]
fn format_stdin_and_inline() {
    let tmp = TempDir::new().unwrap();
    sttl_cmd(&tmp)
        .arg("format")
        .write_stdin(UNSORTED)
        .assert()
        .success()
        .stdout(SORTED);

    sttl_cmd(&tmp)
        .args(["format", "-e", UNSORTED])
        .assert()
        .success()
        .stdout(SORTED);
}

#[test]
fn format_to_output_file() {
    let tmp = TempDir::new().unwrap();
    write(&tmp, "data.ttl", UNSORTED);
    sttl_cmd(&tmp)
        .args(["format", "data.ttl", "-o", "sorted.ttl"])
        .assert()
        .success()
        .stdout("");
    assert_eq!(fs::read_to_string(tmp.path().join("sorted.ttl")).unwrap(), SORTED);
}

#[test]
fn format_trig_detected_by_extension_and_content() {
    let tmp = TempDir::new().unwrap();
    let trig = "@prefix ex: <http://example.org/> .\nex:g { ex:s ex:p 1 . }\n";
    let expected = "@prefix ex:    <http://example.org/> .\n\nex:g {\n    ex:s ex:p         1 .\n}\n";
    write(&tmp, "data.trig", trig);
    sttl_cmd(&tmp)
        .args(["format", "data.trig"])
        .assert()
        .success()
        .stdout(expected);

    sttl_cmd(&tmp)
        .args(["format", "-e", trig])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn format_unknown_format_is_usage_error() {
    let tmp = TempDir::new().unwrap();
    sttl_cmd(&tmp)
        .args(["format", "--format", "jsonld", "-e", UNSORTED])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown data format 'jsonld'"));
}

#[test]
fn format_parse_error_reports_position() {
    let tmp = TempDir::new().unwrap();
    sttl_cmd(&tmp)
        .args(["format", "-e", "@prefix ex: <http://example.org/> .\nex:s ex:p undefined:o ."])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("undefined"));
}

#[test]
fn format_missing_file() {
    let tmp = TempDir::new().unwrap();
    sttl_cmd(&tmp)
        .args(["format", "nope.ttl"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read nope.ttl"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn config_file_and_flag_overrides() {
    let tmp = TempDir::new().unwrap();
    write(
        &tmp,
        "sttl.toml",
        "[layout]\nindent_base = 2\npredicate_width = 8\n",
    );
    write(&tmp, "data.ttl", UNSORTED);

    sttl_cmd(&tmp)
        .args(["--config", "sttl.toml", "format", "data.ttl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ex:a ex:p 1 ;\n  ex:q    \"x\" ."));

    sttl_cmd(&tmp)
        .args(["--config", "sttl.toml", "format", "data.ttl", "--indent", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ex:a ex:p   1 ;\n    ex:q    \"x\" ."));
}

#[test]
fn invalid_config_file() {
    let tmp = TempDir::new().unwrap();
    write(&tmp, "bad.toml", "[layout]\nindent_base = \"wide\"\n");
    sttl_cmd(&tmp)
        .args(["--config", "bad.toml", "format", "-e", UNSORTED])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid config bad.toml"));
}

// ============================================================================
// check
// ============================================================================

#[test]
fn check_sorted_input_succeeds() {
    let tmp = TempDir::new().unwrap();
    write(&tmp, "sorted.ttl", SORTED);
    sttl_cmd(&tmp)
        .args(["check", "sorted.ttl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sorted.ttl is sorted"));

    sttl_cmd(&tmp)
        .args(["--quiet", "check", "sorted.ttl"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn check_unsorted_input_exits_3() {
    let tmp = TempDir::new().unwrap();
    write(&tmp, "data.ttl", UNSORTED);
    sttl_cmd(&tmp)
        .args(["check", "data.ttl"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("data.ttl is not sorted (first difference at line 1)"))
        .stderr(predicate::str::contains("help:"));
}
