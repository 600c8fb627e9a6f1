use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn annotate_file_to_stdout() {
    let mut cmd = cargo_bin_cmd!("superfluous");
    cmd.arg(fixture_path("hello.c"));

    let output_pred = predicate::str::starts_with("// include stdio.h\n#include <stdio.h>\n")
        .and(predicate::str::contains("//       while i < 10\nfor (i = 0; i < 10; i++)\n"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn annotate_file_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("annotated.c");

    let mut cmd = cargo_bin_cmd!("superfluous");
    cmd.arg(fixture_path("hello.c")).arg(&out);
    cmd.assert().success().stdout(predicate::str::is_empty());

    let annotated = fs::read_to_string(&out).unwrap();
    assert!(annotated.ends_with("// return without value\nreturn;\n"));
}

#[test]
fn annotate_stdin_with_dash() {
    let mut cmd = cargo_bin_cmd!("superfluous");
    cmd.arg("-").write_stdin("    int x;\n");

    cmd.assert()
        .success()
        .stdout("    // declare, but do not initialize x\n    int x;\n");
}

#[test]
fn annotate_stdin_without_arguments() {
    let mut cmd = cargo_bin_cmd!("superfluous");
    cmd.write_stdin("return;\n");

    cmd.assert()
        .success()
        .stdout("// return without value\nreturn;\n");
}

#[test]
fn missing_input_fails_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.c");

    let mut cmd = cargo_bin_cmd!("superfluous");
    cmd.arg(&missing);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(
            predicate::str::contains("Error: cannot read")
                .and(predicate::str::contains("missing.c")),
        );
}

#[test]
fn rejects_extra_arguments() {
    let mut cmd = cargo_bin_cmd!("superfluous");
    cmd.arg("a.c").arg("b.c").arg("c.c");
    cmd.assert().failure();
}

#[test]
fn crlf_input_keeps_crlf_on_comments() {
    let mut cmd = cargo_bin_cmd!("superfluous");
    cmd.write_stdin("int x;\r\nreturn;\r\n");

    cmd.assert().success().stdout(
        "// declare, but do not initialize x\r\nint x;\r\n// return without value\r\nreturn;\r\n",
    );
}
