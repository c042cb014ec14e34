//! End-to-end tests for the gregory binary.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn gregory() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gregory"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn renders_requested_formats_to_stdout() {
    gregory()
        .args(["-q", "-s", "01/02/2003", "-e", "03/02/2003", "-f", "DMY", "dby"])
        .assert()
        .success()
        .stdout("01022003\n1feb03\n02022003\n2feb03\n");
}

#[test]
fn divider_and_capitals() {
    gregory()
        .args(["-q", "-s", "2003-02-01", "-e", "2003-02-02", "-d", ".", "-c", "-f", "aDb"])
        .assert()
        .success()
        .stdout("Sat.01.Feb\n");

    gregory()
        .args(["-q", "-s", "2003-02-01", "-e", "2003-02-02", "-c", "-C", "-f", "DBY"])
        .assert()
        .success()
        .stdout("01FEBRUARY2003\n");
}

#[test]
fn twins_keep_duplicates() {
    let args = ["-q", "-s", "15/02/2003", "-e", "16/02/2003", "-f", "dmy", "Dmy"];

    gregory().args(args).assert().success().stdout("15203\n");
    gregory().args(args).arg("-t").assert().success().stdout("15203\n15203\n");
}

#[test]
fn empty_range_writes_nothing() {
    gregory()
        .args(["-q", "-s", "01/02/2003", "-e", "01/02/2003"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn output_file_is_appended() {
    let tmp = tempdir().unwrap();
    let out = tmp.path().join("dates.txt");
    fs::write(&out, "keep\n").unwrap();

    gregory()
        .args(["-q", "-s", "01/02/2003", "-e", "02/02/2003", "-f", "Y", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout("");

    gregory()
        .args(["-q", "-s", "01/02/2004", "-e", "02/02/2004", "-f", "Y", "-o"])
        .arg(&out)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep\n2003\n2004\n");
}

#[test]
fn summary_goes_to_stderr() {
    gregory()
        .args(["--delay", "0", "-s", "01/02/2003", "-e", "03/02/2003", "-f", "DMY"])
        .assert()
        .success()
        .stdout("01022003\n02022003\n")
        .stderr(predicate::str::contains("Start date .................. 01/02/2003"))
        .stderr(predicate::str::contains("End date .................... 03/02/2003"))
        .stderr(predicate::str::contains("Total days .................. 2"))
        .stderr(predicate::str::contains("seconds to abort").not())
        .stderr(predicate::str::contains("Total lines worst case ...... 2"))
        .stderr(predicate::str::contains("Started!"))
        .stderr(predicate::str::contains("Done!"));
}

#[test]
fn summary_announces_delay() {
    gregory()
        .args(["--delay", "1", "-s", "01/02/2003", "-e", "02/02/2003", "-f", "Y"])
        .assert()
        .success()
        .stdout("2003\n")
        .stderr(predicate::str::contains("You have 1 seconds to abort..."));
}

#[test]
fn invalid_format_fails_without_output() {
    gregory()
        .args(["-q", "-s", "01/02/2003", "-e", "03/02/2003", "-f", "DMY", "dmyd"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "Error: format 'dmyd' is invalid: it has 4 characters",
        ));

    gregory()
        .args(["-q", "-s", "01/02/2003", "-e", "03/02/2003", "-f", "dmx"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unsupported symbol 'x'"));
}

#[test]
fn unsupported_locale_fails() {
    gregory()
        .args(["-q", "-s", "01/02/2003", "-e", "03/02/2003", "-l", "xx_YY.UTF-8"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("the locale 'xx_YY.UTF-8' is not supported"));
}

#[test]
fn localized_names() {
    gregory()
        .args(["-q", "-s", "01/02/2003", "-e", "02/02/2003", "-l", "de_DE.UTF-8", "-c", "-f", "AB"])
        .assert()
        .success()
        .stdout("SamstagFebruar\n");
}

#[test]
fn inverted_range_fails() {
    gregory()
        .args(["-q", "-s", "03/02/2003", "-e", "01/02/2003"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is after end"));
}

#[test]
fn bad_date_is_rejected() {
    gregory()
        .args(["-q", "-s", "30/02/2003"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid day"));
}

#[test]
fn file_in_missing_directory_fails() {
    let tmp = tempdir().unwrap();
    gregory()
        .args(["-q", "-s", "01/02/2003", "-e", "02/02/2003", "-o"])
        .arg(tmp.path().join("missing").join("out.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: failed to open"));
}

#[test]
fn locale_modifier_is_honoured() {
    gregory()
        .args(["-q", "-s", "01/02/2003", "-e", "02/02/2003", "-l", "sr_RS.UTF-8@latin", "-f", "B"])
        .assert()
        .success()
        .stdout("februar\n");
}
