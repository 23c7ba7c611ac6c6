use assert_cmd::Command;
use tempfile::tempdir;

fn spelltally() -> Command {
    Command::cargo_bin("spelltally").unwrap()
}

#[test]
fn record_then_summarize_through_the_binary() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("stats.tsv");
    let store = store.to_str().unwrap();

    spelltally()
        .args(["--file", store, "record", "hello", "greetings"])
        .assert()
        .success();
    spelltally()
        .args(["--file", store, "record", "hello", "greetings", "--missed"])
        .assert()
        .success();
    spelltally()
        .args(["--file", store, "record", "cat", "animals"])
        .assert()
        .success();

    let output = spelltally()
        .args(["--file", store, "lifetime"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("2 correct, 1 incorrect"), "got: {stdout}");

    let output = spelltally()
        .args(["--file", store, "category", "greetings"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("1 correct, 1 incorrect"), "got: {stdout}");
}

#[test]
fn daily_prints_requested_number_of_days() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("stats.tsv");
    let store = store.to_str().unwrap();

    spelltally()
        .args(["--file", store, "record", "hello", "greetings"])
        .assert()
        .success();

    let output = spelltally()
        .args(["--file", store, "daily", "--days", "5"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(stdout.lines().count(), 5, "got: {stdout}");
}

#[test]
fn export_writes_csv_rows() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("stats.tsv");
    let store = store.to_str().unwrap();

    spelltally()
        .args(["--file", store, "record", "hello", "greetings"])
        .assert()
        .success();

    let output = spelltally()
        .args(["--file", store, "export"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    let mut lines = stdout.lines();
    assert_eq!(
        lines.next(),
        Some("date,word,correct,incorrect,category")
    );
    let row = lines.next().unwrap();
    assert!(row.ends_with(",hello,1,0,greetings"), "got: {row}");
}
