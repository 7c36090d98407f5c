use std::{fs, process::Command};

fn poetry() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_write_poetry"));
    for var in [
        "POETRY_CORPUS",
        "POETRY_START",
        "POETRY_LENGTH",
        "POETRY_ORDER",
        "POETRY_PRINT_TABLE",
        "POETRY_SEED",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn writes_poem_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("corpus.txt");
    fs::write(&corpus, "One two three\none two three").unwrap();

    let output = poetry()
        .current_dir(dir.path())
        .args([corpus.to_str().unwrap(), "--start", "one", "--length", "4", "--seed", "1"])
        .output()
        .expect("failed to run write_poetry");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "one two three one two .\n\n"
    );
}

#[test]
fn prints_table_first() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("corpus.txt");
    fs::write(&corpus, "hi there").unwrap();

    let output = poetry()
        .current_dir(dir.path())
        .env("POETRY_PRINT_TABLE", "true")
        .args([corpus.to_str().unwrap(), "--start", "hi", "--length", "1"])
        .output()
        .expect("failed to run write_poetry");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(": Word :hi: (1) : there [1] \n"));
    assert!(stdout.contains(": Word :there: (0) : \n"));
    assert!(stdout.ends_with("\nhi there .\n\n"));
}

#[test]
fn missing_corpus_fails() {
    let dir = tempfile::tempdir().unwrap();

    let output = poetry()
        .current_dir(dir.path())
        .args(["nope.txt", "--start", "hi"])
        .output()
        .expect("failed to run write_poetry");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("failed to read corpus"));
}

#[test]
fn unknown_start_word_fails() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("corpus.txt");
    fs::write(&corpus, "a b c").unwrap();

    let output = poetry()
        .current_dir(dir.path())
        .args([corpus.to_str().unwrap(), "--start", "zebra"])
        .output()
        .expect("failed to run write_poetry");

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr).unwrap().contains("zebra"));
}
