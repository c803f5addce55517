/// Command-line integration tests — exit codes and output of the `textgen` binary.

use std::process::{Command, Output};

fn textgen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_textgen"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn print_mode_writes_chain() {
    let output = textgen(&["-f", "tests/fixtures/cat.txt", "-p"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "cat: [sat, ran]\nmat: [the]\non: [the]\nsat: [on]\nthe: [cat, mat, cat]\n"
    );
}

#[test]
fn generate_mode_respects_word_count() {
    let output = textgen(&["--file", "tests/fixtures/river.txt", "--num", "5"]);
    assert_eq!(output.status.code(), Some(0));

    let text = stdout(&output);
    let words = text.split_whitespace().count();
    assert!((1..=5).contains(&words), "got {} words: {:?}", words, text);
    assert!(text.ends_with('\n'));
}

#[test]
fn default_word_count_is_twenty() {
    let output = textgen(&["-f", "tests/fixtures/lorem_ipsum.txt"]);
    assert_eq!(output.status.code(), Some(0));
    let words = stdout(&output).split_whitespace().count();
    assert!((1..=20).contains(&words));
}

#[test]
fn zero_words_prints_empty_line() {
    let output = textgen(&["-f", "tests/fixtures/cat.txt", "-n", "0"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "\n");
}

#[test]
fn config_file_sets_word_count() {
    let output = textgen(&[
        "-f",
        "tests/fixtures/river.txt",
        "-c",
        "tests/fixtures/short.ron",
    ]);
    assert_eq!(output.status.code(), Some(0));
    let words = stdout(&output).split_whitespace().count();
    assert!((1..=3).contains(&words));
}

#[test]
fn empty_corpus_succeeds_with_no_words() {
    let output = textgen(&["-f", "tests/fixtures/empty.txt"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "\n");
}

#[test]
fn missing_corpus_exits_with_error() {
    let output = textgen(&["-f", "tests/fixtures/does_not_exist.txt"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("could not open"), "stderr: {}", stderr);
}

#[test]
fn empty_path_exits_with_error() {
    let output = textgen(&["-f", ""]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn missing_file_argument_exits_with_error() {
    let output = textgen(&["-n", "5"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn invalid_word_count_exits_with_error() {
    let output = textgen(&["-f", "tests/fixtures/cat.txt", "-n", "many"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn missing_config_exits_with_error() {
    let output = textgen(&[
        "-f",
        "tests/fixtures/cat.txt",
        "-c",
        "tests/fixtures/missing.ron",
    ]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn parse_errors_are_a_single_line() {
    for args in [
        &["-n", "5"][..],
        &["-f", "tests/fixtures/cat.txt", "-n", "many"][..],
        &["-f", "tests/fixtures/cat.txt", "--bogus"][..],
    ] {
        let output = textgen(args);
        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert_eq!(stderr.lines().count(), 1, "stderr: {:?}", stderr);
        assert!(stderr.starts_with("error:"), "stderr: {:?}", stderr);
    }
}

#[test]
fn config_print_mode_writes_chain() {
    let output = textgen(&["-f", "tests/fixtures/cat.txt", "-c", "tests/fixtures/print.ron"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("cat: [sat, ran]\n"));
}

#[test]
fn generate_flag_overrides_config_print_mode() {
    let output = textgen(&[
        "-f",
        "tests/fixtures/cat.txt",
        "-c",
        "tests/fixtures/print.ron",
        "--generate",
        "-n",
        "2",
    ]);
    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(!text.contains(':'), "expected generated text, got {:?}", text);
    assert!((1..=2).contains(&text.split_whitespace().count()));
}

#[test]
fn print_and_generate_conflict() {
    let output = textgen(&["-f", "tests/fixtures/cat.txt", "-p", "-g"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn latin1_corpus_generates_text() {
    let output = textgen(&["-f", "tests/fixtures/latin1.txt", "-p"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("caf\u{FFFD}: [au, noir,, cr\u{FFFD}me.]"));
}

#[test]
fn help_exits_successfully() {
    let output = textgen(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("--file"));
}
