use std::fs;

use wordsmith_core::CaseVariant;

use super::Error;
use super::convert::{ConvertArgs, convert, run, run_in};

fn inline(case: CaseVariant, text: &str) -> ConvertArgs {
    ConvertArgs {
        case,
        text: Some(text.to_string()),
        file: None,
        output: None,
        save: false,
    }
}

#[test]
fn converts_inline_text() {
    let session = convert(&inline(CaseVariant::Title, "the lord of the rings")).unwrap();
    assert_eq!(session.text(), "The Lord of the Rings");
}

#[test]
fn converts_file_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "first line. second line\n").unwrap();

    run(ConvertArgs {
        case: CaseVariant::Sentence,
        text: None,
        file: Some(input),
        output: Some(output.clone()),
        save: false,
    })
    .unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "First line. Second line\n"
    );
}

#[test]
fn empty_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.txt");

    let mut args = inline(CaseVariant::Upper, "");
    args.output = Some(output.clone());
    run(args).unwrap();

    assert!(!output.exists());
}

#[test]
fn unwritable_output_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("missing-dir").join("out.txt");

    let mut args = inline(CaseVariant::Lower, "Text");
    args.output = Some(output);
    let err = run(args).unwrap_err();

    assert!(matches!(err, Error::WriteFile { .. }));
    assert!(err.to_string().contains("out.txt"), "{err}");
}

#[test]
fn save_writes_default_export_file() {
    let dir = tempfile::tempdir().unwrap();

    let mut args = inline(CaseVariant::Upper, "hello world");
    args.save = true;
    run_in(args, dir.path()).unwrap();

    let saved = dir.path().join("converted-text.txt");
    assert_eq!(fs::read_to_string(saved).unwrap(), "HELLO WORLD");
}

#[test]
fn save_of_empty_input_creates_no_file() {
    let dir = tempfile::tempdir().unwrap();

    let mut args = inline(CaseVariant::Upper, "");
    args.save = true;
    run_in(args, dir.path()).unwrap();

    assert!(!dir.path().join("converted-text.txt").exists());
}

#[test]
fn output_path_wins_over_save_dir() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("explicit.txt");

    let mut args = inline(CaseVariant::Lower, "MiXeD");
    args.output = Some(output.clone());
    args.save = true;
    run_in(args, dir.path()).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "mixed");
    assert!(!dir.path().join("converted-text.txt").exists());
}
