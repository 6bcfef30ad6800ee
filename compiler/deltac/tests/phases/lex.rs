//! Whole files lexed through a session.

use delta_diagnostic::ErrorCode;
use deltac::RunOutcome;
use pretty_assertions::assert_eq;

use crate::common::{categories, lex_file, write_file};

const PROGRAM: &str = "\
/* Area of a circle */
radius = 2.5;
area = pi * radius * radius; // pi is predefined
/+ nested /+ comment +/ still a comment +/
flags = 0b1010_0101;
big = 1_000_000;
name = \"circle \\\"unit\\\"\";
";

#[test]
fn program_lexes_identically_for_every_buffer_size() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "circle.dl", PROGRAM);

    let reference = lex_file(&path, 4096);
    assert_eq!(reference.outcome, RunOutcome::Exhausted);
    assert!(reference.codes.is_empty(), "{:?}", reference.codes);
    for size in [2, 3, 5, 8, 17] {
        let run = lex_file(&path, size);
        assert_eq!(run.lines, reference.lines, "buffer size {size}");
    }
}

#[test]
fn program_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "circle.dl", PROGRAM);
    let run = lex_file(&path, 16);

    assert_eq!(
        categories(&run.lines),
        vec![
            "LC_IDENTIFIER",
            "LC_OP_ASSIGNMENT_ASSIGN",
            "LC_LITERAL_FP",
            "LC_SEPARATOR_SEMICOL",
            "LC_IDENTIFIER",
            "LC_OP_ASSIGNMENT_ASSIGN",
            "LC_IDENTIFIER_CONSTANT",
            "LC_OP_ARITHMETIC_TIMES",
            "LC_IDENTIFIER",
            "LC_OP_ARITHMETIC_TIMES",
            "LC_IDENTIFIER",
            "LC_SEPARATOR_SEMICOL",
            "LC_IDENTIFIER",
            "LC_OP_ASSIGNMENT_ASSIGN",
            "LC_LITERAL_INT",
            "LC_SEPARATOR_SEMICOL",
            "LC_IDENTIFIER",
            "LC_OP_ASSIGNMENT_ASSIGN",
            "LC_LITERAL_INT",
            "LC_SEPARATOR_SEMICOL",
            "LC_IDENTIFIER",
            "LC_OP_ASSIGNMENT_ASSIGN",
            "LC_LITERAL_STR",
            "LC_SEPARATOR_SEMICOL",
        ]
    );
    assert!(run
        .lines
        .contains(&"LC_LITERAL_INT 0b1010_0101 = 165 @ ln 5 : col 9".to_string()));
    assert!(run
        .lines
        .contains(&"LC_IDENTIFIER radius [variable] @ ln 3 : col 13".to_string()));
}

#[test]
fn errors_do_not_stop_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "bad.dl", "a = 0b;\nb = 12x;\nc + 1;\n\"open");
    let run = lex_file(&path, 8);

    assert_eq!(
        run.codes,
        vec![
            ErrorCode::E2322,
            ErrorCode::E2323,
            ErrorCode::E2401,
            ErrorCode::E2332
        ]
    );
    let idents = run
        .lines
        .iter()
        .filter(|line| line.starts_with("LC_IDENTIFIER "))
        .count();
    // a, b, x, c
    assert_eq!(idents, 4);
}

#[test]
fn empty_file_has_no_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "empty.dl", "");
    let run = lex_file(&path, 4096);
    assert!(run.lines.is_empty());
    assert!(run.codes.is_empty());
}
