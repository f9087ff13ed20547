#![allow(clippy::unwrap_used, reason = "tests can panic")]

use super::*;
use pretty_assertions::assert_eq;

fn sym(name: &str) -> Tree {
    Tree::symbol(name)
}

fn num(value: i64) -> Tree {
    Tree::number(value)
}

fn lst<const N: usize>(elements: [Tree; N]) -> Tree {
    Tree::list(elements)
}

#[test]
fn reads_single_forms() {
    let cases = [
        ("one_letter_symbol", "x", sym("x")),
        ("multi_letter_symbol", "abba", sym("abba")),
        ("first_symbol", "x y z", sym("x")),
        ("empty_list", "()", lst([])),
        ("singleton_list", "(+)", lst([sym("+")])),
        ("nested_empty_list", "(())", lst([lst([])])),
        (
            "nested_list",
            "(+ x (/ y z))",
            lst([sym("+"), sym("x"), lst([sym("/"), sym("y"), sym("z")])]),
        ),
        ("first_list", "(+) (abba u2 rem)", lst([sym("+")])),
        ("digit", "7", num(7)),
        ("multi_digit_number", "13", num(13)),
        ("negative_number", "-9", num(-9)),
        ("plus_signed_number", "+5", num(5)),
        ("lone_minus", "-", sym("-")),
        (
            "list_with_numbers",
            "(+ 13 x)",
            lst([sym("+"), num(13), sym("x")]),
        ),
        ("initial_space_skipped", "   +", sym("+")),
        ("padded_list", "(  a\n\tb )", lst([sym("a"), sym("b")])),
        ("unicode_symbol", "π", sym("π")),
        (
            "overflowing_digits",
            "99999999999999999999",
            sym("99999999999999999999"),
        ),
        ("open_paren_inside_atom", "a(b", sym("a(b")),
    ];

    for (name, input, expected) in cases {
        assert_eq!(read_sexpr(input), Ok(expected), "case {name}");
    }
}

#[test]
fn empty_input_is_clean_eof() {
    let err = read_sexpr("").unwrap_err();
    assert_eq!(err, ReadError::Eof);
    assert!(err.is_clean_eof());
    assert_eq!(read_sexpr("  \n "), Err(ReadError::Eof));
}

#[test]
fn unmatched_list_is_unexpected_eof() {
    let err = read_sexpr("(").unwrap_err();
    assert_eq!(err, ReadError::UnexpectedEof { open: 0 });
    assert!(!err.is_clean_eof());
}

#[test]
fn unmatched_nested_list_reports_innermost_open() {
    assert_eq!(
        read_sexpr("(a (b c"),
        Err(ReadError::UnexpectedEof { open: 3 })
    );
    assert_eq!(read_sexpr("(a"), Err(ReadError::UnexpectedEof { open: 0 }));
}

#[test]
fn stray_close_paren_is_an_error() {
    assert_eq!(
        read_sexpr("  )"),
        Err(ReadError::UnexpectedCloseParen { offset: 2 })
    );
}

#[test]
fn reader_leaves_trailing_input() {
    let mut reader = Reader::new("(+) (abba u2 rem)");
    assert_eq!(reader.read(), Ok(lst([sym("+")])));
    assert_eq!(reader.rest(), " (abba u2 rem)");
    assert_eq!(reader.offset(), 3);
    assert_eq!(
        reader.read(),
        Ok(lst([sym("abba"), sym("u2"), sym("rem")]))
    );
    assert_eq!(reader.read(), Err(ReadError::Eof));
}

#[test]
fn read_all_collects_every_form() {
    assert_eq!(
        read_all("x 1 (y)\n"),
        Ok(vec![sym("x"), num(1), lst([sym("y")])])
    );
    assert_eq!(read_all(""), Ok(vec![]));
}

#[test]
fn read_all_stops_at_first_error() {
    assert_eq!(
        read_all("x ) y"),
        Err(ReadError::UnexpectedCloseParen { offset: 2 })
    );
}

#[test]
fn iterator_skips_past_stray_close_paren() {
    let results: Vec<_> = Reader::new("a ) b").collect();
    assert_eq!(
        results,
        vec![
            Ok(sym("a")),
            Err(ReadError::UnexpectedCloseParen { offset: 2 }),
            Ok(sym("b")),
        ]
    );
}

#[test]
fn error_messages() {
    assert_eq!(ReadError::Eof.to_string(), "end of input");
    assert_eq!(
        ReadError::UnexpectedEof { open: 4 }.to_string(),
        "unexpected end of input: list opened at byte 4 is not closed"
    );
    assert_eq!(
        ReadError::UnexpectedCloseParen { offset: 1 }.to_string(),
        "unexpected `)` at byte 1"
    );
}

mod proptest_reader {
    use super::super::{read_all, read_sexpr};
    use crate::ReadError;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn clean_eof_only_for_blank_input(src in "[()a-z0-9 \t\n+-]{0,64}") {
            let _ = read_all(&src);
            let first = read_sexpr(&src);
            if src.trim().is_empty() {
                prop_assert_eq!(first, Err(ReadError::Eof));
            } else {
                prop_assert_ne!(first, Err(ReadError::Eof));
            }
        }

        #[test]
        fn whitespace_only_is_clean_eof(src in "[ \t\n]{0,16}") {
            prop_assert_eq!(read_sexpr(&src), Err(ReadError::Eof));
        }
    }
}
