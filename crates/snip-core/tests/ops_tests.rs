//! Integration tests for the snippet operations against real files.

use pretty_assertions::assert_eq;
use rstest::rstest;
use snip_core::{
    Error, ErrorKind, InsertOutcome, Settings, WriteMode, delete, extract, insert, list, rename,
    show,
};
use snip_test_utils::TestWorkspace;

const GREET_FILE: &[&str] = &["#-- name: greet", "  hello", "  world", "#-- end"];

fn settings() -> Settings {
    Settings::default()
}

// ============================================================================
// extract
// ============================================================================

#[test]
fn test_extract_into_missing_snippet_file() {
    let ws = TestWorkspace::new();
    let source = ws.write_lines("source.txt", &["a", "  hello", "  world", "b"]);
    let snippets = ws.path("snippets.txt");

    let outcome = extract(&source, 2, 3, "greet", &snippets, &settings()).unwrap();

    assert_eq!(outcome.lines, 2);
    assert_eq!(ws.read_lines("snippets.txt"), GREET_FILE);
}

#[test]
fn test_extract_into_empty_snippet_file() {
    let ws = TestWorkspace::new();
    let source = ws.write_lines("source.txt", &["a", "  hello", "  world", "b"]);
    let snippets = ws.write_raw("snippets.txt", "");

    extract(&source, 2, 3, "greet", &snippets, &settings()).unwrap();

    assert_eq!(ws.read_lines("snippets.txt"), GREET_FILE);
}

#[test]
fn test_extract_appends_after_existing_content() {
    let ws = TestWorkspace::new();
    let source = ws.write_lines("source.txt", &["x", "y"]);
    let snippets = ws.write_lines("snippets.txt", GREET_FILE);

    extract(&source, 1, 1, "single", &snippets, &settings()).unwrap();

    let mut expected: Vec<&str> = GREET_FILE.to_vec();
    expected.extend(["#-- name: single", "x", "#-- end"]);
    assert_eq!(ws.read_lines("snippets.txt"), expected);
}

#[test]
fn test_extract_refuses_duplicate_name() {
    let ws = TestWorkspace::new();
    let source = ws.write_lines("source.txt", &["x"]);
    let snippets = ws.write_lines("snippets.txt", GREET_FILE);

    let err = extract(&source, 1, 1, "greet", &snippets, &settings()).unwrap_err();

    assert!(matches!(err, Error::DuplicateName { ref name, .. } if name == "greet"));
    assert_eq!(err.kind(), ErrorKind::Domain);
    assert_eq!(ws.read_lines("snippets.txt"), GREET_FILE);
}

#[rstest]
#[case::newline("a\nb")]
#[case::carriage_return("a\rb")]
#[case::crlf("a\r\n")]
fn test_extract_refuses_multiline_name(#[case] name: &str) {
    let ws = TestWorkspace::new();
    let source = ws.write_lines("source.txt", &["one", "two"]);
    let snippets = ws.path("snippets.txt");
    extract(&source, 1, 1, "a", &snippets, &settings()).unwrap();

    let err = extract(&source, 2, 2, name, &snippets, &settings()).unwrap_err();

    assert!(matches!(err, Error::InvalidName { .. }));
    assert_eq!(err.kind(), ErrorKind::Domain);
    assert_eq!(list(&snippets).unwrap(), vec!["a"]);
    assert_eq!(ws.read_lines("snippets.txt"), vec!["#-- name: a", "one", "#-- end"]);
}

#[test]
fn test_extract_marks_name_as_existing() {
    let ws = TestWorkspace::new();
    let source = ws.write_lines("source.txt", &["x"]);
    let snippets = ws.path("snippets.txt");

    extract(&source, 1, 1, "first", &snippets, &settings()).unwrap();
    assert_eq!(list(&snippets).unwrap(), vec!["first"]);

    extract(&source, 1, 1, "second", &snippets, &settings()).unwrap();
    assert_eq!(list(&snippets).unwrap(), vec!["first", "second"]);
}

#[rstest]
#[case::zero_start(0, 2)]
#[case::end_before_start(3, 2)]
fn test_extract_invalid_range(#[case] start: usize, #[case] end: usize) {
    let ws = TestWorkspace::new();
    let source = ws.write_lines("source.txt", &["a", "b", "c"]);

    let err = extract(&source, start, end, "t", &ws.path("s.txt"), &settings()).unwrap_err();

    assert!(matches!(err, Error::InvalidRange { .. }));
    ws.assert_missing("s.txt");
}

#[test]
fn test_extract_range_past_end_yields_nothing() {
    let ws = TestWorkspace::new();
    let source = ws.write_lines("source.txt", &["a", "b"]);

    let err = extract(&source, 5, 6, "t", &ws.path("s.txt"), &settings()).unwrap_err();

    assert!(matches!(err, Error::EmptyRange { .. }));
    ws.assert_missing("s.txt");
}

#[test]
fn test_extract_range_partially_past_end() {
    let ws = TestWorkspace::new();
    let source = ws.write_lines("source.txt", &["a", "b"]);

    let err = extract(&source, 2, 4, "t", &ws.path("s.txt"), &settings()).unwrap_err();

    assert!(matches!(err, Error::RangeOutOfBounds { len: 2, .. }));
    ws.assert_missing("s.txt");
}

#[test]
fn test_extract_missing_source() {
    let ws = TestWorkspace::new();

    let err = extract(
        &ws.path("nope.txt"),
        1,
        1,
        "t",
        &ws.path("s.txt"),
        &settings(),
    )
    .unwrap_err();

    assert!(matches!(err, Error::SourceMissing { .. }));
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_extract_empty_name() {
    let ws = TestWorkspace::new();
    let source = ws.write_lines("source.txt", &["a"]);

    let err = extract(&source, 1, 1, "", &ws.path("s.txt"), &settings()).unwrap_err();
    assert!(matches!(err, Error::EmptyName));
}

// ============================================================================
// insert
// ============================================================================

#[test]
fn test_insert_matches_target_indent() {
    let ws = TestWorkspace::new();
    let snippets = ws.write_lines("s.txt", &["#-- name: t", "p", "q", "#-- end"]);
    let target = ws.write_lines("target.txt", &["x", "    y", "z"]);

    let outcome = insert(&snippets, &target, "t", 2, &settings()).unwrap();

    assert_eq!(ws.read_lines("target.txt"), vec!["x", "    p", "    q", "z"]);
    assert_eq!(
        outcome,
        InsertOutcome {
            lines_inserted: 2,
            target_len: 4
        }
    );
}

#[test]
fn test_insert_beyond_end_pads_without_indent() {
    let ws = TestWorkspace::new();
    let snippets = ws.write_lines("s.txt", &["#-- name: t", "p", "#-- end"]);
    let target = ws.write_lines("target.txt", &["    a"]);

    insert(&snippets, &target, "t", 4, &settings()).unwrap();

    assert_eq!(ws.read_lines("target.txt"), vec!["    a", "", "", "p"]);
}

#[test]
fn test_insert_creates_missing_target() {
    let ws = TestWorkspace::new();
    let snippets = ws.write_lines("s.txt", &["#-- name: t", "p", "#-- end"]);

    insert(&snippets, &ws.path("new.txt"), "t", 2, &settings()).unwrap();

    assert_eq!(ws.read_lines("new.txt"), vec!["", "p"]);
}

#[test]
fn test_insert_unknown_name_leaves_target_alone() {
    let ws = TestWorkspace::new();
    let snippets = ws.write_lines("s.txt", GREET_FILE);
    let target = ws.write_lines("target.txt", &["keep"]);

    let err = insert(&snippets, &target, "nope", 1, &settings()).unwrap_err();

    assert!(matches!(err, Error::NotFound { .. }));
    assert_eq!(ws.read_lines("target.txt"), vec!["keep"]);
}

#[test]
fn test_insert_empty_body_rejected() {
    let ws = TestWorkspace::new();
    let snippets = ws.write_lines("s.txt", &["#-- name: empty", "#-- end"]);
    let target = ws.write_lines("target.txt", &["keep"]);

    let err = insert(&snippets, &target, "empty", 1, &settings()).unwrap_err();

    assert!(matches!(err, Error::EmptyBody { .. }));
    assert_eq!(ws.read_lines("target.txt"), vec!["keep"]);
}

#[test]
fn test_insert_line_zero_rejected() {
    let ws = TestWorkspace::new();
    let snippets = ws.write_lines("s.txt", GREET_FILE);
    let target = ws.write_lines("target.txt", &["keep"]);

    let err = insert(&snippets, &target, "greet", 0, &settings()).unwrap_err();

    assert!(matches!(
        err,
        Error::Blocks(snip_blocks::Error::InvalidLineNumber { line: 0 })
    ));
    assert_eq!(ws.read_lines("target.txt"), vec!["keep"]);
}

#[test]
fn test_insert_missing_snippet_file() {
    let ws = TestWorkspace::new();
    let target = ws.write_lines("target.txt", &["keep"]);

    let err = insert(&ws.path("s.txt"), &target, "t", 1, &settings()).unwrap_err();

    assert!(matches!(err, Error::SnippetFileMissing { .. }));
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[rstest]
#[case(WriteMode::Atomic)]
#[case(WriteMode::Direct)]
fn test_insert_with_each_write_mode(#[case] mode: WriteMode) {
    let ws = TestWorkspace::new();
    let snippets = ws.write_lines("s.txt", GREET_FILE);
    let target = ws.write_lines("target.txt", &["\tslot"]);

    insert(
        &snippets,
        &target,
        "greet",
        1,
        &Settings::default().with_write_mode(mode),
    )
    .unwrap();

    assert_eq!(ws.read_lines("target.txt"), vec!["\t  hello", "\t  world"]);
}

// ============================================================================
// list / show
// ============================================================================

#[test]
fn test_list_empty_file_is_empty_not_error() {
    let ws = TestWorkspace::new();
    let snippets = ws.write_raw("s.txt", "");

    assert!(list(&snippets).unwrap().is_empty());
}

#[test]
fn test_list_missing_file_is_error() {
    let ws = TestWorkspace::new();

    let err = list(&ws.path("s.txt")).unwrap_err();
    assert!(matches!(err, Error::SnippetFileMissing { .. }));
}

#[test]
fn test_show_returns_header_and_body() {
    let ws = TestWorkspace::new();
    let snippets = ws.write_lines("s.txt", GREET_FILE);

    let snippet = show("greet", &snippets).unwrap();

    assert_eq!(snippet.to_lines(), &GREET_FILE[..3]);
}

#[test]
fn test_show_unknown_name() {
    let ws = TestWorkspace::new();
    let snippets = ws.write_lines("s.txt", GREET_FILE);

    let err = show("other", &snippets).unwrap_err();
    assert_eq!(err.to_string(), format!("Template 'other' not found in {}", snippets.display()));
}

// ============================================================================
// delete
// ============================================================================

#[test]
fn test_delete_only_block_leaves_no_blocks() {
    let ws = TestWorkspace::new();
    let snippets = ws.write_lines("s.txt", &["#-- name: t", "p", "q", "#-- end"]);

    delete("t", &snippets, &settings()).unwrap();

    assert_eq!(ws.read_raw("s.txt"), "");
    assert!(list(&snippets).unwrap().is_empty());
}

#[test]
fn test_delete_preserves_surrounding_content() {
    let ws = TestWorkspace::new();
    let snippets = ws.write_lines(
        "s.txt",
        &[
            "# my snippets",
            "#-- name: a",
            "1",
            "#-- end",
            "",
            "#-- name: b",
            "2",
            "#-- end",
            "#-- name: c",
            "3",
            "#-- end",
        ],
    );

    delete("b", &snippets, &settings()).unwrap();

    assert_eq!(
        ws.read_lines("s.txt"),
        vec![
            "# my snippets",
            "#-- name: a",
            "1",
            "#-- end",
            "",
            "#-- name: c",
            "3",
            "#-- end",
        ]
    );
}

#[test]
fn test_delete_unterminated_block_runs_to_end() {
    let ws = TestWorkspace::new();
    let snippets = ws.write_lines("s.txt", &["#-- name: a", "1", "#-- end", "#-- name: b", "2"]);

    delete("b", &snippets, &settings()).unwrap();

    assert_eq!(ws.read_lines("s.txt"), vec!["#-- name: a", "1", "#-- end"]);
}

#[test]
fn test_delete_unknown_name_leaves_file_alone() {
    let ws = TestWorkspace::new();
    let snippets = ws.write_lines("s.txt", GREET_FILE);

    let err = delete("nope", &snippets, &settings()).unwrap_err();

    assert!(matches!(err, Error::NotFound { .. }));
    assert_eq!(ws.read_lines("s.txt"), GREET_FILE);
}

// ============================================================================
// rename
// ============================================================================

#[test]
fn test_rename_changes_only_header() {
    let ws = TestWorkspace::new();
    let snippets = ws.write_lines(
        "s.txt",
        &["#-- name: s", "0", "#-- end", "#-- name: t", "p", "#-- end", "tail"],
    );

    let outcome = rename("t", "u", &snippets, &settings()).unwrap();

    assert!(outcome.renamed);
    assert_eq!(
        ws.read_lines("s.txt"),
        vec!["#-- name: s", "0", "#-- end", "#-- name: u", "p", "#-- end", "tail"]
    );
}

#[test]
fn test_rename_to_same_name_is_noop() {
    let ws = TestWorkspace::new();
    let snippets = ws.write_raw("s.txt", "#-- name: t\r\np\r\n#-- end\r\n");

    let outcome = rename("t", "t", &snippets, &settings()).unwrap();

    assert!(!outcome.renamed);
    assert_eq!(ws.read_raw("s.txt"), "#-- name: t\r\np\r\n#-- end\r\n");
}

#[test]
fn test_rename_onto_existing_name_rejected() {
    let ws = TestWorkspace::new();
    let snippets = ws.write_lines(
        "s.txt",
        &["#-- name: a", "1", "#-- end", "#-- name: b", "2", "#-- end"],
    );

    let err = rename("a", "b", &snippets, &settings()).unwrap_err();

    assert!(matches!(err, Error::DuplicateName { ref name, .. } if name == "b"));
    assert_eq!(list(&snippets).unwrap(), vec!["a", "b"]);
}

#[test]
fn test_rename_unknown_name() {
    let ws = TestWorkspace::new();
    let snippets = ws.write_lines("s.txt", GREET_FILE);

    let err = rename("nope", "other", &snippets, &settings()).unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[test]
fn test_rename_to_empty_name_rejected() {
    let ws = TestWorkspace::new();
    let snippets = ws.write_lines("s.txt", GREET_FILE);

    let err = rename("greet", "", &snippets, &settings()).unwrap_err();
    assert!(matches!(err, Error::EmptyName));
}

#[test]
fn test_rename_to_multiline_name_rejected() {
    let ws = TestWorkspace::new();
    let snippets = ws.write_lines(
        "s.txt",
        &["#-- name: a", "1", "#-- end", "#-- name: b", "2", "#-- end"],
    );

    let err = rename("b", "a\nb", &snippets, &settings()).unwrap_err();

    assert!(matches!(err, Error::InvalidName { ref name, .. } if name == "a\nb"));
    assert_eq!(list(&snippets).unwrap(), vec!["a", "b"]);
}

#[test]
fn test_rename_checks_name_before_reading_file() {
    let ws = TestWorkspace::new();

    let err = rename("a", "x\ry", &ws.path("absent.txt"), &settings()).unwrap_err();

    assert!(matches!(err, Error::InvalidName { .. }));
}

// ============================================================================
// line endings
// ============================================================================

#[test]
fn test_insert_keeps_crlf_target_endings() {
    let ws = TestWorkspace::new();
    let snippets = ws.write_lines("s.txt", GREET_FILE);
    let target = ws.write_raw("t.txt", "first\r\n    slot\r\nlast\r\n");

    insert(&snippets, &target, "greet", 2, &settings()).unwrap();

    assert_eq!(
        ws.read_raw("t.txt"),
        "first\r\n      hello\r\n      world\r\nlast\r\n"
    );
}

#[test]
fn test_delete_keeps_crlf_snippet_endings() {
    let ws = TestWorkspace::new();
    let snippets = ws.write_raw(
        "s.txt",
        "#-- name: a\r\n1\r\n#-- end\r\n#-- name: b\r\n2\r\n#-- end\r\n",
    );

    delete("a", &snippets, &settings()).unwrap();

    assert_eq!(ws.read_raw("s.txt"), "#-- name: b\r\n2\r\n#-- end\r\n");
}
