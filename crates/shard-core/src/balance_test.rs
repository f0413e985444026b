use super::*;

#[test]
fn test_plain_statement_is_complete() {
    assert!(is_complete("create or replace table T (a int);\n"));
}

#[test]
fn test_odd_quote_count_is_incomplete() {
    assert!(!is_complete("create or replace table T (a int) comment = 'oops;\n"));
}

#[test]
fn test_paired_quotes_are_complete() {
    assert!(is_complete("create or replace table T (a int) comment = 'fine';\n"));
}

#[test]
fn test_escaped_quote_does_not_count() {
    // The literal holds one escaped quote; the two delimiters still pair up.
    assert!(is_complete(r"create or replace table T (a int) comment = 'it\'s fine';"));
}

#[test]
fn test_escaped_backslash_before_closing_quote() {
    assert!(is_complete(r"create or replace table T (a int) comment = 'trailing \\';"));
}

#[test]
fn test_line_comment_hides_its_quote() {
    assert!(is_complete(
        "create or replace table T (a int); -- don't count this\n"
    ));
    assert!(is_complete(
        "create or replace table T (a int); // don't count this\n"
    ));
}

#[test]
fn test_block_comment_hides_its_quote() {
    assert!(is_complete(
        "create or replace table T (a int); /* won't\ncount */\n"
    ));
}

#[test]
fn test_quoted_dash_run_survives_comment_stripping() {
    // Without the dash-run special case, line-comment stripping would eat
    // the closing quote and the rest of the line.
    assert!(is_complete(
        "create or replace table T (a int) comment = '------';\nselect 1;\n"
    ));
}

#[test]
fn test_unmatched_begin_is_incomplete() {
    assert!(!is_complete(
        "create or replace procedure P()\nreturns number\nas\nBEGIN\n  select 1;\n"
    ));
}

#[test]
fn test_matched_begin_end_is_complete() {
    assert!(is_complete(
        "create or replace procedure P()\nreturns number\nas\nBEGIN\n  select 1;\nEND;\n"
    ));
}

#[test]
fn test_begin_end_matching_is_case_insensitive() {
    assert!(is_complete("begin select 1; END;"));
}

#[test]
fn test_begin_end_requires_whole_words() {
    // BEGIN_DATE / WEEKEND must not register as nesting keywords.
    assert!(is_complete(
        "create or replace table T (BEGIN_DATE date, WEEKEND boolean);\n"
    ));
}

#[test]
fn test_quoted_begin_identifier_is_neutral() {
    assert!(is_complete(
        "create or replace table T (\"BEGIN\" date, \"end\" date);\n"
    ));
}

#[test]
fn test_stripped_view_is_scratch_only() {
    // The view drops comments; the raw text keeps them. The two
    // representations must stay distinguishable.
    let raw = "create or replace table T (a int); -- keep me in the output\n";
    let view = StrippedView::new(raw);
    assert!(view.is_balanced());
    assert!(raw.contains("keep me"));
}
