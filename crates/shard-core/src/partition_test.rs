use super::*;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tempfile::tempdir;

/// Collect every file under `root` as relative-path -> content.
fn tree_snapshot(root: &Path) -> BTreeMap<PathBuf, String> {
    fn walk(dir: &Path, root: &Path, out: &mut BTreeMap<PathBuf, String>) {
        for entry in fs::read_dir(dir).unwrap() {
            let entry = entry.unwrap();
            let path = entry.path();
            if path.is_dir() {
                walk(&path, root, out);
            } else {
                let rel = path.strip_prefix(root).unwrap().to_path_buf();
                out.insert(rel, fs::read_to_string(&path).unwrap());
            }
        }
    }
    let mut out = BTreeMap::new();
    walk(root, root, &mut out);
    out
}

#[test]
fn test_two_statement_dump_lands_in_kind_directories() {
    let root = tempdir().unwrap();
    let text = "create or replace table T (a int);\ncreate or replace view V as select 1;\n";

    let summary = partition("D", text, root.path()).unwrap();

    assert_eq!(summary.written, 2);
    assert!(summary.skipped.is_empty());
    assert_eq!(summary.directories, 2);
    assert_eq!(
        fs::read_to_string(root.path().join("table/T.sql")).unwrap(),
        "create or replace table T (a int);\n"
    );
    assert_eq!(
        fs::read_to_string(root.path().join("view/V.sql")).unwrap(),
        "create or replace view V as select 1;\n"
    );
}

#[test]
fn test_empty_text_yields_empty_summary() {
    let root = tempdir().unwrap();

    let summary = partition("D", "", root.path()).unwrap();

    assert_eq!(summary.written, 0);
    assert!(summary.skipped.is_empty());
    assert_eq!(summary.directories, 0);
}

#[test]
fn test_partition_is_idempotent() {
    let text = "create or replace database D;\ncreate or replace schema D.S;\ncreate or replace table D.S.T (a int);\ncreate or replace function D.S.F(X NUMBER)\nreturns number\nas 'X + 1';\n";

    let first = tempdir().unwrap();
    partition("D", text, first.path()).unwrap();
    partition("D", text, first.path()).unwrap();

    let second = tempdir().unwrap();
    partition("D", text, second.path()).unwrap();

    assert_eq!(tree_snapshot(first.path()), tree_snapshot(second.path()));
}

#[test]
fn test_rerun_drops_files_for_removed_objects() {
    let root = tempdir().unwrap();
    let full = "create or replace table D.S.KEEP (a int);\ncreate or replace table D.S.DROP_ME (a int);\n";
    let reduced = "create or replace table D.S.KEEP (a int);\n";

    partition("D", full, root.path()).unwrap();
    assert!(root.path().join("table/D.S.DROP_ME.sql").exists());

    partition("D", reduced, root.path()).unwrap();
    assert!(root.path().join("table/D.S.KEEP.sql").exists());
    assert!(!root.path().join("table/D.S.DROP_ME.sql").exists());
}

#[test]
fn test_nested_table_folds_into_its_procedure() {
    let root = tempdir().unwrap();
    let text = "create or replace schema D.S;\ncreate or replace table D.S.A (a int);\ncreate or replace procedure D.S.P()\nreturns varchar\nlanguage sql\nas 'select 1';\ncreate or replace table D.S.INNER (x int);\n";

    let summary = partition("D", text, root.path()).unwrap();

    // schema + table + procedure; INNER must not become its own object
    assert_eq!(summary.written, 3);
    assert!(root.path().join("table/D.S.A.sql").exists());
    assert!(!root.path().join("table/D.S.INNER.sql").exists());
    let procedure = fs::read_to_string(root.path().join("procedure/D.S.P().sql")).unwrap();
    assert!(procedure.contains("create or replace table D.S.INNER"));
}

#[test]
fn test_programmatic_flag_resets_per_schema_chunk() {
    let root = tempdir().unwrap();
    let text = "create or replace schema D.S1;\ncreate or replace procedure D.S1.P()\nreturns varchar\nas 'select 1';\ncreate or replace schema D.S2;\ncreate or replace table D.S2.T (a int);\n";

    let summary = partition("D", text, root.path()).unwrap();

    // The S2 table follows a procedure in document order, but a new schema
    // chunk starts a fresh fold: it must be a real object.
    assert_eq!(summary.written, 4);
    assert!(root.path().join("table/D.S2.T.sql").exists());
}

#[test]
fn test_overloads_write_two_distinct_files() {
    let root = tempdir().unwrap();
    let text = "create or replace function D.S.F(X NUMBER)\nreturns number\nas 'X';\ncreate or replace function D.S.F(X VARCHAR)\nreturns number\nas '1';\n";

    let summary = partition("D", text, root.path()).unwrap();

    assert_eq!(summary.written, 2);
    assert!(root.path().join("function/D.S.F(NUMBE).sql").exists());
    assert!(root.path().join("function/D.S.F(VARCH).sql").exists());
}

#[test]
fn test_case_colliding_names_get_one_underscore() {
    let root = tempdir().unwrap();
    // Two objects whose names sanitize to the same filename: the embedded
    // double quote becomes an underscore.
    let text = "create or replace table D.S.A_B (a int);\ncreate or replace table D.S.A\"B (a int);\n";

    let summary = partition("D", text, root.path()).unwrap();

    assert_eq!(summary.written, 2);
    assert!(root.path().join("table/D.S.A_B.sql").exists());
    assert!(root.path().join("table/D.S.A_B_.sql").exists());
    assert!(!root.path().join("table/D.S.A_B__.sql").exists());
}

#[test]
fn test_unterminated_final_candidate_is_fatal() {
    let root = tempdir().unwrap();
    let text = "create or replace table D.S.A (a int);\ncreate or replace table D.S.BAD (a int) comment = 'oops;\n";

    let err = partition("D", text, root.path()).unwrap_err();

    match err {
        CoreError::UnterminatedDump { snippet, .. } => {
            assert!(snippet.contains("D.S.BAD"));
        }
        other => panic!("expected UnterminatedDump, got {other:?}"),
    }
}

#[test]
fn test_fatal_error_carries_partial_state() {
    let root = tempdir().unwrap();
    // The first schema chunk writes fine; the second dies mid-statement.
    let text = "create or replace schema D.S1;\ncreate or replace table D.S1.OK (a int);\ncreate or replace schema D.S2;\ncreate or replace table D.S2.BAD (a int) comment = 'oops;\n";

    let err = partition("D", text, root.path()).unwrap_err();

    match err {
        CoreError::UnterminatedDump { partial, .. } => {
            assert_eq!(partial.written, 2);
        }
        other => panic!("expected UnterminatedDump, got {other:?}"),
    }
}

#[test]
fn test_file_format_with_generator_defect_is_written() {
    let root = tempdir().unwrap();
    let text = "create or replace file format D.S.CSV_FMT\ntype = 'csv'\nfield_optionally_enclosed_by = '\";\n";

    let summary = partition("D", text, root.path()).unwrap();

    assert_eq!(summary.written, 1);
    assert!(root.path().join("file format/D.S.CSV_FMT.sql").exists());
}

#[test]
fn test_tag_assignments_are_dropped_from_output() {
    let root = tempdir().unwrap();
    let text = "create or replace table D.S.T (a int);\nalter database D set tag governance.owner = 'team';\ncreate or replace view D.S.V as select 1;\n";

    let summary = partition("D", text, root.path()).unwrap();

    assert_eq!(summary.written, 2);
    let table = fs::read_to_string(root.path().join("table/D.S.T.sql")).unwrap();
    assert!(!table.contains("set tag"));
}

#[test]
fn test_unrecognized_statement_is_reported_in_summary() {
    let root = tempdir().unwrap();
    let text = "create or replace warehouse WH;\ncreate or replace table D.S.T (a int);\n";

    let summary = partition("D", text, root.path()).unwrap();

    assert_eq!(summary.written, 1);
    assert_eq!(summary.skipped.len(), 1);
    assert!(matches!(
        summary.skipped[0].reason,
        crate::summary::SkipReason::UnrecognizedHeader { .. }
    ));
}

#[test]
fn test_crlf_dump_round_trips_to_lf() {
    let root = tempdir().unwrap();
    let text = "create or replace table D.S.T (a int);\r\n";

    partition("D", text, root.path()).unwrap();

    assert_eq!(
        fs::read_to_string(root.path().join("table/D.S.T.sql")).unwrap(),
        "create or replace table D.S.T (a int);\n"
    );
}
