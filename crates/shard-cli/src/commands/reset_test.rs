use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_reset_scoped_to_one_database() {
    let output = tempdir().unwrap();
    fs::create_dir_all(output.path().join("table")).unwrap();
    fs::write(output.path().join("table/MYDB.S.T.sql"), "x").unwrap();
    fs::write(output.path().join("table/OTHER.S.T.sql"), "x").unwrap();

    let args = ResetArgs {
        database: Some("MYDB".to_string()),
    };
    let global = GlobalArgs {
        verbose: false,
        project_dir: output.path().to_path_buf(),
        output_dir: Some(output.path().to_path_buf()),
    };
    execute(&args, &global).unwrap();

    assert!(!output.path().join("table/MYDB.S.T.sql").exists());
    assert!(output.path().join("table/OTHER.S.T.sql").exists());
}

#[test]
fn test_reset_everything_removes_type_directories() {
    let output = tempdir().unwrap();
    fs::create_dir_all(output.path().join("table")).unwrap();
    fs::create_dir_all(output.path().join(".git")).unwrap();
    fs::write(output.path().join("table/MYDB.S.T.sql"), "x").unwrap();

    let args = ResetArgs { database: None };
    let global = GlobalArgs {
        verbose: false,
        project_dir: output.path().to_path_buf(),
        output_dir: Some(output.path().to_path_buf()),
    };
    execute(&args, &global).unwrap();

    assert!(!output.path().join("table").exists());
    assert!(output.path().join(".git").exists());
}
