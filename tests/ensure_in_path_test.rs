use userpath_lib::engine::installer::{PathOutcome, PathSetup, URBACKUP_DIR};
use userpath_lib::engine::store::{EnvError, MemoryStore};
use userpath_lib::{check_urbackup_in_path, ensure_urbackup_in_path};

#[test]
fn test_second_run_is_noop() -> Result<(), Box<dyn std::error::Error>> {
    let setup = PathSetup::new(MemoryStore::with_value(r"C:\Windows;C:\Tools"));

    assert_eq!(setup.ensure_in_path(URBACKUP_DIR)?, PathOutcome::Added);
    let after_first = setup.store().value();

    assert_eq!(setup.ensure_in_path(URBACKUP_DIR)?, PathOutcome::AlreadyPresent);
    assert_eq!(setup.store().value(), after_first);
    assert_eq!(setup.store().write_count(), 1);
    assert_eq!(
        after_first.as_deref(),
        Some(r"C:\Windows;C:\Tools;C:\Program Files\UrBackup\")
    );
    Ok(())
}

#[test]
fn test_trailing_separator_is_literal() -> Result<(), Box<dyn std::error::Error>> {
    // No trailing-backslash normalization: the bare directory is a different segment
    let store = MemoryStore::with_value(r"C:\Program Files\UrBackup");
    let report = ensure_urbackup_in_path(&store)?;

    assert_eq!(report.outcome, PathOutcome::Added);
    assert_eq!(
        report.current,
        r"C:\Program Files\UrBackup;C:\Program Files\UrBackup\"
    );
    Ok(())
}

#[test]
fn test_empty_path_gets_no_leading_separator() -> Result<(), Box<dyn std::error::Error>> {
    let store = MemoryStore::with_value("");
    let report = ensure_urbackup_in_path(&store)?;

    assert_eq!(report.outcome, PathOutcome::Added);
    assert_eq!(store.value().as_deref(), Some(URBACKUP_DIR));
    Ok(())
}

#[test]
fn test_failing_store_reports_error_without_write() {
    let store = MemoryStore::with_value(r"C:\Windows");
    store.fail_reads();

    let err = ensure_urbackup_in_path(&store).unwrap_err();
    assert!(matches!(err, EnvError::Injected(_)));
    assert_eq!(store.write_count(), 0);
    assert_eq!(store.value().as_deref(), Some(r"C:\Windows"));
}

#[test]
fn test_check_never_writes() -> Result<(), Box<dyn std::error::Error>> {
    let store = MemoryStore::new();
    let status = check_urbackup_in_path(&store)?;

    assert!(!status.in_path);
    assert_eq!(store.write_count(), 0);
    assert!(store.value().is_none());
    Ok(())
}

#[test]
fn test_report_serializes_outcome() -> Result<(), Box<dyn std::error::Error>> {
    let store = MemoryStore::with_value(URBACKUP_DIR);
    let report = ensure_urbackup_in_path(&store)?;
    let json = serde_json::to_value(&report)?;

    assert_eq!(json["outcome"], "already_present");
    assert_eq!(json["entry"], URBACKUP_DIR);
    Ok(())
}
