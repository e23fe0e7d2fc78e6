//! Integration tests for the command dispatcher.

mod common;

use voxfile::dispatch::{AutoApprove, AutoDeny};
use voxfile::domain::OutcomeKind;

use common::{CountingGate, FailingOpener, RecordingOpener, create_test_home, test_dispatcher, write_file};

#[test]
fn test_open_folder_invokes_opener() {
    let home = create_test_home();
    let (opener, opened) = RecordingOpener::new();
    let dispatcher = test_dispatcher(home.path(), Box::new(opener), Box::new(AutoDeny));

    let outcome = dispatcher.dispatch("open downloads folder");

    assert!(outcome.succeeded);
    assert_eq!(outcome.kind, OutcomeKind::Success);
    assert_eq!(outcome.message, "Opened downloads folder");
    assert_eq!(outcome.spoken.as_deref(), Some("Opened downloads folder"));

    let opened = opened.lock().unwrap();
    assert_eq!(*opened, vec![home.path().join("Downloads")]);
}

#[test]
fn test_open_folder_without_alias_is_ambiguous() {
    let home = create_test_home();
    let (opener, opened) = RecordingOpener::new();
    let dispatcher = test_dispatcher(home.path(), Box::new(opener), Box::new(AutoDeny));

    let outcome = dispatcher.dispatch("open the folder");

    assert_eq!(outcome.kind, OutcomeKind::AmbiguousInput);
    assert!(!outcome.succeeded);
    assert!(outcome.message.contains("specify a folder name"));
    assert!(opened.lock().unwrap().is_empty());
}

#[test]
fn test_open_missing_folder_is_not_found() {
    let home = create_test_home();
    // "pictures" is a known alias but the directory does not exist
    let (opener, opened) = RecordingOpener::new();
    let dispatcher = test_dispatcher(home.path(), Box::new(opener), Box::new(AutoDeny));

    let outcome = dispatcher.dispatch("open pictures folder");

    assert_eq!(outcome.kind, OutcomeKind::NotFound);
    assert_eq!(outcome.message, "pictures folder not found");
    assert!(opened.lock().unwrap().is_empty());
}

#[test]
fn test_open_folder_succeeds_even_when_opener_fails() {
    // The folder resolved and the action was handed off; opener failures
    // are logged, not surfaced as command failures.
    let home = create_test_home();
    let dispatcher = test_dispatcher(home.path(), Box::new(FailingOpener), Box::new(AutoDeny));

    let outcome = dispatcher.dispatch("open documents folder");
    assert!(outcome.succeeded);
}

#[test]
fn test_search_finds_file_in_documents() {
    let home = create_test_home();
    let report = write_file(&home.path().join("Documents"), "report.pdf");
    let (opener, _) = RecordingOpener::new();
    let dispatcher = test_dispatcher(home.path(), Box::new(opener), Box::new(AutoDeny));

    let outcome = dispatcher.dispatch("search for report.pdf");

    assert!(outcome.succeeded);
    assert!(outcome.message.starts_with("Found 1 file(s) matching 'report.pdf'"));
    assert!(outcome.message.contains(report.to_str().unwrap()));
}

#[test]
fn test_search_without_filename_is_ambiguous() {
    let home = create_test_home();
    let (opener, _) = RecordingOpener::new();
    let dispatcher = test_dispatcher(home.path(), Box::new(opener), Box::new(AutoDeny));

    let outcome = dispatcher.dispatch("search everywhere");
    assert_eq!(outcome.kind, OutcomeKind::AmbiguousInput);
    assert!(outcome.message.contains("specify a filename"));
}

#[test]
fn test_search_no_match_is_not_found() {
    let home = create_test_home();
    let (opener, _) = RecordingOpener::new();
    let dispatcher = test_dispatcher(home.path(), Box::new(opener), Box::new(AutoDeny));

    let outcome = dispatcher.dispatch("search for unicorn.txt");
    assert_eq!(outcome.kind, OutcomeKind::NotFound);
    assert_eq!(outcome.message, "No files found matching 'unicorn.txt'");
}

#[test]
fn test_search_shows_at_most_five_paths() {
    let home = create_test_home();
    let docs = home.path().join("Documents");
    for i in 0..8 {
        write_file(&docs, &format!("note-{i}.txt"));
    }
    let (opener, _) = RecordingOpener::new();
    let dispatcher = test_dispatcher(home.path(), Box::new(opener), Box::new(AutoDeny));

    let outcome = dispatcher.dispatch("search for note");

    assert!(outcome.message.starts_with("Found 8 file(s)"));
    // header line plus five path lines
    assert_eq!(outcome.message.lines().count(), 6);
}

#[test]
fn test_delete_cancelled_leaves_file_alone() {
    let home = create_test_home();
    let target = write_file(&home.path().join("Documents"), "draft.txt");
    let (opener, _) = RecordingOpener::new();
    let (gate, calls) = CountingGate::new(false);
    let dispatcher = test_dispatcher(home.path(), Box::new(opener), Box::new(gate));

    let outcome = dispatcher.dispatch("delete draft.txt");

    assert_eq!(outcome.kind, OutcomeKind::Cancelled);
    assert_eq!(outcome.message, "Deletion cancelled");
    assert!(target.exists());
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 1);
}

#[test]
fn test_delete_confirmed_removes_exactly_one_file() {
    let home = create_test_home();
    let docs = home.path().join("Documents");
    let target = write_file(&docs, "old_file.doc");
    let other = write_file(&docs, "unrelated.txt");
    let (opener, _) = RecordingOpener::new();
    let (gate, calls) = CountingGate::new(true);
    let dispatcher = test_dispatcher(home.path(), Box::new(opener), Box::new(gate));

    let outcome = dispatcher.dispatch("delete old_file.doc");

    assert!(outcome.succeeded);
    assert_eq!(outcome.message, "Deleted 'old_file.doc'");
    assert!(!target.exists());
    assert!(other.exists());
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 1);
}

#[test]
fn test_delete_missing_file_never_consults_gate() {
    let home = create_test_home();
    let (opener, _) = RecordingOpener::new();
    let (gate, calls) = CountingGate::new(true);
    let dispatcher = test_dispatcher(home.path(), Box::new(opener), Box::new(gate));

    let outcome = dispatcher.dispatch("delete old_file.doc");

    assert_eq!(outcome.kind, OutcomeKind::NotFound);
    assert_eq!(outcome.message, "File 'old_file.doc' not found");
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 0);
}

#[test]
fn test_delete_without_filename_is_ambiguous() {
    let home = create_test_home();
    let (opener, _) = RecordingOpener::new();
    let dispatcher = test_dispatcher(home.path(), Box::new(opener), Box::new(AutoApprove));

    let outcome = dispatcher.dispatch("delete");
    assert_eq!(outcome.kind, OutcomeKind::AmbiguousInput);
    assert!(outcome.message.contains("specify a filename to delete"));
}

#[cfg(unix)]
#[test]
fn test_delete_permission_failure_becomes_io_outcome() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let home = create_test_home();
    let docs = home.path().join("Documents");
    let target = write_file(&docs, "locked.txt");
    let probe = write_file(&docs, "probe.txt");

    // Read-only directory: the unlink fails, the file stays.
    fs::set_permissions(&docs, fs::Permissions::from_mode(0o555)).unwrap();

    // Root ignores directory permissions; nothing to test there.
    if fs::remove_file(&probe).is_ok() {
        fs::set_permissions(&docs, fs::Permissions::from_mode(0o755)).unwrap();
        eprintln!("Skipping permission test: permissions not enforced for this user");
        return;
    }

    let (opener, _) = RecordingOpener::new();
    let dispatcher = test_dispatcher(home.path(), Box::new(opener), Box::new(AutoApprove));
    let outcome = dispatcher.dispatch("delete locked.txt");

    // Restore permissions so the tempdir can be cleaned up
    fs::set_permissions(&docs, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(outcome.kind, OutcomeKind::IoFailure);
    assert!(outcome.message.starts_with("Failed to delete 'locked.txt'"));
    assert!(target.exists());
}

#[test]
fn test_list_files_truncates_after_ten() {
    let home = create_test_home();
    let docs = home.path().join("Documents");
    for i in 0..12 {
        write_file(&docs, &format!("file-{i:02}.txt"));
    }
    let (opener, _) = RecordingOpener::new();
    let dispatcher = test_dispatcher(home.path(), Box::new(opener), Box::new(AutoDeny));

    let outcome = dispatcher.dispatch("list files in documents");

    assert!(outcome.succeeded);
    assert!(outcome.message.starts_with("Files in documents folder (12 items):"));
    assert!(outcome.message.ends_with("... and 2 more items"));
    // header + ten entries + tail
    assert_eq!(outcome.message.lines().count(), 12);
}

#[test]
fn test_list_files_small_directory_has_no_tail() {
    let home = create_test_home();
    let docs = home.path().join("Documents");
    for i in 0..3 {
        write_file(&docs, &format!("file-{i}.txt"));
    }
    let (opener, _) = RecordingOpener::new();
    let dispatcher = test_dispatcher(home.path(), Box::new(opener), Box::new(AutoDeny));

    let outcome = dispatcher.dispatch("list files in documents");

    assert!(outcome.message.starts_with("Files in documents folder (3 items):"));
    assert!(!outcome.message.contains("more items"));
}

#[test]
fn test_list_files_empty_directory_reports_zero() {
    let home = create_test_home();
    let (opener, _) = RecordingOpener::new();
    let dispatcher = test_dispatcher(home.path(), Box::new(opener), Box::new(AutoDeny));

    let outcome = dispatcher.dispatch("list files in documents");

    assert!(outcome.succeeded);
    assert_eq!(outcome.message, "Files in documents folder (0 items):");
}

#[test]
fn test_list_files_missing_directory_is_io_failure() {
    let home = create_test_home();
    // "music" is a known alias but the directory was never created
    let (opener, _) = RecordingOpener::new();
    let dispatcher = test_dispatcher(home.path(), Box::new(opener), Box::new(AutoDeny));

    let outcome = dispatcher.dispatch("list files in music");

    assert_eq!(outcome.kind, OutcomeKind::IoFailure);
    assert!(outcome.message.starts_with("Failed to list files"));
}

#[test]
fn test_unrecognized_command() {
    let home = create_test_home();
    let (opener, _) = RecordingOpener::new();
    let dispatcher = test_dispatcher(home.path(), Box::new(opener), Box::new(AutoDeny));

    let outcome = dispatcher.dispatch("do a barrel roll");

    assert_eq!(outcome.kind, OutcomeKind::Unrecognized);
    assert_eq!(
        outcome.message,
        "Command not recognized. Say 'help' for available commands."
    );
    assert_eq!(outcome.spoken.as_deref(), Some("Command not recognized"));
}

#[test]
fn test_help_returns_command_reference() {
    let home = create_test_home();
    let (opener, _) = RecordingOpener::new();
    let dispatcher = test_dispatcher(home.path(), Box::new(opener), Box::new(AutoDeny));

    let outcome = dispatcher.dispatch("help");

    assert_eq!(outcome.kind, OutcomeKind::Help);
    assert!(outcome.succeeded);
    assert!(outcome.message.contains("open <alias> folder"));
    assert!(outcome.message.contains("delete <name>"));
}
