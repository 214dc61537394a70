use std::fs;

use ndarray::Array3;
use tempfile::tempdir;

use tensorbridge::process::ProcessContext;
use tensorbridge::summary::SummaryOptions;
use tensorbridge::tracker::{TensorboardTracker, Tracker};

/// A short run on the main process: the log directory is created, scalars
/// land in order, and images are recorded alongside them.
#[test]
fn test_main_process_training_run() {
    let dir = tempdir().unwrap();
    let logs = dir.path().join("logs");

    let ctx = ProcessContext::new(0, 4).unwrap();
    let mut tracker =
        TensorboardTracker::init("test", &logs, SummaryOptions::default(), ctx).unwrap();

    tracker.record_scalar("loss", 10.0, 1).unwrap();
    tracker.record_scalar("loss", 5.0, 2).unwrap();

    let img = Array3::<f32>::from_elem((3, 16, 16), 0.25);
    tracker.record_image("image", img.view(), 1).unwrap();
    tracker.record_image("image", img.view(), 2).unwrap();

    assert!(logs.is_dir());

    let scalars = fs::read_to_string(logs.join("scalars.csv")).unwrap();
    let rows: Vec<&str> = scalars.lines().skip(1).collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with("1,loss,10,"));
    assert!(rows[1].starts_with("2,loss,5,"));

    let images = fs::read_to_string(logs.join("images.csv")).unwrap();
    assert_eq!(images.lines().skip(1).count(), 2);
}

/// The same run issued on a secondary rank: no directory, no rows, no
/// errors. Call sites do not need to branch on rank.
#[test]
fn test_secondary_process_run_leaves_no_trace() {
    let dir = tempdir().unwrap();
    let logs = dir.path().join("logs");

    let ctx = ProcessContext::new(2, 4).unwrap();
    let mut tracker =
        TensorboardTracker::init("test", &logs, SummaryOptions::default(), ctx).unwrap();

    tracker.record_scalar("loss", 10.0, 1).unwrap();
    tracker.record_scalar("loss", 5.0, 2).unwrap();
    let img = Array3::<f32>::from_elem((3, 16, 16), 0.25);
    tracker.record_image("image", img.view(), 1).unwrap();

    assert!(tracker.writer().is_none());
    assert!(!logs.exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

/// Every rank of a group runs the same code against the same directory;
/// only rank 0 writes.
#[test]
fn test_whole_group_writes_exactly_once() {
    let dir = tempdir().unwrap();
    let logs = dir.path().join("logs");
    let world_size = 4;

    for rank in 0..world_size {
        let ctx = ProcessContext::new(rank, world_size).unwrap();
        let mut tracker =
            TensorboardTracker::init("test", &logs, SummaryOptions::default(), ctx).unwrap();
        tracker.record_scalar("loss", 1.0, rank as i64).unwrap();
    }

    let scalars = fs::read_to_string(logs.join("scalars.csv")).unwrap();
    // One row from rank 0, nothing from anyone else
    assert_eq!(scalars.lines().skip(1).count(), 1);
}
