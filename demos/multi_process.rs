//! Simulates the per-rank view of a distributed job: every rank runs the
//! same tracker code against the same directory, but only rank 0 writes.

use tensorbridge::error::Result;
use tensorbridge::process::ProcessContext;
use tensorbridge::summary::SummaryOptions;
use tensorbridge::tracker::{TensorboardTracker, Tracker};

fn run_rank(rank: usize, world_size: usize) -> Result<()> {
    let ctx = ProcessContext::new(rank, world_size)?;
    let mut tracker = TensorboardTracker::init(
        "multi_process",
        "logs/multi_process",
        SummaryOptions::default(),
        ctx,
    )?;

    for step in 1..=5 {
        tracker.record_scalar("loss", 1.0 / step as f32, step)?;
    }

    match tracker.writer() {
        Some(writer) => println!(
            "rank {}: main process, wrote to {}",
            rank,
            writer.log_dir().display()
        ),
        None => println!("rank {}: non-main, all calls were no-ops", rank),
    }
    Ok(())
}

fn main() -> Result<()> {
    println!("=== Tensorbridge Multi-Process Demo ===\n");

    let world_size = 4;
    for rank in 0..world_size {
        run_rank(rank, world_size)?;
    }

    println!("\nOne log stream for the whole group: logs/multi_process/");
    Ok(())
}
