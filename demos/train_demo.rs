use ndarray::Array3;
use rand::Rng;
use std::thread::sleep;
use std::time::Duration;

use tensorbridge::error::Result;
use tensorbridge::process::ProcessContext;
use tensorbridge::summary::SummaryOptions;
use tensorbridge::tracker::{TensorboardTracker, Tracker};

fn main() -> Result<()> {
    println!("=== Tensorbridge Training Demo ===\n");

    // In a real job the launcher supplies the rank; a standalone demo is a
    // one-process group, so this rank is the main one.
    let ctx = ProcessContext::single();

    let mut tracker = TensorboardTracker::init(
        "test",
        "logs/",
        SummaryOptions::default(),
        ctx,
    )?;

    let mut rng = rand::thread_rng();

    // Dummy training loop
    println!("Logging dummy metrics for 10 steps...");
    for i in 0i64..10 {
        let step = i + 1;

        // Dummy loss curve
        tracker.record_scalar("loss", 10.0 / step as f32, step)?;

        // Dummy image
        let img = Array3::from_shape_fn((3, 256, 256), |_| rng.gen::<f32>());
        tracker.record_image("image", img.view(), step)?;

        // Pace the writes; the writer defines no backpressure of its own
        sleep(Duration::from_millis(100));
    }

    // Histograms are not part of the tracker surface, but the raw writer is
    // a method call away
    if let Some(writer) = tracker.writer_mut() {
        let weights = ndarray::Array1::from_shape_fn(128, |_| rng.gen::<f32>() - 0.5);
        writer.add_histogram("weights", weights.view(), 10)?;
        writer.flush()?;
    }

    println!("\n=== Logging Complete ===");
    println!("Logs saved to: logs/");
    println!("Files created:");
    println!("  - scalars.csv: Scalar metrics over time");
    println!("  - images.csv: Image shape and channel statistics");
    println!("  - histograms.csv: Value distributions");
    println!("  - options.json: Writer options applied to this run");

    Ok(())
}
