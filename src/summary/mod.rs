//! On-disk summary writer for training metrics
//!
//! This module provides the writer that actually serializes scalar, image and
//! histogram summaries to a log directory, in a plain CSV/JSON layout that is
//! easy to post-process or plot. Trackers in [`crate::tracker`] forward their
//! calls here; the writer itself knows nothing about processes or ranks.

use std::collections::HashMap;
use std::fs::{create_dir_all, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use ndarray::{ArrayView1, ArrayView3};
use serde::{Deserialize, Serialize};

/// Configuration applied when a [`SummaryWriter`] is constructed
///
/// Only the fields this writer recognizes are typed; anything else goes into
/// `extra` and is persisted verbatim alongside the logs. Callers layering a
/// tracker on top forward the whole record without inspecting it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryOptions {
    /// Number of appended rows between flushes of the summary files
    pub flush_every: usize,

    /// Suffix inserted into every summary file name, before the extension
    pub filename_suffix: String,

    /// Unrecognized key/value pairs, kept as-is
    #[serde(default)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        SummaryOptions {
            flush_every: 1,
            filename_suffix: String::new(),
            extra: HashMap::new(),
        }
    }
}

impl SummaryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flush summary files after every `n` appended rows
    pub fn flush_every(mut self, n: usize) -> Self {
        self.flush_every = n.max(1);
        self
    }

    /// Insert `suffix` into every summary file name
    pub fn filename_suffix(mut self, suffix: &str) -> Self {
        self.filename_suffix = suffix.to_string();
        self
    }

    /// Attach an arbitrary key/value pair to be persisted with the run
    pub fn extra(mut self, key: &str, value: serde_json::Value) -> Self {
        self.extra.insert(key.to_string(), value);
        self
    }
}

/// Writer for logging metrics to a run directory
pub struct SummaryWriter {
    log_dir: PathBuf,
    start_time: u64,
    flush_every: usize,
    rows_since_flush: usize,
    scalar_writer: BufWriter<File>,
    image_writer: BufWriter<File>,
    histogram_writer: BufWriter<File>,
}

impl SummaryWriter {
    /// Create a new summary writer bound to `log_dir`
    ///
    /// Creates the directory if needed, opens the summary files with their
    /// CSV headers, and records the applied options as JSON next to them.
    pub fn new(log_dir: impl AsRef<Path>, options: &SummaryOptions) -> io::Result<Self> {
        let log_dir = log_dir.as_ref().to_path_buf();
        create_dir_all(&log_dir)?;

        let start_time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        let suffix = &options.filename_suffix;
        let scalar_file = File::create(log_dir.join(format!("scalars{}.csv", suffix)))?;
        let image_file = File::create(log_dir.join(format!("images{}.csv", suffix)))?;
        let histogram_file = File::create(log_dir.join(format!("histograms{}.csv", suffix)))?;

        let mut scalar_writer = BufWriter::new(scalar_file);
        let mut image_writer = BufWriter::new(image_file);
        let mut histogram_writer = BufWriter::new(histogram_file);

        // Write headers, flushed so the files are well-formed from the start
        writeln!(scalar_writer, "step,tag,value,wall_time")?;
        writeln!(image_writer, "step,tag,channels,height,width,min,max,mean,wall_time")?;
        writeln!(histogram_writer, "step,tag,count,min,max,mean,std,wall_time")?;
        scalar_writer.flush()?;
        image_writer.flush()?;
        histogram_writer.flush()?;

        let options_json = serde_json::to_string_pretty(options)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        std::fs::write(log_dir.join(format!("options{}.json", suffix)), options_json)?;

        Ok(Self {
            log_dir,
            start_time,
            flush_every: options.flush_every.max(1),
            rows_since_flush: 0,
            scalar_writer,
            image_writer,
            histogram_writer,
        })
    }

    /// Directory this writer appends to
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Log a scalar value
    ///
    /// # Arguments
    /// * `tag` - Name of the metric
    /// * `value` - Value to log
    /// * `step` - Caller-supplied step the value belongs to
    pub fn add_scalar(&mut self, tag: &str, value: f32, step: i64) -> io::Result<()> {
        let wall_time = self.wall_time();
        writeln!(self.scalar_writer, "{},{},{},{}", step, tag, value, wall_time)?;
        self.row_appended()
    }

    /// Log an image tensor
    ///
    /// Expects channels x height x width. The pixel data itself is reduced
    /// to shape and channel statistics; no range or dtype checks are made.
    pub fn add_image(&mut self, tag: &str, img: ArrayView3<f32>, step: i64) -> io::Result<()> {
        let (channels, height, width) = img.dim();
        let min = img.iter().fold(f32::INFINITY, |a, &b| a.min(b));
        let max = img.iter().fold(f32::NEG_INFINITY, |a, &b| a.max(b));
        let mean = img.mean().unwrap_or(0.0);

        let wall_time = self.wall_time();
        writeln!(
            self.image_writer,
            "{},{},{},{},{},{},{},{},{}",
            step, tag, channels, height, width, min, max, mean, wall_time
        )?;
        self.row_appended()
    }

    /// Log a histogram of values
    pub fn add_histogram(&mut self, tag: &str, values: ArrayView1<f32>, step: i64) -> io::Result<()> {
        if values.is_empty() {
            return Ok(());
        }

        let count = values.len();
        let min = values.iter().fold(f32::INFINITY, |a, &b| a.min(b));
        let max = values.iter().fold(f32::NEG_INFINITY, |a, &b| a.max(b));
        let mean = values.mean().unwrap_or(0.0);

        let variance = values.iter().map(|&v| (v - mean).powi(2)).sum::<f32>() / count as f32;
        let std = variance.sqrt();

        let wall_time = self.wall_time();
        writeln!(
            self.histogram_writer,
            "{},{},{},{},{},{},{},{}",
            step, tag, count, min, max, mean, std, wall_time
        )?;
        self.row_appended()
    }

    /// Flush all summary files
    pub fn flush(&mut self) -> io::Result<()> {
        self.scalar_writer.flush()?;
        self.image_writer.flush()?;
        self.histogram_writer.flush()?;
        self.rows_since_flush = 0;
        Ok(())
    }

    fn row_appended(&mut self) -> io::Result<()> {
        self.rows_since_flush += 1;
        if self.rows_since_flush >= self.flush_every {
            self.flush()?;
        }
        Ok(())
    }

    /// Seconds since this writer was created
    fn wall_time(&self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        now.saturating_sub(self.start_time)
    }
}

impl Drop for SummaryWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
