//! Tracker backed by the TensorBoard-style summary writer
//!
//! The adapter here is deliberately thin: it owns one [`SummaryWriter`],
//! forwards recording calls to it unchanged, and skips every side-effecting
//! operation on processes other than the main one. Failures are whatever the
//! writer raises; nothing is caught or wrapped at this layer.

use std::path::{Path, PathBuf};

use ndarray::ArrayView3;

use crate::error::Result;
use crate::process::ProcessContext;
use crate::summary::{SummaryOptions, SummaryWriter};
use crate::tracker::Tracker;

/// Tracker that records metrics through a [`SummaryWriter`]
///
/// Constructed on every process of a job; only the main process ever
/// creates the writer or touches the filesystem. On all other processes the
/// recording calls return `Ok(())` without doing anything.
pub struct TensorboardTracker {
    run_name: String,
    logging_dir: PathBuf,
    ctx: ProcessContext,
    writer: Option<SummaryWriter>,
}

impl TensorboardTracker {
    /// Identifying name of this backend
    pub const NAME: &'static str = "tensorboard";

    /// Create a tracker for `run_name`, logging under `logging_dir`
    ///
    /// `options` is forwarded verbatim to the summary writer; this adapter
    /// neither validates nor interprets any of it. On non-main processes no
    /// writer is created and the directory is left untouched.
    pub fn init(
        run_name: &str,
        logging_dir: impl AsRef<Path>,
        options: SummaryOptions,
        ctx: ProcessContext,
    ) -> Result<Self> {
        let logging_dir = logging_dir.as_ref().to_path_buf();

        let writer = if ctx.is_main_process() {
            Some(SummaryWriter::new(&logging_dir, &options)?)
        } else {
            None
        };

        Ok(TensorboardTracker {
            run_name: run_name.to_string(),
            logging_dir,
            ctx,
            writer,
        })
    }

    /// Descriptive label of this run
    pub fn run_name(&self) -> &str {
        &self.run_name
    }

    /// Directory the run logs under
    pub fn logging_dir(&self) -> &Path {
        &self.logging_dir
    }

    /// Mutable handle to the underlying writer, for operations not covered
    /// by the [`Tracker`] trait (histograms, explicit flushes)
    pub fn writer_mut(&mut self) -> Option<&mut SummaryWriter> {
        self.writer.as_mut()
    }
}

impl Tracker for TensorboardTracker {
    type Writer = SummaryWriter;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn requires_logging_directory(&self) -> bool {
        true
    }

    fn record_scalar(&mut self, tag: &str, value: f32, step: i64) -> Result<()> {
        if !self.ctx.is_main_process() {
            return Ok(());
        }
        if let Some(writer) = self.writer.as_mut() {
            writer.add_scalar(tag, value, step)?;
        }
        Ok(())
    }

    fn record_image(&mut self, tag: &str, img: ArrayView3<f32>, step: i64) -> Result<()> {
        if !self.ctx.is_main_process() {
            return Ok(());
        }
        if let Some(writer) = self.writer.as_mut() {
            writer.add_image(tag, img, step)?;
        }
        Ok(())
    }

    fn writer(&self) -> Option<&SummaryWriter> {
        self.writer.as_ref()
    }
}
