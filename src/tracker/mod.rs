//! Experiment trackers for training loops
//!
//! A tracker is the object a training loop hands its metrics to. The
//! [`Tracker`] trait is the capability set a training loop can rely on; the
//! concrete implementations live in submodules. Currently one backend is
//! provided: [`TensorboardTracker`], which forwards to a
//! [`crate::summary::SummaryWriter`].
//!
//! Trackers are constructed identically on every process of a distributed
//! job. Each implementation is responsible for making its mutating
//! operations a silent no-op off the main process, so call sites stay
//! branch-free.

pub mod tensorboard;

pub use tensorboard::TensorboardTracker;

use ndarray::ArrayView3;

use crate::error::Result;

/// Capability set a training loop expects from an experiment tracker
///
/// This is a structural contract: implementations are not related by any
/// base type, they just provide these operations.
pub trait Tracker {
    /// Handle to whatever this tracker writes through, for callers needing
    /// operations the trait does not cover
    type Writer;

    /// Fixed identifying name of this tracker backend
    fn name(&self) -> &'static str;

    /// Whether construction needs a logging directory argument
    fn requires_logging_directory(&self) -> bool;

    /// Record a scalar sample under `tag` at `step`
    fn record_scalar(&mut self, tag: &str, value: f32, step: i64) -> Result<()>;

    /// Record an image (channels x height x width) under `tag` at `step`
    fn record_image(&mut self, tag: &str, img: ArrayView3<f32>, step: i64) -> Result<()>;

    /// The raw underlying writer, `None` on processes that do not log
    fn writer(&self) -> Option<&Self::Writer>;
}
