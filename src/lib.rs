//! # Tensorbridge - Experiment Tracking for Distributed Training
//!
//! Tensorbridge connects a training loop's metric stream to TensorBoard-style
//! on-disk summaries, and makes that connection safe to set up identically on
//! every process of a distributed job: only the process elected "main" by the
//! surrounding coordination context ever writes, everywhere else the same
//! calls are silent no-ops.
//!
//! ## Key Features
//!
//! - **Branch-free call sites**: construct and record on every rank, the
//!   tracker handles the gating
//! - **Pass-through options**: writer configuration is forwarded verbatim,
//!   with an escape hatch for arbitrary key/value pairs
//! - **Raw writer access**: histograms and explicit flushes are reachable
//!   through the exposed writer handle
//! - **Plain on-disk layout**: CSV summaries plus a JSON options record,
//!   trivial to plot or post-process
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tensorbridge::process::ProcessContext;
//! use tensorbridge::summary::SummaryOptions;
//! use tensorbridge::tracker::{Tracker, TensorboardTracker};
//!
//! # fn main() -> tensorbridge::error::Result<()> {
//! let ctx = ProcessContext::single();
//! let mut tracker = TensorboardTracker::init(
//!     "test",
//!     "logs/",
//!     SummaryOptions::default(),
//!     ctx,
//! )?;
//!
//! tracker.record_scalar("loss", 10.0, 1)?;
//! tracker.record_scalar("loss", 5.0, 2)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`error`] - Error types and result handling
//! - [`process`] - Process-group context consumed for main-process gating
//! - [`summary`] - The on-disk summary writer and its options
//! - [`tracker`] - The tracker capability trait and the TensorBoard backend

pub mod error;
pub mod process;
pub mod summary;
pub mod tracker;

#[cfg(test)]
mod tests;
