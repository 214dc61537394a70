//! Process-group context for distributed training jobs
//!
//! Trackers in this crate are instantiated identically on every process of a
//! distributed job, but only one process may write to the shared log
//! directory. This module carries the information needed to make that call:
//! which rank the current process holds within its cooperating group.
//!
//! The election itself happens elsewhere (a launcher, an MPI-style runtime,
//! an orchestrator); this crate only consumes the result. By convention the
//! main process is rank 0.

use crate::error::{Result, TensorbridgeError};

/// Identity of the current process within a cooperating group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessContext {
    rank: usize,
    world_size: usize,
}

impl ProcessContext {
    /// Create a context for a process holding `rank` in a group of
    /// `world_size` processes
    pub fn new(rank: usize, world_size: usize) -> Result<Self> {
        if world_size == 0 {
            return Err(TensorbridgeError::invalid_parameter(
                "world_size",
                "must be at least 1",
            ));
        }
        if rank >= world_size {
            return Err(TensorbridgeError::invalid_parameter(
                "rank",
                "must be less than world_size",
            ));
        }
        Ok(ProcessContext { rank, world_size })
    }

    /// Context for a single-process (non-distributed) job
    pub fn single() -> Self {
        ProcessContext {
            rank: 0,
            world_size: 1,
        }
    }

    /// Rank of this process within the group
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Total number of processes in the group
    pub fn world_size(&self) -> usize {
        self.world_size
    }

    /// Whether this process is the one elected to perform side-effecting
    /// logging I/O
    pub fn is_main_process(&self) -> bool {
        self.rank == 0
    }
}

impl Default for ProcessContext {
    fn default() -> Self {
        Self::single()
    }
}
