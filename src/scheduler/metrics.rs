//! Per-process metric calculation.
//!
//! Pure arithmetic over a process and its start time; called exactly once
//! per process, at the moment the scheduler selects it to run.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use crate::models::Process;

/// Computed timing figures for one scheduled process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessMetrics {
    /// Tick at which the process finishes (start + burst).
    pub completion_time: i64,
    /// completion - arrival.
    pub turnaround_time: i64,
    /// turnaround - burst.
    pub waiting_time: i64,
    /// start - arrival.
    pub response_time: i64,
}

impl ProcessMetrics {
    /// Computes metrics for a process starting at `start_time`.
    ///
    /// Under a non-preemptive discipline response time equals waiting time,
    /// since a process runs uninterrupted from its first dispatch.
    pub fn calculate(process: &Process, start_time: i64) -> Self {
        let completion_time = start_time + process.burst_time;
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
            response_time: start_time - process.arrival_time,
        }
    }
}
