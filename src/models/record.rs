//! Per-process performance record.

use serde::{Deserialize, Serialize};

use super::Process;
use crate::scheduler::ProcessMetrics;

/// Performance figures for one scheduled process.
///
/// Field relationships, for a process scheduled no earlier than its arrival:
///
/// - `completion_time = start_time + burst_time`
/// - `turnaround_time = completion_time - arrival_time` (>= burst_time)
/// - `waiting_time = turnaround_time - burst_time` (>= 0)
/// - `response_time = start_time - arrival_time` (>= 0)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Process identifier.
    pub name: String,
    /// Arrival time (tick).
    pub arrival_time: i64,
    /// Burst time (ticks).
    pub burst_time: i64,
    /// Tick at which the process finished.
    pub completion_time: i64,
    /// Total time in the system (completion - arrival).
    pub turnaround_time: i64,
    /// Time spent eligible but not running.
    pub waiting_time: i64,
    /// Time from arrival to first execution.
    pub response_time: i64,
}

impl ProcessRecord {
    /// Builds a record from a process and its computed metrics.
    pub fn from_metrics(process: &Process, metrics: &ProcessMetrics) -> Self {
        Self {
            name: process.name.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            completion_time: metrics.completion_time,
            turnaround_time: metrics.turnaround_time,
            waiting_time: metrics.waiting_time,
            response_time: metrics.response_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_metrics() {
        let p = Process::new("B", 1, 3);
        let m = ProcessMetrics::calculate(&p, 5);
        let r = ProcessRecord::from_metrics(&p, &m);

        assert_eq!(r.name, "B");
        assert_eq!(r.arrival_time, 1);
        assert_eq!(r.burst_time, 3);
        assert_eq!(r.completion_time, 8);
        assert_eq!(r.turnaround_time, 7);
        assert_eq!(r.waiting_time, 4);
        assert_eq!(r.response_time, 4);
    }
}
