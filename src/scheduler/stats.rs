//! Aggregate simulation statistics.
//!
//! Computes summary figures from the totals the scheduler loop accumulated.
//! The totals are passed in explicitly rather than re-derived from the raw
//! records, so the aggregate can never drift from what the loop observed.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Turnaround | total_turnaround / count |
//! | Avg Waiting | total_waiting / count |
//! | Avg Response | total_response / count |
//! | CPU Utilization | (elapsed - idle) / elapsed |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::Timeline;

/// Summary statistics for one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Mean turnaround time (ticks).
    pub average_turnaround_time: f64,
    /// Mean waiting time (ticks).
    pub average_waiting_time: f64,
    /// Mean response time (ticks).
    pub average_response_time: f64,
    /// Fraction of elapsed time the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
}

impl Statistics {
    /// Aggregates the loop's running totals into summary statistics.
    ///
    /// Averages are defined as 0 when `process_count` is 0; utilization is
    /// 0 when the timeline is empty. The timeline contributes only its
    /// final clock value, never re-counted per-process totals.
    pub fn aggregate(
        process_count: usize,
        timeline: &Timeline,
        idle_time: i64,
        total_turnaround: i64,
        total_waiting: i64,
        total_response: i64,
    ) -> Self {
        let (average_turnaround_time, average_waiting_time, average_response_time) =
            if process_count == 0 {
                (0.0, 0.0, 0.0)
            } else {
                let n = process_count as f64;
                (
                    total_turnaround as f64 / n,
                    total_waiting as f64 / n,
                    total_response as f64 / n,
                )
            };

        let elapsed = timeline.total_elapsed();
        let cpu_utilization = if elapsed <= 0 {
            0.0
        } else {
            (elapsed - idle_time) as f64 / elapsed as f64
        };

        Self {
            average_turnaround_time,
            average_waiting_time,
            average_response_time,
            cpu_utilization,
        }
    }
}
