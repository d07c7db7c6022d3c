//! Process (workload unit) model.
//!
//! A process represents one unit of work requesting CPU time no earlier
//! than its arrival time, requiring exactly its burst time of uninterrupted
//! execution once started (non-preemptive discipline).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.1

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Immutable once constructed. Names must be unique within one simulation;
/// `arrival_time` must be non-negative and `burst_time` strictly positive —
/// both are enforced by [`crate::validation::validate_input`] rather than
/// by this constructor, so that all input problems can be reported at once.
///
/// # Time Representation
/// All times are integer ticks relative to the simulation epoch (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub name: String,
    /// Earliest tick at which this process may start (>= 0).
    pub arrival_time: i64,
    /// CPU ticks required once started (> 0).
    pub burst_time: i64,
}

impl Process {
    /// Creates a new process.
    pub fn new(name: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            name: name.into(),
            arrival_time,
            burst_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_new() {
        let p = Process::new("P1", 3, 7);
        assert_eq!(p.name, "P1");
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 7);
    }

    #[test]
    fn test_process_serde() {
        let p = Process::new("P1", 0, 4);
        let json = serde_json::to_string(&p).unwrap();
        let back: Process = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
