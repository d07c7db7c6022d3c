//! Non-preemptive Shortest-Job-First CPU scheduling simulation.
//!
//! Given a batch of processes with known arrival and burst times, computes
//! the exact execution timeline (including idle intervals), per-process
//! performance metrics (completion, turnaround, waiting, response), and
//! aggregate statistics (averages, CPU utilization).
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `Timeline`, `TimelineEntry`,
//!   `TimelineLabel`, `ProcessRecord`
//! - **`validation`**: Input integrity checks (duplicate names, non-positive
//!   bursts, negative arrivals)
//! - **`scheduler`**: The SJF scheduler loop, per-process metric calculation,
//!   and statistics aggregation
//!
//! # Example
//!
//! ```
//! use sjf_sim::models::Process;
//! use sjf_sim::scheduler::SjfScheduler;
//!
//! let processes = vec![
//!     Process::new("A", 0, 5),
//!     Process::new("B", 1, 3),
//!     Process::new("C", 2, 1),
//! ];
//! let result = SjfScheduler::new().run(&processes).unwrap();
//! assert_eq!(result.timeline.total_elapsed(), 9);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod models;
pub mod scheduler;
pub mod validation;
