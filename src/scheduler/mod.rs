//! The SJF scheduler loop and its metric collaborators.
//!
//! # Algorithm
//!
//! `SjfScheduler` runs the non-preemptive Shortest-Job-First discipline:
//! at every point in simulated time it selects, among arrived uncompleted
//! processes, the one with the smallest burst time, runs it to completion,
//! and advances the clock. Unit idle ticks cover gaps before the next
//! arrival.
//!
//! # Collaborators
//!
//! `ProcessMetrics` computes per-process completion/turnaround/waiting/
//! response times; `Statistics` aggregates the loop's running totals into
//! averages and CPU utilization.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2
//! - Smith (1956), "Various Optimizers for Single-Stage Production"

mod metrics;
mod sjf;
mod stats;

pub use metrics::ProcessMetrics;
pub use sjf::{IdleEmission, SimulationError, SimulationResult, SjfScheduler};
pub use stats::Statistics;
