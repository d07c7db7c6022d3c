//! Non-preemptive Shortest-Job-First scheduler loop.
//!
//! # Algorithm
//!
//! 1. Validate the workload; refuse to simulate invalid input.
//! 2. Sort a working view of the processes by arrival time (stable).
//! 3. Until every process has completed: among arrived pending processes,
//!    select the one with the smallest burst time (ties: earliest arrival,
//!    then scan order) and run it to completion; if none has arrived yet,
//!    idle for one tick and rescan.
//! 4. Aggregate the accumulated totals into summary statistics.
//!
//! # Complexity
//! O(n² + I·n) where n = processes, I = idle ticks.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Process, ProcessRecord, Timeline, TimelineEntry};
use crate::scheduler::{ProcessMetrics, Statistics};
use crate::validation::{validate_input, ValidationError};

/// How idle intervals are emitted into the timeline.
///
/// Unit ticks are the reference behavior: one entry per idle tick, visible
/// as separate rows in a Gantt rendering. Coalescing merges each idle span
/// into a single entry with identical boundaries; scheduling semantics and
/// all metrics are unaffected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdleEmission {
    /// One timeline entry per idle tick (default).
    #[default]
    UnitTicks,
    /// One timeline entry per contiguous idle span.
    Coalesced,
}

/// Simulation failure.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The workload failed validation; nothing was simulated.
    InvalidInput(Vec<ValidationError>),
    /// The loop reached a state its invariants forbid. Signals a defect in
    /// the scheduler itself, never a user error.
    InvariantViolation(String),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidInput(errors) => {
                write!(f, "invalid workload: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    f.write_str(&e.message)?;
                }
                Ok(())
            }
            SimulationError::InvariantViolation(msg) => {
                write!(f, "scheduler invariant violated: {msg}")
            }
        }
    }
}

impl std::error::Error for SimulationError {}

/// Complete output of one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Execution timeline covering `[0, total_elapsed)`.
    pub timeline: Timeline,
    /// One record per input process, sorted by name ascending.
    pub records: Vec<ProcessRecord>,
    /// Aggregate statistics.
    pub stats: Statistics,
}

/// Per-process scheduling state. Exactly one Pending → Completed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Pending,
    Completed,
}

/// Non-preemptive Shortest-Job-First scheduler.
///
/// Stateless across runs: each [`run`](SjfScheduler::run) owns its clock,
/// statuses, and accumulators, so concurrent invocations with different
/// inputs are safe.
///
/// # Example
///
/// ```
/// use sjf_sim::models::Process;
/// use sjf_sim::scheduler::SjfScheduler;
///
/// let processes = vec![Process::new("A", 0, 5), Process::new("B", 1, 3)];
/// let result = SjfScheduler::new().run(&processes).unwrap();
/// // A starts first and runs to completion; B cannot preempt it.
/// assert_eq!(result.timeline.entry_for("A").unwrap().end, 5);
/// assert_eq!(result.timeline.entry_for("B").unwrap().start, 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SjfScheduler {
    idle_emission: IdleEmission,
}

impl SjfScheduler {
    /// Creates a scheduler with unit-tick idle emission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the idle emission mode.
    pub fn with_idle_emission(mut self, mode: IdleEmission) -> Self {
        self.idle_emission = mode;
        self
    }

    /// Simulates the workload, producing the timeline, per-process records,
    /// and aggregate statistics.
    ///
    /// Validation failures are returned before any timeline construction;
    /// no partial result is ever produced.
    pub fn run(&self, processes: &[Process]) -> Result<SimulationResult, SimulationError> {
        validate_input(processes).map_err(SimulationError::InvalidInput)?;

        // Scan order: arrival ascending, input order on ties (stable sort).
        // This only makes the eligibility scan deterministic; the policy
        // itself is the burst-time selection below.
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&i| processes[i].arrival_time);

        let mut statuses = vec![Status::Pending; processes.len()];
        let mut timeline = Timeline::new();
        let mut records = Vec::with_capacity(processes.len());

        let mut clock: i64 = 0;
        let mut completed = 0;
        let mut idle_time: i64 = 0;
        let mut total_turnaround: i64 = 0;
        let mut total_waiting: i64 = 0;
        let mut total_response: i64 = 0;
        let mut open_idle_start: Option<i64> = None;

        while completed < processes.len() {
            match self.select_next(processes, &order, &statuses, clock) {
                None => {
                    if !statuses.contains(&Status::Pending) {
                        return Err(SimulationError::InvariantViolation(format!(
                            "no pending process at t={clock} with {completed}/{} completed",
                            processes.len()
                        )));
                    }
                    match self.idle_emission {
                        IdleEmission::UnitTicks => {
                            timeline.push(TimelineEntry::idle(clock, clock + 1));
                        }
                        IdleEmission::Coalesced => {
                            open_idle_start.get_or_insert(clock);
                        }
                    }
                    idle_time += 1;
                    clock += 1;
                }
                Some(idx) => {
                    if let Some(start) = open_idle_start.take() {
                        timeline.push(TimelineEntry::idle(start, clock));
                    }

                    let p = &processes[idx];
                    let metrics = ProcessMetrics::calculate(p, clock);
                    timeline.push(TimelineEntry::run(
                        p.name.clone(),
                        clock,
                        metrics.completion_time,
                    ));
                    records.push(ProcessRecord::from_metrics(p, &metrics));

                    total_turnaround += metrics.turnaround_time;
                    total_waiting += metrics.waiting_time;
                    total_response += metrics.response_time;
                    clock = metrics.completion_time;
                    statuses[idx] = Status::Completed;
                    completed += 1;
                }
            }
        }

        let stats = Statistics::aggregate(
            processes.len(),
            &timeline,
            idle_time,
            total_turnaround,
            total_waiting,
            total_response,
        );

        // Output ordering is by name, distinct from execution order.
        records.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(SimulationResult {
            timeline,
            records,
            stats,
        })
    }

    /// Selects the arrived pending process with the smallest burst time.
    ///
    /// Ties on burst time go to the earliest arrival; ties on both go to
    /// whichever comes first in scan order. Strict `<` comparisons keep the
    /// tie-break deterministic and stable across runs.
    fn select_next(
        &self,
        processes: &[Process],
        order: &[usize],
        statuses: &[Status],
        clock: i64,
    ) -> Option<usize> {
        let mut best: Option<usize> = None;

        for &i in order {
            if statuses[i] == Status::Completed || processes[i].arrival_time > clock {
                continue;
            }
            best = match best {
                None => Some(i),
                Some(b) => {
                    let (p, q) = (&processes[i], &processes[b]);
                    if p.burst_time < q.burst_time
                        || (p.burst_time == q.burst_time && p.arrival_time < q.arrival_time)
                    {
                        Some(i)
                    } else {
                        Some(b)
                    }
                }
            };
        }

        best
    }
}
