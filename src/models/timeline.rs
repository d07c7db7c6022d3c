//! Execution timeline (Gantt chart) model.
//!
//! A timeline is an append-only sequence of entries forming a contiguous,
//! non-overlapping, strictly increasing partition of `[0, total_elapsed)`.
//! Under a non-preemptive discipline each process occupies exactly one
//! entry; idle intervals carry the `Idle` label.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of a timeline entry: a running process or the idle CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimelineLabel {
    /// The named process was running.
    Process(String),
    /// No eligible process existed; the CPU performed no work.
    Idle,
}

impl TimelineLabel {
    /// The process name, or `None` for idle entries.
    pub fn process_name(&self) -> Option<&str> {
        match self {
            TimelineLabel::Process(name) => Some(name),
            TimelineLabel::Idle => None,
        }
    }
}

impl fmt::Display for TimelineLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimelineLabel::Process(name) => f.write_str(name),
            TimelineLabel::Idle => f.write_str("Idle"),
        }
    }
}

/// One half-open interval `[start, end)` of the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// What occupied the CPU during this interval.
    pub label: TimelineLabel,
    /// Interval start (tick, inclusive).
    pub start: i64,
    /// Interval end (tick, exclusive). Invariant: `start < end`.
    pub end: i64,
}

impl TimelineEntry {
    /// Creates an entry for a running process.
    pub fn run(name: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            label: TimelineLabel::Process(name.into()),
            start,
            end,
        }
    }

    /// Creates an idle entry.
    pub fn idle(start: i64, end: i64) -> Self {
        Self {
            label: TimelineLabel::Idle,
            start,
            end,
        }
    }

    /// Interval length (end - start) in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether this entry is an idle interval.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.label == TimelineLabel::Idle
    }
}

/// A complete execution timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: TimelineEntry) {
        self.entries.push(entry);
    }

    /// All entries in time order.
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// End of the last entry, or 0 for an empty timeline.
    pub fn total_elapsed(&self) -> i64 {
        self.entries.last().map(|e| e.end).unwrap_or(0)
    }

    /// Total ticks spent idle.
    pub fn idle_ticks(&self) -> i64 {
        self.entries
            .iter()
            .filter(|e| e.is_idle())
            .map(|e| e.duration())
            .sum()
    }

    /// Finds the entry for a given process.
    pub fn entry_for(&self, name: &str) -> Option<&TimelineEntry> {
        self.entries
            .iter()
            .find(|e| e.label.process_name() == Some(name))
    }

    /// Whether entries partition `[0, total_elapsed)` with no gap or overlap.
    pub fn is_contiguous(&self) -> bool {
        let mut clock = 0;
        for e in &self.entries {
            if e.start != clock || e.end <= e.start {
                return false;
            }
            clock = e.end;
        }
        true
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the timeline has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.push(TimelineEntry::idle(0, 1));
        t.push(TimelineEntry::idle(1, 2));
        t.push(TimelineEntry::run("A", 2, 5));
        t.push(TimelineEntry::run("B", 5, 9));
        t
    }

    #[test]
    fn test_total_elapsed() {
        assert_eq!(sample_timeline().total_elapsed(), 9);
        assert_eq!(Timeline::new().total_elapsed(), 0);
    }

    #[test]
    fn test_idle_ticks() {
        assert_eq!(sample_timeline().idle_ticks(), 2);
    }

    #[test]
    fn test_entry_for() {
        let t = sample_timeline();
        let a = t.entry_for("A").unwrap();
        assert_eq!((a.start, a.end), (2, 5));
        assert!(t.entry_for("Z").is_none());
    }

    #[test]
    fn test_is_contiguous() {
        assert!(sample_timeline().is_contiguous());
        assert!(Timeline::new().is_contiguous());

        let mut gap = Timeline::new();
        gap.push(TimelineEntry::run("A", 0, 2));
        gap.push(TimelineEntry::run("B", 3, 4));
        assert!(!gap.is_contiguous());

        let mut overlap = Timeline::new();
        overlap.push(TimelineEntry::run("A", 0, 3));
        overlap.push(TimelineEntry::run("B", 2, 4));
        assert!(!overlap.is_contiguous());
    }

    #[test]
    fn test_label_display() {
        assert_eq!(TimelineLabel::Idle.to_string(), "Idle");
        assert_eq!(TimelineLabel::Process("P7".into()).to_string(), "P7");
    }

    #[test]
    fn test_entry_duration() {
        let e = TimelineEntry::run("A", 2, 5);
        assert_eq!(e.duration(), 3);
        assert!(!e.is_idle());
        assert!(TimelineEntry::idle(0, 1).is_idle());
    }
}
