//! Simulation domain models.
//!
//! Provides the core data types for describing a scheduling workload and
//! its simulated outcome. All times are integer ticks relative to the
//! simulation epoch (t=0); the consumer defines what one tick means.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Input: one unit of work with arrival and burst time |
//! | `Timeline` | Output: contiguous partition of the simulated time axis |
//! | `ProcessRecord` | Output: per-process performance figures |

mod process;
mod record;
mod timeline;

pub use process::Process;
pub use record::ProcessRecord;
pub use timeline::{Timeline, TimelineEntry, TimelineLabel};
