//! Input validation for simulation workloads.
//!
//! Checks structural integrity of the process list before simulation.
//! Detects:
//! - Non-positive burst times
//! - Negative arrival times
//! - Duplicate process names
//!
//! Validation is fatal: the scheduler refuses to run on invalid input and
//! never returns partial results.

use crate::models::Process;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same name.
    DuplicateName,
    /// A burst time is zero or negative.
    NonPositiveBurst,
    /// An arrival time is negative.
    NegativeArrival,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a simulation workload.
///
/// Checks:
/// 1. Every burst time is strictly positive
/// 2. Every arrival time is non-negative
/// 3. No two processes share a name
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut names = HashSet::new();

    for p in processes {
        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    p.name, p.burst_time
                ),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.name, p.arrival_time
                ),
            ));
        }

        if !names.insert(p.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate process name: {}", p.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let processes = vec![
            Process::new("A", 0, 5),
            Process::new("B", 1, 3),
            Process::new("C", 2, 1),
        ];
        assert!(validate_input(&processes).is_ok());
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(validate_input(&[]).is_ok());
    }

    #[test]
    fn test_zero_burst() {
        let processes = vec![Process::new("A", 0, 0)];
        let errors = validate_input(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
    }

    #[test]
    fn test_negative_burst() {
        let processes = vec![Process::new("A", 0, -2)];
        let errors = validate_input(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
    }

    #[test]
    fn test_negative_arrival() {
        let processes = vec![Process::new("A", -1, 4)];
        let errors = validate_input(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrival));
    }

    #[test]
    fn test_duplicate_name() {
        let processes = vec![Process::new("A", 0, 4), Process::new("A", 1, 2)];
        let errors = validate_input(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateName));
    }

    #[test]
    fn test_multiple_errors() {
        // Zero burst + duplicate name, all reported in one pass
        let processes = vec![
            Process::new("A", 0, 0),
            Process::new("B", 2, 3),
            Process::new("B", -1, 1),
        ];
        let errors = validate_input(&processes).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
