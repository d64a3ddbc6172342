//! Error types for carpoolshare.

use thiserror::Error;

use crate::core::types::ParticipantId;

/// Result type alias for carpoolshare operations.
pub type Result<T> = std::result::Result<T, ShareError>;

/// Error types for the allocation engine and the trip planner.
#[derive(Error, Debug)]
pub enum ShareError {
    /// Road-trip input that would divide by zero or produce a non-finite cost.
    #[error("Degenerate road-trip input: {context}")]
    DegenerateModeInput { context: String },

    /// No participants were supplied.
    #[error("Empty participant set")]
    EmptyParticipantSet,

    /// Participation sequence length differs from the period count.
    #[error("Participant {id} has {actual} periods, expected {expected}")]
    LengthMismatch { id: ParticipantId, expected: usize, actual: usize },

    /// Two participants share the same id.
    #[error("Duplicate participant id {id}")]
    DuplicateParticipant { id: ParticipantId },

    /// Invalid parameter value.
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// No participant with this id.
    #[error("Unknown participant {id}")]
    UnknownParticipant { id: ParticipantId },

    /// Period index outside `0..periods`.
    #[error("Period {period} out of range for {periods} periods")]
    PeriodOutOfRange { period: usize, periods: usize },

    /// The roster must keep at least one participant.
    #[error("Cannot remove the last remaining participant")]
    LastParticipant,

    /// Snapshot could not be encoded or decoded.
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

impl ShareError {
    /// Create a degenerate input error.
    pub fn degenerate(context: impl Into<String>) -> Self {
        Self::DegenerateModeInput {
            context: context.into(),
        }
    }

    /// Create a length mismatch error.
    pub fn length_mismatch(id: ParticipantId, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { id, expected, actual }
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create an unknown participant error.
    pub fn unknown_participant(id: ParticipantId) -> Self {
        Self::UnknownParticipant { id }
    }

    /// Create a period out of range error.
    pub fn period_out_of_range(period: usize, periods: usize) -> Self {
        Self::PeriodOutOfRange { period, periods }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ShareError::length_mismatch(3, 5, 4);
        assert_eq!(err.to_string(), "Participant 3 has 4 periods, expected 5");

        let err = ShareError::degenerate("fuel efficiency is zero");
        assert_eq!(err.to_string(), "Degenerate road-trip input: fuel efficiency is zero");

        let err = ShareError::period_out_of_range(7, 5);
        assert!(err.to_string().contains("Period 7"));
    }

    #[test]
    fn test_snapshot_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: ShareError = json_err.into();
        assert!(matches!(err, ShareError::Snapshot(_)));
    }
}
