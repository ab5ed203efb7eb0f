use crate::pipeline::PipelineError;

/// How a stage ended.
///
/// The payment stage publishes one of these to every listener; the pipeline
/// then dispatches on it with a plain `match` instead of inspecting task status.
#[derive(Debug, Clone, PartialEq)]
pub enum StageOutcome {
    Completed,
    Failed(PipelineError),
    Cancelled,
}

impl StageOutcome {
    /// Converts the outcome into the error the pipeline boundary observes.
    pub fn into_result(self) -> Result<(), PipelineError> {
        match self {
            StageOutcome::Completed => Ok(()),
            StageOutcome::Failed(e) => Err(e),
            StageOutcome::Cancelled => Err(PipelineError::Cancelled),
        }
    }
}

impl From<Result<(), PipelineError>> for StageOutcome {
    fn from(result: Result<(), PipelineError>) -> Self {
        match result {
            Ok(()) => StageOutcome::Completed,
            Err(PipelineError::Cancelled) => StageOutcome::Cancelled,
            Err(e) => StageOutcome::Failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_error_maps_to_cancelled_outcome() {
        let outcome = StageOutcome::from(Err(PipelineError::Cancelled));
        assert_eq!(outcome, StageOutcome::Cancelled);
        assert_eq!(outcome.into_result(), Err(PipelineError::Cancelled));
    }

    #[test]
    fn test_rejection_survives_round_trip() {
        let outcome = StageOutcome::from(Err(PipelineError::PaymentRejected));
        assert_eq!(outcome.into_result(), Err(PipelineError::PaymentRejected));
    }
}
