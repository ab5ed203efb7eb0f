//! Error types for the order pipeline.

use thiserror::Error;

/// Errors that can end an order's pipeline.
///
/// None of these ever leave the pipeline: the boundary in
/// [`OrderPipeline::run`](crate::pipeline::OrderPipeline::run) logs them and
/// turns them into an [`OrderReport`](crate::model::OrderReport).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PipelineError {
    /// The payment service declined the charge.
    #[error("Pago rechazado.")]
    PaymentRejected,

    /// A cancellation signal was observed before the stage completed.
    #[error("Tarea cancelada.")]
    Cancelled,

    /// The validator refused the order.
    #[error("Validación fallida: {0}")]
    ValidationFailed(String),

    /// The invoice could not be produced.
    #[error("Factura fallida: {0}")]
    InvoiceFailed(String),

    /// A stage task aborted instead of returning.
    #[error("{0}")]
    Unexpected(String),
}

impl From<tokio::task::JoinError> for PipelineError {
    fn from(e: tokio::task::JoinError) -> Self {
        PipelineError::Unexpected(e.to_string())
    }
}
