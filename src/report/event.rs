//! Every line the program prints, as a typed value.

use std::fmt::Display;

use crate::model::OrderId;

/// One observable console line.
///
/// `Display` renders the exact text; per-order events are prefixed with
/// `Order <id>: `.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportEvent {
    /// Startup banner, logged once before any order begins.
    BatchStarted,
    OrderStarted(OrderId),
    Validated(OrderId),
    PaymentProcessed(OrderId),
    InvoiceGenerated(OrderId),
    /// Success line of an order.
    Finished(OrderId),
    /// Logged by the failure listener of the payment outcome.
    PaymentFailed { order_id: OrderId, reason: String },
    /// Logged by the cancellation listener, for payment or invoice.
    Cancelled(OrderId),
    /// Logged by the pipeline boundary for anything it caught.
    UnexpectedError { order_id: OrderId, reason: String },
    /// Milestone: at least one order reached a terminal state.
    FirstCompleted,
    /// Milestone: every order reached a terminal state.
    AllCompleted,
}

impl ReportEvent {
    pub fn order_id(&self) -> Option<OrderId> {
        match self {
            ReportEvent::OrderStarted(id)
            | ReportEvent::Validated(id)
            | ReportEvent::PaymentProcessed(id)
            | ReportEvent::InvoiceGenerated(id)
            | ReportEvent::Finished(id)
            | ReportEvent::Cancelled(id) => Some(*id),
            ReportEvent::PaymentFailed { order_id, .. }
            | ReportEvent::UnexpectedError { order_id, .. } => Some(*order_id),
            ReportEvent::BatchStarted | ReportEvent::FirstCompleted | ReportEvent::AllCompleted => {
                None
            }
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            ReportEvent::PaymentFailed { .. }
                | ReportEvent::Cancelled(_)
                | ReportEvent::UnexpectedError { .. }
        )
    }

    /// True for the line that closes an order's pipeline.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ReportEvent::Finished(_) | ReportEvent::UnexpectedError { .. }
        )
    }
}

impl Display for ReportEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportEvent::BatchStarted => write!(f, "Procesando pedidos..."),
            ReportEvent::OrderStarted(id) => write!(f, "Order {id}: Iniciando procesamiento..."),
            ReportEvent::Validated(id) => write!(f, "Order {id}: Validado."),
            ReportEvent::PaymentProcessed(id) => write!(f, "Order {id}: Pago procesado."),
            ReportEvent::InvoiceGenerated(id) => {
                write!(f, "Order {id}: Factura generada y pedido confirmado.")
            }
            ReportEvent::Finished(id) => write!(f, "Order {id}: Finalizado."),
            ReportEvent::PaymentFailed { order_id, reason } => {
                write!(f, "Order {order_id}: ERROR - {reason}")
            }
            ReportEvent::Cancelled(id) => write!(f, "Order {id}: ERROR - Tarea cancelada."),
            ReportEvent::UnexpectedError { order_id, reason } => {
                write!(f, "Order {order_id}: Error inesperado - {reason}")
            }
            ReportEvent::FirstCompleted => write!(f, "Al menos un pedido ha sido completado."),
            ReportEvent::AllCompleted => write!(f, "Todos los pedidos han sido procesados."),
        }
    }
}
