//! The three stages of an order.
//!
//! Each stage races its service call against the cancellation token, so a
//! cancelled order never schedules further work.

use tokio::sync::watch;

use super::{await_outcome, PipelineContext, PipelineError};
use crate::model::{OrderId, StageOutcome};
use crate::report::ReportEvent;

pub async fn validate(order_id: OrderId, ctx: PipelineContext) -> Result<(), PipelineError> {
    tokio::select! {
        biased;
        _ = ctx.cancel.cancelled() => Err(PipelineError::Cancelled),
        result = ctx.validation.validate(order_id) => {
            result?;
            ctx.reporter.report(ReportEvent::Validated(order_id)).await;
            Ok(())
        }
    }
}

/// Charges the order and publishes the outcome to every listener.
///
/// The success line is reported before the outcome is published, so nothing
/// downstream of a successful payment can be logged ahead of it.
pub async fn process_payment(
    order_id: OrderId,
    ctx: PipelineContext,
    outcome_tx: watch::Sender<Option<StageOutcome>>,
) -> StageOutcome {
    let outcome = tokio::select! {
        biased;
        _ = ctx.cancel.cancelled() => StageOutcome::Cancelled,
        result = ctx.payment.charge(order_id) => StageOutcome::from(result),
    };

    if outcome == StageOutcome::Completed {
        ctx.reporter.report(ReportEvent::PaymentProcessed(order_id)).await;
    }
    outcome_tx.send_replace(Some(outcome.clone()));
    outcome
}

/// Continuation of the payment: invoices only a completed payment.
///
/// Publishes its own outcome when it runs; a skipped invoice publishes nothing.
pub async fn generate_invoice(
    order_id: OrderId,
    ctx: PipelineContext,
    mut payment_rx: watch::Receiver<Option<StageOutcome>>,
    invoice_tx: watch::Sender<Option<StageOutcome>>,
) -> Result<(), PipelineError> {
    if await_outcome(&mut payment_rx).await != Some(StageOutcome::Completed) {
        return Ok(());
    }

    let result = tokio::select! {
        biased;
        _ = ctx.cancel.cancelled() => Err(PipelineError::Cancelled),
        result = ctx.invoicing.generate(order_id) => result,
    };

    if result.is_ok() {
        ctx.reporter.report(ReportEvent::InvoiceGenerated(order_id)).await;
    }
    invoice_tx.send_replace(Some(StageOutcome::from(result.clone())));
    result
}
