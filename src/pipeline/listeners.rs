//! Independent observers of the payment outcome.
//!
//! Both subscribe to the same published payment outcome. A rejected payment is
//! therefore reported here and again by the pipeline boundary.

use tokio::sync::watch;

use super::await_outcome;
use crate::model::{OrderId, StageOutcome};
use crate::report::{ReportClient, ReportEvent};

pub async fn report_failure(
    order_id: OrderId,
    reporter: ReportClient,
    mut outcome_rx: watch::Receiver<Option<StageOutcome>>,
) {
    if let Some(StageOutcome::Failed(e)) = await_outcome(&mut outcome_rx).await {
        reporter
            .report(ReportEvent::PaymentFailed {
                order_id,
                reason: e.to_string(),
            })
            .await;
    }
}

/// Reports a cancellation observed by the payment, or by the invoice that
/// followed a completed payment.
pub async fn report_cancellation(
    order_id: OrderId,
    reporter: ReportClient,
    mut payment_rx: watch::Receiver<Option<StageOutcome>>,
    mut invoice_rx: watch::Receiver<Option<StageOutcome>>,
) {
    let cancelled = match await_outcome(&mut payment_rx).await {
        Some(StageOutcome::Cancelled) => true,
        Some(StageOutcome::Completed) => {
            await_outcome(&mut invoice_rx).await == Some(StageOutcome::Cancelled)
        }
        _ => false,
    };

    if cancelled {
        reporter.report(ReportEvent::Cancelled(order_id)).await;
    }
}
