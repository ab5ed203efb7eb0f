//! # Order Pipeline
//!
//! One self-contained task per order. The pipeline owns every child task it
//! starts and awaits all of them before it reports its terminal state:
//!
//! ```text
//!            ┌─ validate ───────────────────────────────┐
//! start ─────┤                                          ├─ boundary ─ Finalizado
//!            └─ process_payment ─► outcome (watch) ─┬─ generate_invoice ─► outcome (watch)
//!                                                   ├─ report_failure              │
//!                                                   └─ report_cancellation ◄───────┘
//! ```
//!
//! The payment outcome is a tagged [`StageOutcome`] published on a
//! `tokio::sync::watch` channel; the invoice continuation and the two
//! listeners each match on it independently. The invoice publishes its own
//! outcome so a cancellation that lands after payment still reaches the
//! cancellation listener.

pub mod context;
pub mod error;
pub mod listeners;
pub mod stages;

pub use context::*;
pub use error::*;

use tokio::sync::watch;
use tracing::{debug, instrument, warn, Instrument};

use crate::model::{OrderId, OrderReport, StageOutcome};
use crate::report::ReportEvent;

pub struct OrderPipeline {
    order_id: OrderId,
    ctx: PipelineContext,
}

impl OrderPipeline {
    pub fn new(order_id: OrderId, ctx: PipelineContext) -> Self {
        Self { order_id, ctx }
    }

    /// Runs every stage and catches whatever escapes them.
    ///
    /// Never fails: the error, if any, is logged as an unexpected error and
    /// returned inside the report.
    #[instrument(name = "order", skip(self), fields(order_id = %self.order_id))]
    pub async fn run(self) -> OrderReport {
        let order_id = self.order_id;
        let reporter = self.ctx.reporter.clone();
        reporter.report(ReportEvent::OrderStarted(order_id)).await;

        match self.execute().await {
            Ok(()) => {
                reporter.report(ReportEvent::Finished(order_id)).await;
                OrderReport::finished(order_id)
            }
            Err(e) => {
                debug!(error = ?e, "Pipeline boundary caught error");
                reporter
                    .report(ReportEvent::UnexpectedError {
                        order_id,
                        reason: e.to_string(),
                    })
                    .await;
                OrderReport::errored(order_id, e)
            }
        }
    }

    async fn execute(&self) -> Result<(), PipelineError> {
        let id = self.order_id;
        let ctx = &self.ctx;
        let (outcome_tx, outcome_rx) = watch::channel(None);
        let (invoice_tx, invoice_rx) = watch::channel(None);

        let validation = tokio::spawn(stages::validate(id, ctx.clone()).in_current_span());
        let payment =
            tokio::spawn(stages::process_payment(id, ctx.clone(), outcome_tx).in_current_span());
        let invoice = tokio::spawn(
            stages::generate_invoice(id, ctx.clone(), outcome_rx.clone(), invoice_tx)
                .in_current_span(),
        );
        let on_failure = tokio::spawn(
            listeners::report_failure(id, ctx.reporter.clone(), outcome_rx.clone())
                .in_current_span(),
        );
        let on_cancel = tokio::spawn(
            listeners::report_cancellation(id, ctx.reporter.clone(), outcome_rx, invoice_rx)
                .in_current_span(),
        );

        let (validation, payment, invoice, on_failure, on_cancel) =
            tokio::join!(validation, payment, invoice, on_failure, on_cancel);

        if let Err(e) = on_failure.and(on_cancel) {
            warn!(error = %e, "Outcome listener aborted");
        }

        validation??;
        payment?.into_result()?;
        invoice??;
        Ok(())
    }
}

/// Waits until the payment outcome is published.
///
/// Returns `None` when the payment task ended without publishing one.
pub(crate) async fn await_outcome(
    outcome_rx: &mut watch::Receiver<Option<StageOutcome>>,
) -> Option<StageOutcome> {
    match outcome_rx.wait_for(Option::is_some).await {
        Ok(outcome) => (*outcome).clone(),
        Err(_) => None,
    }
}
