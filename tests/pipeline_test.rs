use order_pipeline::config::PipelineConfig;
use order_pipeline::model::{OrderId, OrderReport};
use order_pipeline::pipeline::{OrderPipeline, PipelineContext, PipelineError};
use order_pipeline::report::{MemorySink, ReportActor, ReportEvent};
use order_pipeline::services::ScriptedPaymentService;
use tokio_util::sync::CancellationToken;

/// Runs a single pipeline against a real report actor and returns its lines.
async fn run_single(
    order_id: OrderId,
    configure: impl FnOnce(PipelineContext) -> PipelineContext,
) -> (OrderReport, Vec<ReportEvent>) {
    let sink = MemorySink::new();
    let (actor, reporter) = ReportActor::new(16, sink.clone());
    let actor_handle = tokio::spawn(actor.run());

    let config = PipelineConfig::default();
    let ctx = configure(PipelineContext::from_config(&config, reporter));
    let report = OrderPipeline::new(order_id, ctx).run().await;

    actor_handle.await.unwrap();
    (report, sink.events())
}

#[tokio::test(start_paused = true)]
async fn test_successful_order_sequence() {
    let id = OrderId(1);
    let (report, events) = run_single(id, |ctx| {
        ctx.with_payment(ScriptedPaymentService::new(PipelineConfig::default().payment_delay()))
    })
    .await;

    assert!(report.is_finished());
    assert_eq!(
        events,
        vec![
            ReportEvent::OrderStarted(id),
            ReportEvent::Validated(id),
            ReportEvent::PaymentProcessed(id),
            ReportEvent::InvoiceGenerated(id),
            ReportEvent::Finished(id),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_rejected_order_is_reported_twice() {
    let id = OrderId(3);
    let (report, events) = run_single(id, |ctx| {
        ctx.with_payment(
            ScriptedPaymentService::new(PipelineConfig::default().payment_delay()).reject(3),
        )
    })
    .await;

    assert_eq!(report, OrderReport::errored(id, PipelineError::PaymentRejected));
    assert_eq!(
        events,
        vec![
            ReportEvent::OrderStarted(id),
            ReportEvent::Validated(id),
            ReportEvent::PaymentFailed {
                order_id: id,
                reason: "Pago rechazado.".to_string(),
            },
            ReportEvent::UnexpectedError {
                order_id: id,
                reason: "Pago rechazado.".to_string(),
            },
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_before_start_runs_no_stage() {
    let id = OrderId(2);
    let (report, events) = run_single(id, |ctx| {
        ctx.cancel.cancel();
        ctx
    })
    .await;

    assert_eq!(report, OrderReport::errored(id, PipelineError::Cancelled));
    assert_eq!(
        events,
        vec![
            ReportEvent::OrderStarted(id),
            ReportEvent::Cancelled(id),
            ReportEvent::UnexpectedError {
                order_id: id,
                reason: "Tarea cancelada.".to_string(),
            },
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_during_invoice_reports_cancellation() {
    let id = OrderId(1);
    let unit = PipelineConfig::default().time_unit();
    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(unit * 5 / 2).await;
        trigger.cancel();
    });

    let (report, events) = run_single(id, |ctx| {
        ctx.with_payment(ScriptedPaymentService::new(PipelineConfig::default().payment_delay()))
            .with_cancellation(token)
    })
    .await;

    assert_eq!(report, OrderReport::errored(id, PipelineError::Cancelled));
    assert_eq!(
        events,
        vec![
            ReportEvent::OrderStarted(id),
            ReportEvent::Validated(id),
            ReportEvent::PaymentProcessed(id),
            ReportEvent::Cancelled(id),
            ReportEvent::UnexpectedError {
                order_id: id,
                reason: "Tarea cancelada.".to_string(),
            },
        ]
    );
}
