use std::collections::HashMap;

use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::model::{OrderId, OrderReport};
use crate::pipeline::{OrderPipeline, PipelineContext, PipelineError};
use crate::report::ReportEvent;

/// Results of one batch, in completion order.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub reports: Vec<OrderReport>,
    /// The order whose pipeline settled first, if any order ran at all.
    pub first_completed: Option<OrderId>,
}

impl BatchSummary {
    /// Ids of orders that logged "Finalizado", sorted.
    pub fn finished(&self) -> Vec<OrderId> {
        self.collect(true)
    }

    /// Ids of orders that ended in an error, sorted.
    pub fn errored(&self) -> Vec<OrderId> {
        self.collect(false)
    }

    fn collect(&self, finished: bool) -> Vec<OrderId> {
        let mut ids: Vec<OrderId> = self
            .reports
            .iter()
            .filter(|r| r.is_finished() == finished)
            .map(|r| r.order_id)
            .collect();
        ids.sort();
        ids
    }
}

/// Launches one pipeline per order and waits on them as a group.
///
/// There is no bound on parallelism: every pipeline is spawned up front.
pub struct BatchCoordinator {
    ctx: PipelineContext,
}

impl BatchCoordinator {
    pub fn new(ctx: PipelineContext) -> Self {
        Self { ctx }
    }

    pub(crate) fn context_mut(&mut self) -> &mut PipelineContext {
        &mut self.ctx
    }

    /// Runs the batch to completion. Never fails.
    ///
    /// Logs the "first completed" milestone after the first pipeline settles
    /// and the "all completed" milestone after the last. An empty batch has no
    /// first completion and only logs the latter.
    pub async fn run_batch(&self, order_ids: &[OrderId]) -> BatchSummary {
        let reporter = &self.ctx.reporter;
        reporter.report(ReportEvent::BatchStarted).await;
        debug!(orders = order_ids.len(), "Batch started");

        let mut pipelines = JoinSet::new();
        let mut task_orders = HashMap::with_capacity(order_ids.len());
        for &order_id in order_ids {
            let pipeline = OrderPipeline::new(order_id, self.ctx.clone());
            let handle = pipelines.spawn(pipeline.run());
            task_orders.insert(handle.id(), order_id);
        }

        let mut summary = BatchSummary::default();

        if let Some(joined) = pipelines.join_next_with_id().await {
            let report = self.settle(joined, &task_orders).await;
            summary.first_completed = Some(report.order_id);
            summary.reports.push(report);
            reporter.report(ReportEvent::FirstCompleted).await;
        }

        while let Some(joined) = pipelines.join_next_with_id().await {
            let report = self.settle(joined, &task_orders).await;
            summary.reports.push(report);
        }

        reporter.report(ReportEvent::AllCompleted).await;
        debug!(
            finished = summary.finished().len(),
            errored = summary.errored().len(),
            "Batch completed"
        );
        summary
    }

    /// Turns a joined pipeline task into a report, absorbing task failures.
    async fn settle(
        &self,
        joined: Result<(tokio::task::Id, OrderReport), tokio::task::JoinError>,
        task_orders: &HashMap<tokio::task::Id, OrderId>,
    ) -> OrderReport {
        match joined {
            Ok((_, report)) => report,
            Err(e) => {
                let order_id = task_orders.get(&e.id()).copied().unwrap_or_default();
                warn!(order_id = %order_id, error = %e, "Pipeline task aborted");
                let error = PipelineError::from(e);
                self.ctx
                    .reporter
                    .report(ReportEvent::UnexpectedError {
                        order_id,
                        reason: error.to_string(),
                    })
                    .await;
                OrderReport::errored(order_id, error)
            }
        }
    }
}
