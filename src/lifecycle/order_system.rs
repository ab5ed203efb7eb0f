use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::config::PipelineConfig;
use crate::lifecycle::{BatchCoordinator, BatchSummary};
use crate::model::{order_ids, OrderId};
use crate::pipeline::PipelineContext;
use crate::report::{EventSink, ReportActor, ReportClient, TracingSink};

/// Errors raised while tearing the system down.
#[derive(Debug, thiserror::Error)]
pub enum SystemError {
    #[error("Report actor failed: {0}")]
    ReporterFailed(String),
}

/// The runtime orchestrator for a batch of orders.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle Management**: Starting the report actor and stopping it once
///   every line has been written
/// - **Dependency Wiring**: Building the [`PipelineContext`] the coordinator
///   hands to each pipeline
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new(PipelineConfig::default());
/// let summary = system.run().await;
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    config: PipelineConfig,

    coordinator: BatchCoordinator,

    /// Kept so the actor outlives every batch until `shutdown`, and used to
    /// flush each batch.
    reporter: ReportClient,

    /// Task handle of the report actor (used for graceful shutdown)
    handle: JoinHandle<()>,
}

impl OrderSystem {
    /// Creates a system that prints to the console.
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_sink(config, TracingSink)
    }

    /// Creates a system whose report lines go to `sink`.
    pub fn with_sink(config: PipelineConfig, sink: impl EventSink) -> Self {
        let (report_actor, reporter) = ReportActor::new(config.report_buffer, sink);
        let handle = tokio::spawn(report_actor.run());

        let ctx = PipelineContext::from_config(&config, reporter.clone());

        Self {
            config,
            coordinator: BatchCoordinator::new(ctx),
            reporter,
            handle,
        }
    }

    /// Replaces services or the cancellation token before any batch runs.
    ///
    /// ```ignore
    /// let system = OrderSystem::with_sink(config, sink)
    ///     .with_context(|ctx| ctx.with_payment(ScriptedPaymentService::new(delay).reject(3)));
    /// ```
    pub fn with_context(mut self, f: impl FnOnce(PipelineContext) -> PipelineContext) -> Self {
        let ctx = self.coordinator.context_mut();
        *ctx = f(ctx.clone());
        self
    }

    /// Runs the configured batch, orders `1..=order_count`.
    pub async fn run(&self) -> BatchSummary {
        let ids = order_ids(self.config.order_count);
        self.run_batch(&ids).await
    }

    /// Runs `order_ids` and returns once every line of the batch is written.
    pub async fn run_batch(&self, order_ids: &[OrderId]) -> BatchSummary {
        let summary = self.coordinator.run_batch(order_ids).await;
        if let Err(e) = self.reporter.flush().await {
            warn!(error = %e, "Report lines of the batch may be incomplete");
        }
        summary
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping every client closes the report channel; the actor drains what
    /// is still queued and exits.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        let Self {
            coordinator,
            reporter,
            handle,
            ..
        } = self;

        drop(coordinator);
        drop(reporter);

        if let Err(e) = handle.await {
            error!("Report actor failed: {:?}", e);
            return Err(SystemError::ReporterFailed(e.to_string()));
        }

        debug!("System shutdown complete.");
        Ok(())
    }
}
