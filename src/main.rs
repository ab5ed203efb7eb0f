use order_pipeline::config::PipelineConfig;
use order_pipeline::lifecycle::{setup_tracing, OrderSystem, SystemError};
use tracing::debug;

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    setup_tracing();

    let system = OrderSystem::new(PipelineConfig::default());

    let summary = system.run().await;
    debug!(
        finished = ?summary.finished(),
        errored = ?summary.errored(),
        first = ?summary.first_completed,
        "Batch summary"
    );

    system.shutdown().await
}
