//! Invoice generation service.

use async_trait::async_trait;
use std::time::Duration;

use crate::model::OrderId;
use crate::pipeline::PipelineError;

/// Produces the invoice for a paid order.
#[async_trait]
pub trait InvoiceService: Send + Sync {
    async fn generate(&self, order_id: OrderId) -> Result<(), PipelineError>;
}

/// Always succeeds after a fixed delay.
#[derive(Debug, Clone)]
pub struct SimulatedInvoiceService {
    delay: Duration,
}

impl SimulatedInvoiceService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl InvoiceService for SimulatedInvoiceService {
    async fn generate(&self, _order_id: OrderId) -> Result<(), PipelineError> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
