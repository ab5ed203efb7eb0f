//! Order validation service.

use async_trait::async_trait;
use std::time::Duration;

use crate::model::OrderId;
use crate::pipeline::PipelineError;

/// Checks that an order may proceed.
#[async_trait]
pub trait ValidationService: Send + Sync {
    async fn validate(&self, order_id: OrderId) -> Result<(), PipelineError>;
}

/// Accepts every order after a fixed delay.
#[derive(Debug, Clone)]
pub struct SimulatedValidationService {
    delay: Duration,
}

impl SimulatedValidationService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ValidationService for SimulatedValidationService {
    async fn validate(&self, _order_id: OrderId) -> Result<(), PipelineError> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
