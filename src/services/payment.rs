//! Payment service trait and simulated implementations.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::model::OrderId;
use crate::pipeline::PipelineError;

/// Charges an order. Rejection is reported as [`PipelineError::PaymentRejected`].
#[async_trait]
pub trait PaymentService: Send + Sync {
    async fn charge(&self, order_id: OrderId) -> Result<(), PipelineError>;
}

/// Rejects payments at random with a 1-in-N chance.
///
/// With a seed, every order draws from its own `StdRng` derived from the seed
/// and the order id, so the outcome of an order does not depend on which
/// pipeline reaches the payment first.
#[derive(Debug, Clone)]
pub struct SimulatedPaymentService {
    delay: Duration,
    failure_one_in: u32,
    seed: Option<u64>,
}

impl SimulatedPaymentService {
    pub fn new(delay: Duration, failure_one_in: u32, seed: Option<u64>) -> Self {
        Self {
            delay,
            failure_one_in,
            seed,
        }
    }

    /// Decides the outcome for one order without waiting.
    pub fn is_rejected(&self, order_id: OrderId) -> bool {
        match self.failure_one_in {
            0 => false,
            n => match self.seed {
                Some(seed) => order_rng(seed, order_id).gen_ratio(1, n),
                None => rand::thread_rng().gen_ratio(1, n),
            },
        }
    }
}

fn order_rng(seed: u64, order_id: OrderId) -> StdRng {
    StdRng::seed_from_u64(seed ^ u64::from(order_id.0).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

#[async_trait]
impl PaymentService for SimulatedPaymentService {
    async fn charge(&self, order_id: OrderId) -> Result<(), PipelineError> {
        tokio::time::sleep(self.delay).await;

        if self.is_rejected(order_id) {
            debug!(order_id = %order_id, "Payment declined");
            return Err(PipelineError::PaymentRejected);
        }
        Ok(())
    }
}

/// Rejects exactly the orders it was told to reject.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPaymentService {
    delay: Duration,
    rejected: HashSet<OrderId>,
}

impl ScriptedPaymentService {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            rejected: HashSet::new(),
        }
    }

    pub fn reject(mut self, order_id: u32) -> Self {
        self.rejected.insert(OrderId(order_id));
        self
    }
}

#[async_trait]
impl PaymentService for ScriptedPaymentService {
    async fn charge(&self, order_id: OrderId) -> Result<(), PipelineError> {
        tokio::time::sleep(self.delay).await;

        if self.rejected.contains(&order_id) {
            return Err(PipelineError::PaymentRejected);
        }
        Ok(())
    }
}
