//! Order identity and the per-order terminal report.

use crate::pipeline::PipelineError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Final status of one order's pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum TerminalState {
    /// Every stage ran and the "Finalizado" line was logged.
    Finished,
    /// The pipeline boundary caught an error.
    Errored(PipelineError),
}

/// What a pipeline hands back to the coordinator once it has settled.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderReport {
    pub order_id: OrderId,
    pub state: TerminalState,
}

impl OrderReport {
    pub fn finished(order_id: OrderId) -> Self {
        Self {
            order_id,
            state: TerminalState::Finished,
        }
    }

    pub fn errored(order_id: OrderId, error: PipelineError) -> Self {
        Self {
            order_id,
            state: TerminalState::Errored(error),
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, TerminalState::Finished)
    }
}

/// Returns the ids `1..=count`, the batch the binary processes.
pub fn order_ids(count: u32) -> Vec<OrderId> {
    (1..=count).map(OrderId).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_ids_are_one_based() {
        assert_eq!(order_ids(3), vec![OrderId(1), OrderId(2), OrderId(3)]);
        assert!(order_ids(0).is_empty());
    }

    #[test]
    fn test_display_is_bare_number() {
        assert_eq!(OrderId(7).to_string(), "7");
    }
}
