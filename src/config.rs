//! Pipeline configuration.
//!
//! The binary always runs with [`PipelineConfig::default`]; tests and embedders
//! shorten the time unit, pin the failure rate or fix the seed.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timing, failure rate and batch size for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Length of one simulated time unit (milliseconds).
    #[serde(default = "default_time_unit_ms")]
    pub time_unit_ms: u64,

    /// Time units spent validating an order.
    #[serde(default = "default_short_stage")]
    pub validation_units: u32,

    /// Time units spent processing a payment.
    #[serde(default = "default_payment_units")]
    pub payment_units: u32,

    /// Time units spent generating an invoice.
    #[serde(default = "default_short_stage")]
    pub invoice_units: u32,

    /// A payment is rejected with probability 1-in-`failure_one_in`.
    /// 0 disables rejections entirely, 1 rejects every payment.
    #[serde(default = "default_failure_one_in")]
    pub failure_one_in: u32,

    /// Seed for payment outcomes. `None` draws from the thread RNG.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Number of orders in the batch, numbered from 1.
    #[serde(default = "default_order_count")]
    pub order_count: u32,

    /// Capacity of the report actor's mailbox.
    #[serde(default = "default_report_buffer")]
    pub report_buffer: usize,
}

fn default_time_unit_ms() -> u64 {
    1000
}

fn default_short_stage() -> u32 {
    1
}

fn default_payment_units() -> u32 {
    2
}

fn default_failure_one_in() -> u32 {
    5
}

fn default_order_count() -> u32 {
    5
}

fn default_report_buffer() -> usize {
    64
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            time_unit_ms: default_time_unit_ms(),
            validation_units: default_short_stage(),
            payment_units: default_payment_units(),
            invoice_units: default_short_stage(),
            failure_one_in: default_failure_one_in(),
            seed: None,
            order_count: default_order_count(),
            report_buffer: default_report_buffer(),
        }
    }
}

impl PipelineConfig {
    /// Whole milliseconds of `unit`, saturating at `u64::MAX`.
    pub fn with_time_unit(mut self, unit: Duration) -> Self {
        self.time_unit_ms = u64::try_from(unit.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_failure_one_in(mut self, one_in: u32) -> Self {
        self.failure_one_in = one_in;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_order_count(mut self, count: u32) -> Self {
        self.order_count = count;
        self
    }

    pub fn time_unit(&self) -> Duration {
        Duration::from_millis(self.time_unit_ms)
    }

    pub fn validation_delay(&self) -> Duration {
        self.time_unit() * self.validation_units
    }

    pub fn payment_delay(&self) -> Duration {
        self.time_unit() * self.payment_units
    }

    pub fn invoice_delay(&self) -> Duration {
        self.time_unit() * self.invoice_units
    }
}
