//! Dependencies injected into every pipeline.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::config::PipelineConfig;
use crate::report::ReportClient;
use crate::services::{
    InvoiceService, PaymentService, SimulatedInvoiceService, SimulatedPaymentService,
    SimulatedValidationService, ValidationService,
};

/// Everything a pipeline needs, cloned once per order and once per stage task.
///
/// The token is never cancelled by the binary; embedders that cancel it route
/// every unfinished order into the cancellation branch.
#[derive(Clone)]
pub struct PipelineContext {
    pub reporter: ReportClient,
    pub validation: Arc<dyn ValidationService>,
    pub payment: Arc<dyn PaymentService>,
    pub invoicing: Arc<dyn InvoiceService>,
    pub cancel: CancellationToken,
}

impl PipelineContext {
    /// Builds the simulated services described by `config`.
    pub fn from_config(config: &PipelineConfig, reporter: ReportClient) -> Self {
        Self {
            reporter,
            validation: Arc::new(SimulatedValidationService::new(config.validation_delay())),
            payment: Arc::new(SimulatedPaymentService::new(
                config.payment_delay(),
                config.failure_one_in,
                config.seed,
            )),
            invoicing: Arc::new(SimulatedInvoiceService::new(config.invoice_delay())),
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_validation(mut self, validation: impl ValidationService + 'static) -> Self {
        self.validation = Arc::new(validation);
        self
    }

    pub fn with_payment(mut self, payment: impl PaymentService + 'static) -> Self {
        self.payment = Arc::new(payment);
        self
    }

    pub fn with_invoicing(mut self, invoicing: impl InvoiceService + 'static) -> Self {
        self.invoicing = Arc::new(invoicing);
        self
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }
}
