//! Simulated external services behind the three pipeline stages.
//!
//! Each stage talks to a trait object so tests can swap in scripted behavior.

pub mod invoicing;
pub mod payment;
pub mod validation;

pub use invoicing::*;
pub use payment::*;
pub use validation::*;
