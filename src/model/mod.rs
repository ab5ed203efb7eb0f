//! Pure data structures shared by the pipeline, the coordinator and the reporter.

pub mod order;
pub mod outcome;

pub use order::*;
pub use outcome::*;
