//! # System Lifecycle & Orchestration
//!
//! This module manages the runtime of one program run: starting the report
//! actor, running the batch, and shutting everything down once the last line
//! has been written.
//!
//! **Key Responsibilities:**
//! 1. **Batch coordination** - [`BatchCoordinator`] spawns every pipeline and
//!    logs the two milestones
//! 2. **Dependency Injection** - [`OrderSystem`] builds the shared
//!    [`PipelineContext`](crate::pipeline::PipelineContext)
//! 3. **Graceful Shutdown** - drop all report clients, then await the actor
//! 4. **Observability Setup** - [`setup_tracing`]
//!
//! ## Wait semantics
//!
//! The coordinator keeps every pipeline in a `JoinSet`. The first
//! `join_next` is the "first completed" race; draining the rest is the
//! "all completed" barrier. Both waits suspend the task, never a worker.
//!
//! ```rust,ignore
//! if let Some(first) = pipelines.join_next_with_id().await {
//!     // milestone: at least one order completed
//! }
//! while let Some(next) = pipelines.join_next_with_id().await {}
//! // milestone: all orders completed
//! ```

pub mod batch;
pub mod order_system;
pub mod tracing;

pub use self::tracing::*;
pub use batch::*;
pub use order_system::*;
