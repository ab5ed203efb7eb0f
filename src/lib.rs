//! # Order Pipeline
//!
//! > **Concurrent order processing with explicit task composition.**
//!
//! This crate runs a batch of orders through three simulated stages
//! (validation, payment, invoicing) using Tokio tasks, branches on the payment
//! outcome, and reports partial failures on the console without ever letting
//! one order's failure reach another order or the batch.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Structured concurrency over fire-and-forget
//! Every task has an owner that awaits it. The coordinator owns the pipelines;
//! each pipeline owns its stage tasks and its outcome listeners. When a
//! pipeline reports its terminal state, nothing it started is still running.
//!
//! ### Tagged outcomes over task status
//! The payment stage returns a [`StageOutcome`](model::StageOutcome)
//! (`Completed`, `Failed`, `Cancelled`). Continuations `match` on it instead of
//! inspecting how a task ended.
//!
//! ### One writer for the console
//! All lines go through a single [`ReportActor`](report::ReportActor). Lines
//! from different orders interleave, but never tear.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Pipeline ([`pipeline`])
//! - **Role**: Per-order stage sequencing, payment outcome branching and the
//!   catch-all boundary.
//! - **Key items**: [`OrderPipeline`](pipeline::OrderPipeline),
//!   [`PipelineContext`](pipeline::PipelineContext),
//!   [`PipelineError`](pipeline::PipelineError).
//!
//! ### 2. The Orchestrator ([`lifecycle`])
//! - **Role**: Spawns the pipelines, logs the milestones, wires the report
//!   actor and shuts it down.
//! - **Key items**: [`BatchCoordinator`](lifecycle::BatchCoordinator),
//!   [`OrderSystem`](lifecycle::OrderSystem).
//!
//! ### 3. The Services ([`services`])
//! - **Role**: Simulated validation, payment and invoicing behind async traits.
//!
//! ### 4. The Reporter ([`report`])
//! - **Role**: Typed console lines and the sinks they are written to.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! cargo run
//! RUST_LOG=debug cargo run
//! cargo test
//! ```

pub mod config;
pub mod lifecycle;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod services;
