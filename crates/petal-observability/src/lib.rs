//! Observability for Petal.
//!
//! This crate provides:
//! - `init_logging` - `tracing` subscriber setup from `LoggingConfig`
//! - `RenderMetrics` - per-mount render pass counters and timings

mod logging;
mod metrics;

pub use logging::*;
pub use metrics::*;
