//! pipeline — the end-to-end publication/performance analysis.
//!
//! Purpose
//! -------
//! Tie the stage modules together behind one entry point,
//! [`run_pipeline`], and one result type, [`PipelineOutcome`]. The
//! stages remain individually usable; this module only fixes their
//! order and the data handoffs between them.
//!
//! Downstream usage
//! ----------------
//! - Typical imports:
//!
//!   ```rust
//!   use sector_causality::pipeline::{run_pipeline, PipelineOptions, PipelineError};
//!   ```

pub mod errors;
pub mod orchestrator;

pub use errors::{PipelineError, PipelineResult};
pub use orchestrator::{run_pipeline, PipelineOptions, PipelineOutcome, SeriesDiagnostics};
