// src/core/mod.rs

// Root of the `core` module: the scan → classify half of the pipeline.

/// Data structures shared across the pipeline: targets, scan outcomes,
/// classified results and the run summary.
pub mod models;

/// The invoker seam and the order-preserving fan-out over targets.
pub mod scanner;

/// The catalog of weak cipher/protocol markers and the line matcher.
pub mod knowledge_base;

/// Verdict and risk-tier assignment for raw scanner output.
pub mod classifier;

/// Reading the target list.
pub mod targets;
