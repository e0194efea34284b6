//! Simulation utilities and program loading.
//!
//! Provides the text program parser and file loader that fill memory before a run.

/// Program text parser and file loader.
pub mod loader;
