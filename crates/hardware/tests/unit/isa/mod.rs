//! # ISA Tests

/// Decoder tests.
pub mod decode;
