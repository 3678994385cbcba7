//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Random short code generation over a configured alphabet

pub mod code_generator;
