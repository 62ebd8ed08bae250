//! Command implementations for headgen operations.
//!
//! The tool has a single command: scan one source file for function
//! definitions and emit the matching forward-declaration header. The
//! handler takes its input and output paths as explicit configuration so
//! the extraction and emission layers stay pure and testable.

pub mod generate;

pub use generate::{handle_generate, GenerateConfig};
