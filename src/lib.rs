// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod extraction;
pub mod header;
pub mod io;

// Re-export commonly used items
pub use crate::commands::{handle_generate, GenerateConfig};
pub use crate::extraction::extract_signatures;
pub use crate::header::{generate_header, HEADER_GUARD};
