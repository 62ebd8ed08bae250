use crate::extraction::extract_signatures;
use crate::header::generate_header;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

/// Explicit inputs for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Source file to scan for function definitions.
    pub source: PathBuf,
    /// Header file to write, truncated if it already exists.
    pub output: PathBuf,
}

/// Read the source file, extract signatures, and write the header.
///
/// Zero extracted signatures is not an error; the header is still written
/// with an empty body. I/O failures propagate with the offending path
/// attached and abort the run.
pub fn handle_generate(config: GenerateConfig) -> Result<()> {
    let source_text = io::read_file(&config.source)?;
    log::debug!(
        "Read {} bytes from {}",
        source_text.len(),
        config.source.display()
    );

    let signatures = extract_signatures(&source_text);
    log::debug!("Extracted {} function signatures", signatures.len());

    let header = generate_header(&signatures);
    io::write_file(&config.output, &header)?;
    log::debug!(
        "Wrote {} bytes to {}",
        header.len(),
        config.output.display()
    );

    println!(
        "Header file '{}' generated successfully.",
        config.output.display()
    );

    Ok(())
}
