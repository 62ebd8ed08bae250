use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "headgen")]
#[command(about = "Generate a C/C++ forward-declaration header from function definitions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Source file to scan for function definitions
    #[arg(default_value = "helpers.cpp")]
    pub source: PathBuf,

    /// Header file to write (overwritten if it already exists)
    #[arg(short, long, default_value = "helpers.h")]
    pub output: PathBuf,
}
