//! Basic logger usage example
//!
//! Demonstrates console echo, the level threshold, and mixed message parts.
//!
//! Run with: cargo run --example basic_usage

use daylog::prelude::*;
use daylog::{debug, error, info, panic_log, warning};

fn main() -> Result<()> {
    println!("=== daylog - Basic Usage Example ===\n");

    let log_dir = std::env::temp_dir().join("daylog-basic");
    std::fs::create_dir_all(&log_dir)?;

    let logger = Logger::builder()
        .base_path(&log_dir)
        .name("basic")
        .console(true)
        .console_colors(true)
        .level(LogLevel::Panic)
        .build()?;

    println!("1. Logging at every level (threshold PNC admits all):");
    error!(logger, "This is an error message");
    warning!(logger, "This is a warning message");
    info!(logger, "This is an info message");
    debug!(logger, "This is a debug message");
    panic_log!(logger, "This is a panic message");
    logger.flush();

    println!("\n2. Default threshold INF hides DBG and PNC:");
    logger.set_level(LogLevel::Info);
    debug!(logger, "Debug message (hidden)");
    panic_log!(logger, "Panic message (hidden)");
    info!(logger, "Info message (visible)");
    warning!(logger, "Warning message (visible)");
    logger.flush();

    println!("\n3. Mixed message parts:");
    info!(logger, "received ", 4, " bytes: ", vec![0xde_u8, 0xad, 0xbe, 0xef]);
    let err = std::io::Error::new(std::io::ErrorKind::TimedOut, "upstream timed out");
    error!(logger, "request failed: ", ErrorPart::from_error(&err));

    logger.close();
    println!("\nLog files written to {}", log_dir.display());
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
