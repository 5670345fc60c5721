//! Structured logging with file-based JSON output.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt JSON layer → RotatingFileWriter → docshelf-trace.json
//! ```
//!
//! # Features
//!
//! - **File Output**: Events written to `docshelf-trace.json` in the platform data directory
//! - **Automatic Rotation**: Files rotate at 10 MiB with 3-backup retention
//! - **Structured Fields**: Span context and event fields serialized as JSON
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` configuration option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
pub mod init;

pub use file_writer::RotatingFileWriter;
pub use init::{init_tracing, init_tracing_in, TRACE_FILE_NAME};
