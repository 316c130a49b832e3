//! Logging utilities.
//!
//! Conversion diagnostics (unsupported node or paint types, substituted
//! defaults) go through the `log` facade. This module only wires up the
//! `env_logger` backend for binaries; library users may install their own.

mod init;

pub use init::{init_logging, LoggingConfig};
