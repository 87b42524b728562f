//! Logging utilities.
//!
//! Centralizes logger initialization on top of the `log` facade with an
//! `env_logger` backend. Library code only ever calls `log::*!` macros.

mod init;

pub use env_logger::WriteStyle;
pub use init::{init_logging, LoggingConfig};

#[cfg(test)]
pub(crate) mod capture;
