//! Logging utilities.
//!
//! Library code only talks to the `log` facade; binaries call
//! [`init_logging`] once to install `env_logger`.

mod init;

pub use init::{LoggingConfig, init_logging};
