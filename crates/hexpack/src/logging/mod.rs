//! Logging setup for binaries built on the codec.
//!
//! Library code only uses the `log` facade. [`init_logging`] installs an
//! `env_logger` backend; `hexpack=debug` surfaces channel clamping in `pack`.

mod init;

pub use init::{init_logging, LoggingConfig};
