//! Logging utilities.
//!
//! Centralizes logger initialization behind the standard `log` facade.
//! Shader and link diagnostics are emitted through this facade at their
//! failure sites so they are never silently swallowed.

mod init;

pub use init::{LoggingConfig, init_logging};
