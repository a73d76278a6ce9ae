//! Environment-driven runtime configuration.
//!
//! The plugin itself is runtime-agnostic, but services built around it run on
//! `may` coroutines, whose stack size is worth tuning per deployment. The
//! `APIREF_STACK_SIZE` environment variable accepts decimal (`16384`) or
//! hexadecimal (`0x4000`) byte counts; the default is 16 KB.

use std::env;

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeConfig {
    /// Stack size for coroutines in bytes (default: 16 KB / 0x4000)
    pub stack_size: usize,
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let stack_size = match env::var("APIREF_STACK_SIZE") {
            Ok(val) => {
                if let Some(hex) = val.strip_prefix("0x") {
                    usize::from_str_radix(hex, 16).unwrap_or(0x4000)
                } else {
                    val.parse().unwrap_or(0x4000)
                }
            }
            Err(_) => 0x4000,
        };
        RuntimeConfig { stack_size }
    }
}
