//! Stable exit codes for showcase CLI commands.

/// Demo ran to completion.
pub const OK: i32 = 0;
/// Demo failed (date parse error, invalid config, or an output error).
pub const FAILED: i32 = 1;
