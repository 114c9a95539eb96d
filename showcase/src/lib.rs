//! Small, self-contained demonstrations of everyday Rust idioms.
//!
//! Each demo is independent and prints a fixed transcript to a caller
//! supplied writer:
//!
//! - **[`core`]**: The building blocks the demos exercise (self-returning
//!   handles, traits with default methods, function objects, lazy sequences).
//! - **[`demos`]**: One module per demo, wiring the building blocks to output.
//!
//! [`config`], [`logging`] and [`exit_codes`] back the `showcase` binary.

pub mod config;
pub mod core;
pub mod demos;
pub mod exit_codes;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
