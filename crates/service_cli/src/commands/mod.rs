//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! results to the given writer and log progress through `tracing`.

pub mod check;
pub mod draw;
pub mod list;
pub mod state;
