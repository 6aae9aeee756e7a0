//! uictl Core
//!
//! Foundation shared by the control layer and its backends: logging setup,
//! configuration, hashing collections, the generational slot arena that
//! backs the control tree, and profiling hooks.

pub mod alloc;
pub mod config;
pub mod logging;
pub mod profiling;

pub use config::{BugPolicy, Config, ProfilingMode};

/// Apply a [`Config`]: install the log subscriber and start profiling if requested.
pub fn init(config: &Config) {
    logging::init_with_filter(config.log_filter.as_deref());
    profiling::init_profiling(config.profiling);
}
