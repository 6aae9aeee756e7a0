/// Configuration for the control layer.
#[derive(Debug, Clone)]
pub struct Config {
    /// What happens when a user or implementation bug is detected.
    pub bug_policy: BugPolicy,
    pub profiling: ProfilingMode,
    /// `tracing_subscriber` filter directives. `RUST_LOG` overrides this.
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bug_policy: BugPolicy::Report,
            profiling: ProfilingMode::Off,
            log_filter: None,
        }
    }
}

impl Config {
    pub fn with_bug_policy(mut self, policy: BugPolicy) -> Self {
        self.bug_policy = policy;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }
}

/// Reaction to a detected programming error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BugPolicy {
    /// Log the diagnostic and hand the error back to the caller.
    #[default]
    Report,
    /// Log the diagnostic, then panic with it. This is how the native
    /// toolkits treat misuse of the control tree.
    Abort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfilingMode {
    /// Profiling scopes are disabled
    #[default]
    Off,
    /// Scopes are recorded in-process
    On,
    /// Scopes are recorded and served to `puffin_viewer` over HTTP
    WithWebserver,
}
