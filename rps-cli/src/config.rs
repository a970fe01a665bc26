/// Env var that forces tab separated tables
pub const PLAIN_ENV: &str = "RPS_PLAIN";

#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub verbose: bool,
    /// Tab separated help table instead of a boxed one
    pub plain: bool,
    /// Print the finished round as JSON
    pub json: bool,
}

impl CliConfig {
    pub fn new(verbose: bool, plain: bool) -> Self {
        let plain_env = std::env::var(PLAIN_ENV)
            .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            verbose,
            plain: plain || plain_env,
            json: false,
        }
    }

    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
