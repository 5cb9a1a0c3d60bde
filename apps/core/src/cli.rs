use clap::{Parser, ValueEnum};

/// Output format for diagnostic logs (always written to stderr).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per event
    Json,
    /// Bunyan-compatible JSON
    Bunyan,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "nexus", author, version, about = "Nexus campus assistant", long_about = None)]
pub struct Args {
    /// Name the assistant introduces itself with in the terminal
    #[arg(long, env = "NEXUS_ASSISTANT_NAME", default_value = "Nexus AI Assistant")]
    pub assistant_name: String,

    /// Lower bound of the simulated typing delay, in milliseconds
    #[arg(long, env = "NEXUS_TYPING_DELAY_MIN_MS", default_value = "800")]
    pub typing_delay_min_ms: u64,

    /// Upper bound of the simulated typing delay, in milliseconds
    #[arg(long, env = "NEXUS_TYPING_DELAY_MAX_MS", default_value = "2000")]
    pub typing_delay_max_ms: u64,

    /// Skip the simulated typing delay entirely
    #[arg(long, env = "NEXUS_NO_DELAY", default_value_t = false)]
    pub no_delay: bool,

    /// Log format (pretty, json, bunyan)
    #[arg(long, env = "NEXUS_LOG_FORMAT", value_enum, default_value = "pretty")]
    pub log_format: LogFormat,

    /// Disable ANSI styling of replies
    #[arg(long, default_value_t = false)]
    pub plain: bool,

    /// Answer a single utterance and exit
    #[arg(long, value_name = "TEXT")]
    pub once: Option<String>,

    /// With --once, print the classification as JSON
    #[arg(long, default_value_t = false, requires = "once")]
    pub json: bool,
}
