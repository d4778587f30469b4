//! CLI configuration from flags and environment.

use clap::Parser;

use fibdigits_core::DEFAULT_MAX_INDEX;

/// Compare Fibonacci engines over digit-string bignums.
#[derive(Parser, Debug)]
#[command(name = "fibdigits", version, about)]
pub struct AppConfig {
    /// Fibonacci index to compute.
    #[arg(short, long, default_value = "100", env = "FIBDIGITS_K")]
    pub k: u64,

    /// Algorithm variant to run, or "all" to compare every one.
    #[arg(long, default_value = "fast-binary-clz", env = "FIBDIGITS_VARIANT")]
    pub variant: String,

    /// Ceiling on the accepted index.
    #[arg(long, default_value_t = DEFAULT_MAX_INDEX, env = "FIBDIGITS_MAX_K")]
    pub max_index: u64,

    /// Quiet mode (print only the digits).
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the full digit string regardless of length.
    #[arg(short, long)]
    pub verbose: bool,

    /// Write the resulting digits to a file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// List available variants and exit.
    #[arg(long)]
    pub list: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::parse_from(["fibdigits"]);
        assert_eq!(config.k, 100);
        assert_eq!(config.variant, "fast-binary-clz");
        assert_eq!(config.max_index, DEFAULT_MAX_INDEX);
        assert!(!config.quiet);
    }

    #[test]
    fn parse_flags() {
        let config = AppConfig::parse_from(["fibdigits", "-k", "500", "--variant", "all", "-q"]);
        assert_eq!(config.k, 500);
        assert_eq!(config.variant, "all");
        assert!(config.quiet);
    }
}
