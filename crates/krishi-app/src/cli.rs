//! CLI argument definitions for the Krishi Sahayi application.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// Krishi Sahayi: a farming companion with chat, weather, prices, and
/// disease scanning.
#[derive(Parser, Debug)]
#[command(name = "krishi", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Skip the simulated reply latency (replies arrive immediately).
    #[arg(long = "instant")]
    pub instant: bool,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > KRISHI_CONFIG env var > platform default
    /// (~/.krishi/config.toml).
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("KRISHI_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".krishi").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".krishi").join("config.toml");
    }
    PathBuf::from("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args() {
        let args = CliArgs::try_parse_from(["krishi"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
        assert!(!args.instant);
    }

    #[test]
    fn test_parse_all_flags() {
        let args = CliArgs::try_parse_from([
            "krishi",
            "--config",
            "/tmp/krishi.toml",
            "--log-level",
            "debug",
            "--instant",
        ])
        .unwrap();
        assert_eq!(args.config.as_deref().unwrap().to_str(), Some("/tmp/krishi.toml"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.instant);
    }

    #[test]
    fn test_explicit_config_wins() {
        let args = CliArgs::try_parse_from(["krishi", "-c", "/etc/krishi.toml"]).unwrap();
        assert_eq!(
            args.resolve_config_path(),
            PathBuf::from("/etc/krishi.toml")
        );
    }

    #[test]
    fn test_log_level_falls_back_to_config() {
        let args = CliArgs::try_parse_from(["krishi"]).unwrap();
        assert_eq!(args.resolve_log_level("warn"), "warn");
    }

    #[test]
    fn test_log_level_flag_wins() {
        let args = CliArgs::try_parse_from(["krishi", "-l", "trace"]).unwrap();
        assert_eq!(args.resolve_log_level("warn"), "trace");
    }
}
