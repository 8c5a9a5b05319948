//! Resolved runtime configuration for one invocation

use std::path::PathBuf;

use caja_client::ClientConfig;
use rust_decimal::Decimal;

use crate::cli::GlobalArgs;

/// Work directory name under `$HOME`
const WORK_DIR_NAME: &str = ".caja";

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub client: ClientConfig,
    /// Bearer token given explicitly; takes precedence over the stored session
    pub token: Option<String>,
    pub work_dir: PathBuf,
    pub tasa_igv: Decimal,
    pub stock_minimo: i32,
}

impl CliConfig {
    pub fn from_args(args: &GlobalArgs) -> Self {
        Self {
            client: ClientConfig::new(args.api_url.trim_end_matches('/'))
                .with_timeout(args.timeout),
            token: args.token.clone().filter(|t| !t.trim().is_empty()),
            work_dir: args.work_dir.clone().unwrap_or_else(default_work_dir),
            tasa_igv: args.tasa_igv,
            stock_minimo: args.stock_minimo,
        }
    }
}

/// `~/.caja`, or `./.caja` when there is no home directory
pub fn default_work_dir() -> PathBuf {
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(|h| PathBuf::from(h).join(WORK_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(WORK_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "caja",
            "--api-url",
            "http://pos.local:9000/",
            "--work-dir",
            "/tmp/caja-test",
            "--tasa-igv",
            "0.10",
            "--stock-minimo",
            "2",
            "--token",
            " ",
            "me",
        ])
        .unwrap();
        let config = CliConfig::from_args(&cli.global);
        assert_eq!(config.client.base_url, "http://pos.local:9000");
        assert_eq!(config.work_dir, PathBuf::from("/tmp/caja-test"));
        assert_eq!(config.tasa_igv, Decimal::new(10, 2));
        assert_eq!(config.stock_minimo, 2);
        assert!(config.token.is_none());
    }

    #[test]
    fn test_default_work_dir_name() {
        assert!(default_work_dir().ends_with(WORK_DIR_NAME));
    }
}
