// (c) Cartesi and individual authors (see AUTHORS)
// SPDX-License-Identifier: Apache-2.0 (see LICENSE)

use clap::Parser;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

// Logging flags, flattened into each command line interface
#[derive(Clone, Debug, Parser)]
pub struct LogsEnvCliConfig {
    #[arg(long, env, default_value = "false")]
    pub logs_enable_timestamp: bool,

    #[arg(long, env, default_value = "false")]
    pub logs_enable_color: bool,
}

#[derive(Clone, Debug)]
pub struct LogsConfig {
    pub enable_timestamp: bool,
    pub enable_color: bool,
    /// Level used when `RUST_LOG` is not set
    pub default_level: LevelFilter,
}

impl LogsConfig {
    pub fn initialize(env_cli_config: LogsEnvCliConfig) -> Self {
        LogsConfig {
            enable_timestamp: env_cli_config.logs_enable_timestamp,
            enable_color: env_cli_config.logs_enable_color,
            default_level: LevelFilter::WARN,
        }
    }

    pub fn with_default_level(mut self, level: LevelFilter) -> Self {
        self.default_level = level;
        self
    }
}

impl From<LogsEnvCliConfig> for LogsConfig {
    fn from(env_cli_config: LogsEnvCliConfig) -> Self {
        Self::initialize(env_cli_config)
    }
}

/// Install the global subscriber. Events go to stderr, leaving stdout to the
/// command output.
pub fn initialize_logs(config: &LogsConfig) {
    let filter = EnvFilter::builder()
        .with_default_directive(config.default_level.into())
        .from_env_lossy();

    let subscribe_builder = tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_ansi(config.enable_color)
        .with_writer(std::io::stderr);

    if !config.enable_timestamp {
        subscribe_builder.without_time().init();
    } else {
        subscribe_builder.init();
    }
}
