// (c) Cartesi and individual authors (see AUTHORS)
// SPDX-License-Identifier: Apache-2.0 (see LICENSE)

use clap::{Args, Parser, Subcommand};
use logs::{LogsConfig, LogsEnvCliConfig};

use crate::graphql::NoticeFilter;

pub const DEFAULT_URL: &str = "http://localhost:4000/graphql";

#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub logs_config: LogsConfig,
    pub command: Command,
}

#[derive(Debug, Clone)]
pub enum Command {
    NoticeList(NoticeListConfig),
}

#[derive(Debug, Clone)]
pub struct NoticeListConfig {
    pub url: String,
    pub filter: NoticeFilter,
}

#[derive(Parser)]
#[command(name = "frontend-console")]
#[command(about = "Console for interacting with Cartesi rollups")]
pub struct CLIConfig {
    #[command(flatten)]
    pub logs_config: LogsEnvCliConfig,

    #[command(subcommand)]
    pub command: CLICommand,
}

#[derive(Subcommand)]
pub enum CLICommand {
    /// Notice operations
    #[command(subcommand, visible_alias = "notices")]
    Notice(NoticeCLICommand),
}

#[derive(Subcommand)]
pub enum NoticeCLICommand {
    /// List notices of an epoch and input
    List(NoticeListCLIConfig),
}

#[derive(Args)]
pub struct NoticeListCLIConfig {
    /// Reader URL
    #[arg(long, env = "GRAPHQL_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Epoch index
    #[arg(long)]
    pub epoch: Option<i64>,

    /// Input index
    #[arg(long)]
    pub input: Option<i64>,
}

impl From<NoticeListCLIConfig> for NoticeListConfig {
    fn from(cli_config: NoticeListCLIConfig) -> Self {
        Self {
            url: cli_config.url,
            filter: NoticeFilter {
                epoch_index: cli_config.epoch,
                input_index: cli_config.input,
            },
        }
    }
}

impl From<CLIConfig> for ConsoleConfig {
    fn from(cli_config: CLIConfig) -> Self {
        let command = match cli_config.command {
            CLICommand::Notice(NoticeCLICommand::List(list)) => {
                Command::NoticeList(list.into())
            }
        };
        Self {
            logs_config: cli_config.logs_config.into(),
            command,
        }
    }
}
