// (c) Cartesi and individual authors (see AUTHORS)
// SPDX-License-Identifier: Apache-2.0 (see LICENSE)

use clap::Parser;

use frontend_console::{CLIConfig, ConsoleConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config: ConsoleConfig = CLIConfig::parse().into();
    logs::initialize_logs(&config.logs_config);

    frontend_console::run(config).await.map_err(|e| e.into())
}
