// (c) Cartesi and individual authors (see AUTHORS)
// SPDX-License-Identifier: Apache-2.0 (see LICENSE)

use snafu::ResultExt;
use std::io::Write;

pub use config::{CLIConfig, Command, ConsoleConfig, NoticeListConfig};
pub use error::ConsoleError;
pub use graphql::{NoticeFilter, ReaderClient};
pub use notices::OutputRecord;

pub mod config;
mod error;
pub mod graphql;
pub mod notices;
pub mod payload;

#[tracing::instrument(level = "trace", skip_all)]
pub async fn run(config: ConsoleConfig) -> Result<(), ConsoleError> {
    tracing::info!(?config, "starting frontend console");

    match config.command {
        Command::NoticeList(list_config) => {
            list_notices(&list_config, &mut std::io::stdout()).await
        }
    }
}

/// Fetch, order and print the notices as one JSON line. Nothing is written
/// when the fetch fails.
#[tracing::instrument(level = "trace", skip(out))]
pub async fn list_notices<W: Write>(
    config: &NoticeListConfig,
    out: &mut W,
) -> Result<(), ConsoleError> {
    let client = ReaderClient::new(config.url.as_str());
    let notices = client
        .get_notices(&config.filter)
        .await
        .context(error::FetchSnafu)?;

    let records = notices::present(notices);
    notices::write_json_line(out, &records)
}
