// (c) Cartesi and individual authors (see AUTHORS)
// SPDX-License-Identifier: Apache-2.0 (see LICENSE)

use snafu::Snafu;

use crate::graphql::FetchError;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ConsoleError {
    #[snafu(display("failed to fetch notices: {}", source))]
    FetchError { source: FetchError },

    #[snafu(display("failed to serialize output: {}", source))]
    SerializeError { source: serde_json::Error },

    #[snafu(display("failed to write output: {}", source))]
    OutputError { source: std::io::Error },
}
