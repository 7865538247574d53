// (c) Cartesi and individual authors (see AUTHORS)
// SPDX-License-Identifier: Apache-2.0 (see LICENSE)

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum FetchError {
    #[snafu(display("failed to send request to reader at {}: {}", url, source))]
    RequestError { url: String, source: reqwest::Error },

    #[snafu(display("reader responded with status {}: {}", status, message))]
    HttpStatusError { status: u16, message: String },

    #[snafu(display("failed to read reader response: {}", source))]
    ResponseBodyError { source: reqwest::Error },

    #[snafu(display("failed to decode reader response: {}", source))]
    DecodeResponseError { source: serde_json::Error },

    #[snafu(display("reader query failed: {}", messages.join("; ")))]
    QueryError { messages: Vec<String> },

    #[snafu(display("reader response has no data"))]
    MissingDataError {},
}
