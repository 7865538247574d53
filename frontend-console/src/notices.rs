// (c) Cartesi and individual authors (see AUTHORS)
// SPDX-License-Identifier: Apache-2.0 (see LICENSE)

use serde::Serialize;
use snafu::ResultExt;
use std::io::Write;

use crate::error::{ConsoleError, OutputSnafu, SerializeSnafu};
use crate::graphql::Notice;
use crate::payload::decode_payload;

/// Notice as printed by the console
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    pub id: String,
    pub epoch: i64,
    pub input: i64,
    pub notice: i64,
    pub payload: String,
}

impl From<Notice> for OutputRecord {
    fn from(notice: Notice) -> Self {
        Self {
            payload: decode_payload(&notice.payload),
            id: notice.id,
            epoch: notice.input.epoch.index,
            input: notice.input.index,
            notice: notice.index,
        }
    }
}

/// Order notices by epoch index and then by input index.
///
/// The sort is stable and there is no tie-break on the notice index, so
/// notices of the same input keep the order the reader returned them in.
pub fn sort_notices(notices: &mut [Notice]) {
    notices.sort_by_key(|notice| (notice.input.epoch.index, notice.input.index));
}

pub fn present(mut notices: Vec<Notice>) -> Vec<OutputRecord> {
    sort_notices(&mut notices);
    notices.into_iter().map(OutputRecord::from).collect()
}

/// Write the records as a single compact JSON array followed by a newline
pub fn write_json_line<W: Write>(
    out: &mut W,
    records: &[OutputRecord],
) -> Result<(), ConsoleError> {
    let line = serde_json::to_string(records).context(SerializeSnafu)?;
    writeln!(out, "{}", line).context(OutputSnafu)?;
    out.flush().context(OutputSnafu)
}
