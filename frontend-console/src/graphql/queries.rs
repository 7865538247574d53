// (c) Cartesi and individual authors (see AUTHORS)
// SPDX-License-Identifier: Apache-2.0 (see LICENSE)

use serde::Deserialize;
use serde_json::json;

use super::types::{Connection, Notice, NoticeFilter};

const NOTICES_QUERY: &str = r#"query notices {
  notices {
    nodes {
      id
      index
      payload
      input {
        index
        epoch {
          index
        }
      }
    }
  }
}"#;

const NOTICES_BY_EPOCH_QUERY: &str = r#"query noticesByEpoch($epochIndex: Int!) {
  epoch: epochI(index: $epochIndex) {
    notices {
      nodes {
        id
        index
        payload
        input {
          index
          epoch {
            index
          }
        }
      }
    }
  }
}"#;

const NOTICES_BY_EPOCH_AND_INPUT_QUERY: &str = r#"query noticesByEpochAndInput($epochIndex: Int!, $inputIndex: Int!) {
  epoch: epochI(index: $epochIndex) {
    input(index: $inputIndex) {
      notices {
        nodes {
          id
          index
          payload
          input {
            index
            epoch {
              index
            }
          }
        }
      }
    }
  }
}"#;

/// Reader query used to retrieve notices for a given filter.
///
/// The reader only filters by input inside an epoch, so an input-only
/// filter queries every notice and leaves the rest to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticesQuery {
    All,
    ByEpoch { epoch_index: i64 },
    ByEpochAndInput { epoch_index: i64, input_index: i64 },
}

#[derive(Deserialize)]
struct NoticesData {
    notices: Connection<Notice>,
}

#[derive(Deserialize)]
struct EpochData<T> {
    epoch: T,
}

#[derive(Deserialize)]
struct WithNotices {
    notices: Connection<Notice>,
}

#[derive(Deserialize)]
struct WithInput {
    input: WithNotices,
}

impl NoticesQuery {
    pub fn select(filter: &NoticeFilter) -> Self {
        match (filter.epoch_index, filter.input_index) {
            (Some(epoch_index), Some(input_index)) => Self::ByEpochAndInput {
                epoch_index,
                input_index,
            },
            (Some(epoch_index), None) => Self::ByEpoch { epoch_index },
            (None, _) => Self::All,
        }
    }

    pub fn operation_name(&self) -> &'static str {
        match self {
            Self::All => "notices",
            Self::ByEpoch { .. } => "noticesByEpoch",
            Self::ByEpochAndInput { .. } => "noticesByEpochAndInput",
        }
    }

    pub fn document(&self) -> &'static str {
        match self {
            Self::All => NOTICES_QUERY,
            Self::ByEpoch { .. } => NOTICES_BY_EPOCH_QUERY,
            Self::ByEpochAndInput { .. } => NOTICES_BY_EPOCH_AND_INPUT_QUERY,
        }
    }

    pub fn variables(&self) -> serde_json::Value {
        match self {
            Self::All => json!({}),
            Self::ByEpoch { epoch_index } => json!({
                "epochIndex": epoch_index,
            }),
            Self::ByEpochAndInput {
                epoch_index,
                input_index,
            } => json!({
                "epochIndex": epoch_index,
                "inputIndex": input_index,
            }),
        }
    }

    /// Flatten the `data` member of the response into the notice list
    pub fn extract(
        &self,
        data: serde_json::Value,
    ) -> Result<Vec<Notice>, serde_json::Error> {
        let connection = match self {
            Self::All => serde_json::from_value::<NoticesData>(data)?.notices,
            Self::ByEpoch { .. } => {
                serde_json::from_value::<EpochData<WithNotices>>(data)?
                    .epoch
                    .notices
            }
            Self::ByEpochAndInput { .. } => {
                serde_json::from_value::<EpochData<WithInput>>(data)?
                    .epoch
                    .input
                    .notices
            }
        };
        Ok(connection.nodes)
    }
}
