// (c) Cartesi and individual authors (see AUTHORS)
// SPDX-License-Identifier: Apache-2.0 (see LICENSE)

use serde::{de, Deserialize, Deserializer, Serialize};

/// Processing period of the rollup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Epoch {
    #[serde(deserialize_with = "deserialize_index")]
    pub index: i64,
}

/// Input processed by the rollup, carrying its owning epoch
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Input {
    #[serde(deserialize_with = "deserialize_index")]
    pub index: i64,
    pub epoch: Epoch,
}

/// Notice emitted by the application, carrying its owning input
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Notice {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_index")]
    pub index: i64,
    /// Payload in Ethereum hex binary format
    pub payload: String,
    pub input: Input,
}

/// Restricts which notices are retrieved; `None` means no restriction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoticeFilter {
    pub epoch_index: Option<i64>,
    pub input_index: Option<i64>,
}

impl NoticeFilter {
    pub fn matches(&self, notice: &Notice) -> bool {
        self.epoch_index
            .map_or(true, |index| notice.input.epoch.index == index)
            && self
                .input_index
                .map_or(true, |index| notice.input.index == index)
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct Connection<T> {
    pub nodes: Vec<T>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GraphQLRequest<'a> {
    pub query: &'a str,
    pub variables: serde_json::Value,
    pub operation_name: &'a str,
}

#[derive(Debug, Deserialize)]
pub(super) struct GraphQLResponse {
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Vec<GraphQLErrorMessage>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GraphQLErrorMessage {
    pub message: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IndexValue {
    Number(i64),
    Text(String),
}

/// 64-bit scalars may come as strings because some clients can't handle
/// 64-bit integers
fn deserialize_index<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match IndexValue::deserialize(deserializer)? {
        IndexValue::Number(index) => Ok(index),
        IndexValue::Text(text) => text.parse().map_err(|_| {
            de::Error::invalid_value(de::Unexpected::Str(&text), &"an index")
        }),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdValue {
    Text(String),
    Number(serde_json::Number),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match IdValue::deserialize(deserializer)? {
        IdValue::Text(id) => id,
        IdValue::Number(id) => id.to_string(),
    })
}
