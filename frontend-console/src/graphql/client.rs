// (c) Cartesi and individual authors (see AUTHORS)
// SPDX-License-Identifier: Apache-2.0 (see LICENSE)

use snafu::{ensure, OptionExt, ResultExt};

use super::error::{
    DecodeResponseSnafu, FetchError, HttpStatusSnafu, MissingDataSnafu,
    QuerySnafu, RequestSnafu, ResponseBodySnafu,
};
use super::queries::NoticesQuery;
use super::types::{GraphQLRequest, GraphQLResponse, Notice, NoticeFilter};

/// Client for the rollups reader GraphQL endpoint
#[derive(Debug, Clone)]
pub struct ReaderClient {
    client: reqwest::Client,
    url: String,
}

impl ReaderClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Retrieve the notices matching `filter` with a single request.
    /// The reader gives no ordering guarantee and none is imposed here.
    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn get_notices(
        &self,
        filter: &NoticeFilter,
    ) -> Result<Vec<Notice>, FetchError> {
        let query = NoticesQuery::select(filter);
        tracing::debug!(
            operation = query.operation_name(),
            url = %self.url,
            "querying reader for notices"
        );

        let data = self.execute(&query).await?;
        let mut notices = query.extract(data).context(DecodeResponseSnafu)?;
        notices.retain(|notice| filter.matches(notice));

        tracing::debug!(count = notices.len(), "retrieved notices");
        Ok(notices)
    }

    async fn execute(
        &self,
        query: &NoticesQuery,
    ) -> Result<serde_json::Value, FetchError> {
        let request = GraphQLRequest {
            query: query.document(),
            variables: query.variables(),
            operation_name: query.operation_name(),
        };
        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .context(RequestSnafu { url: &self.url })?;

        let status = response.status();
        let body = response.bytes().await.context(ResponseBodySnafu)?;
        ensure!(
            status.is_success(),
            HttpStatusSnafu {
                status: status.as_u16(),
                message: String::from_utf8_lossy(&body),
            }
        );

        let response: GraphQLResponse =
            serde_json::from_slice(&body).context(DecodeResponseSnafu)?;
        ensure!(
            response.errors.is_empty(),
            QuerySnafu {
                messages: response
                    .errors
                    .into_iter()
                    .map(|error| error.message)
                    .collect::<Vec<_>>(),
            }
        );
        response
            .data
            .filter(|data| !data.is_null())
            .context(MissingDataSnafu)
    }
}
