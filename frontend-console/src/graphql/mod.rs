// (c) Cartesi and individual authors (see AUTHORS)
// SPDX-License-Identifier: Apache-2.0 (see LICENSE)

pub use client::ReaderClient;
pub use error::FetchError;
pub use queries::NoticesQuery;
pub use types::{Epoch, Input, Notice, NoticeFilter};

mod client;
mod error;
mod queries;
mod types;
