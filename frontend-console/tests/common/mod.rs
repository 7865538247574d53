// (c) Cartesi and individual authors (see AUTHORS)
// SPDX-License-Identifier: Apache-2.0 (see LICENSE)

#![allow(dead_code)]

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpResponse, HttpServer};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

use frontend_console::{
    config::NoticeListConfig, list_notices, ConsoleError, NoticeFilter,
};

const HOST: &str = "127.0.0.1";

#[derive(Clone)]
pub enum MockResponse {
    Json(Value),
    Status(u16, String),
}

struct MockState {
    response: MockResponse,
    requests: Arc<Mutex<Vec<Value>>>,
}

/// Reader stand-in that answers every GraphQL request with a canned response
pub struct MockReader {
    handle: ServerHandle,
    url: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl MockReader {
    pub async fn start(response: MockResponse) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = web::Data::new(MockState {
            response,
            requests: requests.clone(),
        });
        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .route("/graphql", web::post().to(graphql))
        })
        .workers(1)
        .bind((HOST, 0))
        .expect("failed to bind mock reader");
        let address = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self {
            handle,
            url: format!("http://{}/graphql", address),
            requests,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().expect("poisoned lock").clone()
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}

async fn graphql(
    body: web::Json<Value>,
    state: web::Data<MockState>,
) -> HttpResponse {
    state
        .requests
        .lock()
        .expect("poisoned lock")
        .push(body.into_inner());
    match &state.response {
        MockResponse::Json(value) => HttpResponse::Ok().json(value),
        MockResponse::Status(status, message) => HttpResponse::build(
            StatusCode::from_u16(*status).expect("invalid status"),
        )
        .body(message.clone()),
    }
}

pub fn notice_node(
    id: &str,
    epoch: i64,
    input: i64,
    index: i64,
    payload: &str,
) -> Value {
    json!({
        "id": id,
        "index": index,
        "payload": payload,
        "input": { "index": input, "epoch": { "index": epoch } }
    })
}

pub fn filter(epoch_index: Option<i64>, input_index: Option<i64>) -> NoticeFilter {
    NoticeFilter {
        epoch_index,
        input_index,
    }
}

/// Run `notice list` against `url` and return what it printed
pub async fn run_list(
    url: &str,
    filter: NoticeFilter,
) -> (Result<(), ConsoleError>, String) {
    let config = NoticeListConfig {
        url: url.to_owned(),
        filter,
    };
    let mut out = Vec::new();
    let result = list_notices(&config, &mut out).await;
    let printed = String::from_utf8(out).expect("output is not utf8");
    (result, printed)
}
