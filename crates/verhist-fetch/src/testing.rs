//! Test doubles shared by the unit tests.

use async_trait::async_trait;
use reqwest::{Request, Response, StatusCode};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::Transport;

/// Transport that answers every request with a canned response.
#[derive(Debug)]
pub(crate) struct StubTransport {
    status: StatusCode,
    body: String,
    calls: AtomicUsize,
    urls: Mutex<Vec<String>>,
}

impl StubTransport {
    pub(crate) fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            calls: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn ok(body: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, body)
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn execute(&self, request: Request) -> Result<Response, reqwest::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(request.url().to_string());

        let response = http::Response::builder()
            .status(self.status)
            .body(self.body.clone())
            .unwrap();
        Ok(Response::from(response))
    }
}
