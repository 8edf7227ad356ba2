//! Test doubles shared by unit tests across modules.

use std::cell::RefCell;
use std::collections::VecDeque;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::net::http::{HttpRequest, HttpResponse, Transport, TransportError};

/// Records every request and replays queued responses in order.
#[derive(Default)]
pub(crate) struct FakeTransport {
    requests: RefCell<Vec<HttpRequest>>,
    responses: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
}

impl FakeTransport {
    pub(crate) fn respond(self, status: u16, body: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    pub(crate) fn fail(self, reason: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Err(TransportError(reason.to_owned())));
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no response queued".to_owned())))
    }
}

pub(crate) fn client(transport: FakeTransport) -> ApiClient<FakeTransport> {
    ApiClient::new(transport, ApiConfig::new("http://backend.test", ""))
}

/// Unsigned JWT-shaped token carrying `payload`.
pub(crate) fn token_with(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}
