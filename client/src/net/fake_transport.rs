//! Scripted in-memory transport for exercising API flows in tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::api::{ApiClient, ApiRequest, ApiResponse, Transport};
use super::error::ApiError;

/// Replays queued responses in order and records every request it receives.
#[derive(Debug, Default)]
pub(crate) struct FakeTransport {
    responses: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub(crate) fn respond(self, status: u16, body: serde_json::Value) -> Self {
        self.responses.borrow_mut().push_back(Ok(ApiResponse { status, body }));
        self
    }

    pub(crate) fn fail(self, error: ApiError) -> Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    /// `(method, path)` of each recorded request, for sequence assertions.
    pub(crate) fn calls(&self) -> Vec<(super::api::Method, String)> {
        self.requests.borrow().iter().map(|r| (r.method, r.path.clone())).collect()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_owned())))
    }
}

pub(crate) fn client(transport: FakeTransport) -> ApiClient<FakeTransport> {
    ApiClient::new(transport)
}

pub(crate) fn block_on<F: std::future::Future>(future: F) -> F::Output {
    futures::executor::block_on(future)
}
