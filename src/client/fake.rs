use std::sync::{Arc, Mutex};

use crate::config::ClientConfig;

use super::{BoxError, BoxFuture, HttpResponse, HttpTransport, NexmoClient};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    PostForm,
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub params: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
pub struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

#[derive(Debug)]
struct FakeTransportState {
    requests: Vec<RecordedRequest>,
    response: Result<HttpResponse, String>,
}

impl FakeTransport {
    pub fn new(response_status: u16, response_body: impl Into<String>) -> Self {
        Self::with_response(Ok(HttpResponse {
            status: response_status,
            body: response_body.into(),
        }))
    }

    /// Every request fails with an error displaying as `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_response(Err(message.into()))
    }

    fn with_response(response: Result<HttpResponse, String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeTransportState {
                requests: Vec::new(),
                response,
            })),
        }
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.state.lock().unwrap().requests.last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    fn record(
        &self,
        method: Method,
        url: &str,
        params: Vec<(String, String)>,
    ) -> Result<HttpResponse, BoxError> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(RecordedRequest {
            method,
            url: url.to_owned(),
            params,
        });
        state.response.clone().map_err(BoxError::from)
    }
}

impl HttpTransport for FakeTransport {
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move { self.record(Method::Get, url, Vec::new()) })
    }

    fn post<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move { self.record(Method::Post, url, Vec::new()) })
    }

    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move { self.record(Method::PostForm, url, params) })
    }
}

pub fn assert_param(params: &[(String, String)], key: &str, value: &str) {
    assert!(
        params.iter().any(|(k, v)| k == key && v == value),
        "missing param {key}={value}; got: {params:?}"
    );
}

pub fn make_client(config: ClientConfig, transport: FakeTransport) -> NexmoClient {
    let config = config.api_root("https://example.invalid").unwrap();
    NexmoClient {
        config: Arc::new(config),
        http: Arc::new(transport),
    }
}
