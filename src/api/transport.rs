//
//  topgg
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Transport
//!
//! The request pipeline never talks to `reqwest` directly. It hands a fully
//! built [`HttpRequest`] to a [`Transport`] and gets back an [`HttpResponse`]
//! whose body has already been read to text.
//!
//! [`ReqwestTransport`] is the production implementation. Tests and
//! embedders can supply their own transport (a recording fake, a proxy, a
//! transport shared between several clients).

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, ClientBuilder, Method, StatusCode};
use thiserror::Error;
use url::Url;

/// A fully built request, ready to be sent.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL including the query string.
    pub url: Url,
    /// Request headers, authentication included.
    pub headers: HeaderMap,
    /// Serialized JSON body, if any.
    pub body: Option<String>,
}

/// A completed exchange.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Response status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// The full response body as text. Empty when the server sent none.
    pub body: String,
}

/// Failure to complete an exchange at the transport level.
///
/// This covers DNS failures, refused connections, timeouts and bodies that
/// could not be read. It never describes an HTTP status; a response that
/// arrived is classified by the pipeline instead.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The underlying HTTP client failed.
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// The transport was closed before the request was sent.
    #[error("transport has been closed")]
    Closed,

    /// Any other transport-specific failure.
    #[error("{0}")]
    Other(String),
}

/// Sends one HTTP exchange.
///
/// Implementations must be safe to share between concurrent calls. The
/// pipeline cancels a call by dropping the future returned by
/// [`send`](Self::send), so implementations must release their resources on
/// drop.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` and reads the whole response body.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;

    /// Releases the transport. Called at most once by an owning client.
    fn close(&self) {}
}

/// [`Transport`] backed by a `reqwest::Client`.
pub struct ReqwestTransport {
    client: Client,
    closed: AtomicBool,
}

impl ReqwestTransport {
    /// Creates a transport with default `reqwest` settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::from_builder(Client::builder().user_agent(format!("topgg-rs/{}", crate::VERSION)))
    }

    /// Creates a transport from a configured `reqwest` builder.
    ///
    /// # Errors
    ///
    /// Returns an error if the builder configuration is invalid.
    pub fn from_builder(builder: ClientBuilder) -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(builder.build()?))
    }

    /// Wraps an existing `reqwest::Client`.
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            closed: AtomicBool::new(false),
        }
    }

    /// Returns `true` once [`close`](Transport::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        if self.is_closed() {
            return Err(TransportError::Closed);
        }

        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }
}

/// In-memory transports for unit tests.
#[cfg(test)]
pub(crate) mod fake {
    use std::sync::atomic::AtomicUsize;
    use std::sync::Mutex;

    use super::*;

    /// Records every request and answers with a canned response.
    pub(crate) struct RecordingTransport {
        status: StatusCode,
        headers: HeaderMap,
        body: String,
        requests: Mutex<Vec<HttpRequest>>,
        closes: AtomicUsize,
    }

    impl RecordingTransport {
        pub(crate) fn new(status: u16, body: &str) -> Self {
            Self {
                status: StatusCode::from_u16(status).unwrap(),
                headers: HeaderMap::new(),
                body: body.to_string(),
                requests: Mutex::new(Vec::new()),
                closes: AtomicUsize::new(0),
            }
        }

        pub(crate) fn with_header(mut self, name: &'static str, value: &'static str) -> Self {
            self.headers
                .insert(name, reqwest::header::HeaderValue::from_static(value));
            self
        }

        pub(crate) fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }

        pub(crate) fn last(&self) -> HttpRequest {
            self.requests().pop().expect("no request was sent")
        }

        pub(crate) fn close_count(&self) -> usize {
            self.closes.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.requests.lock().unwrap().push(request);
            Ok(HttpResponse {
                status: self.status,
                headers: self.headers.clone(),
                body: self.body.clone(),
            })
        }

        fn close(&self) {
            self.closes.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Fails the test if a request is ever sent.
    pub(crate) struct ForbiddenTransport;

    #[async_trait]
    impl Transport for ForbiddenTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            panic!("unexpected request to {}", request.url);
        }
    }

    /// Never completes an exchange.
    pub(crate) struct HangingTransport;

    #[async_trait]
    impl Transport for HangingTransport {
        async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
            std::future::pending().await
        }
    }

    /// Fails every exchange at the transport level.
    pub(crate) struct UnreachableTransport;

    #[async_trait]
    impl Transport for UnreachableTransport {
        async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
            Err(TransportError::Other("connection refused".to_string()))
        }
    }
}
