//! # qrs-transport
//!
//! Vendor-agnostic HTTP contract for the remote sheet API, plus the
//! reqwest-backed [`TransportAdapter`] that implements it.
//!
//! The remote API layer speaks only [`HttpRequest`] / [`HttpResponse`] through
//! the [`HttpClient`] trait. An implementation holds at most one open exchange
//! at a time: starting a new request finalizes the previous one, and the
//! response body is read from the open exchange with
//! [`HttpClient::read_body`].

mod adapter;
mod error;
mod request;

pub use adapter::{
    CONNECT_TIMEOUT, ExchangeState, ExchangeStats, READ_TIMEOUT, TransportAdapter,
    TransportTimeouts, WRITE_TIMEOUT,
};
pub use error::TransportError;
pub use request::{HttpMethod, HttpRequest, HttpResponse};

use std::future::Future;

/// Content type used for request bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A client able to perform one HTTP exchange at a time.
pub trait HttpClient: Send {
    /// Send `request` and return the response status and headers.
    ///
    /// Any exchange still open from a previous call is finalized first.
    fn execute(
        &mut self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;

    /// Read the full body of the open exchange and close it.
    fn read_body(&mut self) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send;

    /// Close the open exchange, if any, without reading the rest of its body.
    fn finish_exchange(&mut self);

    /// Close any open exchange and give up pooled connections. Safe to call
    /// repeatedly; a later [`HttpClient::execute`] starts a fresh pool.
    fn release(&mut self);
}
