//! Error types for the party API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant since a party can disappear between a
//! list fetch and a detail fetch. All other non-2xx responses land in
//! `HttpError` with the raw status code and body for the log line.
//!
//! None of these reach the UI. The `Planner` logs them and keeps its state.

use thiserror::Error;

/// Errors returned by `PartyClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body was not the expected `{ "data": ... }` envelope.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// A party draft carried a date that is not a calendar date.
    #[error("invalid date: {0:?}")]
    InvalidDate(String),
}

/// A network-level failure reported by the host that executed a request.
#[derive(Debug, Clone, Error)]
#[error("transport failed: {0}")]
pub struct TransportError(pub String);

/// Everything that can go wrong between sending a request and holding its
/// parsed payload.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Api(#[from] ApiError),
}
