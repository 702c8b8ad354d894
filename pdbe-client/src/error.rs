use std::result;

use thiserror::Error;

use crate::endpoint::Endpoint;

/// Error types for PDBe client operations
#[derive(Error, Debug)]
pub enum PdbeError {
    /// HTTP request failed before a status line was received
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Response body was not valid UTF-8
    #[error("response body is not valid UTF-8: {0}")]
    DecodeError(#[from] std::str::Utf8Error),

    /// Entry not found
    ///
    /// The server answered 404: the identifier does not resolve to a PDB
    /// entry, or the entry has no data for the requested endpoint.
    #[error("entry not found: {pdb_id}")]
    EntryNotFound { pdb_id: String },

    /// Server answered success but sent no body
    #[error("empty response body for entry {pdb_id}")]
    EmptyResponse { pdb_id: String },

    /// Generic API error with HTTP status code
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Endpoint name not in the catalog
    #[error("unknown endpoint: {name}")]
    UnknownEndpoint { name: String },

    /// Chain-scoped query against an endpoint that is entry-level only
    #[error("endpoint {endpoint} does not support chain-scoped queries")]
    ChainNotSupported { endpoint: Endpoint },

    /// Request cancelled through a [`CancellationToken`](tokio_util::sync::CancellationToken)
    #[error("request cancelled")]
    Cancelled,

    /// IO error for file operations
    #[error("IO error: {message}")]
    IoError { message: String },
}

pub type Result<T> = result::Result<T, PdbeError>;

impl PdbeError {
    /// True when the identifier did not resolve to any data on the server.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PdbeError::EntryNotFound { .. })
    }

    /// True for network-level failures: DNS, refused connections, timeouts.
    ///
    /// Transport failures say nothing about the entry; the same request may
    /// succeed once connectivity is restored.
    pub fn is_transport(&self) -> bool {
        matches!(self, PdbeError::RequestError(_))
    }
}
