//! PDBe entry-level API client.
//!
//! Split across two files: `client` holds the HTTP plumbing (request
//! construction, status classification, strict decoding), `accessors` holds
//! one named method per catalog endpoint.

mod accessors;
mod client;

pub use client::PdbeClient;
