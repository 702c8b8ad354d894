//! # PDBe Client
//!
//! A Rust client library for the Protein Data Bank in Europe (PDBe) REST
//! API. This crate covers the entry-level endpoints: structural,
//! bibliographic and experimental data about released PDB entries,
//! addressed by their 4-character id codes.
//!
//! ## Features
//!
//! - **Endpoint Catalog**: All 16 entry-level endpoints behind one enum
//! - **Schema Agnostic**: Responses returned as `serde_json::Value`, never
//!   forced into structs that lag behind the server
//! - **Async Support**: Built on tokio and reqwest
//! - **Typed Failures**: Not-found, rejection, transport and decode errors
//!   are distinct variants, so callers can branch without string matching
//! - **Cancellation**: Every fetch can race a `CancellationToken`
//!
//! ## Quick Start
//!
//! ### Fetching entry data
//!
//! ```no_run
//! use pdbe_client::{Endpoint, PdbeClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PdbeClient::new();
//!
//!     // Named accessor per endpoint...
//!     let summary = client.fetch_summary("1cbs").await?;
//!     println!("Title: {}", summary["1cbs"][0]["title"]);
//!
//!     // ...or drive the catalog data-first
//!     for endpoint in Endpoint::ALL {
//!         match client.fetch(endpoint, "1cbs").await {
//!             Ok(value) => println!("{endpoint}: {} bytes", value.to_string().len()),
//!             Err(e) if e.is_not_found() => println!("{endpoint}: no data"),
//!             Err(e) => return Err(e.into()),
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Chain-scoped queries
//!
//! ```no_run
//! use pdbe_client::PdbeClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PdbeClient::new();
//!
//!     let coverage = client.fetch_observed_ranges_in_chain("1cbs", "A").await?;
//!     let residues = client.fetch_residues_in_chain("1cbs", "A").await?;
//!
//!     println!("{coverage}");
//!     println!("{residues}");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod endpoint;
pub mod entry;
pub mod error;
pub mod report;

// Re-export main types for convenience
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use endpoint::Endpoint;
pub use entry::PdbeClient;
pub use error::{PdbeError, Result};
pub use tokio_util::sync::CancellationToken;
