use reqwest::{Client, StatusCode};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::error::{PdbeError, Result};

/// Client for the PDBe entry-level REST API
///
/// All endpoints share one request path: build the URL from the catalog,
/// issue a GET, classify the status, decode the body as strict UTF-8 and
/// parse it as JSON. The response shape differs per endpoint and per entry,
/// so data is returned as [`serde_json::Value`] rather than deserialized
/// into fixed structs.
#[derive(Clone)]
pub struct PdbeClient {
    client: Client,
    pub(crate) base_url: String,
}

impl PdbeClient {
    /// Create a new PDBe client with default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use pdbe_client::PdbeClient;
    ///
    /// let client = PdbeClient::new();
    /// ```
    pub fn new() -> Self {
        let config = ClientConfig::new();
        Self::with_config(config)
    }

    /// Create a new PDBe client with custom configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Client configuration: base URL, User-Agent, timeout
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use pdbe_client::{ClientConfig, PdbeClient};
    ///
    /// let config = ClientConfig::new()
    ///     .with_base_url("https://www.ebi.ac.uk/pdbe/api")
    ///     .with_timeout(Duration::from_secs(10));
    ///
    /// let client = PdbeClient::with_config(config);
    /// ```
    pub fn with_config(config: ClientConfig) -> Self {
        let base_url = config.effective_base_url().to_string();

        let client = Client::builder()
            .user_agent(config.effective_user_agent())
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, base_url }
    }

    /// Create a new PDBe client with a custom HTTP client and default base URL
    ///
    /// # Arguments
    ///
    /// * `client` - Custom reqwest client with specific configuration
    ///
    /// # Example
    ///
    /// ```
    /// use pdbe_client::PdbeClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = PdbeClient::with_client(http_client);
    /// ```
    pub fn with_client(client: Client) -> Self {
        let config = ClientConfig::new();
        let base_url = config.effective_base_url().to_string();

        Self { client, base_url }
    }

    /// Fetch one catalog endpoint for one entry
    ///
    /// The identifier is passed through as an opaque path segment; the
    /// server decides whether it resolves. PDB ids are matched
    /// case-insensitively on the server side, so `1CBS` and `1cbs` return
    /// the same data.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Which catalog endpoint to query
    /// * `pdb_id` - 4-character PDB id code, e.g. `1cbs`
    ///
    /// # Errors
    ///
    /// * [`PdbeError::EntryNotFound`] - If the server answers 404
    /// * [`PdbeError::ApiError`] - For any other non-success status
    /// * [`PdbeError::RequestError`] - If the request fails at the transport level
    /// * [`PdbeError::EmptyResponse`] - If a success response carries no body
    /// * [`PdbeError::DecodeError`] / [`PdbeError::JsonError`] - If the body
    ///   is not strict UTF-8 JSON
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pdbe_client::{Endpoint, PdbeClient};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PdbeClient::new();
    ///     let summary = client.fetch(Endpoint::Summary, "1cbs").await?;
    ///     println!("{}", serde_json::to_string_pretty(&summary)?);
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(endpoint = %endpoint, pdb_id = %pdb_id))]
    pub async fn fetch(&self, endpoint: Endpoint, pdb_id: &str) -> Result<Value> {
        let url = self.entry_url(endpoint, pdb_id, None);
        self.fetch_json(&url, pdb_id).await
    }

    /// Fetch one catalog endpoint restricted to a single chain
    ///
    /// Only [`Endpoint::ObservedRanges`] and [`Endpoint::Residues`] have a
    /// chain-scoped form; any other endpoint is rejected locally before a
    /// request is made.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - A chain-aware catalog endpoint
    /// * `pdb_id` - 4-character PDB id code
    /// * `chain_id` - PDB chain id, e.g. `A`
    ///
    /// # Errors
    ///
    /// * [`PdbeError::ChainNotSupported`] - If the endpoint has no
    ///   chain-scoped form; nothing is sent in that case
    /// * Otherwise the same errors as [`PdbeClient::fetch`]
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pdbe_client::{Endpoint, PdbeClient};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PdbeClient::new();
    ///     let coverage = client
    ///         .fetch_in_chain(Endpoint::ObservedRanges, "1cbs", "A")
    ///         .await?;
    ///     println!("{coverage}");
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(endpoint = %endpoint, pdb_id = %pdb_id, chain_id = %chain_id))]
    pub async fn fetch_in_chain(
        &self,
        endpoint: Endpoint,
        pdb_id: &str,
        chain_id: &str,
    ) -> Result<Value> {
        if !endpoint.supports_chain() {
            return Err(PdbeError::ChainNotSupported { endpoint });
        }

        let url = self.entry_url(endpoint, pdb_id, Some(chain_id));
        self.fetch_json(&url, pdb_id).await
    }

    /// Fetch with cooperative cancellation
    ///
    /// Wraps [`PdbeClient::fetch`] (or [`PdbeClient::fetch_in_chain`] when
    /// `chain_id` is given) in a race against the token. When the token
    /// fires first the in-flight request is dropped and
    /// [`PdbeError::Cancelled`] is returned.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pdbe_client::{CancellationToken, Endpoint, PdbeClient};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PdbeClient::new();
    ///     let token = CancellationToken::new();
    ///
    ///     let cancel = token.clone();
    ///     tokio::spawn(async move {
    ///         tokio::time::sleep(std::time::Duration::from_secs(5)).await;
    ///         cancel.cancel();
    ///     });
    ///
    ///     match client
    ///         .fetch_with_cancellation(Endpoint::Summary, "1cbs", None, &token)
    ///         .await
    ///     {
    ///         Ok(summary) => println!("{summary}"),
    ///         Err(e) => eprintln!("gave up: {e}"),
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn fetch_with_cancellation(
        &self,
        endpoint: Endpoint,
        pdb_id: &str,
        chain_id: Option<&str>,
        token: &CancellationToken,
    ) -> Result<Value> {
        if token.is_cancelled() {
            return Err(PdbeError::Cancelled);
        }

        let request = async {
            match chain_id {
                Some(chain_id) => self.fetch_in_chain(endpoint, pdb_id, chain_id).await,
                None => self.fetch(endpoint, pdb_id).await,
            }
        };

        tokio::select! {
            _ = token.cancelled() => {
                debug!(endpoint = %endpoint, pdb_id = %pdb_id, "Request cancelled");
                Err(PdbeError::Cancelled)
            }
            result = request => result,
        }
    }

    /// Build the request URL from the catalog row.
    ///
    /// Segments are concatenated as-is; ids and chain ids are opaque to the
    /// client and reach the server byte-for-byte.
    fn entry_url(&self, endpoint: Endpoint, pdb_id: &str, chain_id: Option<&str>) -> String {
        let mut url = format!(
            "{}/pdb/entry/{}/{}",
            self.base_url,
            endpoint.path_suffix(),
            pdb_id
        );
        if let Some(chain_id) = chain_id {
            url.push_str("/chain/");
            url.push_str(chain_id);
        }
        url
    }

    /// One GET round trip: classify the status, then decode strictly.
    ///
    /// Decode order is fixed: status first, then the empty-body check, then
    /// UTF-8 validation, then JSON parsing. A 404 therefore reports
    /// [`PdbeError::EntryNotFound`] even if the server attached an error
    /// body, and an empty 200 reports [`PdbeError::EmptyResponse`] rather
    /// than a JSON error.
    async fn fetch_json(&self, url: &str, pdb_id: &str) -> Result<Value> {
        debug!(url = %url, "Requesting PDBe endpoint");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(pdb_id = %pdb_id, "Entry not found");
            return Err(PdbeError::EntryNotFound {
                pdb_id: pdb_id.to_string(),
            });
        }
        if !status.is_success() {
            warn!("API request failed with status: {status}");
            return Err(PdbeError::ApiError {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown error").to_string(),
            });
        }

        let body = response.bytes().await?;
        if body.is_empty() {
            return Err(PdbeError::EmptyResponse {
                pdb_id: pdb_id.to_string(),
            });
        }

        let text = std::str::from_utf8(&body)?;
        let value: Value = serde_json::from_str(text)?;

        info!(bytes = body.len(), "PDBe response parsed");
        Ok(value)
    }
}

impl Default for PdbeClient {
    fn default() -> Self {
        Self::new()
    }
}
