//! Client configuration shared by every PDBe request.

use std::time::Duration;

/// Default PDBe API origin.
///
/// The documented origin is plain HTTP; the server redirects to HTTPS and
/// the client follows. Override with
/// [`ClientConfig::with_base_url`] to pin HTTPS directly or to point the
/// client at a mirror.
pub const DEFAULT_BASE_URL: &str = "http://www.ebi.ac.uk/pdbe/api";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for PDBe clients
///
/// Built in the builder style: start from [`ClientConfig::new`] and chain
/// `with_*` calls. Unset values fall back to documented defaults through
/// the `effective_*` accessors.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use pdbe_client::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_timeout(Duration::from_secs(10))
///     .with_user_agent("my-tool/1.0");
/// assert_eq!(config.effective_base_url(), "http://www.ebi.ac.uk/pdbe/api");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Option<String>,
    user_agent: Option<String>,
    /// Per-request timeout applied to the whole round trip.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set a custom base URL, e.g. a mock server or an HTTPS mirror.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set a custom User-Agent header value.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Base URL to use, falling back to [`DEFAULT_BASE_URL`].
    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// User-Agent to use, falling back to `pdbe-client/{version}`.
    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("pdbe-client/{}", env!("CARGO_PKG_VERSION")))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
