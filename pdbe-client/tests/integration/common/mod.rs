//! Common utilities for the integration test suites.

use pdbe_client::{ClientConfig, PdbeClient};
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Create a client pointed at a wiremock server.
#[allow(dead_code)]
pub fn create_mock_client(mock_server: &MockServer) -> PdbeClient {
    let config = ClientConfig::new().with_base_url(mock_server.uri());
    PdbeClient::with_config(config)
}

/// Mount a 200 JSON response for one catalog path.
#[allow(dead_code)]
pub async fn mount_entry_json(mock_server: &MockServer, suffix: &str, pdb_id: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/pdb/entry/{suffix}/{pdb_id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(mock_server)
        .await;
}

/// Helper function to check if live API tests should be run
/// Requires both the integration-tests feature and the PDBE_LIVE_API_TESTS env var
#[allow(dead_code)]
pub fn should_run_live_api_tests() -> bool {
    #[cfg(not(feature = "integration-tests"))]
    {
        false
    }

    #[cfg(feature = "integration-tests")]
    {
        std::env::var("PDBE_LIVE_API_TESTS").is_ok()
    }
}

/// Utilities for tests that talk to the live PDBe API
#[cfg(feature = "integration-tests")]
pub mod live {
    use std::sync::Once;
    use std::time::Duration;

    use pdbe_client::{ClientConfig, PdbeClient};

    static TRACING: Once = Once::new();

    /// Route client tracing to stderr for live runs, honouring `RUST_LOG`.
    ///
    /// `try_init` keeps this a no-op when a subscriber is already
    /// installed for the test.
    fn init_live_tracing() {
        TRACING.call_once(|| {
            let filter = tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        });
    }

    /// Released entries used across the live tests.
    ///
    /// `1cbs` is a small X-ray structure, `2ce3` has several ligands,
    /// `2k8v` is an NMR ensemble, `4v5j` is a large ribosome entry with
    /// modified residues.
    #[allow(dead_code)]
    pub const XRAY_ENTRY: &str = "1cbs";
    #[allow(dead_code)]
    pub const LIGAND_ENTRY: &str = "2ce3";
    #[allow(dead_code)]
    pub const NMR_ENTRY: &str = "2k8v";
    #[allow(dead_code)]
    pub const RIBOSOME_ENTRY: &str = "4v5j";

    /// Identifiers the server should reject with 404: garbage, too short,
    /// and empty (which leaves a trailing slash on the URL).
    #[allow(dead_code)]
    pub const MALFORMED_IDS: &[&str] = &["asdasdasd", "2", ""];

    /// Create a client for live API tests with a generous timeout.
    #[allow(dead_code)]
    pub fn create_live_client() -> PdbeClient {
        init_live_tracing();

        let config = ClientConfig::new()
            .with_user_agent("pdbe-client-integration-tests")
            .with_timeout(Duration::from_secs(60));
        PdbeClient::with_config(config)
    }
}
