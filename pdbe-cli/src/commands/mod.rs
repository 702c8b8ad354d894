pub mod endpoints;
pub mod fetch;

use std::time::Duration;

use anyhow::Result;
use pdbe_client::{ClientConfig, PdbeClient};

pub fn create_client(base_url: Option<&str>, timeout_seconds: Option<u64>) -> Result<PdbeClient> {
    let mut config = ClientConfig::new();

    if let Some(base_url) = base_url {
        config = config.with_base_url(base_url);
    }

    if let Some(seconds) = timeout_seconds {
        config = config.with_timeout(Duration::from_secs(seconds));
    }

    let client = PdbeClient::with_config(config);
    Ok(client)
}
