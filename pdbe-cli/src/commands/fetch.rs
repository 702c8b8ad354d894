use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use pdbe_client::{report, Endpoint};

use super::create_client;

#[derive(Args, Debug)]
pub struct Fetch {
    /// Endpoint name (run `pdbe-cli endpoints` for the catalog)
    pub endpoint: Endpoint,

    /// 4-character PDB id code (e.g. 1cbs)
    pub pdb_id: String,

    /// Restrict the query to one chain (observed_ranges and residues only)
    #[arg(short, long)]
    pub chain: Option<String>,

    /// Write the JSON to this path instead of discarding it after printing
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Do not print the JSON to stdout
    #[arg(short, long)]
    pub quiet: bool,

    /// HTTP request timeout in seconds (default: 30)
    #[arg(short, long)]
    pub timeout: Option<u64>,
}

impl Fetch {
    pub async fn execute_with_config(&self, base_url: Option<&str>) -> Result<()> {
        let client = create_client(base_url, self.timeout)?;

        tracing::info!(
            endpoint = %self.endpoint,
            pdb_id = %self.pdb_id,
            "Fetching PDBe endpoint"
        );

        let value = match &self.chain {
            Some(chain) => {
                self.endpoint_supports_chain_or_hint()?;
                client
                    .fetch_in_chain(self.endpoint, &self.pdb_id, chain)
                    .await?
            }
            None => client.fetch(self.endpoint, &self.pdb_id).await?,
        };

        if !self.quiet {
            report::print_json(&value)?;
        }

        if let Some(ref path) = self.output {
            report::write_json(&value, path)?;
            tracing::info!(path = %path.display(), "Saved JSON output");
        }

        Ok(())
    }

    /// Fail early with the list of chain-aware endpoints in the message.
    fn endpoint_supports_chain_or_hint(&self) -> Result<()> {
        if self.endpoint.supports_chain() {
            return Ok(());
        }
        let chain_aware: Vec<&str> = Endpoint::ALL
            .into_iter()
            .filter(|endpoint| endpoint.supports_chain())
            .map(|endpoint| endpoint.name())
            .collect();
        anyhow::bail!(
            "endpoint '{}' does not take --chain; chain-scoped endpoints are: {}",
            self.endpoint,
            chain_aware.join(", ")
        )
    }
}
