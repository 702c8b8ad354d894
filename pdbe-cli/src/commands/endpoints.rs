use anyhow::Result;
use clap::Args;
use pdbe_client::Endpoint;
use serde_json::json;

#[derive(Args, Debug)]
pub struct Endpoints {
    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl Endpoints {
    pub fn execute(&self) -> Result<()> {
        match self.format.as_str() {
            "json" => {
                let catalog: Vec<serde_json::Value> = Endpoint::ALL
                    .into_iter()
                    .map(|endpoint| {
                        json!({
                            "name": endpoint.name(),
                            "path": format!("/pdb/entry/{}", endpoint.path_suffix()),
                            "chain_scoped": endpoint.supports_chain(),
                        })
                    })
                    .collect();
                let rendered = serde_json::to_string_pretty(&catalog)?;
                use std::io::Write;
                writeln!(std::io::stdout(), "{rendered}")?;
            }
            "text" => {
                use std::io::Write;
                let mut stdout = std::io::stdout();
                writeln!(stdout, "Supported PDBe entry endpoints ({}):", Endpoint::ALL.len())?;
                writeln!(stdout)?;
                for endpoint in Endpoint::ALL {
                    if endpoint.supports_chain() {
                        writeln!(
                            stdout,
                            "  {:<24} /pdb/entry/{}  (takes --chain)",
                            endpoint.name(),
                            endpoint.path_suffix()
                        )?;
                    } else {
                        writeln!(
                            stdout,
                            "  {:<24} /pdb/entry/{}",
                            endpoint.name(),
                            endpoint.path_suffix()
                        )?;
                    }
                }
            }
            _ => {
                tracing::error!("Unsupported format '{}'. Use 'text' or 'json'.", self.format);
                std::process::exit(1);
            }
        }

        Ok(())
    }
}
