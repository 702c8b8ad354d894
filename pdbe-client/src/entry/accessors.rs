//! Named accessors, one per catalog endpoint.
//!
//! Thin wrappers over [`PdbeClient::fetch`] for callers that prefer a
//! method per data category over passing [`Endpoint`] values around.

use serde_json::Value;

use crate::endpoint::Endpoint;
use crate::error::Result;

use super::PdbeClient;

impl PdbeClient {
    /// Fetch the summary of an entry
    ///
    /// Contains the title, the depositors, the deposition, release and
    /// revision dates, the experimental method, and related entries for
    /// split entries.
    ///
    /// # Arguments
    ///
    /// * `pdb_id` - 4-character PDB id code, e.g. `1cbs`
    ///
    /// # Errors
    ///
    /// Same as [`PdbeClient::fetch`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pdbe_client::PdbeClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PdbeClient::new();
    ///     let summary = client.fetch_summary("1cbs").await?;
    ///     let title = &summary["1cbs"][0]["title"];
    ///     println!("Title: {title}");
    ///     Ok(())
    /// }
    /// ```
    pub async fn fetch_summary(&self, pdb_id: &str) -> Result<Value> {
        self.fetch(Endpoint::Summary, pdb_id).await
    }

    /// Fetch details of the molecules (entities) modelled in an entry
    ///
    /// Each entity carries its id, description, type, polymer type where
    /// applicable, number of copies, sample preparation and source
    /// organisms.
    pub async fn fetch_molecules(&self, pdb_id: &str) -> Result<Value> {
        self.fetch(Endpoint::Molecules, pdb_id).await
    }

    /// Fetch publications associated with an entry, including journal,
    /// volume, pages, DOI and PubMed mappings.
    pub async fn fetch_publications(&self, pdb_id: &str) -> Result<Value> {
        self.fetch(Endpoint::Publications, pdb_id).await
    }

    /// Fetch details of the experiments that determined the structure
    ///
    /// One record per experiment. X-ray records carry resolution,
    /// spacegroup, cell dimensions and refinement statistics; NMR records
    /// carry spectrometer, sample and spectra details; EM records carry
    /// specimen, imaging and reconstruction details.
    pub async fn fetch_experiment(&self, pdb_id: &str) -> Result<Value> {
        self.fetch(Endpoint::Experiment, pdb_id).await
    }

    /// Fetch additional NMR resources for an entry, such as mappings to
    /// BMRB entries. Only NMR entries have data here.
    pub async fn fetch_nmr_resources(&self, pdb_id: &str) -> Result<Value> {
        self.fetch(Endpoint::NmrResources, pdb_id).await
    }

    /// Fetch the modelled instances of ligands: bound molecules that are
    /// not waters, with chemical component id, residue number and chain.
    pub async fn fetch_ligands(&self, pdb_id: &str) -> Result<Value> {
        self.fetch(Endpoint::Ligands, pdb_id).await
    }

    /// Fetch the modelled instances of chemically modified amino acids or
    /// nucleotides in protein, DNA or RNA chains.
    pub async fn fetch_modified_residues(&self, pdb_id: &str) -> Result<Value> {
        self.fetch(Endpoint::ModifiedResidues, pdb_id).await
    }

    /// Fetch the modelled instances of mutated amino acids, including
    /// engineered mutations and conflicts.
    pub async fn fetch_mutated_residues(&self, pdb_id: &str) -> Result<Value> {
        self.fetch(Endpoint::MutatedResidues, pdb_id).await
    }

    /// Fetch the release status of an entry
    ///
    /// The status code (`REL` for released entries) comes with title,
    /// authors, experimental method, and any obsolete or superseded
    /// relationships.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pdbe_client::PdbeClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PdbeClient::new();
    ///     let status = client.fetch_release_status("1cbs").await?;
    ///     println!("{}", status["1cbs"][0]["status_code"]);
    ///     Ok(())
    /// }
    /// ```
    pub async fn fetch_release_status(&self, pdb_id: &str) -> Result<Value> {
        self.fetch(Endpoint::ReleaseStatus, pdb_id).await
    }

    /// Fetch the ranges of each polymer that were observed in the
    /// experiment, chain by chain.
    pub async fn fetch_observed_ranges(&self, pdb_id: &str) -> Result<Value> {
        self.fetch(Endpoint::ObservedRanges, pdb_id).await
    }

    /// Fetch observed polymer ranges for a single chain
    ///
    /// # Arguments
    ///
    /// * `pdb_id` - 4-character PDB id code
    /// * `chain_id` - PDB chain id, e.g. `A`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pdbe_client::PdbeClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PdbeClient::new();
    ///     let coverage = client.fetch_observed_ranges_in_chain("1cbs", "A").await?;
    ///     println!("{coverage}");
    ///     Ok(())
    /// }
    /// ```
    pub async fn fetch_observed_ranges_in_chain(
        &self,
        pdb_id: &str,
        chain_id: &str,
    ) -> Result<Value> {
        self.fetch_in_chain(Endpoint::ObservedRanges, pdb_id, chain_id)
            .await
    }

    /// Fetch the residue ranges of regular secondary structure (helices
    /// and strands) in the protein chains of an entry.
    pub async fn fetch_secondary_structure(&self, pdb_id: &str) -> Result<Value> {
        self.fetch(Endpoint::SecondaryStructure, pdb_id).await
    }

    /// Fetch the residue listing of an entry: every residue except waters,
    /// modelled or not, with its observation status.
    pub async fn fetch_residues(&self, pdb_id: &str) -> Result<Value> {
        self.fetch(Endpoint::Residues, pdb_id).await
    }

    /// Fetch the residue listing restricted to a single chain
    ///
    /// # Arguments
    ///
    /// * `pdb_id` - 4-character PDB id code
    /// * `chain_id` - PDB chain id
    pub async fn fetch_residues_in_chain(&self, pdb_id: &str, chain_id: &str) -> Result<Value> {
        self.fetch_in_chain(Endpoint::Residues, pdb_id, chain_id)
            .await
    }

    /// Fetch the binding sites described in an entry, with the ligand,
    /// the site description and the residues involved.
    pub async fn fetch_binding_sites(&self, pdb_id: &str) -> Result<Value> {
        self.fetch(Endpoint::BindingSites, pdb_id).await
    }

    /// Fetch the downloadable files associated with an entry
    ///
    /// URLs and labels grouped by category: coordinate files (PDB and
    /// mmCIF), biological assemblies, FASTA sequences, SIFTS cross
    /// references, validation reports, structure factors and NMR
    /// constraints where they exist.
    pub async fn fetch_files(&self, pdb_id: &str) -> Result<Value> {
        self.fetch(Endpoint::Files, pdb_id).await
    }

    /// Fetch the ratio of observed residues per chain
    ///
    /// Chains within each entity are sorted by observed ratio descending,
    /// partial ratio ascending, then number of residues descending.
    pub async fn fetch_observed_residues_ratio(&self, pdb_id: &str) -> Result<Value> {
        self.fetch(Endpoint::ObservedResiduesRatio, pdb_id).await
    }

    /// Fetch the assemblies of an entry, with composition, symmetry and
    /// stoichiometry.
    pub async fn fetch_assembly(&self, pdb_id: &str) -> Result<Value> {
        self.fetch(Endpoint::Assembly, pdb_id).await
    }
}
