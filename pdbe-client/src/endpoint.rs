//! Catalog of PDBe entry-level endpoints.
//!
//! Every endpoint the client can reach is one row in this catalog: a
//! symbolic name, the path suffix it maps to under `/pdb/entry/`, and
//! whether it accepts a chain-scoped form. Adding an endpoint means adding
//! a variant and its three match arms; the request path is shared.

use std::fmt;
use std::str::FromStr;

use crate::error::PdbeError;

/// One entry-level PDBe API endpoint.
///
/// The symbolic names (used by [`Endpoint::from_str`] and [`fmt::Display`])
/// describe the data category; the wire-level path suffixes are historical
/// and sometimes differ, e.g. [`Endpoint::Ligands`] maps to
/// `ligand_monomers` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Title, depositors, release and revision dates, experimental method
    Summary,
    /// Entities (protein, nucleic acid, ligand, water) modelled in the entry
    Molecules,
    /// Associated publications, including PubMed and DOI mappings
    Publications,
    /// Experimental method details: resolution, cell, spacegroup
    Experiment,
    /// NMR experiment resources (BMRB mappings, restraint files)
    NmrResources,
    /// Bound small molecules with residue numbers and chain locations
    Ligands,
    /// Modified amino acids or nucleotides (chemically modified residues)
    ModifiedResidues,
    /// Mutated amino acids or nucleotides, engineered or conflicting
    MutatedResidues,
    /// Release status code and any obsolete/superseded relationships
    ReleaseStatus,
    /// Ranges of the polymer observed in the experiment (per-chain coverage)
    ObservedRanges,
    /// Helix and strand assignments per chain
    SecondaryStructure,
    /// Residue listing with model and observation status
    Residues,
    /// Binding sites described in the entry and their involved residues
    BindingSites,
    /// Downloadable files associated with the entry, grouped by category
    Files,
    /// Fraction of polymer residues observed in the model
    ObservedResiduesRatio,
    /// Assemblies of the entry with composition and symmetry
    Assembly,
}

impl Endpoint {
    /// Every endpoint in the catalog, in documentation order.
    pub const ALL: [Endpoint; 16] = [
        Endpoint::Summary,
        Endpoint::Molecules,
        Endpoint::Publications,
        Endpoint::Experiment,
        Endpoint::NmrResources,
        Endpoint::Ligands,
        Endpoint::ModifiedResidues,
        Endpoint::MutatedResidues,
        Endpoint::ReleaseStatus,
        Endpoint::ObservedRanges,
        Endpoint::SecondaryStructure,
        Endpoint::Residues,
        Endpoint::BindingSites,
        Endpoint::Files,
        Endpoint::ObservedResiduesRatio,
        Endpoint::Assembly,
    ];

    /// Symbolic name, as accepted by [`Endpoint::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            Endpoint::Summary => "summary",
            Endpoint::Molecules => "molecules",
            Endpoint::Publications => "publications",
            Endpoint::Experiment => "experiment",
            Endpoint::NmrResources => "nmr_resources",
            Endpoint::Ligands => "ligands",
            Endpoint::ModifiedResidues => "modified_residues",
            Endpoint::MutatedResidues => "mutated_residues",
            Endpoint::ReleaseStatus => "release_status",
            Endpoint::ObservedRanges => "observed_ranges",
            Endpoint::SecondaryStructure => "secondary_structure",
            Endpoint::Residues => "residues",
            Endpoint::BindingSites => "binding_sites",
            Endpoint::Files => "files",
            Endpoint::ObservedResiduesRatio => "observed_residues_ratio",
            Endpoint::Assembly => "assembly",
        }
    }

    /// Path segment under `/pdb/entry/` on the wire.
    pub fn path_suffix(self) -> &'static str {
        match self {
            Endpoint::Summary => "summary",
            Endpoint::Molecules => "molecules",
            Endpoint::Publications => "publications",
            Endpoint::Experiment => "experiment",
            Endpoint::NmrResources => "nmr_resources",
            Endpoint::Ligands => "ligand_monomers",
            Endpoint::ModifiedResidues => "modified_AA_or_NA",
            Endpoint::MutatedResidues => "mutated_AA_or_NA",
            Endpoint::ReleaseStatus => "status",
            Endpoint::ObservedRanges => "polymer_coverage",
            Endpoint::SecondaryStructure => "secondary_structure",
            Endpoint::Residues => "residue_listing",
            Endpoint::BindingSites => "binding_sites",
            Endpoint::Files => "files",
            Endpoint::ObservedResiduesRatio => "observed_residues_ratio",
            Endpoint::Assembly => "assembly",
        }
    }

    /// Whether the endpoint accepts an additional `/chain/{chain_id}` path
    /// segment restricting the response to one chain.
    pub fn supports_chain(self) -> bool {
        matches!(self, Endpoint::ObservedRanges | Endpoint::Residues)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Endpoint {
    type Err = PdbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endpoint::ALL
            .iter()
            .copied()
            .find(|endpoint| endpoint.name() == s)
            .ok_or_else(|| PdbeError::UnknownEndpoint {
                name: s.to_string(),
            })
    }
}
