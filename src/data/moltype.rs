// moltype.rs - Molecule type parsing and inference

use std::fmt;
use std::str::FromStr;

use crate::data::Alignment;

/// Molecule type of an alignment. Selected on the command line, or inferred
/// from residue content when unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Moltype {
    Dna,
    Rna,
    Protein,
}

impl FromStr for Moltype {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dna" => Ok(Moltype::Dna),
            "rna" => Ok(Moltype::Rna),
            "protein" => Ok(Moltype::Protein),
            _ => Err(format!(
                "Invalid molecule type: {}. Use: dna, rna, protein",
                s
            )),
        }
    }
}

impl fmt::Display for Moltype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Moltype::Dna => write!(f, "dna"),
            Moltype::Rna => write!(f, "rna"),
            Moltype::Protein => write!(f, "protein"),
        }
    }
}

impl Moltype {
    /// DATATYPE keyword for NEXUS DATA blocks.
    pub fn nexus_datatype(&self) -> &'static str {
        match self {
            Moltype::Dna => "DNA",
            Moltype::Rna => "RNA",
            Moltype::Protein => "PROTEIN",
        }
    }
}

/// Infer the molecule type from residue content. Rows made of ≥ 90%
/// nucleotide symbols (ACGTUN, case-insensitive, gaps excluded) are called
/// nucleic; a U anywhere among them selects RNA over DNA.
pub fn infer_moltype(aln: &Alignment) -> Moltype {
    let mut residues = 0usize;
    let mut nucleotide = 0usize;
    let mut has_u = false;

    for row in &aln.rows {
        for &c in &row.seq {
            if c == b'-' {
                continue;
            }
            residues += 1;
            match c.to_ascii_uppercase() {
                b'A' | b'C' | b'G' | b'T' | b'N' => nucleotide += 1,
                b'U' => {
                    nucleotide += 1;
                    has_u = true;
                }
                _ => {}
            }
        }
    }

    if residues == 0 || nucleotide as f64 / residues as f64 >= 0.9 {
        if has_u {
            Moltype::Rna
        } else {
            Moltype::Dna
        }
    } else {
        Moltype::Protein
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Row;

    fn aln(seqs: &[&str]) -> Alignment {
        Alignment::new(
            seqs.iter()
                .enumerate()
                .map(|(i, s)| Row::new(format!("s{}", i), None, s.as_bytes().to_vec()))
                .collect(),
        )
    }

    #[test]
    fn test_moltype_from_str() {
        assert_eq!("dna".parse::<Moltype>(), Ok(Moltype::Dna));
        assert_eq!("RNA".parse::<Moltype>(), Ok(Moltype::Rna));
        assert_eq!("Protein".parse::<Moltype>(), Ok(Moltype::Protein));
        assert!("peptide".parse::<Moltype>().is_err());
    }

    #[test]
    fn test_infer_dna() {
        assert_eq!(infer_moltype(&aln(&["ACGT-ACGT", "ACGTNACGT"])), Moltype::Dna);
    }

    #[test]
    fn test_infer_rna() {
        assert_eq!(infer_moltype(&aln(&["ACGU", "ACGU"])), Moltype::Rna);
    }

    #[test]
    fn test_infer_protein() {
        assert_eq!(infer_moltype(&aln(&["MKVLWQEF", "MKVLWPEF"])), Moltype::Protein);
    }

    #[test]
    fn test_infer_gaps_only() {
        // No residues at all defaults to DNA
        assert_eq!(infer_moltype(&aln(&["----", "----"])), Moltype::Dna);
    }
}
