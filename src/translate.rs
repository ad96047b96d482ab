//! DNA to protein translation.
//!
//! Converts a DNA sequence into a protein sequence with the standard genetic
//! code, keeping the longest open reading frame found across the three
//! forward reading frames.

use crate::BioAlignerError;

pub const CODON_LENGTH: usize = 3;
pub const START_CODON: &[u8] = b"ATG";
pub const STOP_CODONS: [&[u8]; 3] = [b"TAA", b"TGA", b"TAG"];

/// Standard genetic code, indexed by 2-bit packed codon (T=0, C=1, A=2, G=3).
/// Stop codons map to `*`.
const STANDARD_CODE: &[u8; 64] = b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

/// Codon-to-residue translation table.
pub struct CodonTable {
    table: [u8; 64],
}

impl CodonTable {
    pub fn standard() -> Self {
        Self {
            table: *STANDARD_CODE,
        }
    }

    /// Translates a codon to an amino acid. Returns `b'X'` for codons that
    /// are not exactly three valid nucleotides.
    pub fn residue(&self, codon: &[u8]) -> u8 {
        if codon.len() != CODON_LENGTH {
            return b'X';
        }
        let mut idx = 0usize;
        for &base in codon {
            idx <<= 2;
            match base {
                b'T' => idx |= 0,
                b'C' => idx |= 1,
                b'A' => idx |= 2,
                b'G' => idx |= 3,
                _ => return b'X',
            }
        }
        self.table[idx]
    }
}

/// Translates DNA sequences into protein sequences by codon-table lookup.
pub struct ProteinSequencer {
    table: CodonTable,
}

impl ProteinSequencer {
    pub fn new() -> Self {
        Self {
            table: CodonTable::standard(),
        }
    }

    /// Translates a DNA sequence and returns the longest open reading frame
    /// as a protein sequence.
    ///
    /// The input is uppercased first and must contain only the nucleotides
    /// A, C, G and T. All three forward reading frames are scanned; earlier
    /// frames keep ties.
    pub fn longest_protein_orf(&self, dna: &str) -> Result<Vec<u8>, BioAlignerError> {
        let seq = check_and_clean(dna)?;

        let mut longest = Vec::new();
        for frame in 0..CODON_LENGTH.min(seq.len()) {
            let orf = self.protein_orf(&seq[frame..]);
            if orf.len() > longest.len() {
                longest = orf;
            }
        }
        Ok(longest)
    }

    /// Scans one reading frame in codon steps. Leftover bases past the last
    /// whole codon are ignored.
    fn protein_orf(&self, frame: &[u8]) -> Vec<u8> {
        let mut orf = Vec::new();
        let mut in_frame = false;

        for codon in frame.chunks_exact(CODON_LENGTH) {
            if codon == START_CODON {
                orf.push(self.table.residue(codon));
                in_frame = true;
            } else if in_frame && is_stop_codon(codon) {
                // A stop codon discards the open frame; only a trailing ORF
                // with no terminating stop survives the scan.
                orf.clear();
                in_frame = false;
            } else if in_frame {
                orf.push(self.table.residue(codon));
            }
        }

        orf
    }
}

impl Default for ProteinSequencer {
    fn default() -> Self {
        Self::new()
    }
}

fn is_stop_codon(codon: &[u8]) -> bool {
    STOP_CODONS.iter().any(|&stop| stop == codon)
}

/// Uppercases and validates a DNA sequence: non-empty, nucleotides only.
fn check_and_clean(dna: &str) -> Result<Vec<u8>, BioAlignerError> {
    let trimmed = dna.trim();
    if trimmed.is_empty() {
        return Err(BioAlignerError::EmptySequence);
    }

    let mut seq = Vec::with_capacity(trimmed.len());
    for c in trimmed.chars() {
        match c.to_ascii_uppercase() {
            up @ ('A' | 'C' | 'G' | 'T') => seq.push(up as u8),
            _ => return Err(BioAlignerError::InvalidNucleotide(c)),
        }
    }
    Ok(seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_code() {
        let table = CodonTable::standard();

        // ATG -> M (start codon)
        assert_eq!(table.residue(b"ATG"), b'M');

        // TAA, TGA, TAG -> * (stop codons)
        assert_eq!(table.residue(b"TAA"), b'*');
        assert_eq!(table.residue(b"TGA"), b'*');
        assert_eq!(table.residue(b"TAG"), b'*');

        assert_eq!(table.residue(b"TTT"), b'F');
        assert_eq!(table.residue(b"TGG"), b'W');
    }

    #[test]
    fn test_invalid_codons() {
        let table = CodonTable::standard();
        assert_eq!(table.residue(b"NNN"), b'X');
        assert_eq!(table.residue(b"AT"), b'X');
        assert_eq!(table.residue(b"ATGA"), b'X');
    }

    #[test]
    fn test_orf_requires_start_codon() {
        let sequencer = ProteinSequencer::new();
        // No ATG anywhere, so no frame ever opens.
        assert_eq!(sequencer.longest_protein_orf("CCCCCC").unwrap(), b"");
    }

    #[test]
    fn test_stop_codon_discards_open_frame() {
        let sequencer = ProteinSequencer::new();
        // Frame 1 reads ATG GCA TAA: the stop discards the M-A prefix and
        // nothing follows, so the surviving ORF comes up empty.
        assert_eq!(sequencer.longest_protein_orf("ATGGCATAA").unwrap(), b"");
        // Without the stop, the same frame yields MA.
        assert_eq!(sequencer.longest_protein_orf("ATGGCA").unwrap(), b"MA");
    }

    #[test]
    fn test_lowercase_input_accepted() {
        let sequencer = ProteinSequencer::new();
        assert_eq!(
            sequencer.longest_protein_orf("atggca").unwrap(),
            sequencer.longest_protein_orf("ATGGCA").unwrap()
        );
    }

    #[test]
    fn test_rejects_invalid_nucleotide() {
        let sequencer = ProteinSequencer::new();
        let err = sequencer.longest_protein_orf("atz").unwrap_err();
        assert!(matches!(err, BioAlignerError::InvalidNucleotide('z')));
    }

    #[test]
    fn test_rejects_empty_sequence() {
        let sequencer = ProteinSequencer::new();
        let err = sequencer.longest_protein_orf("").unwrap_err();
        assert!(matches!(err, BioAlignerError::EmptySequence));

        let err = sequencer.longest_protein_orf("   ").unwrap_err();
        assert!(matches!(err, BioAlignerError::EmptySequence));
    }

    #[test]
    fn test_short_sequences_have_no_orf() {
        let sequencer = ProteinSequencer::new();
        assert_eq!(sequencer.longest_protein_orf("A").unwrap(), b"");
        assert_eq!(sequencer.longest_protein_orf("AT").unwrap(), b"");
    }
}
