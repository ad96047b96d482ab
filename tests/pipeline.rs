//! Pipeline run over the bundled demo input.

use std::path::Path;

use bio_aligner::pipeline::{align_all_pairs, read_sequences, translate_all};
use bio_aligner::{Aligner, ProteinSequencer, GAP};

fn strip_gaps(strand: &[u8]) -> Vec<u8> {
    strand.iter().copied().filter(|&b| b != GAP).collect()
}

#[test]
fn demo_input_aligns_all_pairs() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/dna.txt");
    let dna_seqs = read_sequences(&path).unwrap();
    assert_eq!(dna_seqs.len(), 5);

    let sequencer = ProteinSequencer::new();
    let proteins = translate_all(&sequencer, &dna_seqs).unwrap();
    assert_eq!(proteins.len(), 5);
    assert_eq!(
        proteins[3],
        b"MKHRGGSYGYCYGFGCYCEGLSDSTPTWPLPNKTCSGK".to_vec()
    );

    // Five distinct proteins give every ordered pair.
    let aligner = Aligner::default();
    let results = align_all_pairs(&aligner, &proteins);
    assert_eq!(results.len(), 20);

    for result in &results {
        assert_eq!(result.aligned_x.len(), result.aligned_y.len());
    }

    // The strands of the first result project back onto the first and
    // second proteins.
    assert_eq!(strip_gaps(&results[0].aligned_x), proteins[0]);
    assert_eq!(strip_gaps(&results[0].aligned_y), proteins[1]);
}
