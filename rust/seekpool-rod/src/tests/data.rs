use std::sync::Arc;

use crate::{Locus, MemoryDataset, RodRecord};

/// A dataset with one record every `step` bases over `contigs` contigs of
/// `contig_len` bases each. Record values are `"{name}@{locus}"`.
pub fn regular_dataset(
    name: &str,
    contigs: u32,
    contig_len: u64,
    step: u64,
) -> Arc<MemoryDataset<Locus, String>> {
    let records = (0..contigs)
        .flat_map(|contig| {
            (0..contig_len)
                .step_by(step as usize)
                .map(move |start| Locus::new(contig, start))
        })
        .map(|locus| RodRecord::new(locus, format!("{name}@{locus}")))
        .collect();
    Arc::new(MemoryDataset::new(name, records).expect("sorted records"))
}

/// A dataset over `0..len` with a record at randomly chosen positions.
pub fn random_dataset(
    name: &str,
    len: u64,
    density: f64,
    seed: u64,
) -> Arc<MemoryDataset<u64, u64>> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let records = (0..len)
        .filter(|_| rng.f64() < density)
        .map(|position| RodRecord::new(position, position * 10))
        .collect();
    Arc::new(MemoryDataset::new(name, records).expect("sorted records"))
}

/// Splits `0..len` of every contig into consecutive shards of `shard_len`.
pub fn shards(contigs: u32, contig_len: u64, shard_len: u64) -> Vec<std::ops::Range<Locus>> {
    (0..contigs)
        .flat_map(|contig| {
            (0..contig_len).step_by(shard_len as usize).map(move |start| {
                Locus::new(contig, start)..Locus::new(contig, (start + shard_len).min(contig_len))
            })
        })
        .collect()
}
