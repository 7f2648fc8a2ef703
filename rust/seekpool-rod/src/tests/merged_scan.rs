use itertools::Itertools;

use crate::{
    Interval, Locus, ReferenceOrderedDataSource, Shard,
    tests::data::regular_dataset,
};

#[test]
fn test_merged_scan_over_named_sources() {
    let mut sources = [
        ReferenceOrderedDataSource::new(regular_dataset("dbsnp", 2, 2000, 5)),
        ReferenceOrderedDataSource::new(regular_dataset("genes", 2, 2000, 40)),
    ];
    let names = sources.iter().map(|s| s.name().to_string()).collect::<Vec<_>>();
    assert_eq!(names, ["dbsnp", "genes"]);

    let intervals = (0..2u32)
        .flat_map(|contig| (0..2000u64).step_by(250).map(move |start| (contig, start)))
        .map(|(contig, start)| {
            Interval::new(Locus::new(contig, start), Locus::new(contig, start + 250)).unwrap()
        })
        .collect::<Vec<_>>();

    let mut merged = Vec::new();
    for interval in &intervals {
        let mut per_source = Vec::new();
        for source in sources.iter_mut() {
            let name = source.name().to_string();
            let mut cursor = source.seek(interval).unwrap();
            cursor.seek_forward(&interval.start());
            let records = cursor
                .take_before(interval.end())
                .map(|r| (r.position, name.clone()))
                .collect::<Vec<_>>();
            assert!(records.iter().all(|(p, _)| interval.contains(p)));
            source.close(cursor).unwrap();
            per_source.push(records);
        }
        merged.extend(
            per_source
                .into_iter()
                .kmerge_by(|a, b| a.0 < b.0 || (a.0 == b.0 && a.1 < b.1)),
        );
    }

    assert_eq!(merged.len(), 2 * (400 + 50));
    assert!(merged.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(merged.iter().filter(|(_, name)| name == "genes").count(), 100);
    for source in &sources {
        assert_eq!(source.pool().resource_count(), 1);
    }
}
