use fxhash::FxHashSet;

use crate::errors::ReconcileError;
use crate::models::{DeletionSet, GenotypeRecord, MergeMap, RecordTriple};

///
/// Find the current dbSNP id for a possibly obsolete one.
///
/// Returns `None` when `snp_id` itself was deleted. Otherwise merge links are
/// followed until the id is no longer a merge source. Only the starting id is
/// checked against the deletion set: a chain that passes through a deleted id
/// keeps going.
///
/// The merge map is assumed to be acyclic. A cycle makes this loop forever;
/// use [`Resolver::with_max_depth`] when the input can't be trusted.
///
pub fn resolve(snp_id: &str, deletions: &DeletionSet, merges: &MergeMap) -> Option<String> {
    if deletions.contains(snp_id) {
        return None;
    }

    let mut current = snp_id;
    while let Some(next) = merges.get(current) {
        current = next;
    }

    Some(current.to_string())
}

///
/// Resolver bound to one deletion set and merge map, with an optional cap
/// on the number of merge links followed per id.
///
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    deletions: &'a DeletionSet,
    merges: &'a MergeMap,
    max_depth: Option<usize>,
}

impl<'a> Resolver<'a> {
    pub fn new(deletions: &'a DeletionSet, merges: &'a MergeMap) -> Self {
        Resolver {
            deletions,
            merges,
            max_depth: None,
        }
    }

    ///
    /// Fail with [`ReconcileError::MergeChainTooLong`] instead of following
    /// more than `max_depth` merge links. `0` removes the cap.
    ///
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = (max_depth > 0).then_some(max_depth);
        self
    }

    pub fn resolve(&self, snp_id: &str) -> Result<Option<String>, ReconcileError> {
        let Some(max_depth) = self.max_depth else {
            return Ok(resolve(snp_id, self.deletions, self.merges));
        };

        if self.deletions.contains(snp_id) {
            return Ok(None);
        }

        let mut current = snp_id;
        let mut depth = 0;
        while let Some(next) = self.merges.get(current) {
            if depth == max_depth {
                return Err(ReconcileError::MergeChainTooLong {
                    snp_id: snp_id.to_string(),
                    max_depth,
                });
            }
            current = next;
            depth += 1;
        }

        Ok(Some(current.to_string()))
    }
}

///
/// Resolve every genotype record once, keeping input order.
///
pub fn build_triples(
    records: &[GenotypeRecord],
    resolver: &Resolver,
) -> Result<Vec<RecordTriple>, ReconcileError> {
    records
        .iter()
        .map(|record| {
            let resolved = resolver.resolve(&record.snp_id)?;
            Ok(RecordTriple::new(
                record.snp_id.as_str(),
                record.coordinate(),
                resolved,
            ))
        })
        .collect()
}

///
/// Every id a batch can ask dbSNP about: the original ids plus the ids they
/// resolved to. Used to keep the reference coordinate map small.
///
pub fn identifiers_of_interest(triples: &[RecordTriple]) -> FxHashSet<String> {
    let mut ids = FxHashSet::default();
    for triple in triples {
        ids.insert(triple.snp_id.clone());
        if let Some(resolved) = &triple.resolved {
            ids.insert(resolved.clone());
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn deletions() -> DeletionSet {
        DeletionSet::from_iter(["rs3", "rs20", "rs9"])
    }

    #[fixture]
    fn merges() -> MergeMap {
        MergeMap::from_iter([
            ("rs1", "rs2"),
            ("rs2", "rs5"),
            ("rs10", "rs20"),
            ("rs20", "rs21"),
            ("rs9", "rs90"),
        ])
    }

    #[rstest]
    #[case("rs1", Some("rs5"))]
    #[case("rs2", Some("rs5"))]
    #[case("rs5", Some("rs5"))]
    #[case("rs3", None)]
    #[case("rs404", Some("rs404"))]
    fn test_resolve(
        deletions: DeletionSet,
        merges: MergeMap,
        #[case] snp_id: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(
            resolve(snp_id, &deletions, &merges),
            expected.map(String::from)
        );
    }

    #[rstest]
    fn test_deleted_id_wins_over_merge(deletions: DeletionSet, merges: MergeMap) {
        // rs9 is both deleted and a merge source
        assert_eq!(resolve("rs9", &deletions, &merges), None);
    }

    #[rstest]
    fn test_deleted_id_mid_chain_is_followed(deletions: DeletionSet, merges: MergeMap) {
        // rs20 is deleted, but only the starting id is checked
        assert_eq!(
            resolve("rs10", &deletions, &merges),
            Some("rs21".to_string())
        );
    }

    #[rstest]
    fn test_resolve_is_idempotent(deletions: DeletionSet, merges: MergeMap) {
        for snp_id in ["rs1", "rs2", "rs10", "rs404"] {
            let once = resolve(snp_id, &deletions, &merges).unwrap();
            let twice = resolve(&once, &deletions, &merges).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[rstest]
    fn test_bounded_resolver_matches_unbounded(deletions: DeletionSet, merges: MergeMap) {
        let resolver = Resolver::new(&deletions, &merges).with_max_depth(2);
        for snp_id in ["rs1", "rs3", "rs10", "rs404"] {
            assert_eq!(
                resolver.resolve(snp_id).unwrap(),
                resolve(snp_id, &deletions, &merges)
            );
        }
    }

    #[rstest]
    fn test_bounded_resolver_stops_on_cycle() {
        let deletions = DeletionSet::new();
        let merges = MergeMap::from_iter([("rs1", "rs2"), ("rs2", "rs1")]);
        let resolver = Resolver::new(&deletions, &merges).with_max_depth(16);

        assert_eq!(
            resolver.resolve("rs1"),
            Err(ReconcileError::MergeChainTooLong {
                snp_id: "rs1".to_string(),
                max_depth: 16,
            })
        );
    }

    #[rstest]
    fn test_chain_longer_than_cap(deletions: DeletionSet, merges: MergeMap) {
        let resolver = Resolver::new(&deletions, &merges).with_max_depth(1);
        assert!(resolver.resolve("rs1").is_err());
        assert_eq!(resolver.resolve("rs2").unwrap(), Some("rs5".to_string()));
    }

    #[rstest]
    fn test_build_triples_keeps_order(deletions: DeletionSet, merges: MergeMap) {
        let records = vec![
            GenotypeRecord {
                chromosome: "1".to_string(),
                snp_id: "rs3".to_string(),
                position: "300".to_string(),
                ..Default::default()
            },
            GenotypeRecord {
                chromosome: "2".to_string(),
                snp_id: "rs1".to_string(),
                position: "100".to_string(),
                ..Default::default()
            },
        ];
        let resolver = Resolver::new(&deletions, &merges);

        let triples = build_triples(&records, &resolver).unwrap();

        assert_eq!(
            triples,
            vec![
                RecordTriple::new("rs3", "1:300", None),
                RecordTriple::new("rs1", "2:100", Some("rs5".to_string())),
            ]
        );

        let ids = identifiers_of_interest(&triples);
        assert_eq!(ids.len(), 3);
        assert!(ids.contains("rs5"));
    }
}
