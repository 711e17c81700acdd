use std::collections::HashMap;
use std::hash::BuildHasher;

use fxhash::FxHashSet;
use log::debug;

use crate::errors::ReconcileError;
use crate::models::{Coordinate, RecordTriple};

///
/// Lookup of the current dbSNP coordinate key for an id.
///
pub trait CoordinateLookup {
    fn coordinate_of(&self, snp_id: &str) -> Option<&str>;
}

impl<S: BuildHasher> CoordinateLookup for HashMap<String, String, S> {
    fn coordinate_of(&self, snp_id: &str) -> Option<&str> {
        self.get(snp_id).map(String::as_str)
    }
}

///
/// Edits that bring a genotype dataset in line with dbSNP. Every list keeps
/// the order of the records that produced it.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditInstructions {
    /// ids to drop
    pub to_delete: Vec<String>,
    /// (old id, new id)
    pub to_rename: Vec<(String, String)>,
    /// (id, new position)
    pub to_reposition: Vec<(String, String)>,
    /// (id, new chromosome)
    pub to_rechromosome: Vec<(String, String)>,
}

impl EditInstructions {
    pub fn is_empty(&self) -> bool {
        self.to_delete.is_empty()
            && self.to_rename.is_empty()
            && self.to_reposition.is_empty()
            && self.to_rechromosome.is_empty()
    }

    ///
    /// Queue position and chromosome updates for `snp_id` wherever its
    /// dbSNP coordinate differs from the one in the genotype file.
    ///
    fn compare_coordinates(
        &mut self,
        snp_id: &str,
        original: &str,
        current: &str,
        original_id: &str,
    ) -> Result<(), ReconcileError> {
        debug!("original_coord={original} updated_coord={current}");

        let current = Coordinate::parse(snp_id, current)?;
        let original = Coordinate::parse(original_id, original)?;

        if current.position != original.position {
            self.to_reposition
                .push((snp_id.to_string(), current.position));
        }

        if current.chromosome != original.chromosome {
            self.to_rechromosome
                .push((snp_id.to_string(), current.chromosome));
        }

        Ok(())
    }
}

///
/// Turn resolved genotype records into edit instructions.
///
/// Per record:
/// - deleted id: delete it
/// - merged id whose target is also an original id of this batch: delete it,
///   the native record carries the variant
/// - merged id whose target has a dbSNP coordinate: rename it, then compare
///   coordinates under the new id
/// - merged id whose target has no dbSNP coordinate: delete it
/// - unchanged id with a dbSNP coordinate: compare coordinates
/// - unchanged id without one: leave it alone
///
/// # Arguments
/// - triples: resolved records, in genotype file order
/// - reference: current coordinates for (at least) every id in the batch
///
pub fn classify<L>(triples: &[RecordTriple], reference: &L) -> Result<EditInstructions, ReconcileError>
where
    L: CoordinateLookup + ?Sized,
{
    let originals: FxHashSet<&str> = triples.iter().map(|t| t.snp_id.as_str()).collect();
    let mut edits = EditInstructions::default();

    for triple in triples {
        let snp_id = triple.snp_id.as_str();

        let Some(resolved) = triple.resolved.as_deref() else {
            edits.to_delete.push(snp_id.to_string());
            continue;
        };

        if triple.is_merged() {
            if originals.contains(resolved) {
                edits.to_delete.push(snp_id.to_string());
                continue;
            }

            match reference.coordinate_of(resolved) {
                Some(current) => {
                    edits
                        .to_rename
                        .push((snp_id.to_string(), resolved.to_string()));
                    edits.compare_coordinates(resolved, &triple.coordinate, current, snp_id)?;
                }
                None => edits.to_delete.push(snp_id.to_string()),
            }
        } else if let Some(current) = reference.coordinate_of(snp_id) {
            edits.compare_coordinates(snp_id, &triple.coordinate, current, snp_id)?;
        }
    }

    Ok(edits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxhash::FxHashMap;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn reference(entries: &[(&str, &str)]) -> FxHashMap<String, String> {
        entries
            .iter()
            .map(|(id, coord)| (id.to_string(), coord.to_string()))
            .collect()
    }

    fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    #[rstest]
    fn test_unchanged_record_produces_nothing() {
        let triples = vec![RecordTriple::new("rs1", "1:1000", Some("rs1".to_string()))];
        let edits = classify(&triples, &reference(&[("rs1", "1:1000")])).unwrap();

        assert!(edits.is_empty());
    }

    #[rstest]
    fn test_moved_position() {
        let triples = vec![RecordTriple::new("rs1", "1:1000", Some("rs1".to_string()))];
        let edits = classify(&triples, &reference(&[("rs1", "1:2000")])).unwrap();

        assert_eq!(edits.to_reposition, pairs(&[("rs1", "2000")]));
        assert!(edits.to_delete.is_empty());
        assert!(edits.to_rename.is_empty());
        assert!(edits.to_rechromosome.is_empty());
    }

    #[rstest]
    fn test_merged_record_is_renamed_and_compared_under_new_id() {
        let triples = vec![RecordTriple::new("rs1", "1:1000", Some("rs2".to_string()))];
        let edits = classify(&triples, &reference(&[("rs2", "2:1000")])).unwrap();

        assert_eq!(edits.to_rename, pairs(&[("rs1", "rs2")]));
        assert_eq!(edits.to_rechromosome, pairs(&[("rs2", "2")]));
        assert!(edits.to_reposition.is_empty());
        assert!(edits.to_delete.is_empty());
    }

    #[rstest]
    fn test_merge_target_already_in_batch() {
        let triples = vec![
            RecordTriple::new("rs1", "1:1000", Some("rs2".to_string())),
            RecordTriple::new("rs2", "1:1000", Some("rs2".to_string())),
        ];
        let edits = classify(&triples, &reference(&[("rs2", "1:1500")])).unwrap();

        assert_eq!(edits.to_delete, vec!["rs1".to_string()]);
        assert!(edits.to_rename.is_empty());
        // rs2 is reconciled on its own
        assert_eq!(edits.to_reposition, pairs(&[("rs2", "1500")]));
    }

    #[rstest]
    fn test_deleted_record() {
        let triples = vec![RecordTriple::new("rs3", "1:1000", None)];
        let edits = classify(&triples, &reference(&[("rs3", "5:5")])).unwrap();

        assert_eq!(edits.to_delete, vec!["rs3".to_string()]);
        assert!(edits.to_rename.is_empty());
        assert!(edits.to_reposition.is_empty());
        assert!(edits.to_rechromosome.is_empty());
    }

    #[rstest]
    fn test_merge_target_without_reference_coordinate_is_deleted() {
        let triples = vec![RecordTriple::new("rs7", "1:7000", Some("rs70".to_string()))];
        let edits = classify(&triples, &reference(&[])).unwrap();

        assert_eq!(edits.to_delete, vec!["rs7".to_string()]);
        assert!(edits.to_rename.is_empty());
    }

    #[rstest]
    fn test_unknown_record_is_left_alone() {
        let triples = vec![RecordTriple::new("rs8", "1:8000", Some("rs8".to_string()))];
        let edits = classify(&triples, &reference(&[])).unwrap();

        assert!(edits.is_empty());
    }

    #[rstest]
    fn test_position_and_chromosome_both_change() {
        let triples = vec![RecordTriple::new("rs9", "X:9000", Some("rs9".to_string()))];
        let edits = classify(&triples, &reference(&[("rs9", "Y:9500")])).unwrap();

        assert_eq!(edits.to_reposition, pairs(&[("rs9", "9500")]));
        assert_eq!(edits.to_rechromosome, pairs(&[("rs9", "Y")]));
    }

    #[rstest]
    fn test_output_follows_input_order() {
        let triples = vec![
            RecordTriple::new("rs30", "1:1", None),
            RecordTriple::new("rs10", "1:1", Some("rs10".to_string())),
            RecordTriple::new("rs20", "1:1", None),
            RecordTriple::new("rs5", "1:1", Some("rs5".to_string())),
        ];
        let edits = classify(&triples, &reference(&[("rs10", "1:2"), ("rs5", "1:3")])).unwrap();

        assert_eq!(edits.to_delete, vec!["rs30".to_string(), "rs20".to_string()]);
        assert_eq!(edits.to_reposition, pairs(&[("rs10", "2"), ("rs5", "3")]));
    }

    #[rstest]
    #[case(RecordTriple::new("rs1", "1-1000", Some("rs1".to_string())), "1:1000", "rs1")]
    #[case(RecordTriple::new("rs1", "1:1000", Some("rs1".to_string())), "11000", "rs1")]
    #[case(RecordTriple::new("rs1", "1:1000", Some("rs2".to_string())), "broken", "rs2")]
    fn test_malformed_coordinate_is_an_error(
        #[case] triple: RecordTriple,
        #[case] current: &str,
        #[case] offender: &str,
    ) {
        let lookup = reference(&[("rs1", current), ("rs2", current)]);
        let err = classify(&[triple], &lookup).unwrap_err();

        match err {
            ReconcileError::MalformedCoordinate { snp_id, .. } => assert_eq!(snp_id, offender),
            other => panic!("unexpected error: {other}"),
        }
    }
}
