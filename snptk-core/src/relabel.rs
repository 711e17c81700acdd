use std::collections::HashMap;
use std::hash::BuildHasher;

use log::debug;

use crate::models::GenotypeRecord;

///
/// Lookup of the dbSNP ids recorded at a coordinate key.
///
pub trait CoordinateIndex {
    fn snp_ids_at(&self, coordinate: &str) -> Option<&[String]>;
}

impl<S: BuildHasher> CoordinateIndex for HashMap<String, Vec<String>, S> {
    fn snp_ids_at(&self, coordinate: &str) -> Option<&[String]> {
        self.get(coordinate).map(Vec::as_slice)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelabelSummary {
    pub rewritten: usize,
    pub ambiguous: usize,
    pub unmatched: usize,
}

///
/// Give every record the dbSNP id found at its coordinate.
///
/// Only coordinates with exactly one dbSNP id are used. Records at
/// coordinates with several ids, or with none, keep the id they have.
///
pub fn relabel_by_coordinate<I>(records: &mut [GenotypeRecord], index: &I) -> RelabelSummary
where
    I: CoordinateIndex + ?Sized,
{
    let mut summary = RelabelSummary::default();

    for record in records.iter_mut() {
        let coordinate = record.coordinate();

        match index.snp_ids_at(&coordinate) {
            Some([snp_id]) => {
                if *snp_id != record.snp_id {
                    debug!(
                        "Rewrote snp_id {} to {} for position {}",
                        record.snp_id, snp_id, coordinate
                    );
                    record.snp_id = snp_id.clone();
                    summary.rewritten += 1;
                }
            }
            Some(snp_ids) if snp_ids.len() > 1 => {
                debug!("Has more than one snp_id db[{coordinate}] = {snp_ids:?}");
                summary.ambiguous += 1;
            }
            _ => {
                debug!("NO_MATCH: {}", record.as_string());
                summary.unmatched += 1;
            }
        }
    }

    summary
}
