use std::fmt::{self, Display};

use super::coordinate::coordinate_key;

///
/// One variant line of a PLINK `.bim` genotype map.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Default)]
pub struct GenotypeRecord {
    pub chromosome: String,
    pub snp_id: String,
    pub distance: String,
    pub position: String,
    pub allele_1: String,
    pub allele_2: String,
}

impl GenotypeRecord {
    ///
    /// Coordinate key (`<chromosome>:<position>`) of the record
    ///
    pub fn coordinate(&self) -> String {
        coordinate_key(&self.chromosome, &self.position)
    }

    ///
    /// Get file string of the record
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            self.chromosome,
            self.snp_id,
            self.distance,
            self.position,
            self.allele_1,
            self.allele_2
        )
    }
}

impl Display for GenotypeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
