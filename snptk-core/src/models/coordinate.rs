use std::fmt::{self, Display};

use crate::consts::COORD_DELIMITER;
use crate::errors::ReconcileError;

///
/// A (chromosome, position) pair as recorded in a genotype file or in dbSNP.
///
/// Both parts are kept as text. Positions are only ever compared for
/// equality, never used in arithmetic.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Coordinate {
    pub chromosome: String,
    pub position: String,
}

///
/// Build the `<chromosome>:<position>` key used by every coordinate lookup.
///
pub fn coordinate_key(chromosome: &str, position: &str) -> String {
    format!("{chromosome}{COORD_DELIMITER}{position}")
}

impl Coordinate {
    pub fn new(chromosome: impl Into<String>, position: impl Into<String>) -> Self {
        Coordinate {
            chromosome: chromosome.into(),
            position: position.into(),
        }
    }

    ///
    /// Split a coordinate key back into its parts.
    ///
    /// # Arguments
    /// - snp_id: id the key belongs to, only used to label the error
    /// - key: a `<chromosome>:<position>` string
    ///
    pub fn parse(snp_id: &str, key: &str) -> Result<Self, ReconcileError> {
        let malformed = || ReconcileError::MalformedCoordinate {
            snp_id: snp_id.to_string(),
            coordinate: key.to_string(),
        };

        let (chromosome, position) = key.split_once(COORD_DELIMITER).ok_or_else(malformed)?;
        if position.contains(COORD_DELIMITER) {
            return Err(malformed());
        }

        Ok(Coordinate::new(chromosome, position))
    }

    pub fn key(&self) -> String {
        coordinate_key(&self.chromosome, &self.position)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
