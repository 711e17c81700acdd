pub mod coordinate;
pub mod genotype;
pub mod history;
pub mod triple;

// re-export for cleaner imports
pub use self::coordinate::{Coordinate, coordinate_key};
pub use self::genotype::GenotypeRecord;
pub use self::history::{DeletionSet, MergeMap};
pub use self::triple::RecordTriple;
