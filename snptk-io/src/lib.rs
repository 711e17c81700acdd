//! # Input/Output for snptk.
//!
//! Readers for the files a SNP id update needs (PLINK `.bim` genotype maps, dbSNP VCF dumps and
//! the dbSNP `SNPHistory` / `RsMergeArch` tables), writers for the resulting edit lists, and the
//! two end-to-end workflows that tie them to `snptk-core`.
//!
//! Every reader accepts plain or gzipped (`.gz`) files. Large files are parsed in chunks on the
//! rayon thread pool; results are folded back in file order, so the outcome never depends on the
//! number of threads.
//!
pub mod bim;
pub mod chunked;
pub mod consts;
pub mod dbsnp;
pub mod edits;
pub mod error;
pub mod history;
pub mod progress;
pub mod reader;
pub mod workflow;

// re-expose core functions
pub use bim::*;
pub use consts::*;
pub use dbsnp::*;
pub use edits::*;
pub use error::*;
pub use history::*;
pub use workflow::*;
