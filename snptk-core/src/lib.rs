//! # snptk-core
//!
//! Decision logic for bringing the SNP ids and coordinates of a genotype dataset in line with a
//! dbSNP snapshot. Ids retire over time: some are deleted outright, others are merged into a
//! surviving id. This crate follows those merges to the current id and turns the outcome into
//! edit instructions (delete, rename, move to a new position, move to a new chromosome).
//!
//! No file I/O happens here. Loaders and writers live in `snptk-io`.
//!
//! ```rust
//! use snptk_core::models::{DeletionSet, MergeMap, RecordTriple};
//! use snptk_core::{classify, resolve};
//! use fxhash::FxHashMap;
//!
//! let deletions = DeletionSet::from_iter(["rs3"]);
//! let merges = MergeMap::from_iter([("rs1", "rs2")]);
//!
//! assert_eq!(resolve("rs1", &deletions, &merges), Some("rs2".to_string()));
//! assert_eq!(resolve("rs3", &deletions, &merges), None);
//!
//! let triples = vec![RecordTriple::new("rs1", "1:1000", Some("rs2".to_string()))];
//! let mut reference: FxHashMap<String, String> = FxHashMap::default();
//! reference.insert("rs2".to_string(), "2:1000".to_string());
//!
//! let edits = classify(&triples, &reference).unwrap();
//! assert_eq!(edits.to_rename, vec![("rs1".to_string(), "rs2".to_string())]);
//! assert_eq!(edits.to_rechromosome, vec![("rs2".to_string(), "2".to_string())]);
//! ```
pub mod consts;
pub mod errors;
pub mod models;
pub mod reconcile;
pub mod relabel;
pub mod resolve;

pub use errors::ReconcileError;
pub use reconcile::{CoordinateLookup, EditInstructions, classify};
pub use relabel::{CoordinateIndex, RelabelSummary, relabel_by_coordinate};
pub use resolve::{Resolver, build_triples, identifiers_of_interest, resolve};
