use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReconcileError {
    #[error("Malformed coordinate for {snp_id}: {coordinate:?} (expected <chromosome>:<position>)")]
    MalformedCoordinate { snp_id: String, coordinate: String },

    #[error(
        "Merge chain for {snp_id} did not terminate after {max_depth} steps. Is the merge history cyclic?"
    )]
    MergeChainTooLong { snp_id: String, max_depth: usize },
}
