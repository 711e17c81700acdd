/// Separator between chromosome and position in a coordinate key.
pub const COORD_DELIMITER: char = ':';

/// Default cap on merge links followed for a single id. `0` disables the cap.
pub const DEFAULT_MAX_MERGE_DEPTH: usize = 10_000;

/// Prefix dbSNP puts in front of the numeric ids stored in its history tables.
pub const RS_PREFIX: &str = "rs";
