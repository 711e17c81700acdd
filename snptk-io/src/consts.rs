pub const DELETED_SNPS_FILE: &str = "deleted_snps.txt";
pub const UPDATED_SNPS_FILE: &str = "updated_snps.txt";
pub const COORD_UPDATE_FILE: &str = "coord_update.txt";
pub const CHR_UPDATE_FILE: &str = "chr_update.txt";

/// Lines handed to the thread pool at once while parsing an input file.
pub const DEFAULT_CHUNK_SIZE: usize = 100_000;

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";
