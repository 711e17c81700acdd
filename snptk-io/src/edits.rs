use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use snptk_core::EditInstructions;

use crate::consts::{CHR_UPDATE_FILE, COORD_UPDATE_FILE, DELETED_SNPS_FILE, UPDATED_SNPS_FILE};

pub trait EditWrite {
    ///
    /// Write the four edit lists into a directory as plain text files
    ///
    /// # Arguments
    /// - output_dir: directory to write to, created if missing
    fn write_edits<T: AsRef<Path>>(&self, output_dir: T) -> std::io::Result<()>;
}

fn write_ids(path: &Path, ids: &[String]) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    for snp_id in ids {
        writeln!(file, "{}", snp_id)?;
    }
    file.flush()
}

fn write_pairs(path: &Path, pairs: &[(String, String)]) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    for (first, second) in pairs {
        writeln!(file, "{}\t{}", first, second)?;
    }
    file.flush()
}

impl EditWrite for EditInstructions {
    fn write_edits<T: AsRef<Path>>(&self, output_dir: T) -> std::io::Result<()> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)?;

        write_ids(&output_dir.join(DELETED_SNPS_FILE), &self.to_delete)?;
        write_pairs(&output_dir.join(UPDATED_SNPS_FILE), &self.to_rename)?;
        write_pairs(&output_dir.join(COORD_UPDATE_FILE), &self.to_reposition)?;
        write_pairs(&output_dir.join(CHR_UPDATE_FILE), &self.to_rechromosome)?;

        Ok(())
    }
}
