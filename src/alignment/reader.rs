use anyhow::{Context, Result};
use bio::io::fasta;
use niffler::get_reader;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::alignment::{AlignedSequence, Alignment};

/// Reads an aligned FASTA file into a validated [`Alignment`], transparently
/// decompressing gzip, bzip2 or xz input.
pub fn read_alignment(path: &Path) -> Result<Alignment> {
    let file = File::open(path)
        .with_context(|| format!("failed to open alignment file {}", path.display()))?;
    let (inner_reader, _compression) = get_reader(Box::new(file))
        .with_context(|| format!("failed to read alignment file {}", path.display()))?;
    let reader = fasta::Reader::new(BufReader::with_capacity(1024 * 1024, inner_reader));

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result
            .with_context(|| format!("malformed FASTA record in {}", path.display()))?;
        records.push(AlignedSequence {
            id: record.id().to_string(),
            residues: record.seq().to_vec(),
        });
    }

    Alignment::new(records).with_context(|| format!("invalid alignment in {}", path.display()))
}

/// Reads the headerless `identifier,lineage` assignment CSV. When an
/// identifier appears more than once the last row wins.
pub fn read_lineage_map(path: &Path) -> Result<HashMap<String, String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("failed to open lineage file {}", path.display()))?;

    let mut assignments = HashMap::new();
    for result in reader.deserialize() {
        let (id, lineage): (String, String) =
            result.with_context(|| format!("malformed row in {}", path.display()))?;
        assignments.insert(id, lineage);
    }

    Ok(assignments)
}
