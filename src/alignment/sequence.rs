use anyhow::{anyhow, bail, Result};
use std::collections::HashSet;

/// One row of the multiple-sequence alignment.
#[derive(Debug, Clone)]
pub struct AlignedSequence {
    pub id: String,
    pub residues: Vec<u8>,
}

/// A validated multiple-sequence alignment.
///
/// Construction enforces what the downstream analysis relies on: at least
/// one record, no zero-length record, every record the same length and no
/// duplicate identifiers.
#[derive(Debug, Clone)]
pub struct Alignment {
    records: Vec<AlignedSequence>,
    length: usize,
}

impl Alignment {
    pub fn new(records: Vec<AlignedSequence>) -> Result<Self> {
        let Some(first) = records.first() else {
            bail!("alignment contains no sequences");
        };
        let length = first.residues.len();
        if length == 0 {
            bail!("alignment record '{}' has zero length", first.id);
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
        for record in &records {
            if record.residues.len() != length {
                bail!(
                    "alignment record '{}' has length {}, expected {}",
                    record.id,
                    record.residues.len(),
                    length
                );
            }
            if !seen.insert(record.id.as_str()) {
                bail!("duplicate identifier '{}' in alignment", record.id);
            }
        }

        Ok(Self { records, length })
    }

    /// Column count shared by every record.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn records(&self) -> &[AlignedSequence] {
        &self.records
    }

    pub fn into_records(self) -> Vec<AlignedSequence> {
        self.records
    }

    /// Looks up the designated reference record by identifier.
    pub fn reference(&self, id: &str) -> Result<&AlignedSequence> {
        self.records
            .iter()
            .find(|record| record.id == id)
            .ok_or_else(|| anyhow!("reference sequence '{}' not found in alignment", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, residues: &str) -> AlignedSequence {
        AlignedSequence {
            id: id.to_string(),
            residues: residues.as_bytes().to_vec(),
        }
    }

    #[test]
    fn accepts_uniform_records() {
        let alignment =
            Alignment::new(vec![record("ref", "ACGT"), record("s1", "ACGA")]).unwrap();
        assert_eq!(alignment.length(), 4);
        assert_eq!(alignment.records().len(), 2);
    }

    #[test]
    fn rejects_empty_alignment() {
        let err = Alignment::new(Vec::new()).unwrap_err();
        assert!(err.to_string().contains("no sequences"));
    }

    #[test]
    fn rejects_zero_length_record() {
        let err = Alignment::new(vec![record("ref", "")]).unwrap_err();
        assert!(err.to_string().contains("zero length"));
    }

    #[test]
    fn rejects_unequal_lengths() {
        let err =
            Alignment::new(vec![record("ref", "ACGT"), record("s1", "ACG")]).unwrap_err();
        assert!(err.to_string().contains("length 3"));
    }

    #[test]
    fn rejects_duplicate_identifiers() {
        let err =
            Alignment::new(vec![record("s1", "ACGT"), record("s1", "ACGA")]).unwrap_err();
        assert!(err.to_string().contains("duplicate identifier"));
    }

    #[test]
    fn finds_reference_by_id() {
        let alignment =
            Alignment::new(vec![record("ref", "ACGT"), record("s1", "ACGA")]).unwrap();
        assert_eq!(alignment.reference("ref").unwrap().id, "ref");
        assert!(alignment.reference("missing").is_err());
    }
}
