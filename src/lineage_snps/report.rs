use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// One singleton SNP to mask out of downstream analyses.
#[derive(Debug, Clone, Serialize)]
pub struct MaskRow {
    pub lineage: String,
    pub snp: String,
    pub taxon: String,
}

/// The defining SNPs of one lineage, `;`-joined in position order. The
/// field is empty when the lineage has no defining SNPs.
#[derive(Debug, Clone, Serialize)]
pub struct DefiningSnpsRow {
    pub lineage: String,
    pub defining_snps: String,
}

/// One selected representative sequence.
#[derive(Debug, Clone, Serialize)]
pub struct RepresentativeRow {
    pub lineage: String,
    pub name: String,
}

/// The three accumulated output tables, each in ascending lineage order.
#[derive(Debug, Default)]
pub struct SnpReport {
    pub mask: Vec<MaskRow>,
    pub defining: Vec<DefiningSnpsRow>,
    pub representatives: Vec<RepresentativeRow>,
}

impl SnpReport {
    pub fn write_mask(&self, path: &Path) -> Result<()> {
        write_rows(path, &["lineage", "snp", "taxon"], &self.mask)
    }

    pub fn write_defining_snps(&self, path: &Path) -> Result<()> {
        write_rows(path, &["lineage", "defining_snps"], &self.defining)
    }

    pub fn write_representatives(&self, path: &Path) -> Result<()> {
        write_rows(path, &["lineage", "name"], &self.representatives)
    }
}

// The header is written by hand so that a table with no rows still gets one.
fn write_rows<T: Serialize>(path: &Path, header: &[&str], rows: &[T]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("failed to create output file {}", path.display()))?;

    writer.write_record(header)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write output file {}", path.display()))?;
    Ok(())
}
