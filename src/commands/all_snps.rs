use std::path::Path;

use anyhow::Result;

use crate::alignment::reader;
use crate::lineage_snps::{self, annotate, grouping, types::Cutoffs};

pub fn run(
    alignment_file: &str,
    lineage_file: &str,
    reference_id: &str,
    mask_out: &str,
    defining_snps_out: &str,
    representative_seqs_out: &str,
    defining_cut_off: f64,
    represent_cut_off: f64,
) -> Result<()> {
    let cutoffs = Cutoffs::new(defining_cut_off, represent_cut_off);
    cutoffs.validate()?;

    log::info!("Reading alignment from {}", alignment_file);
    let alignment = reader::read_alignment(Path::new(alignment_file))?;
    log::info!(
        "{} records of length {}",
        alignment.records().len(),
        alignment.length()
    );

    let reference = alignment.reference(reference_id)?.clone();

    let annotated = annotate::annotate_alignment(alignment, &reference)?;

    log::info!("Reading lineage assignments from {}", lineage_file);
    let assignments = reader::read_lineage_map(Path::new(lineage_file))?;
    let groups = grouping::group_by_lineage(annotated, &assignments, &reference.id);

    let snp_report = lineage_snps::analyze(&groups, &cutoffs)?;

    log::info!(
        "Writing {} mask, {} defining SNP and {} representative rows",
        snp_report.mask.len(),
        snp_report.defining.len(),
        snp_report.representatives.len()
    );
    snp_report.write_mask(Path::new(mask_out))?;
    snp_report.write_defining_snps(Path::new(defining_snps_out))?;
    snp_report.write_representatives(Path::new(representative_seqs_out))?;

    Ok(())
}
