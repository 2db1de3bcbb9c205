//! Per-lineage SNP analysis: classify each lineage's SNPs into singleton,
//! defining and representable sets, then pick representative sequences
//! that carry the representable patterns.

pub mod annotate;
pub mod classify;
pub mod grouping;
pub mod report;
pub mod select;
pub mod types;

use anyhow::Result;

use self::grouping::LineageGroups;
use self::report::{DefiningSnpsRow, MaskRow, RepresentativeRow, SnpReport};
use self::types::{snp_signature, AnnotatedSequence, Cutoffs};

/// Runs classification and representative selection over every lineage,
/// accumulating the three output tables in ascending lineage order.
pub fn analyze(groups: &LineageGroups, cutoffs: &Cutoffs) -> Result<SnpReport> {
    let mut snp_report = SnpReport::default();
    for (lineage, members) in &groups.lineages {
        process_lineage(lineage, members, cutoffs, &mut snp_report)?;
    }
    Ok(snp_report)
}

fn process_lineage(
    lineage: &str,
    members: &[AnnotatedSequence],
    cutoffs: &Cutoffs,
    snp_report: &mut SnpReport,
) -> Result<()> {
    let classification = classify::classify_snps(members, cutoffs)?;
    let representatives = select::select_representatives(members, &classification.representable);

    log::info!(
        "{}: {} members, {} distinct SNPs ({} singleton, {} defining, {} representable), {} representatives",
        lineage,
        members.len(),
        classification.distinct_snps,
        classification.singletons.len(),
        classification.defining.len(),
        classification.representable.len(),
        representatives.len(),
    );

    for (snp, taxon) in &classification.singletons {
        snp_report.mask.push(MaskRow {
            lineage: lineage.to_string(),
            snp: snp.to_string(),
            taxon: taxon.clone(),
        });
    }

    let defining_snps = snp_signature(&classification.defining);
    log::debug!("{} defining SNPs: {}", lineage, defining_snps);
    snp_report.defining.push(DefiningSnpsRow {
        lineage: lineage.to_string(),
        defining_snps,
    });

    for representative in representatives {
        snp_report.representatives.push(RepresentativeRow {
            lineage: lineage.to_string(),
            name: representative.id().to_string(),
        });
    }

    Ok(())
}
