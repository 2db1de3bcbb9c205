use anyhow::{bail, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::alignment::{AlignedSequence, Alignment};
use crate::lineage_snps::types::{snp_signature, AnnotatedSequence, Snp};

const GAP: u8 = b'-';

/// Bases accepted on the member side of a column. N and the other IUPAC
/// ambiguity codes carry no usable substitution signal.
fn is_unambiguous(base: u8) -> bool {
    matches!(base, b'A' | b'C' | b'G' | b'T' | GAP)
}

/// Percentage of N residues in a sequence, rounded to two decimal places.
pub fn percent_n(residues: &[u8]) -> Result<f64> {
    if residues.is_empty() {
        bail!("cannot compute N content of a zero-length sequence");
    }
    let n = residues
        .iter()
        .filter(|&&base| base.to_ascii_uppercase() == b'N')
        .count();
    let pcent = n as f64 * 100.0 / residues.len() as f64;
    Ok((pcent * 100.0).round() / 100.0)
}

/// Collects the unambiguous substitutions of `member` against `reference`.
///
/// Positions are 1-based ungapped reference coordinates: the counter only
/// advances on non-gap reference columns, so positions line up with the
/// reference genome rather than the alignment. Columns where the member
/// carries anything outside {A, C, G, T, -} are skipped. Comparison is
/// case-insensitive and the emitted bases are uppercase.
pub fn find_snps(reference: &[u8], member: &[u8]) -> Result<Vec<Snp>> {
    if reference.len() != member.len() {
        bail!(
            "sequence length {} does not match reference length {}",
            member.len(),
            reference.len()
        );
    }

    let mut snps = Vec::new();
    let mut position: u32 = 0;
    for (&ref_base, &member_base) in reference.iter().zip(member) {
        let ref_base = ref_base.to_ascii_uppercase();
        let member_base = member_base.to_ascii_uppercase();
        if ref_base != GAP {
            position += 1;
        }
        if ref_base != member_base && is_unambiguous(member_base) {
            snps.push(Snp {
                position,
                reference: ref_base,
                alternate: member_base,
            });
        }
    }

    Ok(snps)
}

/// Annotates every alignment record with its N content, SNP list and SNP
/// signature. The reference is annotated like any other record and comes
/// out with an empty SNP list.
pub fn annotate_alignment(
    alignment: Alignment,
    reference: &AlignedSequence,
) -> Result<Vec<AnnotatedSequence>> {
    let records = alignment.into_records();

    let progress = ProgressBar::new(records.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    progress.set_message("Finding SNPs");

    let mut annotated = Vec::with_capacity(records.len());
    for record in records {
        let pcent_n = percent_n(&record.residues)?;
        let snps = find_snps(&reference.residues, &record.residues)?;
        let snp_signature = snp_signature(&snps);
        annotated.push(AnnotatedSequence {
            record,
            pcent_n,
            snps,
            snp_signature,
        });
        progress.inc(1);
    }
    progress.finish_and_clear();

    log::info!("{} records annotated", annotated.len());
    Ok(annotated)
}
