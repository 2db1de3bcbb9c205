use std::collections::{BTreeMap, BTreeSet};

use anyhow::{bail, Result};

use crate::lineage_snps::types::{AnnotatedSequence, Cutoffs, Snp};

/// The classified SNPs of one lineage.
#[derive(Debug, Default)]
pub struct SnpClassification {
    /// Number of distinct SNPs observed across the lineage.
    pub distinct_snps: usize,
    /// SNPs carried by exactly one member, with that member's identifier.
    /// These are candidate sequencing artefacts to mask.
    pub singletons: Vec<(Snp, String)>,
    /// SNPs shared by every member, or the cut-off set when no SNP is
    /// shared by all. Ascending position order.
    pub defining: Vec<Snp>,
    /// SNPs common enough to deserve a carrier among the representatives.
    pub representable: BTreeSet<Snp>,
}

/// Classifies the SNPs of one lineage against the cut-offs.
///
/// Each SNP's inclusion percentage is the share of members carrying it.
/// SNPs seen in exactly one member are singletons and take no further part.
/// The defining output prefers the SNPs present in every member's list;
/// only when that intersection is empty does it fall back to the SNPs whose
/// inclusion exceeds the defining cut-off.
pub fn classify_snps(members: &[AnnotatedSequence], cutoffs: &Cutoffs) -> Result<SnpClassification> {
    cutoffs.validate()?;
    if members.is_empty() {
        bail!("cannot classify SNPs of a lineage with no members");
    }

    let mut occurrences: BTreeMap<Snp, Vec<&str>> = BTreeMap::new();
    for member in members {
        for snp in &member.snps {
            occurrences.entry(*snp).or_default().push(member.id());
        }
    }

    let mut classification = SnpClassification {
        distinct_snps: occurrences.len(),
        ..Default::default()
    };
    let mut by_cutoff: Vec<Snp> = Vec::new();
    let total = members.len() as f64;

    for (snp, carriers) in &occurrences {
        if carriers.len() == 1 {
            classification
                .singletons
                .push((*snp, carriers[0].to_string()));
            continue;
        }
        let inclusion = 100.0 * carriers.len() as f64 / total;
        if inclusion > cutoffs.defining {
            by_cutoff.push(*snp);
        }
        if inclusion > cutoffs.represent {
            classification.representable.insert(*snp);
        }
    }

    // SNPs carried by literally every member win over the percentage rule.
    let mut shared: BTreeSet<Snp> = members[0].snps.iter().copied().collect();
    for member in &members[1..] {
        let own: BTreeSet<Snp> = member.snps.iter().copied().collect();
        shared.retain(|snp| own.contains(snp));
        if shared.is_empty() {
            break;
        }
    }
    classification.defining = if shared.is_empty() {
        by_cutoff
    } else {
        shared.into_iter().collect()
    };

    Ok(classification)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::AlignedSequence;
    use crate::lineage_snps::types::{parse_signature, snp_signature};

    fn member(id: &str, signature: &str) -> AnnotatedSequence {
        let snps = parse_signature(signature).unwrap();
        AnnotatedSequence {
            record: AlignedSequence {
                id: id.to_string(),
                residues: Vec::new(),
            },
            pcent_n: 0.0,
            snps: snps.clone(),
            snp_signature: snp_signature(&snps),
        }
    }

    fn strings(snps: &[Snp]) -> Vec<String> {
        snps.iter().map(Snp::to_string).collect()
    }

    #[test]
    fn singletons_carry_their_member() {
        let members = vec![
            member("s1", "10AG;20CT"),
            member("s2", "10AG"),
            member("s3", "10AG"),
        ];
        let classification = classify_snps(&members, &Cutoffs::default()).unwrap();

        assert_eq!(classification.singletons.len(), 1);
        let (snp, taxon) = &classification.singletons[0];
        assert_eq!(snp.to_string(), "20CT");
        assert_eq!(taxon, "s1");
    }

    #[test]
    fn shared_snps_define_the_lineage() {
        let members = vec![
            member("s1", "10AG;20CT"),
            member("s2", "10AG;30GA"),
            member("s3", "10AG;20CT"),
        ];
        let classification = classify_snps(&members, &Cutoffs::default()).unwrap();
        assert_eq!(strings(&classification.defining), ["10AG"]);
    }

    #[test]
    fn empty_intersection_falls_back_to_cutoff_set() {
        // One member with no SNPs at all empties the intersection, but
        // 10AG still clears a 50% defining cut-off (3 of 4 members).
        let members = vec![
            member("s1", "10AG"),
            member("s2", "10AG"),
            member("s3", "10AG"),
            member("s4", ""),
        ];
        let cutoffs = Cutoffs::new(50.0, 10.0);
        let classification = classify_snps(&members, &cutoffs).unwrap();
        assert_eq!(strings(&classification.defining), ["10AG"]);
    }

    #[test]
    fn fallback_can_be_empty() {
        let members = vec![member("s1", "10AG"), member("s2", "20CT")];
        let classification = classify_snps(&members, &Cutoffs::default()).unwrap();
        assert!(classification.defining.is_empty());
    }

    #[test]
    fn inclusion_must_strictly_exceed_the_cutoffs() {
        // 10AG sits at exactly 50% inclusion: below neither cut-off.
        let members = vec![
            member("s1", "10AG;30GA"),
            member("s2", "10AG;30GA"),
            member("s3", "30GA"),
            member("s4", "30GA"),
        ];
        let cutoffs = Cutoffs::new(75.0, 50.0);
        let classification = classify_snps(&members, &cutoffs).unwrap();

        assert!(!classification.representable.contains(&"10AG".parse::<Snp>().unwrap()));
        // 30GA is at 100%: clears both.
        assert!(classification.representable.contains(&"30GA".parse::<Snp>().unwrap()));
        assert_eq!(strings(&classification.defining), ["30GA"]);
    }

    #[test]
    fn singletons_never_reach_the_other_classes() {
        let members = vec![
            member("s1", "10AG;20CT"),
            member("s2", "10AG"),
        ];
        let cutoffs = Cutoffs::new(0.0, 0.0);
        let classification = classify_snps(&members, &cutoffs).unwrap();

        let snps: Vec<String> = classification
            .representable
            .iter()
            .map(Snp::to_string)
            .collect();
        assert_eq!(snps, ["10AG"]);
        assert_eq!(classification.singletons.len(), 1);
    }

    #[test]
    fn raising_a_cutoff_never_grows_its_set() {
        let members = vec![
            member("s1", "10AG;20CT"),
            member("s2", "10AG;20CT"),
            member("s3", "10AG"),
            member("s4", "30GA"),
        ];
        let loose = classify_snps(&members, &Cutoffs::new(90.0, 20.0)).unwrap();
        let tight = classify_snps(&members, &Cutoffs::new(90.0, 60.0)).unwrap();

        assert!(tight.representable.is_subset(&loose.representable));
        assert!(tight.representable.len() < loose.representable.len());
    }

    #[test]
    fn counts_distinct_snps_across_the_lineage() {
        let members = vec![member("s1", "10AG;20CT"), member("s2", "10AG;30GA")];
        let classification = classify_snps(&members, &Cutoffs::default()).unwrap();
        assert_eq!(classification.distinct_snps, 3);
    }

    #[test]
    fn empty_lineage_is_an_error() {
        assert!(classify_snps(&[], &Cutoffs::default()).is_err());
    }

    #[test]
    fn invalid_cutoffs_are_an_error() {
        let members = vec![member("s1", "10AG")];
        assert!(classify_snps(&members, &Cutoffs::new(10.0, 90.0)).is_err());
    }
}
