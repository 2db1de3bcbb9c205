use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::lineage_snps::types::{AnnotatedSequence, Snp};

/// Floor for the representative list. Shorter selections are padded with
/// members that were not picked for coverage.
pub const MIN_REPRESENTATIVES: usize = 3;

/// Greedily picks lineage members whose SNP patterns cover the representable
/// SNP set.
///
/// Members are grouped by identical SNP signature and the groups visited in
/// ascending signature order. The first uncovered representable SNP in a
/// group pulls in the group's lowest-N member; that member then covers every
/// representable SNP it carries, so near-duplicate patterns do not each add
/// a sequence. The selection is padded up to [`MIN_REPRESENTATIVES`] with
/// unused members in N-content order.
///
/// `members` must already be sorted ascending by N content.
pub fn select_representatives<'a>(
    members: &'a [AnnotatedSequence],
    representable: &BTreeSet<Snp>,
) -> Vec<&'a AnnotatedSequence> {
    // Members arrive N-sorted, so each group's first entry is its lowest-N
    // carrier of that pattern.
    let mut groups: BTreeMap<&str, Vec<&AnnotatedSequence>> = BTreeMap::new();
    for member in members {
        groups
            .entry(member.snp_signature.as_str())
            .or_default()
            .push(member);
    }

    let mut covered: BTreeSet<Snp> = BTreeSet::new();
    let mut chosen: Vec<&AnnotatedSequence> = Vec::new();
    let mut chosen_ids: HashSet<&str> = HashSet::new();

    for group in groups.values() {
        let best = group[0];
        for snp in &best.snps {
            if representable.contains(snp) && !covered.contains(snp) {
                for carried in &best.snps {
                    if representable.contains(carried) {
                        covered.insert(*carried);
                    }
                }
                if chosen_ids.insert(best.id()) {
                    chosen.push(best);
                }
            }
        }
    }

    if chosen.len() < MIN_REPRESENTATIVES {
        let before = chosen.len();
        for member in members {
            if chosen.len() >= MIN_REPRESENTATIVES {
                break;
            }
            if chosen_ids.insert(member.id()) {
                chosen.push(member);
            }
        }
        log::debug!("padded representatives from {} to {}", before, chosen.len());
    }

    chosen
}
