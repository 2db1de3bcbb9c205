use std::collections::{BTreeMap, HashMap};

use crate::lineage_snps::types::AnnotatedSequence;

/// The alignment partitioned into lineages, plus the identifiers that were
/// present in the alignment but absent from the assignment file.
#[derive(Debug, Default)]
pub struct LineageGroups {
    pub lineages: BTreeMap<String, Vec<AnnotatedSequence>>,
    pub unassigned: Vec<String>,
}

/// Partitions annotated records by lineage name.
///
/// The reference record takes no part in the analysis and is dropped here.
/// Records without an assignment are collected in `unassigned` and logged.
/// Within each lineage, members are sorted ascending by N content; the sort
/// is stable, so ties keep their alignment order.
pub fn group_by_lineage(
    records: Vec<AnnotatedSequence>,
    assignments: &HashMap<String, String>,
    reference_id: &str,
) -> LineageGroups {
    let mut groups = LineageGroups::default();
    let mut assigned = 0usize;

    for record in records {
        if record.id() == reference_id {
            continue;
        }
        match assignments.get(record.id()) {
            Some(lineage) => {
                groups.lineages.entry(lineage.clone()).or_default().push(record);
                assigned += 1;
            }
            None => groups.unassigned.push(record.id().to_string()),
        }
    }

    for members in groups.lineages.values_mut() {
        members.sort_by(|a, b| a.pcent_n.total_cmp(&b.pcent_n));
    }

    log::info!(
        "{} sequences assigned to {} lineages",
        assigned,
        groups.lineages.len()
    );
    if !groups.unassigned.is_empty() {
        log::warn!(
            "{} alignment sequences are missing from the lineage file",
            groups.unassigned.len()
        );
        for id in &groups.unassigned {
            log::warn!("not in lineage file: {}", id);
        }
    }

    groups
}
