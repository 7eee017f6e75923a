use std::collections::{HashMap, HashSet};

use getset::Getters;

use crate::helper::marker::parent::ParentRole;
use crate::helper::marker::table::{MarkerRecord, MarkerTable};

/// One row of the inner join: both parents' records for the same marker.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct JoinedMarkerRecord {
    #[getset(get = "pub")]
    parent1: MarkerRecord,
    #[getset(get = "pub")]
    parent2: MarkerRecord,
}

impl JoinedMarkerRecord {
    pub fn marker_id(&self) -> &str {
        self.parent1.marker_id()
    }
}

/// Extra (non required) columns carried by each side of the join.
#[derive(Debug, Clone, Default, PartialEq, Getters)]
pub struct JoinedColumns {
    #[getset(get = "pub")]
    parent1_extra: Vec<String>,
    #[getset(get = "pub")]
    parent2_extra: Vec<String>,
}

impl JoinedColumns {
    pub fn extra(&self, role: ParentRole) -> &[String] {
        match role {
            ParentRole::Parent1 => &self.parent1_extra,
            ParentRole::Parent2 => &self.parent2_extra,
        }
    }

    /// Whether a column name exists on both sides and therefore needs a suffix.
    pub fn is_shared(&self, column: &str) -> bool {
        self.parent1_extra.iter().any(|c| c == column)
            && self.parent2_extra.iter().any(|c| c == column)
    }
}

#[derive(Debug, Clone, PartialEq, Getters)]
pub struct MergedMarkers {
    #[getset(get = "pub")]
    columns: JoinedColumns,
    #[getset(get = "pub")]
    records: Vec<JoinedMarkerRecord>,
    #[getset(get = "pub")]
    unmatched_parent1: usize,
    #[getset(get = "pub")]
    unmatched_parent2: usize,
}

impl MergedMarkers {
    pub fn unmatched(&self, role: ParentRole) -> usize {
        match role {
            ParentRole::Parent1 => self.unmatched_parent1,
            ParentRole::Parent2 => self.unmatched_parent2,
        }
    }

    pub fn into_parts(self) -> (JoinedColumns, Vec<JoinedMarkerRecord>) {
        (self.columns, self.records)
    }
}

/// Inner join of the two tables on `Marker ID`.
///
/// Rows come out in parent 1 order; a parent 1 row matching several parent 2
/// rows yields one output row per match, in parent 2 order. Repeated IDs are
/// never collapsed, so `k` copies on one side and `l` on the other produce
/// `k * l` rows. Markers found on only one side are counted and dropped.
pub fn merge_markers(parent1: &MarkerTable, parent2: &MarkerTable) -> MergedMarkers {
    let mut index: HashMap<&str, Vec<&MarkerRecord>> = HashMap::new();
    for record in parent2.records() {
        index.entry(record.marker_id().as_str()).or_default().push(record);
    }

    let mut records = Vec::new();
    let mut unmatched_parent1 = 0;
    for left in parent1.records() {
        match index.get(left.marker_id().as_str()) {
            Some(matches) => {
                for right in matches {
                    records.push(JoinedMarkerRecord {
                        parent1: left.clone(),
                        parent2: (*right).clone(),
                    });
                }
            }
            None => unmatched_parent1 += 1,
        }
    }

    let parent1_ids: HashSet<&str> = parent1
        .records()
        .iter()
        .map(|r| r.marker_id().as_str())
        .collect();
    let unmatched_parent2 = parent2
        .records()
        .iter()
        .filter(|r| !parent1_ids.contains(r.marker_id().as_str()))
        .count();

    MergedMarkers {
        columns: JoinedColumns {
            parent1_extra: parent1.extra_columns().clone(),
            parent2_extra: parent2.extra_columns().clone(),
        },
        records,
        unmatched_parent1,
        unmatched_parent2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(role: ParentRole, rows: &[(&str, Option<&str>)]) -> MarkerTable {
        MarkerTable::new(
            role,
            rows.iter()
                .map(|(id, gt)| MarkerRecord::new(id, "A", "T", *gt, "1"))
                .collect(),
        )
    }

    #[test]
    fn test_inner_join_keeps_shared_markers() {
        let p1 = table(ParentRole::Parent1, &[("M1", Some("A/A")), ("M2", Some("C/C"))]);
        let p2 = table(ParentRole::Parent2, &[("M1", Some("A/T"))]);

        let merged = merge_markers(&p1, &p2);
        assert_eq!(merged.records().len(), 1);
        let row = &merged.records()[0];
        assert_eq!(row.marker_id(), "M1");
        assert_eq!(row.parent1().genotype(), Some("A/A"));
        assert_eq!(row.parent2().genotype(), Some("A/T"));
    }

    #[test]
    fn test_unmatched_markers_dropped_and_counted() {
        let p1 = table(ParentRole::Parent1, &[("M1", None), ("ONLY_P1", None)]);
        let p2 = table(
            ParentRole::Parent2,
            &[("ONLY_P2_A", None), ("M1", None), ("ONLY_P2_B", None)],
        );

        let merged = merge_markers(&p1, &p2);
        assert!(merged.records().iter().all(|r| r.marker_id() == "M1"));
        assert!(!merged.records().iter().any(|r| r.marker_id() == "ONLY_P1"));
        assert_eq!(merged.unmatched(ParentRole::Parent1), 1);
        assert_eq!(merged.unmatched(ParentRole::Parent2), 2);
    }

    #[test]
    fn test_duplicate_ids_produce_cross_product() {
        let p1 = table(ParentRole::Parent1, &[("M1", Some("A/A")), ("M1", Some("A/T"))]);
        let p2 = table(
            ParentRole::Parent2,
            &[("M1", Some("T/T")), ("M1", Some("C/C")), ("M1", Some("G/G"))],
        );

        let merged = merge_markers(&p1, &p2);
        assert_eq!(merged.records().len(), 6);

        let pairs: Vec<(Option<&str>, Option<&str>)> = merged
            .records()
            .iter()
            .map(|r| (r.parent1().genotype(), r.parent2().genotype()))
            .collect();
        assert_eq!(pairs[0], (Some("A/A"), Some("T/T")));
        assert_eq!(pairs[2], (Some("A/A"), Some("G/G")));
        assert_eq!(pairs[3], (Some("A/T"), Some("T/T")));
        assert_eq!(pairs[5], (Some("A/T"), Some("G/G")));
    }

    #[test]
    fn test_disjoint_tables_give_empty_join() {
        let p1 = table(ParentRole::Parent1, &[("M1", None)]);
        let p2 = table(ParentRole::Parent2, &[("M2", None)]);

        let merged = merge_markers(&p1, &p2);
        assert!(merged.records().is_empty());
        assert_eq!(*merged.unmatched_parent1(), 1);
        assert_eq!(*merged.unmatched_parent2(), 1);
    }
}
