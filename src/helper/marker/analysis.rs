use getset::{CopyGetters, Getters};

use crate::helper::marker::classify::{ClassifiedMarkerRecord, classify_markers};
use crate::helper::marker::distribution::ChromosomeDistribution;
use crate::helper::marker::merge::{JoinedColumns, merge_markers};
use crate::helper::marker::parent::ParentRole;
use crate::helper::marker::summary::SummaryStatistics;
use crate::helper::marker::table::MarkerTable;

/// Everything one run derives from a pair of parent tables.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct MarkerAnalysis {
    #[getset(get = "pub")]
    columns: JoinedColumns,
    #[getset(get = "pub")]
    records: Vec<ClassifiedMarkerRecord>,
    #[getset(get = "pub")]
    summary: SummaryStatistics,
    #[getset(get = "pub")]
    distribution: ChromosomeDistribution,
    #[getset(get_copy = "pub")]
    unmatched_parent1: usize,
    #[getset(get_copy = "pub")]
    unmatched_parent2: usize,
}

impl MarkerAnalysis {
    pub fn unmatched(&self, role: ParentRole) -> usize {
        match role {
            ParentRole::Parent1 => self.unmatched_parent1,
            ParentRole::Parent2 => self.unmatched_parent2,
        }
    }

    /// No marker survived the join.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Merge, classify and aggregate in a single pass. An empty join is a valid
/// result with an empty summary, not an error.
pub fn analyze_markers(parent1: &MarkerTable, parent2: &MarkerTable) -> MarkerAnalysis {
    let merged = merge_markers(parent1, parent2);
    let unmatched_parent1 = merged.unmatched(ParentRole::Parent1);
    let unmatched_parent2 = merged.unmatched(ParentRole::Parent2);

    let (columns, joined) = merged.into_parts();
    let records = classify_markers(joined);
    let summary = SummaryStatistics::from_classified(&records);
    let distribution = ChromosomeDistribution::from_classified(&records);

    MarkerAnalysis {
        columns,
        records,
        summary,
        distribution,
        unmatched_parent1,
        unmatched_parent2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::marker::classify::Zygosity;
    use crate::helper::marker::summary::VigorScore;

    const PARENT1: &str = "Marker ID,Reference Allele,Alternate Allele,Genotype,Chromosome\n\
                           M1,A,T,A/A,1\n\
                           M2,C,G,C/C,1\n\
                           M3,G,T,G/G,2\n\
                           M4,A,G,,2\n\
                           M5,A,C,A/C,3\n";

    const PARENT2: &str = "Marker ID,Reference Allele,Alternate Allele,Genotype,Chromosome\n\
                           M1,A,T,A/T,1\n\
                           M2,C,G,C/C,1\n\
                           M3,G,T,T/T,2\n\
                           M4,A,G,A/A,2\n\
                           M6,T,C,T/T,4\n";

    fn load(data: &str, role: ParentRole) -> MarkerTable {
        MarkerTable::from_reader(data.as_bytes(), role).unwrap()
    }

    #[test]
    fn test_analyze_markers() {
        let analysis = analyze_markers(
            &load(PARENT1, ParentRole::Parent1),
            &load(PARENT2, ParentRole::Parent2),
        );

        let labels: Vec<(&str, Zygosity)> = analysis
            .records()
            .iter()
            .map(|r| (r.marker_id(), r.predicted_progeny()))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("M1", Zygosity::Heterozygous),
                ("M2", Zygosity::Homozygous),
                ("M3", Zygosity::Heterozygous),
                ("M4", Zygosity::Heterozygous),
            ]
        );

        assert_eq!(analysis.unmatched(ParentRole::Parent1), 1);
        assert_eq!(analysis.unmatched(ParentRole::Parent2), 1);

        let summary = analysis.summary();
        assert_eq!(summary.total_markers(), 4);
        assert_eq!(summary.heterozygous_count(), 3);
        assert_eq!(summary.heterozygous_percent(), 75.0);
        assert_eq!(summary.vigor_score(), VigorScore::Medium);
        assert_eq!(analysis.distribution().total(), summary.total_markers());
    }

    #[test]
    fn test_every_record_is_labelled() {
        let analysis = analyze_markers(
            &load(PARENT1, ParentRole::Parent1),
            &load(PARENT2, ParentRole::Parent2),
        );
        assert!(
            analysis
                .records()
                .iter()
                .all(|r| Zygosity::ALL.contains(&r.predicted_progeny()))
        );
    }

    #[test]
    fn test_empty_join_is_an_empty_result() {
        let parent2 = "Marker ID,Reference Allele,Alternate Allele,Genotype,Chromosome\n\
                       Z1,A,T,A/T,1\n";
        let analysis = analyze_markers(
            &load(PARENT1, ParentRole::Parent1),
            &load(parent2, ParentRole::Parent2),
        );
        assert!(analysis.is_empty());
        assert!(analysis.summary().is_empty());
        assert!(analysis.distribution().is_empty());
        assert_eq!(analysis.unmatched(ParentRole::Parent1), 5);
    }
}
