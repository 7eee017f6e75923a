use std::collections::BTreeSet;
use std::fmt::Display;

use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};

use crate::helper::marker::genotype::allele_set;
use crate::helper::marker::merge::JoinedMarkerRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Zygosity {
    Heterozygous,
    Homozygous,
}

impl Zygosity {
    pub const ALL: [Zygosity; 2] = [Zygosity::Heterozygous, Zygosity::Homozygous];

    pub fn as_str(&self) -> &'static str {
        match self {
            Zygosity::Heterozygous => "Heterozygous",
            Zygosity::Homozygous => "Homozygous",
        }
    }
}

impl Display for Zygosity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Predicted progeny state from the two parents' allele sets.
///
/// Parents sharing no allele give a heterozygous progeny; so do parents that
/// share an allele but carry more than one distinct allele between them.
/// Only both parents fixed on the same single allele gives a homozygous one.
/// This is a coarse approximation, not a segregation model.
pub fn classify_alleles(parent1: &BTreeSet<&str>, parent2: &BTreeSet<&str>) -> Zygosity {
    if parent1.is_disjoint(parent2) {
        Zygosity::Heterozygous
    } else if parent1.union(parent2).count() > 1 {
        Zygosity::Heterozygous
    } else {
        Zygosity::Homozygous
    }
}

pub fn predict_progeny(parent1: Option<&str>, parent2: Option<&str>) -> Zygosity {
    classify_alleles(&allele_set(parent1), &allele_set(parent2))
}

#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct ClassifiedMarkerRecord {
    #[getset(get = "pub")]
    joined: JoinedMarkerRecord,
    #[getset(get_copy = "pub")]
    predicted_progeny: Zygosity,
}

impl ClassifiedMarkerRecord {
    pub fn from_joined(joined: JoinedMarkerRecord) -> Self {
        let predicted_progeny =
            predict_progeny(joined.parent1().genotype(), joined.parent2().genotype());
        ClassifiedMarkerRecord {
            joined,
            predicted_progeny,
        }
    }

    pub fn marker_id(&self) -> &str {
        self.joined.marker_id()
    }

    /// Chromosome used for grouping, always taken from parent 1.
    pub fn chromosome(&self) -> &str {
        self.joined.parent1().chromosome()
    }
}

pub fn classify_markers(joined: Vec<JoinedMarkerRecord>) -> Vec<ClassifiedMarkerRecord> {
    joined
        .into_iter()
        .map(ClassifiedMarkerRecord::from_joined)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENOTYPES: [Option<&str>; 9] = [
        None,
        Some("A/A"),
        Some("A/T"),
        Some("T/T"),
        Some("C/C"),
        Some("G/G"),
        Some("A"),
        Some("A/T/G"),
        Some("T/A"),
    ];

    #[test]
    fn test_shared_allele_with_mixed_union() {
        assert_eq!(predict_progeny(Some("A/A"), Some("A/T")), Zygosity::Heterozygous);
    }

    #[test]
    fn test_identical_fixed_parents() {
        assert_eq!(predict_progeny(Some("C/C"), Some("C/C")), Zygosity::Homozygous);
        assert_eq!(predict_progeny(Some("C"), Some("C/C")), Zygosity::Homozygous);
    }

    #[test]
    fn test_no_shared_allele() {
        assert_eq!(predict_progeny(Some("G/G"), Some("T/T")), Zygosity::Heterozygous);
    }

    #[test]
    fn test_missing_genotype() {
        assert_eq!(predict_progeny(None, Some("A/A")), Zygosity::Heterozygous);
        assert_eq!(predict_progeny(Some("A/A"), None), Zygosity::Heterozygous);
        assert_eq!(predict_progeny(None, None), Zygosity::Heterozygous);
    }

    #[test]
    fn test_both_heterozygous_parents() {
        assert_eq!(predict_progeny(Some("A/T"), Some("T/A")), Zygosity::Heterozygous);
    }

    #[test]
    fn test_classification_is_order_independent() {
        for a in GENOTYPES {
            for b in GENOTYPES {
                assert_eq!(
                    predict_progeny(a, b),
                    predict_progeny(b, a),
                    "asymmetric for {:?} vs {:?}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_homozygous_only_for_single_shared_allele() {
        for a in GENOTYPES {
            for b in GENOTYPES {
                let union: BTreeSet<&str> =
                    allele_set(a).union(&allele_set(b)).cloned().collect();
                let shared = !allele_set(a).is_disjoint(&allele_set(b));
                let expected = if shared && union.len() == 1 {
                    Zygosity::Homozygous
                } else {
                    Zygosity::Heterozygous
                };
                assert_eq!(predict_progeny(a, b), expected);
            }
        }
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Zygosity::Heterozygous.to_string(), "Heterozygous");
        assert_eq!(Zygosity::Homozygous.to_string(), "Homozygous");
    }
}
