use std::collections::HashMap;

use getset::{CopyGetters, Getters};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::helper::marker::classify::{ClassifiedMarkerRecord, Zygosity};
use crate::helper::utils::compare_chromosomes;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, CopyGetters)]
pub struct ZygosityCounts {
    #[getset(get_copy = "pub")]
    heterozygous: usize,
    #[getset(get_copy = "pub")]
    homozygous: usize,
}

impl ZygosityCounts {
    pub fn get(&self, zygosity: Zygosity) -> usize {
        match zygosity {
            Zygosity::Heterozygous => self.heterozygous,
            Zygosity::Homozygous => self.homozygous,
        }
    }

    pub fn total(&self) -> usize {
        self.heterozygous + self.homozygous
    }

    fn add(&mut self, zygosity: Zygosity) {
        match zygosity {
            Zygosity::Heterozygous => self.heterozygous += 1,
            Zygosity::Homozygous => self.homozygous += 1,
        }
    }
}

/// One exported row of the per chromosome breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChromosomeRow {
    #[serde(rename = "Chromosome")]
    pub chromosome: String,
    #[serde(rename = "Heterozygous")]
    pub heterozygous: usize,
    #[serde(rename = "Homozygous")]
    pub homozygous: usize,
    #[serde(rename = "Total")]
    pub total: usize,
}

/// Counts of predicted progeny states per chromosome (parent 1's column).
/// Chromosomes are kept in natural order; a label absent on a chromosome
/// simply counts zero.
#[derive(Debug, Clone, Default, PartialEq, Getters)]
pub struct ChromosomeDistribution {
    #[getset(get = "pub")]
    chromosomes: Vec<(String, ZygosityCounts)>,
}

impl ChromosomeDistribution {
    pub fn from_classified(records: &[ClassifiedMarkerRecord]) -> Self {
        let mut counts: HashMap<&str, ZygosityCounts> = HashMap::new();
        for record in records {
            counts
                .entry(record.chromosome())
                .or_default()
                .add(record.predicted_progeny());
        }

        let chromosomes = counts
            .into_iter()
            .sorted_by(|(a, _), (b, _)| compare_chromosomes(a, b))
            .map(|(chromosome, c)| (chromosome.to_string(), c))
            .collect();

        ChromosomeDistribution { chromosomes }
    }

    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    pub fn total(&self) -> usize {
        self.chromosomes.iter().map(|(_, c)| c.total()).sum()
    }

    /// Largest per chromosome marker count, used to scale charts.
    pub fn max_total(&self) -> usize {
        self.chromosomes
            .iter()
            .map(|(_, c)| c.total())
            .max()
            .unwrap_or(0)
    }

    pub fn rows(&self) -> Vec<ChromosomeRow> {
        self.chromosomes
            .iter()
            .map(|(chromosome, c)| ChromosomeRow {
                chromosome: chromosome.clone(),
                heterozygous: c.heterozygous,
                homozygous: c.homozygous,
                total: c.total(),
            })
            .collect()
    }
}
