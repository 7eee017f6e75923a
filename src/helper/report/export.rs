use std::collections::HashSet;
use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Local};
use csv::WriterBuilder;
use getset::Getters;

use crate::helper::marker::table::{
    ALTERNATE_ALLELE, CHROMOSOME, GENOTYPE, MARKER_ID, REFERENCE_ALLELE,
};
use crate::helper::marker::{
    ChromosomeDistribution, JoinedColumns, MarkerAnalysis, MarkerRecord, ParentLabels, ParentRole,
};

pub const PREDICTED_PROGENY: &str = "Predicted Progeny";
pub const GENERATED_BY: &str = "Generated By";
pub const PARENT1_STRAIN: &str = "Parent 1 Strain";
pub const PARENT2_STRAIN: &str = "Parent 2 Strain";
pub const GENERATED_AT: &str = "Generated At";

const PARENT_COLUMNS: [&str; 4] = [REFERENCE_ALLELE, ALTERNATE_ALLELE, GENOTYPE, CHROMOSOME];

/// Metadata stamped onto every exported row. Not part of the computation.
#[derive(Debug, Clone, Getters)]
pub struct Provenance {
    #[getset(get = "pub")]
    generated_by: String,
    #[getset(get = "pub")]
    labels: ParentLabels,
    #[getset(get = "pub")]
    generated_at: DateTime<Local>,
}

impl Provenance {
    pub fn new(generated_by: &str, labels: ParentLabels) -> Self {
        Provenance {
            generated_by: generated_by.to_string(),
            labels,
            generated_at: Local::now(),
        }
    }

    pub fn with_timestamp(mut self, generated_at: DateTime<Local>) -> Self {
        self.generated_at = generated_at;
        self
    }

    fn fields(&self) -> [String; 4] {
        [
            self.generated_by.clone(),
            self.labels.display(ParentRole::Parent1).to_string(),
            self.labels.display(ParentRole::Parent2).to_string(),
            self.generated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ]
    }
}

pub fn default_generated_by() -> String {
    format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Header of the annotated table. The join key comes first, then each
/// parent's columns. Columns both tables carry get the parent suffix, a
/// column only one table has keeps its bare name unless that name is
/// already taken, in which case the suffix is appended until it is unique.
pub fn classified_table_header(columns: &JoinedColumns, labels: &ParentLabels) -> Vec<String> {
    let trailing = [PREDICTED_PROGENY, GENERATED_BY, PARENT1_STRAIN, PARENT2_STRAIN, GENERATED_AT];

    let mut taken: HashSet<String> = HashSet::new();
    taken.insert(MARKER_ID.to_string());
    taken.extend(trailing.map(String::from));
    for role in ParentRole::ALL {
        let suffix = labels.suffix(role);
        taken.extend(PARENT_COLUMNS.map(|column| format!("{}_{}", column, suffix)));
    }

    let mut header = vec![MARKER_ID.to_string()];
    for role in ParentRole::ALL {
        let suffix = labels.suffix(role);
        header.extend(PARENT_COLUMNS.map(|column| format!("{}_{}", column, suffix)));

        for column in columns.extra(role) {
            let mut name = if columns.is_shared(column) {
                format!("{}_{}", column, suffix)
            } else {
                column.clone()
            };
            while taken.contains(&name) {
                name = format!("{}_{}", name, suffix);
            }
            taken.insert(name.clone());
            header.push(name);
        }
    }

    header.extend(trailing.map(String::from));
    header
}

fn parent_fields(record: &MarkerRecord) -> impl Iterator<Item = &str> {
    [
        record.reference_allele().as_str(),
        record.alternate_allele().as_str(),
        record.genotype().unwrap_or_default(),
        record.chromosome().as_str(),
    ]
    .into_iter()
    .chain(record.extra().iter().map(String::as_str))
}

pub fn write_classified_table<W: Write>(
    writer: W,
    analysis: &MarkerAnalysis,
    provenance: &Provenance,
) -> Result<(), Box<dyn Error>> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(classified_table_header(analysis.columns(), provenance.labels()))?;

    let stamp = provenance.fields();
    for record in analysis.records() {
        let joined = record.joined();
        let row: Vec<&str> = std::iter::once(record.marker_id())
            .chain(parent_fields(joined.parent1()))
            .chain(parent_fields(joined.parent2()))
            .chain(std::iter::once(record.predicted_progeny().as_str()))
            .chain(stamp.iter().map(String::as_str))
            .collect();
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_chromosome_distribution<W: Write>(
    writer: W,
    distribution: &ChromosomeDistribution,
) -> Result<(), Box<dyn Error>> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(["Chromosome", "Heterozygous", "Homozygous", "Total"])?;
    for row in distribution.rows() {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn export_classified_table(
    path: &Path,
    analysis: &MarkerAnalysis,
    provenance: &Provenance,
) -> Result<(), Box<dyn Error>> {
    write_classified_table(File::create(path)?, analysis, provenance)
}

pub fn export_chromosome_distribution(
    path: &Path,
    distribution: &ChromosomeDistribution,
) -> Result<(), Box<dyn Error>> {
    write_chromosome_distribution(File::create(path)?, distribution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::helper::marker::{MarkerTable, analyze_markers};

    fn analysis() -> MarkerAnalysis {
        let p1 = MarkerTable::from_reader(
            std::fs::File::open("tests/data/parent1.csv").unwrap(),
            ParentRole::Parent1,
        )
        .unwrap();
        let p2 = MarkerTable::from_reader(
            std::fs::File::open("tests/data/parent2.csv").unwrap(),
            ParentRole::Parent2,
        )
        .unwrap();
        analyze_markers(&p1, &p2)
    }

    fn provenance(labels: ParentLabels) -> Provenance {
        let at = Local.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        Provenance::new("heterosis-predictor test", labels).with_timestamp(at)
    }

    #[test]
    fn test_header_with_default_suffixes() {
        let header = classified_table_header(analysis().columns(), &ParentLabels::default());
        assert_eq!(
            header,
            vec![
                "Marker ID",
                "Reference Allele_p1",
                "Alternate Allele_p1",
                "Genotype_p1",
                "Chromosome_p1",
                "Position_p1",
                "Call Quality",
                "Reference Allele_p2",
                "Alternate Allele_p2",
                "Genotype_p2",
                "Chromosome_p2",
                "Position_p2",
                "Predicted Progeny",
                "Generated By",
                "Parent 1 Strain",
                "Parent 2 Strain",
                "Generated At",
            ]
        );
    }

    #[test]
    fn test_header_with_strain_suffixes() {
        let labels = ParentLabels::new(Some("Skunk".to_string()), Some("Haze".to_string()));
        let header = classified_table_header(analysis().columns(), &labels);
        assert!(header.contains(&"Genotype_Skunk".to_string()));
        assert!(header.contains(&"Genotype_Haze".to_string()));
        assert!(header.contains(&"Position_Haze".to_string()));
        assert!(!header.iter().any(|h| h.ends_with("_p1")));
    }

    #[test]
    fn test_header_names_are_unique() {
        let data1 = "Marker ID,Reference Allele,Alternate Allele,Genotype,Chromosome,\
                     Predicted Progeny,Genotype_p2,Note\n\
                     M1,A,T,A/T,1,x,y,z\n";
        let data2 = "Marker ID,Reference Allele,Alternate Allele,Genotype,Chromosome,\
                     Generated By,Note,Note_p1\n\
                     M1,A,T,A/A,1,x,y,z\n";
        let p1 = MarkerTable::from_reader(data1.as_bytes(), ParentRole::Parent1).unwrap();
        let p2 = MarkerTable::from_reader(data2.as_bytes(), ParentRole::Parent2).unwrap();
        let analysis = analyze_markers(&p1, &p2);
        let header = classified_table_header(analysis.columns(), &ParentLabels::default());

        let distinct: std::collections::HashSet<&String> = header.iter().collect();
        assert_eq!(distinct.len(), header.len());
        assert!(header.contains(&"Predicted Progeny_p1".to_string()));
        assert!(header.contains(&"Genotype_p2_p1".to_string()));
        assert!(header.contains(&"Generated By_p2".to_string()));
        assert!(header.contains(&"Note_p1_p2".to_string()));
        assert_eq!(header.last(), Some(&GENERATED_AT.to_string()));
        assert_eq!(header.len(), 1 + 4 + 3 + 4 + 3 + 5);
    }

    #[test]
    fn test_write_classified_table() {
        let analysis = analysis();
        let labels = ParentLabels::new(Some("Skunk".to_string()), None);
        let mut buffer = Vec::new();
        write_classified_table(&mut buffer, &analysis, &provenance(labels)).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), analysis.records().len() + 1);
        assert_eq!(
            lines[1],
            "CS_M001,A,G,A/A,1,10500,0.98,A,G,A/G,1,10500,Heterozygous,\
             heterosis-predictor test,Skunk,Parent 2,2024-05-01 09:30:00"
        );
        // missing genotype is written back as an empty cell
        assert!(lines[5].starts_with("CS_M005,A,C,,3,"));
    }

    #[test]
    fn test_write_chromosome_distribution() {
        let analysis = analysis();
        let mut buffer = Vec::new();
        write_chromosome_distribution(&mut buffer, analysis.distribution()).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Chromosome,Heterozygous,Homozygous,Total");
        assert_eq!(lines[1], "1,2,0,2");
        assert_eq!(lines[2], "2,1,1,2");
        assert_eq!(lines.last(), Some(&"X,1,0,1"));
    }

    #[test]
    fn test_empty_distribution_still_has_header() {
        let mut buffer = Vec::new();
        write_chromosome_distribution(&mut buffer, &ChromosomeDistribution::default()).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Chromosome,Heterozygous,Homozygous,Total\n"
        );
    }
}
