use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use getset::Getters;
use itertools::Itertools;

use crate::helper::marker::error::MarkerError;
use crate::helper::marker::parent::ParentRole;

pub const MARKER_ID: &str = "Marker ID";
pub const REFERENCE_ALLELE: &str = "Reference Allele";
pub const ALTERNATE_ALLELE: &str = "Alternate Allele";
pub const GENOTYPE: &str = "Genotype";
pub const CHROMOSOME: &str = "Chromosome";

/// Columns every marker table must carry, in the order they are checked.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    MARKER_ID,
    REFERENCE_ALLELE,
    ALTERNATE_ALLELE,
    GENOTYPE,
    CHROMOSOME,
];

/// Cell spellings read as a missing genotype, same set spreadsheet and
/// dataframe tools write out for empty cells. Matched verbatim, untrimmed.
static MISSING_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Debug, Clone, PartialEq, Getters)]
pub struct MarkerRecord {
    #[getset(get = "pub")]
    marker_id: String,
    #[getset(get = "pub")]
    reference_allele: String,
    #[getset(get = "pub")]
    alternate_allele: String,
    genotype: Option<String>,
    #[getset(get = "pub")]
    chromosome: String,
    // values of the table's extra columns, same order as `MarkerTable::extra_columns`
    #[getset(get = "pub")]
    extra: Vec<String>,
}

impl MarkerRecord {
    pub fn new(
        marker_id: &str,
        reference_allele: &str,
        alternate_allele: &str,
        genotype: Option<&str>,
        chromosome: &str,
    ) -> Self {
        MarkerRecord {
            marker_id: marker_id.to_string(),
            reference_allele: reference_allele.to_string(),
            alternate_allele: alternate_allele.to_string(),
            genotype: genotype.map(str::to_string),
            chromosome: chromosome.to_string(),
            extra: Vec::new(),
        }
    }

    pub fn genotype(&self) -> Option<&str> {
        self.genotype.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Getters)]
pub struct MarkerTable {
    #[getset(get = "pub")]
    role: ParentRole,
    #[getset(get = "pub")]
    extra_columns: Vec<String>,
    #[getset(get = "pub")]
    records: Vec<MarkerRecord>,
}

struct ColumnIndex {
    marker_id: usize,
    reference_allele: usize,
    alternate_allele: usize,
    genotype: usize,
    chromosome: usize,
    extra: Vec<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord, role: ParentRole) -> Result<Self, MarkerError> {
        let mut required = Vec::with_capacity(REQUIRED_COLUMNS.len());
        for column in REQUIRED_COLUMNS {
            match headers.iter().position(|h| h == column) {
                Some(i) => required.push(i),
                None => {
                    return Err(MarkerError::MissingColumn(
                        role.to_string(),
                        column.to_string(),
                    ));
                }
            }
        }

        let extra = (0..headers.len())
            .filter(|i| !required.contains(i))
            .collect();

        Ok(ColumnIndex {
            marker_id: required[0],
            reference_allele: required[1],
            alternate_allele: required[2],
            genotype: required[3],
            chromosome: required[4],
            extra,
        })
    }
}

impl MarkerTable {
    pub fn new(role: ParentRole, records: Vec<MarkerRecord>) -> Self {
        MarkerTable {
            role,
            extra_columns: Vec::new(),
            records,
        }
    }

    /// Reads a comma separated marker table. The header row is checked for
    /// every required column before any data row is parsed.
    pub fn from_reader<R: Read>(reader: R, role: ParentRole) -> Result<Self, MarkerError> {
        let mut rdr = ReaderBuilder::new().trim(Trim::Headers).from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(|e| MarkerError::MalformedRow(role.to_string(), e.to_string()))?
            .clone();
        let index = ColumnIndex::from_headers(&headers, role)?;

        let mut records = Vec::new();
        for row in rdr.records() {
            let row = row.map_err(|e| MarkerError::MalformedRow(role.to_string(), e.to_string()))?;
            let field = |i: usize| row.get(i).unwrap_or_default();

            records.push(MarkerRecord {
                marker_id: field(index.marker_id).to_string(),
                reference_allele: field(index.reference_allele).to_string(),
                alternate_allele: field(index.alternate_allele).to_string(),
                genotype: normalize_genotype(field(index.genotype)),
                chromosome: field(index.chromosome).trim().to_string(),
                extra: index.extra.iter().map(|&i| field(i).to_string()).collect(),
            });
        }

        Ok(MarkerTable {
            role,
            extra_columns: index.extra.iter().map(|&i| headers[i].to_string()).collect(),
            records,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct marker IDs that occur on more than one row.
    pub fn duplicated_marker_ids(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.marker_id.as_str())
            .counts()
            .values()
            .filter(|&&n| n > 1)
            .count()
    }
}

fn normalize_genotype(cell: &str) -> Option<String> {
    if MISSING_VALUES.contains(&cell) {
        None
    } else {
        Some(cell.to_string())
    }
}
