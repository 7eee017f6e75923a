use std::collections::BTreeSet;

pub const GENOTYPE_DELIMITER: char = '/';

/// Splits a genotype string into its allele tokens, keeping their order.
/// Tokens are not checked against any allele alphabet.
pub fn parse_genotype(genotype: Option<&str>) -> Vec<&str> {
    match genotype {
        Some(g) => g.split(GENOTYPE_DELIMITER).collect(),
        None => Vec::new(),
    }
}

/// Distinct alleles of a genotype.
pub fn allele_set(genotype: Option<&str>) -> BTreeSet<&str> {
    parse_genotype(genotype).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_genotype() {
        assert_eq!(parse_genotype(Some("A/T")), vec!["A", "T"]);
        assert_eq!(parse_genotype(Some("T/A/A")), vec!["T", "A", "A"]);
        assert_eq!(parse_genotype(Some("AT")), vec!["AT"]);
        assert!(parse_genotype(None).is_empty());
    }

    #[test]
    fn test_allele_set_collapses_repeats() {
        let set = allele_set(Some("C/C"));
        assert_eq!(set.len(), 1);
        assert!(set.contains("C"));
        assert!(allele_set(None).is_empty());
    }

    #[test]
    fn test_trailing_delimiter_keeps_empty_token() {
        assert_eq!(parse_genotype(Some("G/")), vec!["G", ""]);
        assert_eq!(allele_set(Some("G/")).len(), 2);
    }
}
