//! Genotype text normalization.
//!
//! Raw genotype exports disagree on how a two-allele call is written:
//! SNPedia uses `(A;G)`, 23andMe writes `AG`, some tools emit `A/G`, and
//! AncestryDNA splits the alleles into two tab-separated columns. A catalog
//! genotype is expanded into every one of these renderings so that a plain
//! substring search finds it regardless of the source.

/// Separator between the two alleles of a canonical genotype
pub const ALLELE_SEPARATOR: char = ';';

/// Expand a canonical genotype into the textual formats a data export may use.
///
/// A genotype with a `;` separator yields four formats, in this order:
/// `(A;G)`, `AG`, `A/G` and `A<TAB>G`. A single token (e.g. a deletion code)
/// is treated as an implied homozygous pair and yields only `(T;T)`.
/// Alleles are uppercased; empty alleles are kept as-is.
///
/// # Examples
///
/// ```
/// use snp_finder::core::genotype::expand_formats;
///
/// assert_eq!(expand_formats("a;g"), vec!["(A;G)", "AG", "A/G", "A\tG"]);
/// assert_eq!(expand_formats("D"), vec!["(D;D)"]);
/// ```
#[must_use]
pub fn expand_formats(genotype: &str) -> Vec<String> {
    let upper = genotype.to_uppercase();
    match upper.split_once(ALLELE_SEPARATOR) {
        Some((a0, a1)) => vec![
            format!("({a0};{a1})"),
            format!("{a0}{a1}"),
            format!("{a0}/{a1}"),
            format!("{a0}\t{a1}"),
        ],
        None => vec![format!("({upper};{upper})")],
    }
}

/// Turn a matched format back into a readable `A G` pair.
///
/// Parentheses and the `;`, `/` or tab separator are replaced by a single
/// space. The concatenated `AG` form carries no separator and is returned
/// unchanged.
#[must_use]
pub fn display_genotype(matched: &str) -> String {
    if matched.contains(ALLELE_SEPARATOR) {
        let inner = matched
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .unwrap_or(matched);
        return join_pair(inner, ALLELE_SEPARATOR);
    }
    if matched.contains('/') {
        return join_pair(matched, '/');
    }
    if matched.contains('\t') {
        return join_pair(matched, '\t');
    }
    matched.to_string()
}

fn join_pair(text: &str, separator: char) -> String {
    match text.split_once(separator) {
        Some((a0, a1)) => format!("{a0} {a1}"),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_heterozygous() {
        assert_eq!(expand_formats("C;T"), vec!["(C;T)", "CT", "C/T", "C\tT"]);
    }

    #[test]
    fn test_expand_uppercases_alleles() {
        assert_eq!(expand_formats("a;a"), vec!["(A;A)", "AA", "A/A", "A\tA"]);
    }

    #[test]
    fn test_expand_single_token_is_homozygous() {
        assert_eq!(expand_formats("46373456"), vec!["(46373456;46373456)"]);
        assert_eq!(expand_formats("d"), vec!["(D;D)"]);
    }

    #[test]
    fn test_expand_trailing_empty_allele() {
        // Present in the catalog for rs6152; must not be rejected
        assert_eq!(expand_formats("A;"), vec!["(A;)", "A", "A/", "A\t"]);
    }

    #[test]
    fn test_expand_extra_separator_stays_in_second_allele() {
        assert_eq!(expand_formats("A;G;T")[0], "(A;G;T)");
        assert_eq!(expand_formats("A;G;T")[2], "A/G;T");
    }

    #[test]
    fn test_display_genotype() {
        assert_eq!(display_genotype("(A;G)"), "A G");
        assert_eq!(display_genotype("A;G"), "A G");
        assert_eq!(display_genotype("A/G"), "A G");
        assert_eq!(display_genotype("A\tG"), "A G");
        assert_eq!(display_genotype("AG"), "AG");
        assert_eq!(display_genotype("(46373456;46373456)"), "46373456 46373456");
    }

    #[test]
    fn test_display_genotype_empty_allele() {
        assert_eq!(display_genotype("(A;)"), "A ");
        assert_eq!(display_genotype("A/"), "A ");
    }
}
