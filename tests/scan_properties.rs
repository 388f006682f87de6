use proptest::prelude::*;
use snp_finder::core::genotype::expand_formats;
use snp_finder::matching::engine::detect_marker;
use snp_finder::{Category, MarkerCatalog, MarkerDefinition, RecordSet, ScanEngine};

proptest! {
    #[test]
    fn two_allele_genotype_has_four_uppercase_formats(a0 in "[a-zA-Z]", a1 in "[a-zA-Z]") {
        let formats = expand_formats(&format!("{a0};{a1}"));
        prop_assert_eq!(formats.len(), 4);

        let (u0, u1) = (a0.to_uppercase(), a1.to_uppercase());
        for format in &formats {
            prop_assert_eq!(format, &format.to_uppercase());
            prop_assert!(format.contains(&u0) && format.contains(&u1), "{:?}", format);
        }
    }

    #[test]
    fn single_token_genotype_is_implied_pair(token in "[a-zA-Z0-9]{1,10}") {
        let upper = token.to_uppercase();
        prop_assert_eq!(expand_formats(&token), vec![format!("({upper};{upper})")]);
    }

    #[test]
    fn absent_identifier_never_matches(id in "rs[0-9]{3,8}", line in "[ -~\t]{0,80}") {
        prop_assume!(!line.contains(&id));
        let marker = MarkerDefinition::new(id, "A;G", Category::Autism).with_genotype("T;T");
        prop_assert_eq!(detect_marker(&marker, &line), None);
    }

    #[test]
    fn unlisted_genotype_never_matches(a0 in "[CGT]", a1 in "[CGT]", position in 1u64..250_000_000) {
        let marker = MarkerDefinition::new("rs4988235", "A;A", Category::Metabolism);
        let line = format!("rs4988235\t2\t{position}\t{a0}{a1}");
        prop_assert_eq!(detect_marker(&marker, &line), None);
    }

    #[test]
    fn scan_order_follows_catalog(
        genotypes in proptest::collection::vec(prop_oneof!["A;A", "C;T", "G;G"], 1..20),
        order in Just((0..20usize).collect::<Vec<_>>()).prop_shuffle(),
    ) {
        let markers: Vec<MarkerDefinition> = genotypes
            .iter()
            .enumerate()
            .map(|(i, g)| MarkerDefinition::new(format!("rs{}", 1000 + i), g.as_str(), Category::Longevity))
            .collect();
        let catalog = MarkerCatalog::from_definitions(markers);

        // Every record carries the first accepted genotype, inserted in shuffled order
        let mut records = RecordSet::new();
        for &i in order.iter().filter(|&&i| i < genotypes.len()) {
            let id = format!("rs{}", 1000 + i);
            let line = format!("{id}\t1\t{i}\t({})", genotypes[i]);
            records.insert(id, line);
        }

        let engine = ScanEngine::new(&catalog);
        let first = engine.scan(&records);
        let ids: Vec<&str> = first.iter().map(|m| m.marker.identifier.as_str()).collect();
        let expected: Vec<&str> = catalog.iter().map(|m| m.identifier.as_str()).collect();
        prop_assert_eq!(ids, expected);

        // Idempotent
        prop_assert_eq!(first, engine.scan(&records));
    }
}

#[test]
fn malformed_genotype_is_normalized() {
    let formats = expand_formats("A;");
    assert!(formats.contains(&"(A;)".to_string()));

    let marker = MarkerCatalog::embedded()
        .get("rs6152")
        .into_iter()
        .find(|m| m.accepted_genotypes == ["A;"])
        .expect("rs6152 A; should be catalogued");
    assert_eq!(marker.match_formats(), ["(A;)", "A", "A/", "A\t"]);
}
