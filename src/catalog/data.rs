//! Embedded table of known trait markers.
//!
//! One row per (identifier, genotype) association. Several rows may share an
//! identifier to cover heterozygous and homozygous calls of the same locus.
//! Rows without a description get the category default.

use crate::core::marker::MarkerDefinition;
use crate::core::types::Category;

/// A row of the embedded marker table
#[derive(Debug, Clone, Copy)]
pub struct MarkerEntry {
    pub identifier: &'static str,
    pub genotype: &'static str,
    pub category: Category,
    pub description: Option<&'static str>,
}

impl MarkerEntry {
    pub fn to_definition(self) -> MarkerDefinition {
        let definition = MarkerDefinition::new(self.identifier, self.genotype, self.category);
        match self.description {
            Some(description) => definition.with_description(description),
            None => definition,
        }
    }
}

const fn marker(
    identifier: &'static str,
    genotype: &'static str,
    category: Category,
) -> MarkerEntry {
    MarkerEntry {
        identifier,
        genotype,
        category,
        description: None,
    }
}

const fn described(
    identifier: &'static str,
    genotype: &'static str,
    category: Category,
    description: &'static str,
) -> MarkerEntry {
    MarkerEntry {
        identifier,
        genotype,
        category,
        description: Some(description),
    }
}

/// Every known marker, in report order
#[rustfmt::skip]
pub const MARKER_TABLE: &[MarkerEntry] = &[
    // Bipolar Disorder
    described("rs1006737", "A;A", Category::Bipolar, "Calcium channel gene variant linked to bipolar risk"),
    described("rs4027132", "A;A", Category::Bipolar, "Associated with bipolar disorder risk"),
    marker("rs7570682", "A;A", Category::Bipolar),
    marker("rs1375144", "C;C", Category::Bipolar),
    marker("rs683395", "C;T", Category::Bipolar),
    marker("rs2609653", "C;T", Category::Bipolar),
    marker("rs10982256", "C;C", Category::Bipolar),
    marker("rs11622475", "C;C", Category::Bipolar),
    marker("rs1344484", "T;T", Category::Bipolar),
    marker("rs2953145", "C;G", Category::Bipolar),
    marker("rs420259", "T;T", Category::Bipolar),
    marker("rs4276227", "C;C", Category::Bipolar),
    described("rs4027132", "A;G", Category::Bipolar, "Heterozygous variant with intermediate bipolar risk"),
    marker("rs2609653", "C;C", Category::Bipolar),
    marker("rs2953145", "G;G", Category::Bipolar),
    described("rs6448030", "G;G", Category::Bipolar, "Increases bipolar disorder risk"),
    described("rs10033237", "A;A", Category::Bipolar, "Associated with mood disorders"),

    // Alzheimer's Disease
    described("rs429358", "C;C", Category::Alzheimers, "APOE4 homozygous variant strongly linked to Alzheimer's risk"),
    marker("rs145999145", "A;A", Category::Alzheimers),
    marker("rs908832", "A;A", Category::Alzheimers),
    marker("rs63750847", "A;A", Category::Alzheimers),
    described("rs429358", "C;T", Category::Alzheimers, "APOE4 heterozygous variant increasing Alzheimer's risk"),
    marker("rs145999145", "A;G", Category::Alzheimers),
    marker("rs63750847", "A;G", Category::Alzheimers),
    described("rs7412", "C;C", Category::Alzheimers, "APOE ε2/ε2 protective variant"),
    described("rs4420638", "G;G", Category::Alzheimers, "Near APOC1, increases Alzheimer's risk"),

    // Autism
    described("rs1858830", "C;C", Category::Autism, "MET gene variant associated with autism risk"),
    marker("rs2710102", "C;C", Category::Autism),
    marker("rs7794745", "A;T", Category::Autism),
    marker("rs1322784", "C;C", Category::Autism),
    marker("rs1322784", "C;T", Category::Autism),
    marker("rs1322784", "T;T", Category::Autism),
    marker("rs265981", "A;G", Category::Autism),
    marker("rs4532", "C;T", Category::Autism),
    marker("rs686", "A;G", Category::Autism),
    marker("rs1143674", "A;A", Category::Autism),
    marker("rs6807362", "C;C", Category::Autism),
    marker("rs757972971", "A;A", Category::Autism),
    marker("rs2217262", "A;A", Category::Autism),
    marker("rs6766410", "A;A", Category::Autism),
    marker("rs6766410", "A;C", Category::Autism),
    marker("rs6766410", "C;C", Category::Autism),
    marker("rs1445442", "A;A", Category::Autism),
    marker("rs1445442", "A;G", Category::Autism),
    marker("rs1445442", "G;G", Category::Autism),
    marker("rs2421826", "C;T", Category::Autism),
    marker("rs2421826", "T;T", Category::Autism),
    marker("rs2421826", "C;C", Category::Autism),
    marker("rs1358054", "G;G", Category::Autism),
    marker("rs1358054", "G;T", Category::Autism),
    marker("rs1358054", "T;T", Category::Autism),
    marker("rs536861", "A;A", Category::Autism),
    marker("rs536861", "A;C", Category::Autism),
    marker("rs536861", "C;C", Category::Autism),
    marker("rs722628", "A;A", Category::Autism),
    marker("rs722628", "A;G", Category::Autism),
    marker("rs722628", "G;G", Category::Autism),
    marker("rs1858830", "C;G", Category::Autism),
    marker("rs2710102", "G;G", Category::Autism),
    marker("rs7794745", "T;T", Category::Autism),
    marker("rs265981", "G;G", Category::Autism),
    marker("rs4532", "T;T", Category::Autism),
    marker("rs686", "A;A", Category::Autism),
    marker("rs1143674", "A;A", Category::Autism),
    marker("rs757972971", "A;A", Category::Autism),
    described("rs10513025", "T;T", Category::Autism, "Linked to autism spectrum disorder risk"),
    described("rs1718101", "C;C", Category::Autism, "CNTNAP2 gene, associated with autism susceptibility"),

    // Schizophrenia
    marker("rs27388", "A;A", Category::Schizophrenia),
    marker("rs2270641", "G;G", Category::Schizophrenia),
    marker("rs4129148", "C;C", Category::Schizophrenia),
    marker("rs28694718", "A;A", Category::Schizophrenia),
    marker("rs6422441", "C;C", Category::Schizophrenia),
    marker("rs28414810", "C;C", Category::Schizophrenia),
    marker("rs6603272", "G;G", Category::Schizophrenia),
    marker("rs17883192", "C;C", Category::Schizophrenia),
    marker("rs165599", "G;G", Category::Schizophrenia),
    marker("rs27388", "A;G", Category::Schizophrenia),
    marker("rs4129148", "C;G", Category::Schizophrenia),
    marker("rs28694718", "A;G", Category::Schizophrenia),
    marker("rs6422441", "C;T", Category::Schizophrenia),
    marker("rs28414810", "C;G", Category::Schizophrenia),
    marker("rs6603272", "G;T", Category::Schizophrenia),
    marker("rs17883192", "C;G", Category::Schizophrenia),
    described("rs4633", "C;C", Category::Schizophrenia, "COMT gene, linked to schizophrenia risk"),
    described("rs13192841", "A;A", Category::Schizophrenia, "Increases schizophrenia susceptibility"),

    // Longevity
    marker("rs3758391", "C;T", Category::Longevity),
    marker("rs5882", "A;A", Category::Longevity),
    marker("rs1042522", "C;C", Category::Longevity),
    marker("rs3803304", "C;C", Category::Longevity),
    marker("rs3803304", "C;G", Category::Longevity),
    marker("rs3803304", "G;G", Category::Longevity),
    marker("rs6873545", "C;C", Category::Longevity),
    marker("rs4590183", "C;C", Category::Longevity),
    marker("rs1556516", "C;C", Category::Longevity),
    marker("rs1556516", "C;G", Category::Longevity),
    marker("rs1556516", "G;G", Category::Longevity),
    marker("rs7137828", "C;C", Category::Longevity),
    marker("rs7137828", "C;T", Category::Longevity),
    marker("rs7137828", "T;T", Category::Longevity),
    marker("rs1627804", "C;C", Category::Longevity),
    marker("rs1627804", "A;A", Category::Longevity),
    marker("rs1627804", "A;C", Category::Longevity),
    marker("rs7844965", "A;G", Category::Longevity),
    marker("rs7844965", "A;A", Category::Longevity),
    marker("rs7844965", "G;G", Category::Longevity),
    marker("rs61978928", "C;C", Category::Longevity),
    marker("rs61978928", "C;T", Category::Longevity),
    marker("rs61978928", "T;T", Category::Longevity),
    marker("rs28926173", "C;C", Category::Longevity),
    marker("rs28926173", "C;T", Category::Longevity),
    marker("rs28926173", "T;T", Category::Longevity),
    marker("rs146254978", "C;C", Category::Longevity),
    marker("rs146254978", "C;T", Category::Longevity),
    marker("rs146254978", "T;T", Category::Longevity),
    marker("rs139137459", "A;G", Category::Longevity),
    marker("rs139137459", "A;A", Category::Longevity),
    marker("rs139137459", "G;G", Category::Longevity),
    marker("rs3758391", "T;T", Category::Longevity),
    marker("rs5882", "A;G", Category::Longevity),
    marker("rs1042522", "C;G", Category::Longevity),
    described("rs2542052", "C;C", Category::Longevity, "APOC3 variant, linked to longer lifespan"),
    described("rs1042714", "G;G", Category::Longevity, "ADRB2, associated with longevity"),
    described("rs8034191", "C;C", Category::Longevity, "Associated with lung cancer risk and longevity"),
    described("rs2802292", "G;G", Category::Longevity, "FOXO3 variant linked to extended lifespan"),

    // Immunity
    described("rs333", "46373456", Category::Immunity, "CCR5 delta32 variant affecting HIV resistance"),
    described("rs601338", "A;A", Category::Immunity, "FUT2 variant affecting gut microbiome and immunity"),
    described("rs1800896", "T;T", Category::Immunity, "IL10 variant, affects immune response"),
    described("rs5743810", "C;C", Category::Immunity, "TLR6, linked to infection resistance"),
    described("rs5743810", "C;T", Category::Immunity, "TLR6, linked to infection resistance"),
    described("rs5743810", "T;T", Category::Immunity, "TLR6, linked to infection resistance"),

    // Intelligence
    marker("rs28379706", "T;T", Category::Intelligence),
    marker("rs28379706", "C;T", Category::Intelligence),
    marker("rs28379706", "C;C", Category::Intelligence),
    marker("rs363039", "A;G", Category::Intelligence),
    described("rs4680", "A;A", Category::Intelligence, "COMT Val/Val variant, higher COMT activity"),
    described("rs4680", "G;G", Category::Intelligence, "COMT Met/Met variant, better memory function"),
    marker("rs363039", "C;C", Category::Intelligence),
    described("rs53576", "G;G", Category::Intelligence, "OXTR variant influencing social cognition"),
    described("rs2251499", "C;C", Category::Intelligence, "Associated with cognitive performance"),
    described("rs10119", "A;A", Category::Intelligence, "TOMM40, linked to memory function"),

    // Muscular Performance
    described("rs1815739", "C;C", Category::Muscle, "ACTN3 variant linked to sprint performance"),
    marker("rs1805086", "C;C", Category::Muscle),
    marker("rs1815739", "C;T", Category::Muscle),
    marker("rs1805086", "C;T", Category::Muscle),
    marker("rs1815739", "T;T", Category::Muscle),
    described("rs1799752", "D;D", Category::Muscle, "ACE deletion allele linked to endurance"),
    described("rs4253778", "C;C", Category::Muscle, "PPARGC1A, enhances muscle performance"),

    // OCD
    marker("rs4570625", "G;G", Category::Ocd),
    marker("rs4565946", "C;C", Category::Ocd),
    described("rs6313", "A;A", Category::Ocd, "HTR2A, linked to obsessive-compulsive traits"),
    described("rs301430", "C;C", Category::Ocd, "SLC1A1, associated with OCD risk"),

    // Metabolism
    marker("rs1801131", "A;C", Category::Metabolism),
    marker("rs1801131", "C;C", Category::Metabolism),
    marker("rs1801133", "C;T", Category::Metabolism),
    marker("rs1801133", "T;T", Category::Metabolism),
    marker("rs2282679", "A;C", Category::Metabolism),
    marker("rs2282679", "C;C", Category::Metabolism),
    marker("rs12785878", "G;T", Category::Metabolism),
    marker("rs12785878", "T;T", Category::Metabolism),
    marker("rs1799945", "F;G", Category::Metabolism),
    marker("rs4988235", "C;C", Category::Metabolism),
    marker("rs182549", "C;C", Category::Metabolism),
    marker("rs2187668", "A;A", Category::Metabolism),
    marker("rs2187668", "A;G", Category::Metabolism),
    marker("rs5030858", "T;T", Category::Metabolism),
    marker("rs72921001", "C;C", Category::Metabolism),
    marker("rs7903146", "T;T", Category::Metabolism),
    marker("rs7903146", "C;C", Category::Metabolism),
    marker("rs7903146", "C;T", Category::Metabolism),
    marker("rs662799", "A;G", Category::Metabolism),
    marker("rs662799", "G;G", Category::Metabolism),
    marker("rs13119723", "A;A", Category::Metabolism),
    marker("rs13119723", "A;G", Category::Metabolism),
    marker("rs13119723", "G;G", Category::Metabolism),
    marker("rs6822844", "G;G", Category::Metabolism),
    marker("rs3184504", "C;T", Category::Metabolism),
    marker("rs3184504", "T;T", Category::Metabolism),
    described("rs1042713", "G;G", Category::Metabolism, "ADRB2 variant affecting energy expenditure"),
    described("rs9939609", "A;A", Category::Metabolism, "FTO variant linked to obesity risk"),
    described("rs4988235", "T;T", Category::Metabolism, "LCT variant linked to lactose tolerance"),
    described("rs17782313", "C;C", Category::Metabolism, "MC4R, increases obesity risk"),
    described("rs1421085", "C;C", Category::Metabolism, "FTO, linked to higher BMI"),

    // Eye Characteristics
    described("rs12913832", "A;A", Category::Eyes, "HERC2 variant strongly linked to blue eyes"),
    described("rs12913832", "A;G", Category::Eyes, "HERC2 variant linked to intermediate eye color"),
    described("rs12913832", "G;G", Category::Eyes, "HERC2 variant linked to brown eyes"),
    marker("rs28938473", "T;T", Category::Eyes),
    marker("rs61753033", "T;T", Category::Eyes),
    marker("rs61753034", "T;T", Category::Eyes),
    marker("rs4778241", "A;A", Category::Eyes),
    marker("rs4778241", "A;C", Category::Eyes),
    marker("rs4778241", "C;C", Category::Eyes),
    marker("rs7495174", "A;A", Category::Eyes),
    marker("rs1129038", "A;A", Category::Eyes),
    marker("rs1129038", "A;G", Category::Eyes),
    marker("rs1129038", "G;G", Category::Eyes),
    marker("rs916977", "A;A", Category::Eyes),
    marker("rs916977", "A;G", Category::Eyes),
    marker("rs916977", "G;G", Category::Eyes),
    marker("rs1667394", "A;A", Category::Eyes),
    described("rs12203592", "T;T", Category::Eyes, "IRF4 variant affecting eye color variation"),
    described("rs16891982", "C;C", Category::Eyes, "SLC45A2, influences light eye color"),
    described("rs1393350", "A;A", Category::Eyes, "TYR, linked to lighter eye shades"),

    // Hair Characteristics
    marker("rs6152", "A;A", Category::Hair),
    marker("rs6152", "A;G", Category::Hair),
    marker("rs6152", "A;", Category::Hair),
    marker("rs6152", "G;G", Category::Hair),
    marker("rs1805009", "C;C", Category::Hair),
    marker("rs1805009", "C;G", Category::Hair),
    described("rs1805007", "C;T", Category::Hair, "MC1R variant linked to red hair"),
    marker("rs1805007", "T;T", Category::Hair),
    marker("rs1805008", "C;T", Category::Hair),
    marker("rs1805008", "T;T", Category::Hair),
    marker("rs1805006", "A;A", Category::Hair),
    marker("rs1805006", "A;C", Category::Hair),
    marker("rs11547464", "A;A", Category::Hair),
    marker("rs11547464", "A;G", Category::Hair),
    marker("rs35264875", "T;T", Category::Hair),
    marker("rs7349332", "T;T", Category::Hair),
    marker("rs11803731", "T;T", Category::Hair),
    marker("rs17646946", "A;A", Category::Hair),
    marker("rs1667394", "A;A", Category::Hair),
    described("rs16891982", "G;G", Category::Hair, "SLC45A2 variant influencing hair pigmentation"),
    described("rs17822931", "C;C", Category::Hair, "ABCC11 variant linked to earwax type and hair texture"),
    described("rs17822931", "C;T", Category::Hair, "Dry earwax, no body odor, likely Asian ancestry"),
    described("rs12821256", "C;C", Category::Hair, "KITLG, associated with blond hair"),
    described("rs2378249", "G;G", Category::Hair, "PADI3, linked to hair texture"),

    // Depression
    described("rs6265", "C;C", Category::Depression, "BDNF Val66Met variant linked to depression risk"),
    described("rs25531", "T;T", Category::Depression, "SERT gene variant affecting serotonin transport"),
    described("rs1049353", "A;A", Category::Depression, "CNR1, associated with depression risk"),
    described("rs909525", "T;T", Category::Depression, "TPH2, linked to serotonin regulation"),

    // Anxiety
    described("rs1360780", "T;T", Category::Anxiety, "FKBP5 variant associated with stress response"),
    described("rs3810366", "G;G", Category::Anxiety, "CRHR1 variant linked to stress response"),
    described("rs6295", "C;C", Category::Anxiety, "HTR1A, increases anxiety risk"),
    described("rs6311", "A;A", Category::Anxiety, "HTR2A, linked to stress response"),

    // Addiction Risk
    described("rs1800497", "A;A", Category::Addiction, "DRD2 Taq1A A1/A1 variant, higher addiction risk"),
    described("rs1800497", "A;G", Category::Addiction, "DRD2 Taq1A, intermediate addiction risk"),
    described("rs1799971", "A;G", Category::Addiction, "OPRM1 variant linked to opioid receptor function"),
    described("rs662", "A;A", Category::Addiction, "PON1 variant associated with alcohol metabolism"),
    described("rs1229984", "C;C", Category::Addiction, "ADH1B variant affecting alcohol processing"),
    described("rs16969968", "A;A", Category::Addiction, "CHRNA5 variant associated with nicotine dependence"),
    described("rs2832407", "A;A", Category::Addiction, "GRIK1, increases alcohol dependence risk"),
    described("rs6277", "G;G", Category::Addiction, "DRD2, linked to reward sensitivity"),
];
