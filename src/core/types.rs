use serde::Serialize;

/// Trait grouping a marker is associated with
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, clap::ValueEnum,
)]
pub enum Category {
    #[serde(rename = "Alzheimer's Disease")]
    Alzheimers,
    #[serde(rename = "Autism")]
    Autism,
    #[serde(rename = "Bipolar Disorder")]
    Bipolar,
    #[serde(rename = "Immunity")]
    Immunity,
    #[serde(rename = "Intelligence")]
    Intelligence,
    #[serde(rename = "Longevity")]
    Longevity,
    #[serde(rename = "Metabolism")]
    Metabolism,
    #[serde(rename = "Muscular Performance")]
    Muscle,
    #[serde(rename = "OCD")]
    Ocd,
    #[serde(rename = "Schizophrenia")]
    Schizophrenia,
    #[serde(rename = "Eye Characteristics")]
    Eyes,
    #[serde(rename = "Hair Characteristics")]
    Hair,
    #[serde(rename = "Anxiety")]
    Anxiety,
    #[serde(rename = "Depression")]
    Depression,
    #[serde(rename = "Addiction Risk")]
    Addiction,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 15] = [
        Self::Alzheimers,
        Self::Autism,
        Self::Bipolar,
        Self::Immunity,
        Self::Intelligence,
        Self::Longevity,
        Self::Metabolism,
        Self::Muscle,
        Self::Ocd,
        Self::Schizophrenia,
        Self::Eyes,
        Self::Hair,
        Self::Anxiety,
        Self::Depression,
        Self::Addiction,
    ];

    /// Human-readable name, as shown in reports
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Alzheimers => "Alzheimer's Disease",
            Self::Autism => "Autism",
            Self::Bipolar => "Bipolar Disorder",
            Self::Immunity => "Immunity",
            Self::Intelligence => "Intelligence",
            Self::Longevity => "Longevity",
            Self::Metabolism => "Metabolism",
            Self::Muscle => "Muscular Performance",
            Self::Ocd => "OCD",
            Self::Schizophrenia => "Schizophrenia",
            Self::Eyes => "Eye Characteristics",
            Self::Hair => "Hair Characteristics",
            Self::Anxiety => "Anxiety",
            Self::Depression => "Depression",
            Self::Addiction => "Addiction Risk",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_serialized_name() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{category}\""));
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Category::Alzheimers.to_string(), "Alzheimer's Disease");
        assert_eq!(Category::Muscle.to_string(), "Muscular Performance");
        assert_eq!(Category::Ocd.to_string(), "OCD");
    }
}
