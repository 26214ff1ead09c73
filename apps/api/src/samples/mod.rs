//! Sample Catalogue — fixed demo transcripts for manual testing.
//!
//! `expected_biases` is what a human reviewer flagged when the sample was written.
//! It is reference metadata only; the pipeline never reads it.

use serde::Serialize;

pub mod handlers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BiasLevel {
    None,
    Medium,
    High,
    Severe,
}

#[derive(Debug, Clone, Serialize)]
pub struct SampleInterview {
    pub slug: &'static str,
    pub name: &'static str,
    pub bias_level: BiasLevel,
    pub focus: &'static str,
    pub expected_biases: &'static [&'static str],
    #[serde(skip)]
    pub transcript: &'static str,
}

pub const SAMPLES: &[SampleInterview] = &[
    SampleInterview {
        slug: "fair-technical",
        name: "Fair Technical Interview",
        bias_level: BiasLevel::None,
        focus: "Technical skills and problem-solving",
        expected_biases: &[],
        transcript: include_str!("../../fixtures/samples/fair-technical.txt"),
    },
    SampleInterview {
        slug: "biased-gender",
        name: "Biased Interview - Gender",
        bias_level: BiasLevel::High,
        focus: "Gender-based assumptions and stereotypes",
        expected_biases: &["Gender", "Personal Life", "Stereotyping"],
        transcript: include_str!("../../fixtures/samples/biased-gender.txt"),
    },
    SampleInterview {
        slug: "biased-age",
        name: "Biased Interview - Age",
        bias_level: BiasLevel::High,
        focus: "Age discrimination and stereotypes",
        expected_biases: &["Age", "Stereotyping", "Cultural Fit"],
        transcript: include_str!("../../fixtures/samples/biased-age.txt"),
    },
    SampleInterview {
        slug: "biased-education",
        name: "Biased Interview - Education",
        bias_level: BiasLevel::Medium,
        focus: "Educational elitism and class bias",
        expected_biases: &["Education Background", "Socioeconomic Status", "Elitism"],
        transcript: include_str!("../../fixtures/samples/biased-education.txt"),
    },
    SampleInterview {
        slug: "biased-multiple",
        name: "Biased Interview - Multiple Issues",
        bias_level: BiasLevel::Severe,
        focus: "Multiple intersecting biases",
        expected_biases: &[
            "Race/Ethnicity",
            "Gender",
            "Age",
            "Education Background",
            "Appearance",
        ],
        transcript: include_str!("../../fixtures/samples/biased-multiple.txt"),
    },
    SampleInterview {
        slug: "professional-unbiased",
        name: "Professional Unbiased Interview",
        bias_level: BiasLevel::None,
        focus: "Skills-based professional assessment",
        expected_biases: &[],
        transcript: include_str!("../../fixtures/samples/professional-unbiased.txt"),
    },
];

pub fn find_sample(slug: &str) -> Option<&'static SampleInterview> {
    SAMPLES.iter().find(|s| s.slug == slug)
}
