// Prompt templates for the analysis pipeline.
// Placeholders are replaced verbatim; transcripts are not escaped or truncated.

use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, PROFESSIONAL_TONE};

/// Summary prompt template. Replace `{transcript}` before sending.
const SUMMARY_PROMPT_TEMPLATE: &str = r#"Analyze this interview transcript and provide a structured summary in JSON format.

Interview Transcript:
{transcript}

Please return a JSON object with these exact keys:
{
    "executive_summary": "2-3 sentence overview of the interview",
    "strengths": ["list", "of", "candidate", "strengths"],
    "improvements": ["areas", "for", "improvement"],
    "recommendation": "overall hiring recommendation with brief reasoning"
}

Focus on:
- Technical skills demonstrated
- Communication abilities
- Problem-solving approach
- Cultural fit indicators
- Professional experience relevance

{tone} {json_only}"#;

/// Categories the bias scan is asked to look for, in prompt order.
pub const BIAS_CATEGORIES: [&str; 10] = [
    "Gender/Sex",
    "Age",
    "Race/Ethnicity",
    "Religion",
    "Sexual Orientation",
    "Disability",
    "Education Background",
    "Socioeconomic Status",
    "Appearance",
    "Personal Life",
];

/// Bias prompt template. Replace `{transcript}` and `{categories}` before sending.
const BIAS_PROMPT_TEMPLATE: &str = r#"Analyze this interview transcript for potential biases and discriminatory language.

Interview Transcript:
{transcript}

Look for biases related to:
{categories}

Return a JSON object with this structure:
{
    "bias_items": [
        {
            "Bias_Type": "specific bias category",
            "Example_Phrase": "exact phrase from transcript",
            "Severity": "Low/Medium/High"
        }
    ]
}

Only include clear examples of bias. If no significant biases are found, return empty bias_items array.
Be specific about phrases and accurate about severity levels.
{json_only}"#;

/// Recommendation prompt template. Replace `{bias_items_json}` before sending.
const RECOMMENDATION_PROMPT_TEMPLATE: &str = r#"Based on these detected biases in an interview, provide 3-5 specific, actionable recommendations for improvement:

Detected Biases:
{bias_items_json}

Provide recommendations that are:
- Specific and actionable
- Professional and constructive
- Focused on improving interview practices
- Aimed at promoting fair and inclusive hiring

Return as a simple JSON array of strings:
["recommendation 1", "recommendation 2", "recommendation 3"]

Each recommendation should be 1-2 sentences maximum."#;

pub fn summary_prompt(transcript: &str) -> String {
    SUMMARY_PROMPT_TEMPLATE
        .replace("{tone}", PROFESSIONAL_TONE)
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
        .replace("{transcript}", transcript)
}

pub fn bias_prompt(transcript: &str) -> String {
    let categories = BIAS_CATEGORIES
        .iter()
        .map(|c| format!("- {c}"))
        .collect::<Vec<_>>()
        .join("\n");
    BIAS_PROMPT_TEMPLATE
        .replace("{categories}", &categories)
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
        .replace("{transcript}", transcript)
}

pub fn recommendation_prompt(bias_items_json: &str) -> String {
    RECOMMENDATION_PROMPT_TEMPLATE.replace("{bias_items_json}", bias_items_json)
}
