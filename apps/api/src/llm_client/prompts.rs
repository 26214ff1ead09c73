// Shared prompt fragments used by more than one analysis prompt.
// Operation-specific templates live in analysis/prompts.rs.

/// Closing instruction appended to every prompt that expects a JSON payload back.
pub const JSON_ONLY_INSTRUCTION: &str = "Return only valid JSON.";

/// Register the model is asked to write in for anything shown to a hiring team.
pub const PROFESSIONAL_TONE: &str = "Keep it concise and professional.";
