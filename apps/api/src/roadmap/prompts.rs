// All LLM prompt constants for the roadmap module.

/// System prompt for roadmap generation. JSON-only output.
pub const ROADMAP_SYSTEM: &str = "You are an expert AI career advisor \
    creating a personalized learning roadmap for a specific career path. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Roadmap prompt template.
/// Replace `{career_path}` and `{profile_json}` before sending.
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"Create a detailed learning roadmap for the following career path, tailored to the user's background.

CAREER PATH: {career_path}

USER BACKGROUND:
{profile_json}

Return a JSON object with this EXACT schema (no extra fields):
{
  "roadmap": {
    "fundamentals": ["concept1", "concept2"],
    "intermediate_skills": ["skill1", "skill2"],
    "advanced_topics": ["topic1", "topic2"],
    "projects": ["project1", "project2"],
    "certifications": ["cert1", "cert2"],
    "estimated_timeline": "X months"
  }
}

Rules:
1. Start from what the user already knows; do not repeat mastered basics.
2. Each list must contain between 3 and 8 concrete entries.
3. `estimated_timeline` covers the whole roadmap for someone studying
   part-time."#;
