// All LLM prompt constants for the skills-gap module.

/// System prompt for LLM-backed gap analysis. JSON-only output.
pub const GAP_SYSTEM: &str = "You are an expert AI career advisor analyzing \
    the gap between a user's current skills and those required for a target \
    career path. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Gap analysis prompt template.
/// Replace `{career_path}`, `{profile_json}` and `{ratings_json}`.
pub const GAP_PROMPT_TEMPLATE: &str = r#"Analyze the gap between the user's current skills and those required for their target career path.

TARGET CAREER PATH: {career_path}

USER BACKGROUND:
{profile_json}

SELF-RATED PROFICIENCY (0 = no experience, 5 = expert):
{ratings_json}

Return a JSON object with this EXACT schema (no extra fields):
{
  "readiness_score": 62,
  "proficient": ["skill the user already covers"],
  "to_develop": [
    {
      "skill": "skill name",
      "priority": "high",
      "recommended_resources": ["resource1", "resource2"]
    }
  ],
  "estimated_time_to_close": "X months"
}

Rules:
1. `readiness_score` is an integer from 0 to 100.
2. `priority` is exactly one of "high", "medium", "low".
3. Base the analysis only on the provided background and ratings."#;
