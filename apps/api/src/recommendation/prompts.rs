// All LLM prompt constants for the recommendation module.

/// System prompt for recommendation generation. JSON-only output.
pub const RECOMMEND_SYSTEM: &str = "You are an expert AI career advisor for \
    the technology industry, analyzing a user profile to recommend suitable \
    career paths. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Recommendation prompt template.
/// Replace `{profile_json}` and `{preferences_json}` before sending.
pub const RECOMMEND_PROMPT_TEMPLATE: &str = r#"Analyze the following user profile and career preferences and recommend suitable tech career paths.

USER PROFILE:
{profile_json}

CAREER PREFERENCES:
{preferences_json}

Return a JSON object with this EXACT schema (no extra fields):
{
  "recommended_paths": [
    {
      "career_path": "path name",
      "match_score": 85,
      "reasoning": "detailed explanation grounded in the profile",
      "key_skills_required": ["skill1", "skill2"],
      "market_outlook": "market growth and opportunities"
    }
  ]
}

Rules:
1. `match_score` is an integer from 0 to 100, the percentage match.
2. Order paths from best match to worst match.
3. Recommend between 3 and 6 paths.
4. `reasoning` must reference the user's stated background, interests, or
   goals. Do NOT invent facts about the user.
5. Every field must be non-empty."#;
