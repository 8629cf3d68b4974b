// Shared prompt constants and prompt-building utilities.
// Each feature that needs LLM calls defines its own prompts.rs alongside it;
// this file contains the cross-cutting fragments.

/// Corrective reminder appended to a prompt when the previous reply failed
/// to decode. One retry only; the orchestrators surface a parse error after.
pub const JSON_RETRY_REMINDER: &str = "\n\nIMPORTANT: Your previous reply was \
    not valid JSON matching the requested schema. Respond again with ONLY the \
    JSON document, exactly matching the schema above. No prose, no fences.";
