// Recommendation orchestration: profile -> prompt -> model -> parsed,
// validated career recommendations. Market data is a static catalog that
// enriches whatever the model suggests.
// All LLM calls go through llm_client; nothing here touches the vendor API.

pub mod handlers;
pub mod market;
pub mod prompts;
pub mod recommender;
