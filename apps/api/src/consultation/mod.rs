// Live consultation: free-text career Q&A grounded in the stored profile,
// with the session's recent turns carried into each prompt.

pub mod advisor;
pub mod handlers;
pub mod prompts;
