// Profile collection: validated background + preference input, stored on
// the session. No LLM calls happen in this module.

pub mod handlers;
pub mod validation;
