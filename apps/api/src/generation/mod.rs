// Content generation pipeline: prompt build → LLM call → affiliate link
// substitution → post store. All LLM calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod prompts;
