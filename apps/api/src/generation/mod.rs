// RPM generation: suggestion requests, content requests, result assembly.
// All model calls go through llm_client::ContentProvider.

pub mod assembler;
pub mod content;
pub mod handlers;
pub mod prompts;
pub mod schema;
pub mod suggestions;

#[cfg(test)]
pub(crate) mod testing;
