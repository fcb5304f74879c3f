// Problem categorization: resolve backend output to one category, then assign
// a mentor or coach from the static directory tables.
// All backend calls go through llm_client::InferenceBackend.

pub mod classifier;
pub mod directory;
pub mod handlers;
pub mod resolver;
