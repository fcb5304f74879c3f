//! Classification orchestrator: one backend call, then resolve and assign.
//!
//! Shared by the mentor and coach endpoints; the only difference between the
//! two is the `Directory` consulted after resolution.

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, info};

use crate::categorization::directory::{Directory, CATEGORIES};
use crate::categorization::resolver::{resolve_category, FALLBACK_CATEGORY};
use crate::errors::AppError;
use crate::llm_client::prompts::build_categorize_prompt;
use crate::llm_client::InferenceBackend;

/// Outcome of one classification. Built per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: String,
    pub assignee: &'static str,
    pub directory: Directory,
}

// Serialized as {"category": .., "<role>": ..} where role is "mentor" or "coach".
impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("category", &self.category)?;
        map.serialize_entry(self.directory.role(), self.assignee)?;
        map.end()
    }
}

/// Classifies a problem description and assigns someone from `directory`.
///
/// Backend failures surface as `AppError::BackendUnavailable`; no retry.
pub async fn classify(
    backend: &dyn InferenceBackend,
    description: &str,
    directory: Directory,
) -> Result<Classification, AppError> {
    let prompt = build_categorize_prompt(description);
    let generated = backend.generate(&prompt).await?;

    let raw = generated.text().unwrap_or(FALLBACK_CATEGORY);
    debug!(model = backend.model(), raw_output = raw, "Backend output received");

    let category = resolve_category(raw).to_string();
    if !CATEGORIES.contains(&category.as_str()) {
        debug!(category = %category, "Backend returned a label outside the known categories");
    }
    let assignee = directory.assign(&category);
    info!(category = %category, role = directory.role(), "Problem categorized");

    Ok(Classification {
        category,
        assignee,
        directory,
    })
}
