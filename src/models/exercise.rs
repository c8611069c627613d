use serde::{Deserialize, Serialize};

/// Reserved prefix that keeps user-authored exercise ids distinguishable
/// from built-in tool ids.
pub const CUSTOM_ID_PREFIX: &str = "custom_";

/// A user-authored exercise stub. Deleting one does not retract its id from
/// historical entries; lookups fall back to the raw id instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomExercise {
    pub id: String,
    pub title: String,
}

impl CustomExercise {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: format!("{CUSTOM_ID_PREFIX}{}", uuid::Uuid::new_v4()),
            title: title.into(),
        }
    }
}

pub fn is_custom_id(id: &str) -> bool {
    id.starts_with(CUSTOM_ID_PREFIX)
}
