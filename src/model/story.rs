use serde::{Deserialize, Serialize};

/// Narrative fragment, optionally anchored to a location, character, or
/// mission. Fragments not shown by default carry a reveal condition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoryElement {
    pub id: u64,
    pub text: String,
    pub location_id: Option<u64>,
    pub character_id: Option<u64>,
    pub mission_id: Option<u64>,
    pub revealed_by_default: bool,
    pub reveal_condition: Option<String>,
}
