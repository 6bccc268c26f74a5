use serde::{Deserialize, Serialize};

use crate::models::intents::RelationshipIntent;

/// Candidate profile presented in the swipe deck
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub age: u8,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl Candidate {
    /// Helper to get the card photo (first in display order)
    pub fn primary_photo(&self) -> Option<&str> {
        self.photos.first().map(String::as_str)
    }
}

/// The signed-in user a session belongs to
///
/// Passed in at session construction rather than read from an ambient
/// store, so sessions stay self-contained and testable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Direction of a single swipe gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Like,
    Pass,
    SuperLike,
}

/// One swipe taken against a candidate
///
/// Appended to the session history when the swipe is made; immutable after.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeDecision {
    #[serde(rename = "candidateId")]
    pub candidate_id: String,
    pub direction: SwipeDirection,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Outcome of evaluating one swipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "candidateId")]
    pub candidate_id: String,
    pub matched: bool,
    #[serde(rename = "resolvedIntent")]
    pub resolved_intent: RelationshipIntent,
}

impl MatchResult {
    /// Helper to check whether this result still needs intent resolution
    pub fn needs_intent(&self) -> bool {
        self.matched && self.resolved_intent == RelationshipIntent::None
    }
}
