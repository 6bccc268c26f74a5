use serde::{Deserialize, Serialize};

/// Relationship intent selected after a mutual match
///
/// `None` means the post-match prompt has not been answered. The other four
/// variants are the choices the prompt offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipIntent {
    Friendship,
    Romantic,
    Casual,
    Undecided,
    None,
}

impl RelationshipIntent {
    /// Selectable choices of the post-match prompt, in display order
    pub fn choices() -> [RelationshipIntent; 4] {
        [
            RelationshipIntent::Friendship,
            RelationshipIntent::Romantic,
            RelationshipIntent::Casual,
            RelationshipIntent::Undecided,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipIntent::Friendship => "friendship",
            RelationshipIntent::Romantic => "romantic",
            RelationshipIntent::Casual => "casual",
            RelationshipIntent::Undecided => "undecided",
            RelationshipIntent::None => "none",
        }
    }

    /// Short label for the prompt card
    pub fn label(&self) -> &'static str {
        match self {
            RelationshipIntent::Friendship => "Friendship",
            RelationshipIntent::Romantic => "Romantic",
            RelationshipIntent::Casual => "Casual",
            RelationshipIntent::Undecided => "I'll decide later",
            RelationshipIntent::None => "None",
        }
    }

    /// One-line description shown under the label
    pub fn description(&self) -> &'static str {
        match self {
            RelationshipIntent::Friendship => "Looking to make new friends",
            RelationshipIntent::Romantic => "Interested in dating and romance",
            RelationshipIntent::Casual => "Just keeping it casual",
            RelationshipIntent::Undecided => "Open to different possibilities",
            RelationshipIntent::None => "No intent selected yet",
        }
    }
}
