// Model exports
pub mod domain;
pub mod intents;

pub use domain::{Candidate, MatchResult, SessionUser, SwipeDecision, SwipeDirection};
pub use intents::RelationshipIntent;
