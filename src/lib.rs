//! Brew Match - swipe matching session engine for the Brew social app
//!
//! This library is the deterministic core behind the swipe deck. It owns the
//! candidate queue, evaluates swipes through an injected decision source and
//! tracks post-match intent resolution as an explicit state machine, so the
//! UI layer holds no matching logic of its own.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    CandidateQueue, CompatibilityWeights, MatchSession, MatchState, ScoredCandidate,
    SessionController, SessionError, SessionStats, SwipeEvaluator,
};
pub use crate::models::{
    Candidate, MatchResult, RelationshipIntent, SessionUser, SwipeDecision, SwipeDirection,
};
pub use crate::services::{
    AlwaysMatch, DecisionSource, NeverMatch, ProfileProvider, ProviderError, RandomDecision,
    ReciprocalDecision, StaticProfileProvider, SwipeLedger,
};
