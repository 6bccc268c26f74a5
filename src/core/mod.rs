// Core engine exports
pub mod compatibility;
pub mod controller;
pub mod evaluator;
pub mod queue;
pub mod session;

pub use compatibility::{compatibility_score, rank_candidates, CompatibilityWeights, ScoredCandidate};
pub use controller::{SessionController, SessionStats};
pub use evaluator::SwipeEvaluator;
pub use queue::CandidateQueue;
pub use session::{MatchSession, MatchState, SessionError};
