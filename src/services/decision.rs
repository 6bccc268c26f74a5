use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::services::ledger::SwipeLedger;

/// Decides whether a like produces a mutual match
///
/// Injected into the evaluator at construction so production sources and
/// deterministic test doubles are interchangeable. Implementations must be
/// synchronous from the caller's point of view; an adapter over a remote
/// reciprocity lookup resolves before returning.
pub trait DecisionSource: Send {
    fn decide(&mut self, candidate_id: &str) -> bool;
}

/// Source that matches every like
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysMatch;

impl DecisionSource for AlwaysMatch {
    fn decide(&mut self, _candidate_id: &str) -> bool {
        true
    }
}

/// Source that never matches
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverMatch;

impl DecisionSource for NeverMatch {
    fn decide(&mut self, _candidate_id: &str) -> bool {
        false
    }
}

/// Uniform-probability source
///
/// Stand-in for real reciprocity when no swipe history is available, e.g.
/// demos and load tests.
pub struct RandomDecision {
    rng: SmallRng,
    probability: f64,
}

impl RandomDecision {
    /// Source with the given match probability, clamped to [0, 1]
    pub fn new(probability: f64) -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
            probability: probability.clamp(0.0, 1.0),
        }
    }

    /// Seeded variant for reproducible runs
    pub fn seeded(probability: f64, seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            probability: probability.clamp(0.0, 1.0),
        }
    }
}

impl DecisionSource for RandomDecision {
    fn decide(&mut self, _candidate_id: &str) -> bool {
        self.rng.random_bool(self.probability)
    }
}

/// Reciprocity check against recorded swipe history
///
/// A like only matches when the candidate has already liked the session
/// user. This is the rule the uniform random source stands in for.
#[derive(Debug, Clone)]
pub struct ReciprocalDecision {
    ledger: Arc<SwipeLedger>,
    user_id: String,
}

impl ReciprocalDecision {
    pub fn new(ledger: Arc<SwipeLedger>, user_id: String) -> Self {
        Self { ledger, user_id }
    }
}

impl DecisionSource for ReciprocalDecision {
    fn decide(&mut self, candidate_id: &str) -> bool {
        let matched = self.ledger.has_liked(candidate_id, &self.user_id);
        tracing::trace!(
            "Reciprocity check {} -> {}: {}",
            candidate_id,
            self.user_id,
            matched
        );
        matched
    }
}
