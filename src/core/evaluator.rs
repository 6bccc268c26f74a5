use crate::config::MatchingSettings;
use crate::models::{Candidate, MatchResult, RelationshipIntent, SwipeDecision, SwipeDirection};
use crate::services::decision::{DecisionSource, RandomDecision};

/// Turns swipe decisions into match outcomes
///
/// Evaluation rules:
/// - Pass never matches and never consults the decision source
/// - Like defers to the decision source
/// - SuperLike defers to the decision source too, unless the caller enabled
///   the deterministic override
pub struct SwipeEvaluator {
    source: Box<dyn DecisionSource>,
    super_like_always_matches: bool,
}

impl SwipeEvaluator {
    pub fn new(source: Box<dyn DecisionSource>) -> Self {
        Self {
            source,
            super_like_always_matches: false,
        }
    }

    /// Enable or disable the deterministic super-like override
    pub fn with_super_like_override(mut self, enabled: bool) -> Self {
        self.super_like_always_matches = enabled;
        self
    }

    /// Wire an evaluator from configuration
    ///
    /// Uses the uniform random source at the configured probability, seeded
    /// when a seed is set so simulation runs are reproducible.
    pub fn from_settings(settings: &MatchingSettings) -> Self {
        let source: Box<dyn DecisionSource> = match settings.random_seed {
            Some(seed) => Box::new(RandomDecision::seeded(settings.match_probability, seed)),
            None => Box::new(RandomDecision::new(settings.match_probability)),
        };

        Self {
            source,
            super_like_always_matches: settings.super_like_always_matches,
        }
    }

    /// Evaluate one swipe against the candidate it targeted
    pub fn evaluate(&mut self, decision: &SwipeDecision, candidate: &Candidate) -> MatchResult {
        let matched = match decision.direction {
            SwipeDirection::Pass => false,
            SwipeDirection::Like => self.source.decide(&candidate.id),
            SwipeDirection::SuperLike => {
                // Override short-circuits; the source is not consulted
                self.super_like_always_matches || self.source.decide(&candidate.id)
            }
        };

        tracing::debug!(
            "Evaluated {:?} on {} ({}): matched={}",
            decision.direction,
            candidate.display_name,
            candidate.id,
            matched
        );

        MatchResult {
            candidate_id: candidate.id.clone(),
            matched,
            resolved_intent: RelationshipIntent::None,
        }
    }
}
