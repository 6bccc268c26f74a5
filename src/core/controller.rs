use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{
    compatibility::{rank_candidates, CompatibilityWeights, ScoredCandidate},
    evaluator::SwipeEvaluator,
    queue::CandidateQueue,
    session::{MatchSession, SessionError},
};
use crate::models::{
    Candidate, MatchResult, RelationshipIntent, SessionUser, SwipeDecision, SwipeDirection,
};
use crate::services::provider::{ProfileProvider, ProviderError};

/// Swipe activity counters for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    #[serde(rename = "totalSwipes")]
    pub total_swipes: usize,
    pub liked: usize,
    pub passed: usize,
    #[serde(rename = "superLiked")]
    pub super_liked: usize,
    pub matched: usize,
    #[serde(rename = "lastSwipeAt")]
    pub last_swipe_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Session controller - single entry point for one user's swipe session
///
/// Owns the queue, the evaluator and the pending-match state, and serializes
/// every operation through `&mut self` so session state can never tear.
///
/// # Operations
/// 1. `swipe` - evaluate the current candidate, advance or block
/// 2. `resolve_intent` - answer the post-match prompt, unblock
/// 3. `current_candidate` - peek at the card being presented
/// 4. `reset_queue` - restart an exhausted deck from the top
pub struct SessionController {
    session_id: Uuid,
    user: SessionUser,
    queue: CandidateQueue,
    evaluator: SwipeEvaluator,
    pending: Option<MatchSession>,
    history: Vec<SwipeDecision>,
    match_count: usize,
}

impl SessionController {
    pub fn new(user: SessionUser, candidates: Vec<Candidate>, evaluator: SwipeEvaluator) -> Self {
        let session_id = Uuid::new_v4();
        let queue = CandidateQueue::new(candidates);

        tracing::info!(
            "Started session {} for user {} with {} candidates",
            session_id,
            user.id,
            queue.len()
        );

        Self {
            session_id,
            user,
            queue,
            evaluator,
            pending: None,
            history: Vec::new(),
            match_count: 0,
        }
    }

    /// Build a session with a deck loaded from the profile provider
    ///
    /// The provider is consulted exactly once, here.
    pub fn from_provider(
        user: SessionUser,
        provider: &dyn ProfileProvider,
        evaluator: SwipeEvaluator,
    ) -> Result<Self, ProviderError> {
        let candidates = provider.load_candidates()?;
        Ok(Self::new(user, candidates, evaluator))
    }

    #[inline]
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn user(&self) -> &SessionUser {
        &self.user
    }

    /// Candidate currently presented, or None when the queue is exhausted
    pub fn current_candidate(&self) -> Option<&Candidate> {
        self.queue.current()
    }

    /// True while a match is awaiting intent resolution
    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.pending.is_some()
    }

    /// The match awaiting resolution, if any
    pub fn pending_match(&self) -> Option<&MatchResult> {
        self.pending.as_ref().map(|session| session.result())
    }

    /// Every decision made this session, oldest first
    pub fn history(&self) -> &[SwipeDecision] {
        &self.history
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.queue.remaining()
    }

    /// Swipe on the current candidate
    ///
    /// Pass advances to the next candidate. A like or super-like that does
    /// not match also advances. A match freezes the cursor on the matched
    /// candidate until `resolve_intent` is called; until then every swipe
    /// fails with `SessionBlocked`.
    pub fn swipe(&mut self, direction: SwipeDirection) -> Result<MatchResult, SessionError> {
        if self.pending.is_some() {
            return Err(SessionError::SessionBlocked);
        }

        let candidate = self
            .queue
            .current()
            .cloned()
            .ok_or(SessionError::QueueExhausted)?;

        let decision = SwipeDecision {
            candidate_id: candidate.id.clone(),
            direction,
            timestamp: chrono::Utc::now(),
        };
        self.history.push(decision.clone());

        let result = self.evaluator.evaluate(&decision, &candidate);

        if result.matched {
            self.match_count += 1;
            tracing::info!(
                "Session {}: matched with candidate {}",
                self.session_id,
                candidate.id
            );
            self.pending = Some(MatchSession::from_result(result.clone()));
        } else {
            self.queue.advance();
        }

        Ok(result)
    }

    /// Answer the post-match prompt and unfreeze the session
    ///
    /// Returns the resolved result and advances past the matched candidate.
    /// Fails with `InvalidStateTransition` when nothing is pending or the
    /// choice is `RelationshipIntent::None`.
    pub fn resolve_intent(
        &mut self,
        choice: RelationshipIntent,
    ) -> Result<MatchResult, SessionError> {
        let session = self
            .pending
            .as_mut()
            .ok_or(SessionError::InvalidStateTransition)?;
        session.resolve_intent(choice)?;

        let result = session.result().clone();
        self.pending = None;
        self.queue.advance();

        tracing::info!(
            "Session {}: resolved match with {} as {}",
            self.session_id,
            result.candidate_id,
            result.resolved_intent.as_str()
        );

        Ok(result)
    }

    /// Restart the queue from the first candidate in the original load order
    ///
    /// Swipe history and match counters carry over; only the cursor moves.
    /// Fails with `SessionBlocked` while a match is pending.
    pub fn reset_queue(&mut self) -> Result<(), SessionError> {
        if self.pending.is_some() {
            return Err(SessionError::SessionBlocked);
        }

        self.queue.reset();
        tracing::debug!("Session {}: queue reset", self.session_id);
        Ok(())
    }

    /// Rank the whole deck by compatibility with the session user
    pub fn suggestions(&self, limit: usize) -> Vec<ScoredCandidate> {
        rank_candidates(
            &self.user,
            self.queue.candidates(),
            &CompatibilityWeights::default(),
            limit,
        )
    }

    /// Swipe counters for this session
    pub fn stats(&self) -> SessionStats {
        let mut liked = 0;
        let mut passed = 0;
        let mut super_liked = 0;

        for decision in &self.history {
            match decision.direction {
                SwipeDirection::Like => liked += 1,
                SwipeDirection::Pass => passed += 1,
                SwipeDirection::SuperLike => super_liked += 1,
            }
        }

        SessionStats {
            session_id: self.session_id.to_string(),
            total_swipes: self.history.len(),
            liked,
            passed,
            super_liked,
            matched: self.match_count,
            last_swipe_at: self.history.last().map(|decision| decision.timestamp),
        }
    }
}
