use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{MatchResult, RelationshipIntent};

/// Errors surfaced by session operations
///
/// All of these are synchronous and recoverable; what the user sees is the
/// presentation layer's call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// No candidate left at the cursor. Recoverable via a queue reset.
    #[error("no more candidates in the queue")]
    QueueExhausted,

    /// A match is awaiting intent resolution; swipes and resets are frozen.
    #[error("a pending match is awaiting intent resolution")]
    SessionBlocked,

    /// Intent resolution attempted outside the pending state, or with no
    /// concrete choice.
    #[error("match is not awaiting intent resolution")]
    InvalidStateTransition,
}

/// Stage of post-match bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchState {
    /// The swipe did not produce a match; terminal.
    NoMatch,
    /// Matched, waiting for the user to pick a relationship intent.
    PendingIntent,
    /// Intent selected; terminal. The queue may move again.
    Resolved,
}

/// Tracks one swipe's match outcome until the intent prompt is answered
///
/// Replaces the swipe screen's chain of match-modal and prompt flags with an
/// explicit state machine.
#[derive(Debug, Clone)]
pub struct MatchSession {
    result: MatchResult,
    state: MatchState,
}

impl MatchSession {
    /// Session for a freshly evaluated swipe
    ///
    /// A matched result starts in `PendingIntent`; anything else lands in
    /// the terminal `NoMatch` state.
    pub fn from_result(result: MatchResult) -> Self {
        let state = if result.matched {
            MatchState::PendingIntent
        } else {
            MatchState::NoMatch
        };

        Self { result, state }
    }

    #[inline]
    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn result(&self) -> &MatchResult {
        &self.result
    }

    pub fn candidate_id(&self) -> &str {
        &self.result.candidate_id
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.state == MatchState::PendingIntent
    }

    /// Fire the `PendingIntent -> Resolved` transition
    ///
    /// Fires at most once. `RelationshipIntent::None` is not a resolution;
    /// choosing it fails the same way as resolving from the wrong state.
    pub fn resolve_intent(&mut self, choice: RelationshipIntent) -> Result<(), SessionError> {
        if self.state != MatchState::PendingIntent || choice == RelationshipIntent::None {
            return Err(SessionError::InvalidStateTransition);
        }

        self.result.resolved_intent = choice;
        self.state = MatchState::Resolved;
        Ok(())
    }
}
