// Integration tests for Brew Match

use std::collections::VecDeque;
use std::sync::Arc;

use brew_match::services::{DecisionSource, StaticProfileProvider, SwipeLedger};
use brew_match::{
    AlwaysMatch, NeverMatch, RelationshipIntent, ReciprocalDecision, SessionController,
    SessionError, SessionUser, SwipeDirection, SwipeEvaluator,
};

/// Opt-in log output: RUST_LOG=debug cargo test -- --nocapture
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Source that replays a fixed script of verdicts, then refuses everything
struct ScriptedSource {
    verdicts: VecDeque<bool>,
}

impl ScriptedSource {
    fn new(verdicts: Vec<bool>) -> Self {
        Self {
            verdicts: verdicts.into(),
        }
    }
}

impl DecisionSource for ScriptedSource {
    fn decide(&mut self, _candidate_id: &str) -> bool {
        self.verdicts.pop_front().unwrap_or(false)
    }
}

fn create_test_user() -> SessionUser {
    SessionUser {
        id: "user-1".to_string(),
        display_name: "John Doe".to_string(),
        age: Some(28),
        interests: vec![
            "Coffee".to_string(),
            "Travel".to_string(),
            "Technology".to_string(),
            "Music".to_string(),
        ],
        location: Some("New York, NY".to_string()),
    }
}

fn sample_session(evaluator: SwipeEvaluator) -> SessionController {
    SessionController::from_provider(create_test_user(), &StaticProfileProvider::sample(), evaluator)
        .expect("sample deck should load")
}

#[test]
fn test_full_session_flow() {
    init_tracing();

    // First like misses, second one matches
    let mut controller = sample_session(SwipeEvaluator::new(Box::new(ScriptedSource::new(vec![
        false, true,
    ]))));

    assert_eq!(controller.remaining(), 5);
    assert_eq!(controller.current_candidate().unwrap().id, "1");

    // Like without a match advances to the next candidate
    let result = controller.swipe(SwipeDirection::Like).unwrap();
    assert!(!result.matched);
    assert_eq!(controller.current_candidate().unwrap().id, "2");

    // Matching like freezes the cursor on the matched candidate
    let result = controller.swipe(SwipeDirection::Like).unwrap();
    assert!(result.matched);
    assert_eq!(result.candidate_id, "2");
    assert!(controller.is_blocked());
    assert_eq!(controller.current_candidate().unwrap().id, "2");
    assert_eq!(
        controller.pending_match().map(|m| m.candidate_id.as_str()),
        Some("2")
    );

    // Swipes and resets are rejected while blocked, and leave no trace
    assert_eq!(
        controller.swipe(SwipeDirection::Pass),
        Err(SessionError::SessionBlocked)
    );
    assert_eq!(controller.reset_queue(), Err(SessionError::SessionBlocked));
    assert_eq!(controller.history().len(), 2);
    assert_eq!(controller.current_candidate().unwrap().id, "2");

    // Resolving the intent unfreezes and advances past the match
    let resolved = controller.resolve_intent(RelationshipIntent::Romantic).unwrap();
    assert_eq!(resolved.candidate_id, "2");
    assert_eq!(resolved.resolved_intent, RelationshipIntent::Romantic);
    assert!(!controller.is_blocked());
    assert!(controller.pending_match().is_none());
    assert_eq!(controller.current_candidate().unwrap().id, "3");

    let stats = controller.stats();
    assert_eq!(stats.total_swipes, 2);
    assert_eq!(stats.liked, 2);
    assert_eq!(stats.matched, 1);
}

#[test]
fn test_exhaustion_and_reset() {
    let mut controller = sample_session(SwipeEvaluator::new(Box::new(NeverMatch)));

    for _ in 0..5 {
        let result = controller.swipe(SwipeDirection::Like).unwrap();
        assert!(!result.matched);
    }

    assert_eq!(controller.remaining(), 0);
    assert!(controller.current_candidate().is_none());
    assert_eq!(
        controller.swipe(SwipeDirection::Like),
        Err(SessionError::QueueExhausted)
    );

    // Reset restarts the deck in original order; history carries over
    controller.reset_queue().unwrap();
    assert_eq!(controller.current_candidate().unwrap().id, "1");
    assert_eq!(controller.remaining(), 5);
    assert_eq!(controller.history().len(), 5);

    controller.swipe(SwipeDirection::Pass).unwrap();
    assert_eq!(controller.history().len(), 6);
    assert_eq!(controller.stats().passed, 1);
}

#[test]
fn test_resolve_without_pending_match() {
    let mut controller = sample_session(SwipeEvaluator::new(Box::new(NeverMatch)));

    assert_eq!(
        controller.resolve_intent(RelationshipIntent::Friendship),
        Err(SessionError::InvalidStateTransition)
    );

    // A non-matching like does not open a pending match either
    controller.swipe(SwipeDirection::Like).unwrap();
    assert_eq!(
        controller.resolve_intent(RelationshipIntent::Friendship),
        Err(SessionError::InvalidStateTransition)
    );
}

#[test]
fn test_resolving_with_none_keeps_session_blocked() {
    let mut controller = sample_session(SwipeEvaluator::new(Box::new(AlwaysMatch)));

    controller.swipe(SwipeDirection::Like).unwrap();
    assert!(controller.is_blocked());

    assert_eq!(
        controller.resolve_intent(RelationshipIntent::None),
        Err(SessionError::InvalidStateTransition)
    );
    assert!(controller.is_blocked());

    controller.resolve_intent(RelationshipIntent::Undecided).unwrap();
    assert!(!controller.is_blocked());
}

#[test]
fn test_reciprocal_matching_end_to_end() {
    init_tracing();

    // Michael (2) and David (4) have already liked the session user
    let ledger = Arc::new(SwipeLedger::new());
    ledger.record("2", "user-1", SwipeDirection::Like);
    ledger.record("4", "user-1", SwipeDirection::SuperLike);

    let source = ReciprocalDecision::new(ledger, "user-1".to_string());
    let mut controller = sample_session(SwipeEvaluator::new(Box::new(source)));

    assert!(!controller.swipe(SwipeDirection::Like).unwrap().matched); // Emma

    let matched = controller.swipe(SwipeDirection::Like).unwrap(); // Michael
    assert!(matched.matched);
    controller.resolve_intent(RelationshipIntent::Casual).unwrap();

    assert!(!controller.swipe(SwipeDirection::Like).unwrap().matched); // Sophia

    let matched = controller.swipe(SwipeDirection::Like).unwrap(); // David
    assert!(matched.matched);
    controller.resolve_intent(RelationshipIntent::Friendship).unwrap();

    assert!(!controller.swipe(SwipeDirection::Like).unwrap().matched); // Olivia

    let stats = controller.stats();
    assert_eq!(stats.total_swipes, 5);
    assert_eq!(stats.matched, 2);
    assert_eq!(controller.remaining(), 0);
}

#[test]
fn test_super_like_override_end_to_end() {
    let evaluator = SwipeEvaluator::new(Box::new(NeverMatch)).with_super_like_override(true);
    let mut controller = sample_session(evaluator);

    // Plain like still misses
    assert!(!controller.swipe(SwipeDirection::Like).unwrap().matched);

    // Super-like matches deterministically
    let result = controller.swipe(SwipeDirection::SuperLike).unwrap();
    assert!(result.matched);
    assert_eq!(result.candidate_id, "2");

    controller.resolve_intent(RelationshipIntent::Undecided).unwrap();
    assert_eq!(controller.stats().super_liked, 1);
}

#[test]
fn test_empty_deck_session() {
    let provider = StaticProfileProvider::new(vec![]);
    let mut controller = SessionController::from_provider(
        create_test_user(),
        &provider,
        SwipeEvaluator::new(Box::new(AlwaysMatch)),
    )
    .unwrap();

    assert!(controller.current_candidate().is_none());
    assert_eq!(
        controller.swipe(SwipeDirection::Like),
        Err(SessionError::QueueExhausted)
    );

    // Reset succeeds but the deck stays empty
    controller.reset_queue().unwrap();
    assert!(controller.current_candidate().is_none());
    assert_eq!(controller.stats().total_swipes, 0);
}

#[test]
fn test_suggestions_rank_sample_deck() {
    let controller = sample_session(SwipeEvaluator::new(Box::new(NeverMatch)));

    let suggestions = controller.suggestions(3);

    // David shares three interests with the user, Emma shares one plus the
    // same city, Olivia shares two
    assert_eq!(suggestions.len(), 3);
    assert_eq!(suggestions[0].candidate_id, "4");
    assert_eq!(suggestions[1].candidate_id, "1");
    assert_eq!(suggestions[2].candidate_id, "5");

    for i in 1..suggestions.len() {
        assert!(
            suggestions[i - 1].compatibility >= suggestions[i].compatibility,
            "Suggestions not sorted by score"
        );
    }

    assert!(suggestions[0]
        .shared_interests
        .iter()
        .any(|interest| interest == "Coffee"));
}

#[test]
fn test_sessions_are_isolated() {
    let mut first = sample_session(SwipeEvaluator::new(Box::new(AlwaysMatch)));
    let mut second = sample_session(SwipeEvaluator::new(Box::new(NeverMatch)));

    assert_ne!(first.session_id(), second.session_id());

    first.swipe(SwipeDirection::Like).unwrap();
    assert!(first.is_blocked());

    // The blocked first session does not affect the second
    second.swipe(SwipeDirection::Like).unwrap();
    assert!(!second.is_blocked());
    assert_eq!(second.current_candidate().unwrap().id, "2");
    assert_eq!(first.current_candidate().unwrap().id, "1");
}
