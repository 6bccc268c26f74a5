use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::models::SwipeDirection;

/// One recorded swipe between two users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub direction: SwipeDirection,
    #[serde(rename = "swipedAt")]
    pub swiped_at: chrono::DateTime<chrono::Utc>,
}

/// Per-user swipe activity counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerStats {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub total: usize,
    pub liked: usize,
    pub passed: usize,
    #[serde(rename = "superLiked")]
    pub super_liked: usize,
    #[serde(rename = "lastSwipeAt")]
    pub last_swipe_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// In-memory who-swiped-on-whom store
///
/// Keeps the latest swipe per (user, target) pair so reciprocity checks and
/// seen-profile queries share one source of truth. Methods take `&self`; the
/// ledger is meant to be shared behind an `Arc`.
#[derive(Debug, Default)]
pub struct SwipeLedger {
    entries: RwLock<HashMap<(String, String), LedgerEntry>>,
}

impl SwipeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a swipe; swiping the same target again overwrites the
    /// previous direction and timestamp
    pub fn record(&self, user_id: &str, target_id: &str, direction: SwipeDirection) {
        let entry = LedgerEntry {
            direction,
            swiped_at: chrono::Utc::now(),
        };

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert((user_id.to_string(), target_id.to_string()), entry);

        tracing::debug!("Recorded swipe: {} -> {} ({:?})", user_id, target_id, direction);
    }

    /// True if `user_id` has swiped Like or SuperLike on `target_id`
    pub fn has_liked(&self, user_id: &str, target_id: &str) -> bool {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(&(user_id.to_string(), target_id.to_string()))
            .map(|entry| {
                matches!(
                    entry.direction,
                    SwipeDirection::Like | SwipeDirection::SuperLike
                )
            })
            .unwrap_or(false)
    }

    /// Ids `user_id` has swiped on, sorted for stable output
    pub fn seen_ids(&self, user_id: &str) -> Vec<String> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let mut seen: Vec<String> = entries
            .keys()
            .filter(|(user, _)| user.as_str() == user_id)
            .map(|(_, target)| target.clone())
            .collect();
        seen.sort();
        seen
    }

    /// Remove one swipe record, e.g. when a match is undone
    pub fn remove(&self, user_id: &str, target_id: &str) -> bool {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries
            .remove(&(user_id.to_string(), target_id.to_string()))
            .is_some()
    }

    /// Clear every swipe recorded by `user_id`; returns how many were removed
    pub fn clear(&self, user_id: &str) -> usize {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|(user, _), _| user.as_str() != user_id);
        let removed = before - entries.len();

        tracing::info!("Cleared {} recorded swipes for user {}", removed, user_id);
        removed
    }

    /// Swipe counters for `user_id`
    pub fn stats(&self, user_id: &str) -> LedgerStats {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);

        let mut stats = LedgerStats {
            user_id: user_id.to_string(),
            total: 0,
            liked: 0,
            passed: 0,
            super_liked: 0,
            last_swipe_at: None,
        };

        for ((user, _), entry) in entries.iter() {
            if user.as_str() != user_id {
                continue;
            }

            stats.total += 1;
            match entry.direction {
                SwipeDirection::Like => stats.liked += 1,
                SwipeDirection::Pass => stats.passed += 1,
                SwipeDirection::SuperLike => stats.super_liked += 1,
            }
            if stats.last_swipe_at.map_or(true, |seen| entry.swiped_at > seen) {
                stats.last_swipe_at = Some(entry.swiped_at);
            }
        }

        stats
    }
}
