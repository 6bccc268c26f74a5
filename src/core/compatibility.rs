use serde::{Deserialize, Serialize};

use crate::models::{Candidate, SessionUser};

/// Weights for the compatibility factors
#[derive(Debug, Clone, Copy)]
pub struct CompatibilityWeights {
    pub interests: f64,
    pub age: f64,
    pub location: f64,
}

impl Default for CompatibilityWeights {
    fn default() -> Self {
        Self {
            interests: 0.60,
            age: 0.25,
            location: 0.15,
        }
    }
}

/// Candidate scored against the session user, ready for a suggestion card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(rename = "candidateId")]
    pub candidate_id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub age: u8,
    pub bio: String,
    pub photos: Vec<String>,
    pub compatibility: f64,
    #[serde(rename = "sharedInterests")]
    pub shared_interests: Vec<String>,
}

/// Compatibility score (0-100) between session user and candidate
///
/// Scoring formula:
/// score = (
///     interest_score * 0.60 +   // shared interests, diminishing returns
///     age_score * 0.25 +        // closer ages score higher
///     location_score * 0.15     // same-city bonus
/// )
///
/// Factors that cannot be computed (unknown user age, missing location on
/// either side) are skipped and the remaining weights renormalized, so a
/// sparse profile is not penalized for what it left blank.
///
/// Returns the score and the shared interests that produced it.
pub fn compatibility_score(
    user: &SessionUser,
    candidate: &Candidate,
    weights: &CompatibilityWeights,
) -> (f64, Vec<String>) {
    let mut score = 0.0;
    let mut max_score = 0.0;

    // Shared interests - more shared = better, but diminishing returns
    let shared_interests = shared_interests(user, candidate);
    let interest_score = (shared_interests.len() as f64).min(4.0) / 4.0;
    score += interest_score * weights.interests;
    max_score += weights.interests;

    // Age proximity
    if let Some(user_age) = user.age {
        score += calculate_age_score(user_age, candidate.age) * weights.age;
        max_score += weights.age;
    }

    // Same-city bonus
    if let (Some(user_loc), Some(candidate_loc)) = (&user.location, &candidate.location) {
        if same_city(user_loc, candidate_loc) {
            score += weights.location;
        }
        max_score += weights.location;
    }

    // Normalize to 0-100 range
    let normalized = if max_score > 0.0 {
        score / max_score
    } else {
        0.0
    };

    ((normalized * 100.0).min(100.0).max(0.0), shared_interests)
}

/// Interests present on both profiles, in the candidate's order
fn shared_interests(user: &SessionUser, candidate: &Candidate) -> Vec<String> {
    candidate
        .interests
        .iter()
        .filter(|interest| user.interests.contains(interest))
        .cloned()
        .collect()
}

/// Age score (0-1): linear falloff, zeroing out at a 12 year gap
#[inline]
fn calculate_age_score(user_age: u8, candidate_age: u8) -> f64 {
    let gap = (user_age as f64 - candidate_age as f64).abs();
    (1.0 - gap / 12.0).max(0.0)
}

/// Compare the city segment of two locations ("Brooklyn, NY" -> "brooklyn")
fn same_city(a: &str, b: &str) -> bool {
    city_of(a) == city_of(b)
}

fn city_of(location: &str) -> String {
    location
        .split(',')
        .next()
        .unwrap_or(location)
        .trim()
        .to_lowercase()
}

/// Rank candidates by compatibility with the session user
///
/// Sorted by score descending with candidate id as a stable tiebreak,
/// truncated to `limit`.
pub fn rank_candidates(
    user: &SessionUser,
    candidates: &[Candidate],
    weights: &CompatibilityWeights,
    limit: usize,
) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = candidates
        .iter()
        .map(|candidate| {
            let (compatibility, shared) = compatibility_score(user, candidate, weights);
            ScoredCandidate {
                candidate_id: candidate.id.clone(),
                display_name: candidate.display_name.clone(),
                age: candidate.age,
                bio: candidate.bio.clone(),
                photos: candidate.photos.clone(),
                compatibility,
                shared_interests: shared,
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.compatibility
            .partial_cmp(&a.compatibility)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.candidate_id.cmp(&b.candidate_id))
    });

    scored.truncate(limit);
    scored
}
