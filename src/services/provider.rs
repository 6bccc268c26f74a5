use thiserror::Error;

use crate::models::Candidate;

/// Errors raised while loading a candidate deck
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to load candidates: {0}")]
    LoadFailed(String),

    #[error("malformed candidate payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Source of the candidate deck, consulted once at session start
///
/// Fetching, filtering and pagination are the host application's concern;
/// the session only consumes an already materialized, ordered deck.
pub trait ProfileProvider: Send {
    fn load_candidates(&self) -> Result<Vec<Candidate>, ProviderError>;
}

/// Provider over an in-memory deck
#[derive(Debug, Clone, Default)]
pub struct StaticProfileProvider {
    candidates: Vec<Candidate>,
}

impl StaticProfileProvider {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    /// Parse a deck from a JSON array, e.g. one exported by the backend
    pub fn from_json(json: &str) -> Result<Self, ProviderError> {
        let candidates: Vec<Candidate> = serde_json::from_str(json)?;
        Ok(Self { candidates })
    }

    /// Bundled demo deck of five New York area profiles
    pub fn sample() -> Self {
        Self::new(sample_candidates())
    }
}

impl ProfileProvider for StaticProfileProvider {
    fn load_candidates(&self) -> Result<Vec<Candidate>, ProviderError> {
        tracing::debug!("Loaded {} candidates from static deck", self.candidates.len());
        Ok(self.candidates.clone())
    }
}

/// Demo deck used by tests, benches and example hosts
pub fn sample_candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            id: "1".to_string(),
            display_name: "Emma Wilson".to_string(),
            age: 28,
            bio: "Coffee enthusiast and avid reader. Looking for meaningful connections and new friends to explore the city with.".to_string(),
            interests: vec![
                "Coffee".to_string(),
                "Reading".to_string(),
                "Art".to_string(),
                "Hiking".to_string(),
            ],
            photos: vec![
                "https://images.unsplash.com/photo-1494790108377-be9c29b29330?q=80&w=1887&auto=format&fit=crop".to_string(),
                "https://images.unsplash.com/photo-1534528741775-53994a69daeb?q=80&w=1964&auto=format&fit=crop".to_string(),
            ],
            location: Some("New York, NY".to_string()),
        },
        Candidate {
            id: "2".to_string(),
            display_name: "Michael Chen".to_string(),
            age: 31,
            bio: "Tech entrepreneur by day, amateur chef by night. Love trying new restaurants and meeting interesting people.".to_string(),
            interests: vec![
                "Cooking".to_string(),
                "Technology".to_string(),
                "Food".to_string(),
                "Photography".to_string(),
            ],
            photos: vec![
                "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?q=80&w=1887&auto=format&fit=crop".to_string(),
                "https://images.unsplash.com/photo-1492562080023-ab3db95bfbce?q=80&w=1964&auto=format&fit=crop".to_string(),
            ],
            location: Some("Brooklyn, NY".to_string()),
        },
        Candidate {
            id: "3".to_string(),
            display_name: "Sophia Rodriguez".to_string(),
            age: 26,
            bio: "Yoga instructor and wellness advocate. Passionate about mindfulness and connecting with like-minded individuals.".to_string(),
            interests: vec![
                "Yoga".to_string(),
                "Meditation".to_string(),
                "Nature".to_string(),
                "Fitness".to_string(),
            ],
            photos: vec![
                "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?q=80&w=1770&auto=format&fit=crop".to_string(),
                "https://images.unsplash.com/photo-1531746020798-e6953c6e8e04?q=80&w=1964&auto=format&fit=crop".to_string(),
            ],
            location: Some("Queens, NY".to_string()),
        },
        Candidate {
            id: "4".to_string(),
            display_name: "David Kim".to_string(),
            age: 29,
            bio: "Music producer and coffee shop hopper. Always on the lookout for new inspiration and creative connections.".to_string(),
            interests: vec![
                "Music".to_string(),
                "Coffee".to_string(),
                "Art".to_string(),
                "Travel".to_string(),
            ],
            photos: vec![
                "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?q=80&w=1887&auto=format&fit=crop".to_string(),
                "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?q=80&w=1887&auto=format&fit=crop".to_string(),
            ],
            location: Some("Manhattan, NY".to_string()),
        },
        Candidate {
            id: "5".to_string(),
            display_name: "Olivia Johnson".to_string(),
            age: 27,
            bio: "Freelance photographer with a passion for capturing authentic moments. Looking for friends to explore the city with.".to_string(),
            interests: vec![
                "Photography".to_string(),
                "Travel".to_string(),
                "Coffee".to_string(),
                "Art".to_string(),
            ],
            photos: vec![
                "https://images.unsplash.com/photo-1544005313-94ddf0286df2?q=80&w=1888&auto=format&fit=crop".to_string(),
                "https://images.unsplash.com/photo-1524504388940-b1c1722653e1?q=80&w=1887&auto=format&fit=crop".to_string(),
            ],
            location: Some("Hoboken, NJ".to_string()),
        },
    ]
}
