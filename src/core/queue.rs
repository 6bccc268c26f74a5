use crate::models::Candidate;

/// Ordered candidate deck with a single advancing cursor
///
/// The cursor only moves forward during a session: a passed-over candidate
/// is not revisited until an explicit `reset`. Running out of candidates is
/// a normal terminal state, not an error.
#[derive(Debug, Clone)]
pub struct CandidateQueue {
    candidates: Vec<Candidate>,
    cursor: usize,
}

impl CandidateQueue {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates,
            cursor: 0,
        }
    }

    /// Candidate at the cursor, or None once the deck is exhausted
    pub fn current(&self) -> Option<&Candidate> {
        self.candidates.get(self.cursor)
    }

    /// Move the cursor forward by one; saturates at the end of the deck
    pub fn advance(&mut self) {
        if self.cursor < self.candidates.len() {
            self.cursor += 1;
        }
    }

    /// Restart from the first candidate in the original load order
    ///
    /// This is the "out of profiles" recovery path. It does not reshuffle
    /// or refetch; new candidates only arrive through the profile provider.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Current cursor position (number of candidates already presented)
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// True once every candidate has been presented
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.candidates.len()
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.candidates.len() - self.cursor
    }

    /// Full deck in load order, independent of the cursor
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }
}
