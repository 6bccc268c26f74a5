// Service exports
pub mod decision;
pub mod ledger;
pub mod provider;

pub use decision::{AlwaysMatch, DecisionSource, NeverMatch, RandomDecision, ReciprocalDecision};
pub use ledger::{LedgerEntry, LedgerStats, SwipeLedger};
pub use provider::{sample_candidates, ProfileProvider, ProviderError, StaticProfileProvider};
