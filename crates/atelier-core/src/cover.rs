//! Cover/illustration generation collaborator contract.
//!
//! Cover art is purely advisory: a usable image reference is nice to have,
//! but no state transition ever depends on one. The engine exposes the
//! collaborator as a trait so delivery surfaces can plug in a real
//! generation service, a local placeholder, or a test double.
//!
//! The engine does not track or cancel an in-flight attempt; a caller may
//! start a new one at any time and the result of the last completed
//! attempt wins.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Input handed to a cover artist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverBrief {
    /// Project title
    pub title: String,
    /// Coarse category hint (the engine passes the current stage)
    pub category: String,
    /// Project description, possibly empty
    pub description: String,
}

/// A usable cover image reference returned by an artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverArt {
    /// Image reference (URL or data URI)
    pub reference: String,
}

/// Why a cover attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverFailure {
    /// Human-readable failure reason from the collaborator
    pub reason: String,
}

impl std::fmt::Display for CoverFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason)
    }
}

/// Caller-visible state of a cover generation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverAttempt {
    /// The attempt has been dispatched and has not completed
    Pending,
    /// The artist returned usable art, now stored on the project
    Succeeded(CoverArt),
    /// The artist failed; the project is untouched
    Failed(CoverFailure),
}

/// A collaborator capable of composing cover art from a brief.
#[async_trait]
pub trait CoverArtist: Send + Sync {
    /// Compose cover art for the given brief.
    async fn compose(&self, brief: &CoverBrief) -> Result<CoverArt, CoverFailure>;
}
