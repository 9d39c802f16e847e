//! Deterministic local cover artist.
//!
//! Composes an SVG monogram from the project brief so the CLI works
//! without any external image service. The output is stable for a given
//! brief, which keeps cover generation reproducible in tests.

use async_trait::async_trait;
use atelier_core::cover::{CoverArt, CoverArtist, CoverBrief, CoverFailure};

/// Local placeholder artist producing an SVG monogram data URI.
pub struct MonogramArtist;

impl MonogramArtist {
    /// Initials from the first two words of the title.
    fn initials(title: &str) -> String {
        title
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Stable background hue derived from the brief text.
    fn hue(brief: &CoverBrief) -> u32 {
        let mut hash: u32 = 2166136261;
        for byte in brief.title.bytes().chain(brief.category.bytes()) {
            hash ^= u32::from(byte);
            hash = hash.wrapping_mul(16777619);
        }
        hash % 360
    }
}

#[async_trait]
impl CoverArtist for MonogramArtist {
    async fn compose(&self, brief: &CoverBrief) -> Result<CoverArt, CoverFailure> {
        let initials = Self::initials(&brief.title);
        if initials.is_empty() {
            return Err(CoverFailure {
                reason: "project title has no letters to draw".to_string(),
            });
        }

        let hue = Self::hue(brief);
        let svg = format!(
            "<svg xmlns='http://www.w3.org/2000/svg' width='320' height='180'>\
             <rect width='320' height='180' fill='hsl({hue},55%,45%)'/>\
             <text x='160' y='108' font-family='sans-serif' font-size='72' \
             fill='white' text-anchor='middle'>{initials}</text></svg>"
        );

        Ok(CoverArt {
            reference: format!("data:image/svg+xml;utf8,{svg}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brief(title: &str) -> CoverBrief {
        CoverBrief {
            title: title.to_string(),
            category: "planning".to_string(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_monogram_is_deterministic() {
        let artist = MonogramArtist;
        let first = artist.compose(&brief("Kinetic sculpture")).await.unwrap();
        let second = artist.compose(&brief("Kinetic sculpture")).await.unwrap();
        assert_eq!(first, second);
        assert!(first.reference.contains("KS"));
    }

    #[tokio::test]
    async fn test_blank_title_fails() {
        let artist = MonogramArtist;
        let err = artist.compose(&brief("  ")).await.unwrap_err();
        assert!(err.reason.contains("no letters"));
    }
}
