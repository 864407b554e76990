//! Browse-side game representation

use crate::GameRecord;
use serde::{Deserialize, Serialize};

/// A game as presented by an external browse source
///
/// Listings are transient; saving one into a library copies it into a
/// [`GameRecord`], so later changes to the listing never touch saved copies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameListing {
    pub id: i64,
    pub title: String,
    pub platform: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub done: bool,
}

impl From<GameListing> for GameRecord {
    fn from(listing: GameListing) -> Self {
        GameRecord {
            game_id: listing.id,
            title: listing.title,
            platform: listing.platform,
            description: listing.description,
            image_url: listing.image_url,
            score: listing.score,
            done: listing.done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_to_record() {
        let listing = GameListing {
            id: 42,
            title: "Hollow Knight".to_string(),
            platform: "Switch".to_string(),
            description: Some("A challenging metroidvania".to_string()),
            image_url: Some("https://example.com/hk.jpg".to_string()),
            score: Some(90),
            done: false,
        };

        let record = GameRecord::from(listing.clone());
        assert_eq!(record.game_id, listing.id);
        assert_eq!(record.title, listing.title);
        assert_eq!(record.score, listing.score);
    }

    #[test]
    fn test_listing_from_json_with_sparse_fields() {
        let json = r#"{"id": 7, "title": "Hades", "platform": "PC"}"#;
        let listing: GameListing = serde_json::from_str(json).unwrap();

        assert_eq!(listing.id, 7);
        assert!(listing.description.is_none());
        assert!(listing.score.is_none());
        assert!(!listing.done);
    }
}
