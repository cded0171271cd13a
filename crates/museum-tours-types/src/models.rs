//! Domain models shared by the API clients, the fixture table and the UI

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A curated theme grouping objects of the collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    /// Image URL
    pub image: String,
}

/// Pin position on the schematic floor plan.
///
/// Both values are pre-baked CSS percentages (e.g. `"25%"`), measured from
/// the top-left corner of the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapPosition {
    pub top: String,
    pub left: String,
}

impl MapPosition {
    pub fn new(top: impl Into<String>, left: impl Into<String>) -> Self {
        Self {
            top: top.into(),
            left: left.into(),
        }
    }

    /// Inline CSS placing a pin centred on this position
    pub fn style(&self) -> String {
        format!(
            "top: {}; left: {}; transform: translate(-50%, -50%);",
            self.top, self.left
        )
    }
}

/// A single object on display in the museum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuseumObject {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub short_description: String,
    /// Long-form description shown on the detail page
    pub contextual_background: String,
    /// Human readable location (e.g. "Floor 1, Room 3")
    pub gallery_location: String,
    pub image: String,
    #[serde(default)]
    pub theme_ids: Vec<String>,
    pub map_position: MapPosition,
}

impl MuseumObject {
    /// Tooltip used by map pins
    pub fn pin_label(&self) -> String {
        format!("{} - {}", self.title, self.gallery_location)
    }

    pub fn belongs_to(&self, theme_id: &str) -> bool {
        self.theme_ids.iter().any(|id| id == theme_id)
    }
}

/// Tour length chosen by the visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TourSize {
    Small,
    Medium,
    Large,
}

impl TourSize {
    /// All sizes in display order
    pub const ALL: [TourSize; 3] = [TourSize::Small, TourSize::Medium, TourSize::Large];

    /// Wire and route form (case-sensitive)
    pub fn as_str(&self) -> &'static str {
        match self {
            TourSize::Small => "Small",
            TourSize::Medium => "Medium",
            TourSize::Large => "Large",
        }
    }
}

impl fmt::Display for TourSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a tour size string is not one of `Small`, `Medium`, `Large`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown tour size: {0} (expected Small, Medium or Large)")]
pub struct ParseTourSizeError(pub String);

impl FromStr for TourSize {
    type Err = ParseTourSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Small" => Ok(TourSize::Small),
            "Medium" => Ok(TourSize::Medium),
            "Large" => Ok(TourSize::Large),
            other => Err(ParseTourSizeError(other.to_string())),
        }
    }
}

/// Tour definition: an ordered list of object ids for one (theme, size) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub theme_id: String,
    pub size: TourSize,
    pub object_ids: Vec<String>,
}

impl Tour {
    pub fn new(theme_id: impl Into<String>, size: TourSize, object_ids: &[&str]) -> Self {
        Self {
            theme_id: theme_id.into(),
            size,
            object_ids: object_ids.iter().map(|id| id.to_string()).collect(),
        }
    }

    pub fn matches(&self, theme_id: &str, size: TourSize) -> bool {
        self.theme_id == theme_id && self.size == size
    }
}

/// Account returned by signup and whoami
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: String,
    pub email: String,
}

/// Bearer token returned by login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_size_parse_is_case_sensitive() {
        assert_eq!("Small".parse::<TourSize>(), Ok(TourSize::Small));
        assert_eq!("Large".parse::<TourSize>(), Ok(TourSize::Large));
        assert!("small".parse::<TourSize>().is_err());
        assert!("ExtraLarge".parse::<TourSize>().is_err());
    }

    #[test]
    fn test_tour_size_display_matches_wire_form() {
        for size in TourSize::ALL {
            assert_eq!(size.to_string().parse::<TourSize>(), Ok(size));
        }
        assert_eq!(serde_json::to_string(&TourSize::Medium).unwrap(), "\"Medium\"");
    }

    #[test]
    fn test_museum_object_camel_case_wire_format() {
        let json = r#"{
            "id": "obj-01",
            "title": "Legionary Helmet",
            "shortDescription": "A helmet.",
            "contextualBackground": "Long text.",
            "galleryLocation": "Floor 1, Room 3",
            "image": "https://example.org/helmet.png",
            "themeIds": ["roman-empire"],
            "mapPosition": {"top": "25%", "left": "15%"}
        }"#;

        let object: MuseumObject = serde_json::from_str(json).unwrap();
        assert_eq!(object.short_description, "A helmet.");
        assert_eq!(object.map_position, MapPosition::new("25%", "15%"));
        assert!(object.belongs_to("roman-empire"));
        assert_eq!(object.pin_label(), "Legionary Helmet - Floor 1, Room 3");

        let back = serde_json::to_value(&object).unwrap();
        assert_eq!(back["galleryLocation"], "Floor 1, Room 3");
    }

    #[test]
    fn test_theme_accepts_mongo_id_alias() {
        let theme: Theme = serde_json::from_str(
            r#"{"_id": "art", "name": "Art", "description": "d", "image": "i"}"#,
        )
        .unwrap();
        assert_eq!(theme.id, "art");
    }

    #[test]
    fn test_map_position_style() {
        let style = MapPosition::new("25%", "15%").style();
        assert!(style.starts_with("top: 25%; left: 15%;"));
    }

    #[test]
    fn test_auth_token_default_type() {
        let token: AuthToken = serde_json::from_str(r#"{"access_token": "abc"}"#).unwrap();
        assert_eq!(token.token_type, "bearer");
    }
}
