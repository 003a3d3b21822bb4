//! Menu items, allergen reference data, and the image widget's item type.

use serde::{Deserialize, Serialize};

/// Allergy-causing ingredient that can be tagged on a menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allergy {
    pub id: i64,
    pub name: String,
}

/// A menu item as listed for its store's owner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub allergy_ids: Vec<i64>,
    /// Allergen names for display.
    #[serde(default)]
    pub allergies: Vec<String>,
}

/// Raw file picked in the image widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// One entry of the image widget: a picked file and its preview, or just a
/// preview of an image already on the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageUpload {
    pub file: Option<ImageFile>,
    pub preview_url: String,
}

impl ImageUpload {
    #[must_use]
    pub fn existing(preview_url: impl Into<String>) -> Self {
        Self { file: None, preview_url: preview_url.into() }
    }

    #[must_use]
    pub fn picked(file: ImageFile, preview_url: impl Into<String>) -> Self {
        Self { file: Some(file), preview_url: preview_url.into() }
    }
}
