use serde::{Deserialize, Serialize};

/// Asset manifest listing every texture the scene references.
/// The game builds it at init; the host fetches, decodes and uploads the files.
/// A texture's position in `textures` is its `TextureId`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetManifest {
    #[serde(default)]
    pub textures: Vec<TextureDescriptor>,
}

/// Describes a single texture image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Human-readable name (e.g., "planet-0").
    pub name: String,
    /// Path relative to the page (e.g., "texture/texture_orange.jpg").
    pub path: String,
    /// Whether the host should treat the image as sRGB colour data.
    #[serde(default = "default_srgb")]
    pub srgb: bool,
}

fn default_srgb() -> bool {
    true
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize for the host.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
