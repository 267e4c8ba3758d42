//! Serde shapes of the asset descriptors the host hands over.
//!
//! Both are JSON exports of the usual tools: a TexturePacker-style atlas
//! (named sub-textures in pixel space) and a BMFont-style bitmap font.
//! Every attribute is required; a missing one is a malformed descriptor.

use serde::{Deserialize, Serialize};

use super::error::ContentError;

/// Texture atlas descriptor: named pixel regions within one image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtlasDescriptor {
    /// Relative path to the atlas image (e.g., "sheet.png").
    #[serde(default)]
    pub image_path: Option<String>,
    pub sub_textures: Vec<SubTexture>,
}

/// One named region of an atlas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubTexture {
    /// Region name, usually the source file name (e.g., "laserBlue01.png").
    pub name: String,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Bitmap font descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontDescriptor {
    pub common: FontCommon,
    pub chars: Vec<GlyphDescriptor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontCommon {
    /// Distance in pixels between baselines.
    pub line_height: u32,
}

/// One glyph: unicode id, pixel rect in the font texture, and metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlyphDescriptor {
    pub id: u32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub xadvance: i32,
    pub xoffset: i32,
    pub yoffset: i32,
}

impl AtlasDescriptor {
    /// Parse an atlas descriptor from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl FontDescriptor {
    /// Parse a font descriptor from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_atlas() {
        let json = r#"{
            "imagePath": "sheet.png",
            "subTextures": [
                { "name": "laserBlue01.png", "x": 856, "y": 421, "width": 9, "height": 54 }
            ]
        }"#;
        let atlas = AtlasDescriptor::from_json(json).unwrap();
        assert_eq!(atlas.image_path.as_deref(), Some("sheet.png"));
        assert_eq!(atlas.sub_textures.len(), 1);
        assert_eq!(atlas.sub_textures[0].height, 54);
    }

    #[test]
    fn atlas_region_missing_attribute_is_error() {
        let json = r#"{ "subTextures": [ { "name": "a.png", "x": 0, "y": 0, "width": 4 } ] }"#;
        let err = AtlasDescriptor::from_json(json).unwrap_err();
        assert!(matches!(err, ContentError::Descriptor(_)));
    }

    #[test]
    fn parse_font() {
        let json = r#"{
            "common": { "lineHeight": 64 },
            "chars": [
                { "id": 65, "x": 2, "y": 4, "width": 30, "height": 40,
                  "xadvance": 32, "xoffset": 1, "yoffset": 12 }
            ]
        }"#;
        let font = FontDescriptor::from_json(json).unwrap();
        assert_eq!(font.common.line_height, 64);
        assert_eq!(font.chars[0].id, 65);
        assert_eq!(font.chars[0].yoffset, 12);
    }

    #[test]
    fn font_without_line_height_is_error() {
        let json = r#"{ "common": {}, "chars": [] }"#;
        assert!(FontDescriptor::from_json(json).is_err());
    }
}
