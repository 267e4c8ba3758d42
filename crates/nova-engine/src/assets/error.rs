use thiserror::Error;

/// Failures while loading or looking up game content.
///
/// All of these are fatal at startup: the game cannot run without its
/// textures, fonts and sounds.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to load {path}: {reason}")]
    LoadFailed { path: String, reason: String },

    #[error("malformed descriptor: {0}")]
    Descriptor(#[from] serde_json::Error),

    #[error("texture {id} has zero size ({width}x{height})")]
    ZeroSizedTexture { id: u32, width: u32, height: u32 },

    #[error("atlas region {name:?} has zero width or height")]
    EmptyRegion { name: String },

    #[error("glyph id {0} is not a valid unicode scalar value")]
    InvalidCodePoint(u32),

    #[error("sound {name:?} id {id} does not fit the host sound table (max {max})")]
    SoundIdOutOfRange { name: String, id: u32, max: u32 },

    #[error("texture not found: {0}")]
    MissingTexture(String),

    #[error("sprite not found: {0}")]
    MissingSprite(String),

    #[error("sound not found: {0}")]
    MissingSound(String),

    #[error("no sprite font loaded")]
    MissingFont,

    #[error("content is already frozen")]
    AlreadyFrozen,
}
