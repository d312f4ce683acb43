use std::collections::HashMap;

use crate::foundation::{
    core::Rect,
    error::{WavyteError, WavyteResult},
};

/// A named region of a texture atlas.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpriteFrame {
    /// Lookup key.
    pub name: String,
    /// Backing texture file.
    pub texture: String,
    /// Region within the texture, in pixels.
    pub rect: Rect,
    /// Whether the region is stored rotated by 90 degrees in the atlas.
    pub rotated: bool,
}

/// Resolves sprite-frame names for texture frames.
pub trait SpriteFrameSource {
    /// Look up `name`, or `None` when it is not cached.
    fn sprite_frame(&self, name: &str) -> Option<&SpriteFrame>;
}

/// In-memory sprite-frame cache keyed by frame name.
#[derive(Clone, Debug, Default)]
pub struct SpriteFrameCache {
    frames: HashMap<String, SpriteFrame>,
}

impl SpriteFrameCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `frame` under its own name, returning the entry it replaced.
    pub fn insert(&mut self, frame: SpriteFrame) -> WavyteResult<Option<SpriteFrame>> {
        if frame.name.is_empty() {
            return Err(WavyteError::validation("sprite frame name must be non-empty"));
        }
        Ok(self.frames.insert(frame.name.clone(), frame))
    }

    /// Borrow the frame cached under `name`.
    pub fn get(&self, name: &str) -> Option<&SpriteFrame> {
        self.frames.get(name)
    }

    /// Remove and return the frame cached under `name`.
    pub fn remove(&mut self, name: &str) -> Option<SpriteFrame> {
        self.frames.remove(name)
    }

    /// True when `name` is cached.
    pub fn contains(&self, name: &str) -> bool {
        self.frames.contains_key(name)
    }

    /// Number of cached frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl SpriteFrameSource for SpriteFrameCache {
    fn sprite_frame(&self, name: &str) -> Option<&SpriteFrame> {
        self.get(name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/sprite.rs"]
mod tests;
