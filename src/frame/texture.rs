use std::{any::Any, fmt, rc::Rc};

use crate::{
    foundation::{core::FrameIndex, error::WavyteResult},
    frame::base::{Frame, FrameBase, FrameKind},
    scene::sprite::SpriteFrameSource,
};

/// Swaps the texture shown by a sprite node.
///
/// The name is resolved through the attached [`SpriteFrameSource`] first; when it is not
/// cached (or no source is attached) the node loads it as a raw texture file.
pub struct TextureFrame {
    base: FrameBase,
    texture_name: String,
    sprite_frames: Option<Rc<dyn SpriteFrameSource>>,
}

impl fmt::Debug for TextureFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextureFrame")
            .field("base", &self.base)
            .field("texture_name", &self.texture_name)
            .field("has_sprite_frames", &self.sprite_frames.is_some())
            .finish()
    }
}

impl Default for TextureFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureFrame {
    /// Empty name, index 0, no sprite-frame source.
    pub fn new() -> Self {
        Self {
            base: FrameBase::new(),
            texture_name: String::new(),
            sprite_frames: None,
        }
    }

    /// Builder form of [`Frame::set_frame_index`].
    pub fn with_frame_index(mut self, frame_index: FrameIndex) -> Self {
        self.base.set_frame_index(frame_index);
        self
    }

    /// Builder form of [`TextureFrame::set_texture_name`].
    pub fn with_texture_name(mut self, name: impl Into<String>) -> Self {
        self.texture_name = name.into();
        self
    }

    /// Builder form of [`TextureFrame::set_sprite_frames`].
    pub fn with_sprite_frames(mut self, source: Rc<dyn SpriteFrameSource>) -> Self {
        self.sprite_frames = Some(source);
        self
    }

    /// Set the sprite-frame or texture name.
    pub fn set_texture_name(&mut self, name: impl Into<String>) {
        self.texture_name = name.into();
    }

    /// The sprite-frame or texture name.
    pub fn texture_name(&self) -> &str {
        &self.texture_name
    }

    /// Resolve names through `source` before falling back to raw textures.
    pub fn set_sprite_frames(&mut self, source: Rc<dyn SpriteFrameSource>) {
        self.sprite_frames = Some(source);
    }
}

impl Frame for TextureFrame {
    fn base(&self) -> &FrameBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FrameBase {
        &mut self.base
    }

    fn kind(&self) -> FrameKind {
        FrameKind::Texture
    }

    fn on_enter(&mut self, _next: Option<&dyn Frame>) -> WavyteResult<()> {
        let name = self.texture_name.as_str();
        let cached = self
            .sprite_frames
            .as_deref()
            .and_then(|source| source.sprite_frame(name));

        self.base.with_node(FrameKind::Texture, |node| {
            let Some(sprite) = node.as_sprite_mut() else {
                tracing::debug!(texture = name, "node cannot display textures; skipping");
                return;
            };
            match cached {
                Some(frame) => sprite.set_sprite_frame(frame),
                None => {
                    tracing::debug!(texture = name, "sprite frame not cached; loading texture");
                    sprite.set_texture(name);
                }
            }
        })
    }

    fn clone_frame(&self) -> Box<dyn Frame> {
        let mut frame = TextureFrame::new().with_texture_name(self.texture_name.clone());
        frame.sprite_frames = self.sprite_frames.clone();
        frame.base.clone_property(&self.base);
        Box::new(frame)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/texture.rs"]
mod tests;
