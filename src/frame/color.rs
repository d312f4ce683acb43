use std::any::Any;

use crate::{
    foundation::{
        core::{Color3B, FrameIndex, Rgba},
        error::WavyteResult,
    },
    frame::base::{Frame, FrameBase, FrameKind, Segment, next_as},
};

/// Tint and opacity.
///
/// Blended channels are rounded half away from zero and clamped to `0..=255` before they
/// reach the node, so a white-to-black segment at `0.5` writes `128`.
#[derive(Debug)]
pub struct ColorFrame {
    base: FrameBase,
    value: Rgba,
    segment: Segment<Rgba>,
}

impl Default for ColorFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorFrame {
    /// Opaque white, index 0, tweened.
    pub fn new() -> Self {
        Self {
            base: FrameBase::new(),
            value: Rgba::default(),
            segment: Segment::default(),
        }
    }

    /// Builder form of [`Frame::set_frame_index`].
    pub fn with_frame_index(mut self, frame_index: FrameIndex) -> Self {
        self.base.set_frame_index(frame_index);
        self
    }

    /// Builder form of [`Frame::set_tween`].
    pub fn with_tween(mut self, tween: bool) -> Self {
        self.base.set_tween(tween);
        self
    }

    /// Builder form of [`ColorFrame::set_alpha`].
    pub fn with_alpha(mut self, alpha: u8) -> Self {
        self.value.alpha = alpha;
        self
    }

    /// Builder form of [`ColorFrame::set_color`].
    pub fn with_color(mut self, color: Color3B) -> Self {
        self.value.color = color;
        self
    }

    /// Set the opacity.
    pub fn set_alpha(&mut self, alpha: u8) {
        self.value.alpha = alpha;
    }

    /// The opacity.
    pub fn alpha(&self) -> u8 {
        self.value.alpha
    }

    /// Set the tint.
    pub fn set_color(&mut self, color: Color3B) {
        self.value.color = color;
    }

    /// The tint.
    pub fn color(&self) -> Color3B {
        self.value.color
    }
}

impl Frame for ColorFrame {
    fn base(&self) -> &FrameBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FrameBase {
        &mut self.base
    }

    fn kind(&self) -> FrameKind {
        FrameKind::Color
    }

    fn on_enter(&mut self, next: Option<&dyn Frame>) -> WavyteResult<()> {
        self.segment.reset();
        let to = if self.base.is_tween() {
            next_as::<Self>(FrameKind::Color, next)?.map(|n| n.value)
        } else {
            None
        };

        let value = self.value;
        self.base.with_node(FrameKind::Color, |node| {
            node.set_opacity(value.alpha);
            node.set_color(value.color);
        })?;
        self.segment.enter(&self.base, value, to);
        Ok(())
    }

    fn apply(&self, percent: f64) -> WavyteResult<()> {
        let Some(value) = self.segment.sample(&self.base, self.value, percent) else {
            return Ok(());
        };
        self.base.with_node(FrameKind::Color, |node| {
            node.set_opacity(value.alpha);
            node.set_color(value.color);
        })
    }

    fn clone_frame(&self) -> Box<dyn Frame> {
        let mut frame = ColorFrame::new()
            .with_alpha(self.value.alpha)
            .with_color(self.value.color);
        frame.base.clone_property(&self.base);
        Box::new(frame)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/color.rs"]
mod tests;
