use std::any::Any;

use crate::{
    foundation::{core::FrameIndex, error::WavyteResult},
    frame::base::{Frame, FrameBase, FrameKind, Segment, next_as},
};

/// Uniform rotation, in degrees.
#[derive(Debug)]
pub struct RotationFrame {
    base: FrameBase,
    rotation: f64,
    segment: Segment<f64>,
}

impl Default for RotationFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl RotationFrame {
    /// Rotation 0, index 0, tweened.
    pub fn new() -> Self {
        Self {
            base: FrameBase::new(),
            rotation: 0.0,
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

    /// Builder form of [`RotationFrame::set_rotation`].
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Set the rotation.
    pub fn set_rotation(&mut self, degrees: f64) {
        self.rotation = degrees;
    }

    /// The rotation.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }
}

impl Frame for RotationFrame {
    fn base(&self) -> &FrameBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FrameBase {
        &mut self.base
    }

    fn kind(&self) -> FrameKind {
        FrameKind::Rotation
    }

    fn on_enter(&mut self, next: Option<&dyn Frame>) -> WavyteResult<()> {
        self.segment.reset();
        let to = if self.base.is_tween() {
            next_as::<Self>(FrameKind::Rotation, next)?.map(|n| n.rotation)
        } else {
            None
        };

        let rotation = self.rotation;
        self.base
            .with_node(FrameKind::Rotation, |node| node.set_rotation(rotation))?;
        self.segment.enter(&self.base, rotation, to);
        Ok(())
    }

    fn apply(&self, percent: f64) -> WavyteResult<()> {
        let Some(rotation) = self.segment.sample(&self.base, self.rotation, percent) else {
            return Ok(());
        };
        self.base
            .with_node(FrameKind::Rotation, |node| node.set_rotation(rotation))
    }

    fn clone_frame(&self) -> Box<dyn Frame> {
        let mut frame = RotationFrame::new().with_rotation(self.rotation);
        frame.base.clone_property(&self.base);
        Box::new(frame)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/rotation.rs"]
mod tests;
