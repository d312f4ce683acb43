use std::any::Any;

use crate::{
    foundation::{
        core::{FrameIndex, Vec2},
        error::WavyteResult,
    },
    frame::base::{Frame, FrameBase, FrameKind, Segment, next_as},
};

/// Scale factors along x and y.
#[derive(Debug)]
pub struct ScaleFrame {
    base: FrameBase,
    scale: Vec2,
    segment: Segment<Vec2>,
}

impl Default for ScaleFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl ScaleFrame {
    /// Scale (1, 1), index 0, tweened.
    pub fn new() -> Self {
        Self {
            base: FrameBase::new(),
            scale: Vec2::new(1.0, 1.0),
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

    /// Builder setting both axes independently.
    pub fn with_scale(mut self, x: f64, y: f64) -> Self {
        self.scale = Vec2::new(x, y);
        self
    }

    /// Set both axes to `scale`.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = Vec2::new(scale, scale);
    }

    /// Set the x scale.
    pub fn set_scale_x(&mut self, x: f64) {
        self.scale.x = x;
    }

    /// The x scale.
    pub fn scale_x(&self) -> f64 {
        self.scale.x
    }

    /// Set the y scale.
    pub fn set_scale_y(&mut self, y: f64) {
        self.scale.y = y;
    }

    /// The y scale.
    pub fn scale_y(&self) -> f64 {
        self.scale.y
    }
}

impl Frame for ScaleFrame {
    fn base(&self) -> &FrameBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FrameBase {
        &mut self.base
    }

    fn kind(&self) -> FrameKind {
        FrameKind::Scale
    }

    fn on_enter(&mut self, next: Option<&dyn Frame>) -> WavyteResult<()> {
        self.segment.reset();
        let to = if self.base.is_tween() {
            next_as::<Self>(FrameKind::Scale, next)?.map(|n| n.scale)
        } else {
            None
        };

        let scale = self.scale;
        self.base.with_node(FrameKind::Scale, |node| {
            node.set_scale_x(scale.x);
            node.set_scale_y(scale.y);
        })?;
        self.segment.enter(&self.base, scale, to);
        Ok(())
    }

    fn apply(&self, percent: f64) -> WavyteResult<()> {
        let Some(scale) = self.segment.sample(&self.base, self.scale, percent) else {
            return Ok(());
        };
        self.base.with_node(FrameKind::Scale, |node| {
            node.set_scale_x(scale.x);
            node.set_scale_y(scale.y);
        })
    }

    fn clone_frame(&self) -> Box<dyn Frame> {
        let mut frame = ScaleFrame::new().with_scale(self.scale.x, self.scale.y);
        frame.base.clone_property(&self.base);
        Box::new(frame)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/scale.rs"]
mod tests;
