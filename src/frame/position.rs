use std::any::Any;

use crate::{
    foundation::{
        core::{FrameIndex, Vec2},
        error::WavyteResult,
    },
    frame::base::{Frame, FrameBase, FrameKind, Segment, next_as},
};

/// Node position in parent space.
#[derive(Debug)]
pub struct PositionFrame {
    base: FrameBase,
    position: Vec2,
    segment: Segment<Vec2>,
}

impl Default for PositionFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionFrame {
    /// Position (0, 0), index 0, tweened.
    pub fn new() -> Self {
        Self {
            base: FrameBase::new(),
            position: Vec2::ZERO,
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

    /// Builder form of [`PositionFrame::set_position`].
    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    /// Set the position.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// The position.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Set only the x coordinate.
    pub fn set_x(&mut self, x: f64) {
        self.position.x = x;
    }

    /// The x coordinate.
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Set only the y coordinate.
    pub fn set_y(&mut self, y: f64) {
        self.position.y = y;
    }

    /// The y coordinate.
    pub fn y(&self) -> f64 {
        self.position.y
    }
}

impl Frame for PositionFrame {
    fn base(&self) -> &FrameBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FrameBase {
        &mut self.base
    }

    fn kind(&self) -> FrameKind {
        FrameKind::Position
    }

    fn on_enter(&mut self, next: Option<&dyn Frame>) -> WavyteResult<()> {
        self.segment.reset();
        let to = if self.base.is_tween() {
            next_as::<Self>(FrameKind::Position, next)?.map(|n| n.position)
        } else {
            None
        };

        let position = self.position;
        self.base
            .with_node(FrameKind::Position, |node| node.set_position(position))?;
        self.segment.enter(&self.base, position, to);
        Ok(())
    }

    fn apply(&self, percent: f64) -> WavyteResult<()> {
        let Some(position) = self.segment.sample(&self.base, self.position, percent) else {
            return Ok(());
        };
        self.base
            .with_node(FrameKind::Position, |node| node.set_position(position))
    }

    fn clone_frame(&self) -> Box<dyn Frame> {
        let mut frame = PositionFrame::new().with_position(self.position);
        frame.base.clone_property(&self.base);
        Box::new(frame)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/position.rs"]
mod tests;
