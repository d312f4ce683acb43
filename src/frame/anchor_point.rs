use std::any::Any;

use crate::{
    foundation::{
        core::{FrameIndex, Vec2},
        error::WavyteResult,
    },
    frame::base::{Frame, FrameBase, FrameKind},
};

/// Normalized pivot. Never interpolated.
#[derive(Debug)]
pub struct AnchorPointFrame {
    base: FrameBase,
    anchor_point: Vec2,
}

impl Default for AnchorPointFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl AnchorPointFrame {
    /// Anchor (0, 0), index 0.
    pub fn new() -> Self {
        Self {
            base: FrameBase::new(),
            anchor_point: Vec2::ZERO,
        }
    }

    /// Builder form of [`Frame::set_frame_index`].
    pub fn with_frame_index(mut self, frame_index: FrameIndex) -> Self {
        self.base.set_frame_index(frame_index);
        self
    }

    /// Builder form of [`AnchorPointFrame::set_anchor_point`].
    pub fn with_anchor_point(mut self, anchor_point: Vec2) -> Self {
        self.anchor_point = anchor_point;
        self
    }

    /// Set the anchor point.
    pub fn set_anchor_point(&mut self, anchor_point: Vec2) {
        self.anchor_point = anchor_point;
    }

    /// The anchor point.
    pub fn anchor_point(&self) -> Vec2 {
        self.anchor_point
    }
}

impl Frame for AnchorPointFrame {
    fn base(&self) -> &FrameBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FrameBase {
        &mut self.base
    }

    fn kind(&self) -> FrameKind {
        FrameKind::AnchorPoint
    }

    fn on_enter(&mut self, _next: Option<&dyn Frame>) -> WavyteResult<()> {
        let anchor_point = self.anchor_point;
        self.base.with_node(FrameKind::AnchorPoint, |node| {
            node.set_anchor_point(anchor_point)
        })
    }

    fn clone_frame(&self) -> Box<dyn Frame> {
        let mut frame = AnchorPointFrame::new().with_anchor_point(self.anchor_point);
        frame.base.clone_property(&self.base);
        Box::new(frame)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/anchor_point.rs"]
mod tests;
