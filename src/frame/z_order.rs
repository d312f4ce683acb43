use std::any::Any;

use crate::{
    foundation::{core::FrameIndex, error::WavyteResult},
    frame::base::{Frame, FrameBase, FrameKind},
};

/// Local stacking order among siblings. Skipped while no node is attached.
#[derive(Debug, Default)]
pub struct ZOrderFrame {
    base: FrameBase,
    z_order: i32,
}

impl ZOrderFrame {
    /// Z order 0, index 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Frame::set_frame_index`].
    pub fn with_frame_index(mut self, frame_index: FrameIndex) -> Self {
        self.base.set_frame_index(frame_index);
        self
    }

    /// Builder form of [`ZOrderFrame::set_z_order`].
    pub fn with_z_order(mut self, z_order: i32) -> Self {
        self.z_order = z_order;
        self
    }

    /// Set the stacking order.
    pub fn set_z_order(&mut self, z_order: i32) {
        self.z_order = z_order;
    }

    /// The stacking order.
    pub fn z_order(&self) -> i32 {
        self.z_order
    }
}

impl Frame for ZOrderFrame {
    fn base(&self) -> &FrameBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FrameBase {
        &mut self.base
    }

    fn kind(&self) -> FrameKind {
        FrameKind::ZOrder
    }

    fn on_enter(&mut self, _next: Option<&dyn Frame>) -> WavyteResult<()> {
        let z_order = self.z_order;
        self.base
            .with_node_if_attached(FrameKind::ZOrder, |node| node.set_local_z_order(z_order))
    }

    fn clone_frame(&self) -> Box<dyn Frame> {
        let mut frame = ZOrderFrame::new().with_z_order(self.z_order);
        frame.base.clone_property(&self.base);
        Box::new(frame)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/z_order.rs"]
mod tests;
