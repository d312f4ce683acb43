use std::any::Any;

use crate::{
    foundation::{core::FrameIndex, error::WavyteResult},
    frame::base::{Frame, FrameBase, FrameKind},
};

/// Shows or hides the node for the whole segment.
#[derive(Debug)]
pub struct VisibleFrame {
    base: FrameBase,
    visible: bool,
}

impl Default for VisibleFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibleFrame {
    /// Visible, index 0, tweened.
    pub fn new() -> Self {
        Self {
            base: FrameBase::new(),
            visible: true,
        }
    }

    /// Builder form of [`Frame::set_frame_index`].
    pub fn with_frame_index(mut self, frame_index: FrameIndex) -> Self {
        self.base.set_frame_index(frame_index);
        self
    }

    /// Builder form of [`VisibleFrame::set_visible`].
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set the display state.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// The display state.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Frame for VisibleFrame {
    fn base(&self) -> &FrameBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FrameBase {
        &mut self.base
    }

    fn kind(&self) -> FrameKind {
        FrameKind::Visible
    }

    fn on_enter(&mut self, _next: Option<&dyn Frame>) -> WavyteResult<()> {
        let visible = self.visible;
        self.base
            .with_node(FrameKind::Visible, |node| node.set_visible(visible))
    }

    fn clone_frame(&self) -> Box<dyn Frame> {
        let mut frame = VisibleFrame::new().with_visible(self.visible);
        frame.base.clone_property(&self.base);
        Box::new(frame)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/visible.rs"]
mod tests;
