use std::any::Any;

use crate::{
    foundation::{core::FrameIndex, error::WavyteResult},
    frame::base::{Frame, FrameBase, FrameKind},
};

/// How a nested timeline plays once its frame is entered.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum InnerActionType {
    /// Repeat from the start frame.
    #[default]
    Loop,
    /// Play once from the start frame and stop.
    NoLoop,
    /// Show the start frame only.
    SingleFrame,
}

/// Drives an embedded sub-timeline on the node.
///
/// The node opts in through [`crate::Node::inner_action_mut`]; nodes without a nested
/// timeline, and detached frames, are left alone.
#[derive(Debug)]
pub struct InnerActionFrame {
    base: FrameBase,
    inner_action_type: InnerActionType,
    start_frame_index: FrameIndex,
}

impl Default for InnerActionFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl InnerActionFrame {
    /// Looping from frame 0.
    pub fn new() -> Self {
        Self {
            base: FrameBase::new(),
            inner_action_type: InnerActionType::Loop,
            start_frame_index: FrameIndex(0),
        }
    }

    /// Builder form of [`Frame::set_frame_index`].
    pub fn with_frame_index(mut self, frame_index: FrameIndex) -> Self {
        self.base.set_frame_index(frame_index);
        self
    }

    /// Builder form of [`InnerActionFrame::set_inner_action_type`].
    pub fn with_inner_action_type(mut self, ty: InnerActionType) -> Self {
        self.inner_action_type = ty;
        self
    }

    /// Builder form of [`InnerActionFrame::set_start_frame_index`].
    pub fn with_start_frame_index(mut self, start: FrameIndex) -> Self {
        self.start_frame_index = start;
        self
    }

    /// Set the playback mode.
    pub fn set_inner_action_type(&mut self, ty: InnerActionType) {
        self.inner_action_type = ty;
    }

    /// The playback mode.
    pub fn inner_action_type(&self) -> InnerActionType {
        self.inner_action_type
    }

    /// Set where the nested timeline starts.
    pub fn set_start_frame_index(&mut self, start: FrameIndex) {
        self.start_frame_index = start;
    }

    /// Where the nested timeline starts.
    pub fn start_frame_index(&self) -> FrameIndex {
        self.start_frame_index
    }
}

impl Frame for InnerActionFrame {
    fn base(&self) -> &FrameBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FrameBase {
        &mut self.base
    }

    fn kind(&self) -> FrameKind {
        FrameKind::InnerAction
    }

    fn on_enter(&mut self, _next: Option<&dyn Frame>) -> WavyteResult<()> {
        let (ty, start) = (self.inner_action_type, self.start_frame_index);
        let mut started = Ok(());
        self.base
            .with_node_if_attached(FrameKind::InnerAction, |node| {
                if let Some(player) = node.inner_action_mut() {
                    started = player.play_inner_action(ty, start);
                }
            })?;
        Ok(started?)
    }

    fn clone_frame(&self) -> Box<dyn Frame> {
        let mut frame = InnerActionFrame::new()
            .with_inner_action_type(self.inner_action_type)
            .with_start_frame_index(self.start_frame_index);
        frame.base.clone_property(&self.base);
        Box::new(frame)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/inner_action.rs"]
mod tests;
