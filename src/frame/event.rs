use std::any::Any;

use crate::{
    foundation::{core::FrameIndex, error::WavyteResult},
    frame::base::{Frame, FrameBase, FrameKind},
};

/// Raises a named event through the owning action when entered. Never touches the node.
#[derive(Debug, Default)]
pub struct EventFrame {
    base: FrameBase,
    event: String,
}

impl EventFrame {
    /// Empty event name, index 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Frame::set_frame_index`].
    pub fn with_frame_index(mut self, frame_index: FrameIndex) -> Self {
        self.base.set_frame_index(frame_index);
        self
    }

    /// Builder form of [`EventFrame::set_event`].
    pub fn with_event(mut self, event: impl Into<String>) -> Self {
        self.event = event.into();
        self
    }

    /// Set the event name.
    pub fn set_event(&mut self, event: impl Into<String>) {
        self.event = event.into();
    }

    /// The event name.
    pub fn event(&self) -> &str {
        &self.event
    }
}

impl Frame for EventFrame {
    fn base(&self) -> &FrameBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FrameBase {
        &mut self.base
    }

    fn kind(&self) -> FrameKind {
        FrameKind::Event
    }

    fn on_enter(&mut self, _next: Option<&dyn Frame>) -> WavyteResult<()> {
        self.base.emit_event(&self.event);
        Ok(())
    }

    fn clone_frame(&self) -> Box<dyn Frame> {
        let mut frame = EventFrame::new().with_event(self.event.clone());
        frame.base.clone_property(&self.base);
        Box::new(frame)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/event.rs"]
mod tests;
