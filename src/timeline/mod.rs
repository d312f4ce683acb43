use std::rc::Rc;

use crate::foundation::core::FrameIndex;

/// Raised when an event frame is entered.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameEvent {
    /// User-defined event name.
    pub name: String,
    /// Index of the frame that raised it.
    pub frame_index: FrameIndex,
}

/// A channel timeline that owns frames.
pub trait Timeline {
    /// The action this timeline belongs to, if it is attached to one.
    fn action_timeline(&self) -> Option<Rc<dyn ActionTimeline>>;
}

/// The action that owns a set of timelines and dispatches their events.
pub trait ActionTimeline {
    /// Deliver `event` to listeners.
    fn emit_frame_event(&self, event: &FrameEvent);
}
