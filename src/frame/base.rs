use std::{
    any::Any,
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

use crate::{
    foundation::{
        core::{Blend, FrameIndex},
        error::{WavyteError, WavyteResult},
    },
    scene::node::{Node, NodeRef},
    timeline::{FrameEvent, Timeline},
};

/// The channel a frame animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum FrameKind {
    /// Node visibility.
    Visible,
    /// Sprite texture.
    Texture,
    /// Uniform rotation.
    Rotation,
    /// Skew x/y.
    Skew,
    /// Rotation x/y.
    RotationSkew,
    /// Position.
    Position,
    /// Scale x/y.
    Scale,
    /// Anchor point.
    AnchorPoint,
    /// Nested timeline playback.
    InnerAction,
    /// Tint and opacity.
    Color,
    /// Named event marker.
    Event,
    /// Local stacking order.
    ZOrder,
}

impl FrameKind {
    /// Stable name for logs and errors.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Texture => "texture",
            Self::Rotation => "rotation",
            Self::Skew => "skew",
            Self::RotationSkew => "rotation_skew",
            Self::Position => "position",
            Self::Scale => "scale",
            Self::AnchorPoint => "anchor_point",
            Self::InnerAction => "inner_action",
            Self::Color => "color",
            Self::Event => "event",
            Self::ZOrder => "z_order",
        }
    }
}

impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State every frame carries regardless of channel.
///
/// The timeline and node are held weakly: the channel owns the frame, never the reverse.
#[derive(Debug)]
pub struct FrameBase {
    frame_index: FrameIndex,
    tween: bool,
    timeline: Option<Weak<dyn Timeline>>,
    node: Option<Weak<RefCell<dyn Node>>>,
}

impl Default for FrameBase {
    fn default() -> Self {
        Self {
            frame_index: FrameIndex(0),
            tween: true,
            timeline: None,
            node: None,
        }
    }
}

impl FrameBase {
    /// Index 0, tweened, detached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Position on the owning channel.
    pub fn frame_index(&self) -> FrameIndex {
        self.frame_index
    }

    /// Move the frame along its channel.
    pub fn set_frame_index(&mut self, frame_index: FrameIndex) {
        self.frame_index = frame_index;
    }

    /// Whether the frame interpolates toward its successor.
    pub fn is_tween(&self) -> bool {
        self.tween
    }

    /// Enable or disable interpolation.
    pub fn set_tween(&mut self, tween: bool) {
        self.tween = tween;
    }

    /// The owning timeline, if attached and still alive.
    pub fn timeline(&self) -> Option<Rc<dyn Timeline>> {
        self.timeline.as_ref().and_then(Weak::upgrade)
    }

    /// Attach to `timeline` without taking ownership.
    pub fn set_timeline(&mut self, timeline: &Rc<dyn Timeline>) {
        self.timeline = Some(Rc::downgrade(timeline));
    }

    /// Forget the owning timeline.
    pub fn clear_timeline(&mut self) {
        self.timeline = None;
    }

    /// The target node, if attached and still alive.
    pub fn node(&self) -> Option<NodeRef> {
        self.node.as_ref().and_then(Weak::upgrade)
    }

    /// Target `node` without taking ownership.
    pub fn set_node(&mut self, node: &NodeRef) {
        self.node = Some(Rc::downgrade(node));
    }

    /// Forget the target node.
    pub fn clear_node(&mut self) {
        self.node = None;
    }

    /// Copy the channel-independent configuration (index and tween) from `other`.
    ///
    /// Attachments are not copied.
    pub fn clone_property(&mut self, other: &FrameBase) {
        self.frame_index = other.frame_index;
        self.tween = other.tween;
    }

    /// Raise `name` through the owning timeline's action. No-op when either is missing.
    pub fn emit_event(&self, name: &str) {
        let Some(action) = self.timeline().and_then(|t| t.action_timeline()) else {
            return;
        };
        tracing::trace!(event = name, frame = self.frame_index.0, "frame event");
        action.emit_frame_event(&FrameEvent {
            name: name.to_string(),
            frame_index: self.frame_index,
        });
    }

    /// Run `f` against the target node, failing when none is attached.
    pub(crate) fn with_node(
        &self,
        kind: FrameKind,
        f: impl FnOnce(&mut dyn Node),
    ) -> WavyteResult<()> {
        let node = self.node().ok_or_else(|| {
            WavyteError::detached(format!(
                "{kind} frame {} has no live node",
                self.frame_index.0
            ))
        })?;
        borrow_and(&node, kind, f)
    }

    /// Run `f` against the target node if one is attached; otherwise do nothing.
    pub(crate) fn with_node_if_attached(
        &self,
        kind: FrameKind,
        f: impl FnOnce(&mut dyn Node),
    ) -> WavyteResult<()> {
        match self.node() {
            Some(node) => borrow_and(&node, kind, f),
            None => Ok(()),
        }
    }
}

fn borrow_and(
    node: &NodeRef,
    kind: FrameKind,
    f: impl FnOnce(&mut dyn Node),
) -> WavyteResult<()> {
    let mut node = node.try_borrow_mut().map_err(|_| {
        WavyteError::evaluation(format!("{kind} frame: node is already borrowed"))
    })?;
    f(&mut *node);
    Ok(())
}

/// A keyframe on one channel.
///
/// The channel calls [`Frame::on_enter`] once when its playhead crosses into the segment
/// starting at this frame, then [`Frame::apply`] any number of times with the segment
/// progress in `[0, 1]`.
pub trait Frame: fmt::Debug + 'static {
    /// Shared state.
    fn base(&self) -> &FrameBase;

    /// Shared state, mutably.
    fn base_mut(&mut self) -> &mut FrameBase;

    /// Which channel this frame animates.
    fn kind(&self) -> FrameKind;

    /// Write the segment's start value and capture the delta toward `next`.
    ///
    /// `next` is `None` on the last frame of a channel; tweened frames then hold their value.
    fn on_enter(&mut self, next: Option<&dyn Frame>) -> WavyteResult<()> {
        let _ = next;
        Ok(())
    }

    /// Write the value at `percent` through the current segment.
    fn apply(&self, percent: f64) -> WavyteResult<()> {
        let _ = percent;
        Ok(())
    }

    /// Copy of the configuration (index, tween, channel values), detached.
    fn clone_frame(&self) -> Box<dyn Frame>;

    /// Downcasting support for reading a successor's typed value.
    fn as_any(&self) -> &dyn Any;

    /// See [`FrameBase::frame_index`].
    fn frame_index(&self) -> FrameIndex {
        self.base().frame_index()
    }

    /// See [`FrameBase::set_frame_index`].
    fn set_frame_index(&mut self, frame_index: FrameIndex) {
        self.base_mut().set_frame_index(frame_index);
    }

    /// See [`FrameBase::is_tween`].
    fn is_tween(&self) -> bool {
        self.base().is_tween()
    }

    /// See [`FrameBase::set_tween`].
    fn set_tween(&mut self, tween: bool) {
        self.base_mut().set_tween(tween);
    }

    /// See [`FrameBase::timeline`].
    fn timeline(&self) -> Option<Rc<dyn Timeline>> {
        self.base().timeline()
    }

    /// See [`FrameBase::set_timeline`].
    fn set_timeline(&mut self, timeline: &Rc<dyn Timeline>) {
        self.base_mut().set_timeline(timeline);
    }

    /// See [`FrameBase::node`].
    fn node(&self) -> Option<NodeRef> {
        self.base().node()
    }

    /// See [`FrameBase::set_node`].
    fn set_node(&mut self, node: &NodeRef) {
        self.base_mut().set_node(node);
    }

    /// See [`FrameBase::clear_node`].
    fn clear_node(&mut self) {
        self.base_mut().clear_node();
    }
}

impl Clone for Box<dyn Frame> {
    fn clone(&self) -> Self {
        self.clone_frame()
    }
}

/// Downcast the successor of a `kind` frame to the concrete type `T`.
pub(crate) fn next_as<'a, T: Frame>(
    kind: FrameKind,
    next: Option<&'a dyn Frame>,
) -> WavyteResult<Option<&'a T>> {
    let Some(next) = next else {
        return Ok(None);
    };
    match next.as_any().downcast_ref::<T>() {
        Some(next) => Ok(Some(next)),
        None => Err(WavyteError::animation(format!(
            "{kind} frame cannot tween into a {} frame",
            next.kind()
        ))),
    }
}

/// Per-segment delta and target of a tweened value. Never copied by `clone_frame`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Segment<T: Blend> {
    delta: T::Delta,
    target: Option<T>,
}

impl<T: Blend> Default for Segment<T> {
    fn default() -> Self {
        Self {
            delta: T::Delta::default(),
            target: None,
        }
    }
}

impl<T: Blend> Segment<T> {
    /// Drop the previous segment so a failed entry leaves nothing to interpolate.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    /// Capture the delta from `from` to `to`. A tweened frame without successor holds.
    pub(crate) fn enter(&mut self, base: &FrameBase, from: T, to: Option<T>) {
        self.reset();
        match (base.is_tween(), to) {
            (true, Some(to)) => {
                self.delta = T::delta(from, to);
                self.target = Some(to);
            }
            (true, None) => {
                tracing::debug!(
                    frame = base.frame_index().0,
                    "tweened frame has no successor; holding value"
                );
            }
            (false, _) => {}
        }
    }

    /// Value at `percent`, or `None` when the segment does not move.
    ///
    /// `percent == 1.0` yields the successor's value exactly.
    pub(crate) fn sample(&self, base: &FrameBase, from: T, percent: f64) -> Option<T> {
        if !base.is_tween() || T::is_still(self.delta) {
            return None;
        }
        if percent == 1.0 {
            return self.target;
        }
        Some(T::offset(from, self.delta, percent))
    }

    #[cfg(test)]
    pub(crate) fn delta(&self) -> T::Delta {
        self.delta
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/base.rs"]
mod tests;
