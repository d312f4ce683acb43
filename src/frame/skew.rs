use std::any::Any;

use crate::{
    foundation::{
        core::{FrameIndex, Vec2},
        error::WavyteResult,
    },
    frame::base::{Frame, FrameBase, FrameKind, Segment, next_as},
    scene::node::Node,
};

/// Skew along x and y, in degrees.
#[derive(Debug)]
pub struct SkewFrame {
    base: FrameBase,
    skew: Vec2,
    segment: Segment<Vec2>,
}

impl Default for SkewFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl SkewFrame {
    /// Skew (0, 0), index 0, tweened.
    pub fn new() -> Self {
        Self {
            base: FrameBase::new(),
            skew: Vec2::ZERO,
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

    /// Builder setting both axes.
    pub fn with_skew(mut self, x: f64, y: f64) -> Self {
        self.skew = Vec2::new(x, y);
        self
    }

    /// Set the x skew.
    pub fn set_skew_x(&mut self, x: f64) {
        self.skew.x = x;
    }

    /// The x skew.
    pub fn skew_x(&self) -> f64 {
        self.skew.x
    }

    /// Set the y skew.
    pub fn set_skew_y(&mut self, y: f64) {
        self.skew.y = y;
    }

    /// The y skew.
    pub fn skew_y(&self) -> f64 {
        self.skew.y
    }

    fn enter_with(
        &mut self,
        kind: FrameKind,
        to: Option<Vec2>,
        write: fn(&mut dyn Node, Vec2),
    ) -> WavyteResult<()> {
        let skew = self.skew;
        self.base.with_node(kind, |node| write(node, skew))?;
        self.segment.enter(&self.base, skew, to);
        Ok(())
    }

    fn apply_with(
        &self,
        kind: FrameKind,
        percent: f64,
        write: fn(&mut dyn Node, Vec2),
    ) -> WavyteResult<()> {
        let Some(skew) = self.segment.sample(&self.base, self.skew, percent) else {
            return Ok(());
        };
        self.base.with_node(kind, |node| write(node, skew))
    }

    fn copy(&self) -> Self {
        let mut frame = SkewFrame::new().with_skew(self.skew.x, self.skew.y);
        frame.base.clone_property(&self.base);
        frame
    }
}

fn write_skew(node: &mut dyn Node, skew: Vec2) {
    node.set_skew_x(skew.x);
    node.set_skew_y(skew.y);
}

fn write_rotation_xy(node: &mut dyn Node, rotation: Vec2) {
    node.set_rotation_x(rotation.x);
    node.set_rotation_y(rotation.y);
}

impl Frame for SkewFrame {
    fn base(&self) -> &FrameBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FrameBase {
        &mut self.base
    }

    fn kind(&self) -> FrameKind {
        FrameKind::Skew
    }

    fn on_enter(&mut self, next: Option<&dyn Frame>) -> WavyteResult<()> {
        self.segment.reset();
        let to = if self.base.is_tween() {
            next_as::<Self>(FrameKind::Skew, next)?.map(|n| n.skew)
        } else {
            None
        };
        self.enter_with(FrameKind::Skew, to, write_skew)
    }

    fn apply(&self, percent: f64) -> WavyteResult<()> {
        self.apply_with(FrameKind::Skew, percent, write_skew)
    }

    fn clone_frame(&self) -> Box<dyn Frame> {
        Box::new(self.copy())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Rotation around x and y, stored like a skew pair but written to the node's rotation axes.
#[derive(Debug, Default)]
pub struct RotationSkewFrame {
    skew: SkewFrame,
}

impl RotationSkewFrame {
    /// Rotation (0, 0), index 0, tweened.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Frame::set_frame_index`].
    pub fn with_frame_index(mut self, frame_index: FrameIndex) -> Self {
        self.skew.base.set_frame_index(frame_index);
        self
    }

    /// Builder form of [`Frame::set_tween`].
    pub fn with_tween(mut self, tween: bool) -> Self {
        self.skew.base.set_tween(tween);
        self
    }

    /// Builder setting both axes.
    pub fn with_skew(mut self, x: f64, y: f64) -> Self {
        self.skew = self.skew.with_skew(x, y);
        self
    }

    /// Set the x rotation.
    pub fn set_skew_x(&mut self, x: f64) {
        self.skew.set_skew_x(x);
    }

    /// The x rotation.
    pub fn skew_x(&self) -> f64 {
        self.skew.skew_x()
    }

    /// Set the y rotation.
    pub fn set_skew_y(&mut self, y: f64) {
        self.skew.set_skew_y(y);
    }

    /// The y rotation.
    pub fn skew_y(&self) -> f64 {
        self.skew.skew_y()
    }
}

impl Frame for RotationSkewFrame {
    fn base(&self) -> &FrameBase {
        &self.skew.base
    }

    fn base_mut(&mut self) -> &mut FrameBase {
        &mut self.skew.base
    }

    fn kind(&self) -> FrameKind {
        FrameKind::RotationSkew
    }

    fn on_enter(&mut self, next: Option<&dyn Frame>) -> WavyteResult<()> {
        self.skew.segment.reset();
        let to = if self.skew.base.is_tween() {
            next_as::<Self>(FrameKind::RotationSkew, next)?.map(|n| n.skew.skew)
        } else {
            None
        };
        self.skew
            .enter_with(FrameKind::RotationSkew, to, write_rotation_xy)
    }

    fn apply(&self, percent: f64) -> WavyteResult<()> {
        self.skew
            .apply_with(FrameKind::RotationSkew, percent, write_rotation_xy)
    }

    fn clone_frame(&self) -> Box<dyn Frame> {
        Box::new(RotationSkewFrame {
            skew: self.skew.copy(),
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/skew.rs"]
mod tests;
