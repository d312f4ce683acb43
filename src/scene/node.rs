use std::{cell::RefCell, rc::Rc};

use crate::{
    foundation::core::{Color3B, FrameIndex, Vec2},
    frame::inner_action::InnerActionType,
    scene::sprite::SpriteFrame,
};

/// Shared handle to a scene-graph node. Frames keep only a `Weak` of this.
pub type NodeRef = Rc<RefCell<dyn Node>>;

/// Property setters a frame may drive on its target node.
///
/// Each channel touches a disjoint set of setters, so frames from different channels can
/// write to the same node within one tick.
pub trait Node {
    /// Show or hide the node.
    fn set_visible(&mut self, visible: bool);
    /// Move the node within its parent.
    fn set_position(&mut self, position: Vec2);
    /// Uniform rotation in degrees.
    fn set_rotation(&mut self, degrees: f64);
    /// Rotation around the x axis in degrees.
    fn set_rotation_x(&mut self, degrees: f64);
    /// Rotation around the y axis in degrees.
    fn set_rotation_y(&mut self, degrees: f64);
    /// Horizontal skew in degrees.
    fn set_skew_x(&mut self, degrees: f64);
    /// Vertical skew in degrees.
    fn set_skew_y(&mut self, degrees: f64);
    /// Horizontal scale factor.
    fn set_scale_x(&mut self, scale: f64);
    /// Vertical scale factor.
    fn set_scale_y(&mut self, scale: f64);
    /// Normalized pivot.
    fn set_anchor_point(&mut self, anchor: Vec2);
    /// Opacity in `0..=255`.
    fn set_opacity(&mut self, opacity: u8);
    /// RGB tint.
    fn set_color(&mut self, color: Color3B);
    /// Stacking order among siblings.
    fn set_local_z_order(&mut self, z_order: i32);

    /// Texture capability, present on sprite-like nodes.
    fn as_sprite_mut(&mut self) -> Option<&mut dyn Sprite> {
        None
    }

    /// Embedded sub-timeline capability.
    fn inner_action_mut(&mut self) -> Option<&mut dyn InnerActionPlayer> {
        None
    }
}

/// Nodes that display a texture.
pub trait Sprite {
    /// Display a region resolved from a sprite-frame cache.
    fn set_sprite_frame(&mut self, frame: &SpriteFrame);
    /// Load and display a raw texture by file name.
    fn set_texture(&mut self, name: &str);
}

/// Nodes that own a nested action timeline.
pub trait InnerActionPlayer {
    /// Start (or restart) the nested timeline in `mode` from `start`.
    ///
    /// Fails when the nested timeline cannot start there, e.g. `start` is past its end.
    fn play_inner_action(
        &mut self,
        mode: InnerActionType,
        start: FrameIndex,
    ) -> anyhow::Result<()>;
}
