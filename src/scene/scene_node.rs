use std::{cell::RefCell, rc::Rc};

use crate::{
    foundation::core::{Color3B, FrameIndex, Vec2},
    frame::inner_action::InnerActionType,
    scene::{
        node::{InnerActionPlayer, Node, NodeRef, Sprite},
        sprite::SpriteFrame,
    },
};

/// Plain property-bag node: stores whatever frames write and counts setter calls.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneNode {
    /// Visibility flag.
    pub visible: bool,
    /// Position in parent space.
    pub position: Vec2,
    /// Uniform rotation in degrees.
    pub rotation: f64,
    /// X-axis rotation in degrees.
    pub rotation_x: f64,
    /// Y-axis rotation in degrees.
    pub rotation_y: f64,
    /// Horizontal skew in degrees.
    pub skew_x: f64,
    /// Vertical skew in degrees.
    pub skew_y: f64,
    /// Horizontal scale.
    pub scale_x: f64,
    /// Vertical scale.
    pub scale_y: f64,
    /// Normalized pivot.
    pub anchor_point: Vec2,
    /// Opacity in `0..=255`.
    pub opacity: u8,
    /// RGB tint.
    pub color: Color3B,
    /// Sibling stacking order.
    pub local_z_order: i32,
    /// Last sprite frame displayed.
    pub sprite_frame: Option<SpriteFrame>,
    /// Last raw texture loaded.
    pub texture: Option<String>,
    /// Last nested-timeline request.
    pub inner_action: Option<(InnerActionType, FrameIndex)>,
    /// Length of the nested timeline in frames, when one is loaded.
    pub inner_action_frames: Option<u64>,
    writes: u64,
}

impl Default for SceneNode {
    fn default() -> Self {
        Self {
            visible: true,
            position: Vec2::ZERO,
            rotation: 0.0,
            rotation_x: 0.0,
            rotation_y: 0.0,
            skew_x: 0.0,
            skew_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            anchor_point: Vec2::ZERO,
            opacity: 255,
            color: Color3B::WHITE,
            local_z_order: 0,
            sprite_frame: None,
            texture: None,
            inner_action: None,
            inner_action_frames: None,
            writes: 0,
        }
    }
}

impl SceneNode {
    /// A node with default properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a fresh node in a shared handle, keeping the concrete type.
    pub fn shared() -> Rc<RefCell<SceneNode>> {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Erase a concrete handle to the [`NodeRef`] frames attach to.
    pub fn as_node_ref(node: &Rc<RefCell<SceneNode>>) -> NodeRef {
        node.clone()
    }

    /// Total setter calls since creation.
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl Node for SceneNode {
    fn set_visible(&mut self, visible: bool) {
        self.writes += 1;
        self.visible = visible;
    }

    fn set_position(&mut self, position: Vec2) {
        self.writes += 1;
        self.position = position;
    }

    fn set_rotation(&mut self, degrees: f64) {
        self.writes += 1;
        self.rotation = degrees;
    }

    fn set_rotation_x(&mut self, degrees: f64) {
        self.writes += 1;
        self.rotation_x = degrees;
    }

    fn set_rotation_y(&mut self, degrees: f64) {
        self.writes += 1;
        self.rotation_y = degrees;
    }

    fn set_skew_x(&mut self, degrees: f64) {
        self.writes += 1;
        self.skew_x = degrees;
    }

    fn set_skew_y(&mut self, degrees: f64) {
        self.writes += 1;
        self.skew_y = degrees;
    }

    fn set_scale_x(&mut self, scale: f64) {
        self.writes += 1;
        self.scale_x = scale;
    }

    fn set_scale_y(&mut self, scale: f64) {
        self.writes += 1;
        self.scale_y = scale;
    }

    fn set_anchor_point(&mut self, anchor: Vec2) {
        self.writes += 1;
        self.anchor_point = anchor;
    }

    fn set_opacity(&mut self, opacity: u8) {
        self.writes += 1;
        self.opacity = opacity;
    }

    fn set_color(&mut self, color: Color3B) {
        self.writes += 1;
        self.color = color;
    }

    fn set_local_z_order(&mut self, z_order: i32) {
        self.writes += 1;
        self.local_z_order = z_order;
    }

    fn as_sprite_mut(&mut self) -> Option<&mut dyn Sprite> {
        Some(self)
    }

    fn inner_action_mut(&mut self) -> Option<&mut dyn InnerActionPlayer> {
        Some(self)
    }
}

impl Sprite for SceneNode {
    fn set_sprite_frame(&mut self, frame: &SpriteFrame) {
        self.writes += 1;
        self.sprite_frame = Some(frame.clone());
    }

    fn set_texture(&mut self, name: &str) {
        self.writes += 1;
        self.texture = Some(name.to_string());
    }
}

impl InnerActionPlayer for SceneNode {
    fn play_inner_action(
        &mut self,
        mode: InnerActionType,
        start: FrameIndex,
    ) -> anyhow::Result<()> {
        if let Some(len) = self.inner_action_frames
            && start.0 >= len
        {
            anyhow::bail!(
                "nested timeline has {len} frames; cannot start at {}",
                start.0
            );
        }
        self.writes += 1;
        self.inner_action = Some((mode, start));
        Ok(())
    }
}
