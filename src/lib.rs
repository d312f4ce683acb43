//! Keyframe property animation for scene-graph nodes.
//!
//! A channel (owned by an external timeline) holds an ordered run of [`Frame`]s for one
//! node property. Whenever the playhead crosses into the segment that starts at a frame,
//! the channel calls [`Frame::on_enter`] with the following frame; the frame writes its own
//! value to the node and, when tweened, remembers the delta to the successor. Every tick
//! inside the segment the channel calls [`Frame::apply`] with the progress in `[0, 1]`.
//!
//! # Channels
//!
//! | Frame | Value | Tweened |
//! |---|---|---|
//! | [`VisibleFrame`] | `bool` | no |
//! | [`TextureFrame`] | sprite-frame / texture name | no |
//! | [`RotationFrame`] | degrees | yes |
//! | [`SkewFrame`] | skew x/y | yes |
//! | [`RotationSkewFrame`] | rotation x/y | yes |
//! | [`PositionFrame`] | [`Vec2`] | yes |
//! | [`ScaleFrame`] | scale x/y | yes |
//! | [`AnchorPointFrame`] | [`Vec2`] | no |
//! | [`InnerActionFrame`] | [`InnerActionType`] + start index | no |
//! | [`ColorFrame`] | [`Color3B`] + alpha | yes |
//! | [`EventFrame`] | event name | no |
//! | [`ZOrderFrame`] | `i32` | no |
//!
//! # Contract
//!
//! - Frames never own their node or timeline; both are held weakly.
//! - Node-mutating frames return [`WavyteError::Detached`] when run without a live node.
//!   Event, z-order and inner-action frames tolerate a missing node.
//! - The last frame of a tweened channel (`on_enter(None)`) holds its value.
//! - A segment whose delta is zero in every component never writes from `apply`.
//! - [`Frame::clone_frame`] copies configuration only: no attachments, no segment delta.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod frame;
mod scene;

/// Seams to the owning timeline and action, used for frame events.
pub mod timeline;

pub use foundation::core::{Blend, Color3B, FrameIndex, Rect, Rgba, RgbaDelta, Vec2, offset_u8};
pub use foundation::error::{WavyteError, WavyteResult};
pub use frame::anchor_point::AnchorPointFrame;
pub use frame::base::{Frame, FrameBase, FrameKind};
pub use frame::color::ColorFrame;
pub use frame::event::EventFrame;
pub use frame::inner_action::{InnerActionFrame, InnerActionType};
pub use frame::position::PositionFrame;
pub use frame::rotation::RotationFrame;
pub use frame::scale::ScaleFrame;
pub use frame::skew::{RotationSkewFrame, SkewFrame};
pub use frame::texture::TextureFrame;
pub use frame::visible::VisibleFrame;
pub use frame::z_order::ZOrderFrame;
pub use scene::node::{InnerActionPlayer, Node, NodeRef, Sprite};
pub use scene::scene_node::SceneNode;
pub use scene::sprite::{SpriteFrame, SpriteFrameCache, SpriteFrameSource};
pub use timeline::{ActionTimeline, FrameEvent, Timeline};
