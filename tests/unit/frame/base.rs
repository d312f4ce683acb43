use std::cell::RefCell;

use super::*;
use crate::{
    PositionFrame, RotationFrame, SceneNode,
    foundation::core::Vec2,
    timeline::{ActionTimeline, FrameEvent, Timeline},
};

#[derive(Default)]
struct RecordingAction {
    events: RefCell<Vec<FrameEvent>>,
}

impl ActionTimeline for RecordingAction {
    fn emit_frame_event(&self, event: &FrameEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

struct Channel {
    action: Option<Rc<RecordingAction>>,
}

impl Timeline for Channel {
    fn action_timeline(&self) -> Option<Rc<dyn ActionTimeline>> {
        self.action
            .clone()
            .map(|a| a as Rc<dyn ActionTimeline>)
    }
}

#[test]
fn defaults_are_index_zero_tweened_detached() {
    let base = FrameBase::new();
    assert_eq!(base.frame_index(), FrameIndex(0));
    assert!(base.is_tween());
    assert!(base.timeline().is_none());
    assert!(base.node().is_none());
}

#[test]
fn clone_property_copies_index_and_tween_only() {
    let node = SceneNode::shared();
    let mut src = FrameBase::new();
    src.set_frame_index(FrameIndex(12));
    src.set_tween(false);
    src.set_node(&SceneNode::as_node_ref(&node));

    let mut dst = FrameBase::new();
    dst.clone_property(&src);
    assert_eq!(dst.frame_index(), FrameIndex(12));
    assert!(!dst.is_tween());
    assert!(dst.node().is_none());
}

#[test]
fn node_handle_is_weak() {
    let mut base = FrameBase::new();
    {
        let node = SceneNode::shared();
        base.set_node(&SceneNode::as_node_ref(&node));
        assert!(base.node().is_some());
    }
    assert!(base.node().is_none());

    let err = base.with_node(FrameKind::Position, |_| {}).unwrap_err();
    assert!(matches!(err, WavyteError::Detached(_)));
}

#[test]
fn with_node_reports_reentrant_borrow() {
    let node = SceneNode::shared();
    let mut base = FrameBase::new();
    base.set_node(&SceneNode::as_node_ref(&node));

    let _guard = node.borrow_mut();
    let err = base.with_node(FrameKind::Rotation, |_| {}).unwrap_err();
    assert!(matches!(err, WavyteError::Evaluation(_)));
}

#[test]
fn with_node_if_attached_tolerates_missing_node() {
    let base = FrameBase::new();
    let mut called = false;
    base.with_node_if_attached(FrameKind::ZOrder, |_| called = true)
        .unwrap();
    assert!(!called);
}

#[test]
fn emit_event_reaches_action_once() {
    let action = Rc::new(RecordingAction::default());
    let timeline: Rc<dyn Timeline> = Rc::new(Channel {
        action: Some(action.clone()),
    });
    let mut base = FrameBase::new();
    base.set_frame_index(FrameIndex(7));
    base.set_timeline(&timeline);

    base.emit_event("hit");
    let events = action.events.borrow();
    assert_eq!(
        *events,
        vec![FrameEvent {
            name: "hit".to_string(),
            frame_index: FrameIndex(7),
        }]
    );
}

#[test]
fn emit_event_without_action_or_timeline_is_silent() {
    let base = FrameBase::new();
    base.emit_event("ignored");

    let timeline: Rc<dyn Timeline> = Rc::new(Channel { action: None });
    let mut base = FrameBase::new();
    base.set_timeline(&timeline);
    base.emit_event("ignored");
    base.clear_timeline();
    assert!(base.timeline().is_none());
}

#[test]
fn next_as_rejects_other_kinds() {
    let other = RotationFrame::new();
    let err = next_as::<PositionFrame>(FrameKind::Position, Some(&other)).unwrap_err();
    assert!(err.to_string().contains("position frame cannot tween into a rotation frame"));

    let none = next_as::<PositionFrame>(FrameKind::Position, None).unwrap();
    assert!(none.is_none());
}

#[test]
fn segment_holds_without_successor() {
    let base = FrameBase::new();
    let mut seg = Segment::<Vec2>::default();
    seg.enter(&base, Vec2::new(1.0, 2.0), Some(Vec2::new(3.0, 2.0)));
    assert_eq!(seg.delta(), Vec2::new(2.0, 0.0));

    seg.enter(&base, Vec2::new(1.0, 2.0), None);
    assert_eq!(seg.delta(), Vec2::ZERO);
    assert!(seg.sample(&base, Vec2::new(1.0, 2.0), 0.5).is_none());
}

#[test]
fn segment_ignores_successor_when_not_tweened() {
    let mut base = FrameBase::new();
    base.set_tween(false);
    let mut seg = Segment::<f64>::default();
    seg.enter(&base, 0.0, Some(90.0));
    assert_eq!(seg.delta(), 0.0);
    assert!(seg.sample(&base, 0.0, 1.0).is_none());
}

#[test]
fn boxed_frames_clone_through_clone_frame() {
    let boxed: Box<dyn Frame> = Box::new(
        PositionFrame::new()
            .with_frame_index(FrameIndex(4))
            .with_position(Vec2::new(5.0, 6.0)),
    );
    let copy = boxed.clone();
    assert_eq!(copy.kind(), FrameKind::Position);
    assert_eq!(copy.frame_index(), FrameIndex(4));
    let copy = copy.as_any().downcast_ref::<PositionFrame>().unwrap();
    assert_eq!(copy.position(), Vec2::new(5.0, 6.0));
}

#[test]
fn kind_names_are_snake_case() {
    assert_eq!(FrameKind::RotationSkew.to_string(), "rotation_skew");
    assert_eq!(FrameKind::ZOrder.as_str(), "z_order");
}

#[test]
fn segment_returns_stored_target_at_full_progress() {
    let base = FrameBase::new();
    let mut seg = Segment::<f64>::default();
    seg.enter(&base, 0.2, Some(0.9));
    assert_eq!(seg.sample(&base, 0.2, 1.0), Some(0.9));

    seg.reset();
    assert_eq!(seg.delta(), 0.0);
    assert!(seg.sample(&base, 0.2, 1.0).is_none());
}
