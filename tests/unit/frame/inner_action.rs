use super::*;
use crate::SceneNode;

#[test]
fn defaults_to_loop_from_zero() {
    let frame = InnerActionFrame::new();
    assert_eq!(frame.inner_action_type(), InnerActionType::Loop);
    assert_eq!(frame.start_frame_index(), FrameIndex(0));
}

#[test]
fn on_enter_starts_nested_timeline() {
    let node = SceneNode::shared();
    let mut frame = InnerActionFrame::new()
        .with_inner_action_type(InnerActionType::SingleFrame)
        .with_start_frame_index(FrameIndex(6));
    frame.set_node(&SceneNode::as_node_ref(&node));

    frame.on_enter(None).unwrap();
    assert_eq!(
        node.borrow().inner_action,
        Some((InnerActionType::SingleFrame, FrameIndex(6)))
    );
}

#[test]
fn detached_frame_is_a_no_op() {
    let mut frame = InnerActionFrame::new();
    frame.on_enter(None).unwrap();
    frame.apply(0.5).unwrap();
}

#[test]
fn clone_copies_mode_and_start() {
    let mut frame = InnerActionFrame::new()
        .with_inner_action_type(InnerActionType::NoLoop)
        .with_start_frame_index(FrameIndex(3));
    let copy = frame.clone_frame();
    frame.set_inner_action_type(InnerActionType::Loop);
    frame.set_start_frame_index(FrameIndex(0));

    let copy = copy.as_any().downcast_ref::<InnerActionFrame>().unwrap();
    assert_eq!(copy.inner_action_type(), InnerActionType::NoLoop);
    assert_eq!(copy.start_frame_index(), FrameIndex(3));
}

#[test]
fn mode_serializes_by_variant_name() {
    let json = serde_json::to_string(&InnerActionType::NoLoop).unwrap();
    assert_eq!(json, "\"NoLoop\"");
}

#[test]
fn start_past_nested_timeline_end_is_reported() {
    let node = SceneNode::shared();
    node.borrow_mut().inner_action_frames = Some(4);
    let mut frame = InnerActionFrame::new().with_start_frame_index(FrameIndex(4));
    frame.set_node(&SceneNode::as_node_ref(&node));

    let err = frame.on_enter(None).unwrap_err();
    assert!(matches!(err, crate::WavyteError::Other(_)));
    assert!(err.to_string().contains("cannot start at 4"));
    assert_eq!(node.borrow().inner_action, None);

    frame.set_start_frame_index(FrameIndex(3));
    frame.on_enter(None).unwrap();
    assert_eq!(
        node.borrow().inner_action,
        Some((InnerActionType::Loop, FrameIndex(3)))
    );
}
