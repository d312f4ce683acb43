use super::*;
use crate::SceneNode;

#[test]
fn on_enter_sets_local_z_order() {
    let node = SceneNode::shared();
    let mut frame = ZOrderFrame::new().with_z_order(-3);
    frame.set_node(&SceneNode::as_node_ref(&node));
    frame.on_enter(None).unwrap();
    assert_eq!(node.borrow().local_z_order, -3);
}

#[test]
fn missing_node_is_tolerated() {
    let mut frame = ZOrderFrame::new().with_z_order(5);
    frame.on_enter(None).unwrap();
}

#[test]
fn clone_copies_z_order() {
    let mut frame = ZOrderFrame::new()
        .with_z_order(7)
        .with_frame_index(FrameIndex(2));
    let copy = frame.clone_frame();
    frame.set_z_order(0);

    let copy = copy.as_any().downcast_ref::<ZOrderFrame>().unwrap();
    assert_eq!(copy.z_order(), 7);
    assert_eq!(copy.frame_index(), FrameIndex(2));
}
