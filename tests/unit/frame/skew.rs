use super::*;
use crate::SceneNode;

#[test]
fn skew_interpolates_both_axes() {
    let node = SceneNode::shared();
    let mut a = SkewFrame::new().with_skew(0.0, 10.0);
    let b = SkewFrame::new().with_skew(20.0, 10.0);
    a.set_node(&SceneNode::as_node_ref(&node));

    a.on_enter(Some(&b)).unwrap();
    assert_eq!((node.borrow().skew_x, node.borrow().skew_y), (0.0, 10.0));

    a.apply(0.5).unwrap();
    assert_eq!((node.borrow().skew_x, node.borrow().skew_y), (10.0, 10.0));
    a.apply(1.0).unwrap();
    assert_eq!((node.borrow().skew_x, node.borrow().skew_y), (20.0, 10.0));

    // skew frames leave the rotation axes alone
    assert_eq!(node.borrow().rotation_x, 0.0);
}

#[test]
fn rotation_skew_targets_rotation_axes() {
    let node = SceneNode::shared();
    let mut a = RotationSkewFrame::new().with_skew(0.0, 0.0);
    let b = RotationSkewFrame::new().with_skew(90.0, -30.0);
    a.set_node(&SceneNode::as_node_ref(&node));

    a.on_enter(Some(&b)).unwrap();
    a.apply(0.5).unwrap();

    let n = node.borrow();
    assert_eq!((n.rotation_x, n.rotation_y), (45.0, -15.0));
    assert_eq!((n.skew_x, n.skew_y), (0.0, 0.0));
}

#[test]
fn rotation_skew_does_not_tween_into_plain_skew() {
    let node = SceneNode::shared();
    let mut a = RotationSkewFrame::new();
    a.set_node(&SceneNode::as_node_ref(&node));

    let err = a.on_enter(Some(&SkewFrame::new())).unwrap_err();
    assert!(err.to_string().contains("rotation_skew frame cannot tween into a skew frame"));
}

#[test]
fn still_skew_segment_skips_writes() {
    let node = SceneNode::shared();
    let mut a = SkewFrame::new().with_skew(5.0, 5.0);
    let b = SkewFrame::new().with_skew(5.0, 5.0);
    a.set_node(&SceneNode::as_node_ref(&node));
    a.on_enter(Some(&b)).unwrap();

    let writes = node.borrow().writes();
    a.apply(0.3).unwrap();
    assert_eq!(node.borrow().writes(), writes);
}

#[test]
fn clones_keep_axes_and_kind() {
    let mut a = RotationSkewFrame::new()
        .with_skew(1.0, 2.0)
        .with_frame_index(FrameIndex(8))
        .with_tween(false);
    let copy = a.clone_frame();
    a.set_skew_x(100.0);

    assert_eq!(copy.kind(), FrameKind::RotationSkew);
    assert!(!copy.is_tween());
    let copy = copy.as_any().downcast_ref::<RotationSkewFrame>().unwrap();
    assert_eq!((copy.skew_x(), copy.skew_y()), (1.0, 2.0));
    assert_eq!(copy.frame_index(), FrameIndex(8));
}

#[test]
fn skew_apply_one_lands_on_successor_exactly() {
    let node = SceneNode::shared();
    let mut a = SkewFrame::new().with_skew(0.2, 0.1);
    let b = SkewFrame::new().with_skew(0.9, 0.7);
    a.set_node(&SceneNode::as_node_ref(&node));
    a.on_enter(Some(&b)).unwrap();

    a.apply(1.0).unwrap();
    assert_eq!((node.borrow().skew_x, node.borrow().skew_y), (0.9, 0.7));
}
