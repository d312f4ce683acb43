use super::*;
use crate::SceneNode;

#[test]
fn constructor_initializes_color_storage() {
    let a = ColorFrame::new();
    assert_eq!(a.color(), Color3B::WHITE);
    assert_eq!(a.alpha(), 255);
}

#[test]
fn fade_to_black_rounds_half_away_from_zero() {
    let node = SceneNode::shared();
    let mut a = ColorFrame::new();
    let b = ColorFrame::new().with_alpha(0).with_color(Color3B::BLACK);
    a.set_node(&SceneNode::as_node_ref(&node));

    a.on_enter(Some(&b)).unwrap();
    assert_eq!(node.borrow().opacity, 255);
    assert_eq!(node.borrow().color, Color3B::WHITE);

    // 255 + 0.5 * -255 = 127.5
    a.apply(0.5).unwrap();
    assert_eq!(node.borrow().opacity, 128);
    assert_eq!(node.borrow().color, Color3B::new(128, 128, 128));

    a.apply(1.0).unwrap();
    assert_eq!(node.borrow().opacity, 0);
    assert_eq!(node.borrow().color, Color3B::BLACK);
}

#[test]
fn apply_writes_opacity_and_color_once_each() {
    let node = SceneNode::shared();
    let mut a = ColorFrame::new().with_alpha(100);
    let b = ColorFrame::new().with_alpha(200);
    a.set_node(&SceneNode::as_node_ref(&node));
    a.on_enter(Some(&b)).unwrap();

    let writes = node.borrow().writes();
    a.apply(0.25).unwrap();
    assert_eq!(node.borrow().writes(), writes + 2);
    assert_eq!(node.borrow().opacity, 125);
    assert_eq!(node.borrow().color, Color3B::WHITE);
}

#[test]
fn alpha_only_change_still_counts_as_motion() {
    let node = SceneNode::shared();
    let mut a = ColorFrame::new().with_color(Color3B::new(10, 20, 30));
    let b = ColorFrame::new()
        .with_color(Color3B::new(10, 20, 30))
        .with_alpha(0);
    a.set_node(&SceneNode::as_node_ref(&node));
    a.on_enter(Some(&b)).unwrap();
    assert!(!<Rgba as crate::Blend>::is_still(a.segment.delta()));
}

#[test]
fn identical_colors_skip_apply() {
    let node = SceneNode::shared();
    let mut a = ColorFrame::new().with_color(Color3B::new(1, 2, 3));
    let b = ColorFrame::new().with_color(Color3B::new(1, 2, 3));
    a.set_node(&SceneNode::as_node_ref(&node));
    a.on_enter(Some(&b)).unwrap();

    let writes = node.borrow().writes();
    a.apply(0.9).unwrap();
    assert_eq!(node.borrow().writes(), writes);
}

#[test]
fn clone_copies_color_and_alpha() {
    let mut a = ColorFrame::new()
        .with_color(Color3B::new(9, 8, 7))
        .with_alpha(64)
        .with_tween(false);
    let copy = a.clone_frame();
    a.set_color(Color3B::BLACK);
    a.set_alpha(0);

    assert!(!copy.is_tween());
    let copy = copy.as_any().downcast_ref::<ColorFrame>().unwrap();
    assert_eq!(copy.color(), Color3B::new(9, 8, 7));
    assert_eq!(copy.alpha(), 64);
}
