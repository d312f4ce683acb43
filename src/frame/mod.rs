pub(crate) mod anchor_point;
pub(crate) mod base;
pub(crate) mod color;
pub(crate) mod event;
pub(crate) mod inner_action;
pub(crate) mod position;
pub(crate) mod rotation;
pub(crate) mod scale;
pub(crate) mod skew;
pub(crate) mod texture;
pub(crate) mod visible;
pub(crate) mod z_order;
