pub(crate) mod node;
pub(crate) mod scene_node;
pub(crate) mod sprite;
