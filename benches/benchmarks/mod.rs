pub mod bounding_boxes;
pub mod complex_scenes;
pub mod lighting;
pub mod meshes;
pub mod trivial_scenes;
