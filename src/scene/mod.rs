pub mod collision;
pub mod interact;

mod demo_scene;

pub use demo_scene::load_demo_scene;
