//! Pieces of the desktop preview that do not need a window: the GPU
//! instance layout, window-to-avatar placement and the redraw scheduler.

pub mod instances;
pub mod scheduler;

pub use instances::{eye_instances, particle_instances, InstanceData, Placement};
pub use scheduler::RedrawScheduler;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
