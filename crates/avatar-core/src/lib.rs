pub mod config;
pub mod constants;
pub mod draw;
pub mod engine;
pub mod error;
pub mod eye;
pub mod lifecycle;
pub mod math;
pub mod mode;
pub mod particles;
pub mod scenes;

pub use config::*;
pub use constants::*;
pub use draw::{DepthPoint, DotStyle, DrawList, Primitive, Surface};
pub use engine::ParticleField;
pub use error::{AvatarError, Result};
pub use eye::{iris_transform, ElementRect, IrisTransform, PointerTracker, TrackerState};
pub use lifecycle::{FrameScheduler, LoopHandle, LoopState, Visualizer};
pub use mode::{Mode, ModeSelector};
pub use scenes::{Clock, Scene, Viewport};
