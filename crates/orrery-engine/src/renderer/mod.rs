pub mod camera;
pub mod instance;

pub use camera::{CameraFrame, FollowRig, PerspectiveCamera};
pub use instance::{NodeBuffer, NodeInstance};
