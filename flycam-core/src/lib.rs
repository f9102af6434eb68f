pub mod camera;
pub mod pose;
pub mod uniform;

pub use camera::FlyCamera;
pub use pose::{Pose, PoseError};
pub use uniform::CameraUniform;
