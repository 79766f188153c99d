pub mod camera;
pub mod limits;

pub use camera::Camera;
pub use limits::CameraLimits;
