pub mod calibration;
pub mod config;
pub mod controls;
pub mod detection;
pub mod geometry;
pub mod models;
pub mod overlay;
pub mod screenshot;
pub mod session;
pub mod stats;
pub mod summary;

pub use calibration::Calibration;
pub use config::{BasicOptions, CameraConfig, CircleOptions, HogConfig, HoughConfig, PeopleOptions};
pub use controls::{Action, Mode, Sensitivity};
pub use geometry::{CenterZone, CircleAssessment, RadiusLimits, ScaleFactors};
pub use models::{BoundingBox, Circle, FrameSize, PersonDetection, PixelPoint};
pub use overlay::{Canvas, Color, Overlay, Shape, TextMetrics};
pub use session::{CircleSession, Outcome, PeopleSession};
pub use stats::{DetectionHistory, FpsCounter};

#[cfg(feature = "camera")]
pub mod app;
#[cfg(feature = "camera")]
pub mod camera;
#[cfg(feature = "camera")]
pub mod render;
