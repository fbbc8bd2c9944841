mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from camdetect for tests
pub use camdetect::{
    BoundingBox, CenterZone, Circle, CircleAssessment, Color, FrameSize, Overlay,
    PersonDetection, PixelPoint, RadiusLimits, Shape,
};
