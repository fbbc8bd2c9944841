#[cfg(feature = "camera")]
pub mod hog;
#[cfg(feature = "camera")]
pub mod hough;

use crate::geometry::{CenterZone, ScaleFactors};
use crate::models::{BoundingBox, Circle, FrameSize, PersonDetection};

/// A box reported by the people detector on the working frame, with its SVM weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawDetection {
    pub bbox: BoundingBox,
    pub weight: f64,
}

impl RawDetection {
    pub fn new(bbox: BoundingBox, weight: f64) -> Self {
        Self { bbox, weight }
    }
}

/// Take the detector output as is, in working-frame coordinates
pub fn keep_all(raw: &[RawDetection]) -> Vec<PersonDetection> {
    raw.iter()
        .map(|r| PersonDetection {
            bbox: r.bbox,
            confidence: r.weight,
        })
        .collect()
}

/// Drop weak detections and map the rest back to the original frame
pub fn filter_and_rescale(
    raw: &[RawDetection],
    min_confidence: f64,
    scale: ScaleFactors,
) -> Vec<PersonDetection> {
    raw.iter()
        .filter(|r| r.weight >= min_confidence)
        .map(|r| PersonDetection {
            bbox: scale.rescale(&r.bbox),
            confidence: r.weight,
        })
        .collect()
}

/// First circle, in detector order, whose centre lies inside the zone
pub fn central_circle(circles: &[Circle], zone: &CenterZone, frame: FrameSize) -> Option<Circle> {
    circles
        .iter()
        .find(|c| zone.contains(c.center(), frame))
        .copied()
}
