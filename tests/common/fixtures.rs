use camdetect::detection::RawDetection;
use camdetect::overlay::{TextMetrics, TextSize};
use camdetect::{
    BoundingBox, CenterZone, Circle, CircleAssessment, FrameSize, Overlay, RadiusLimits, Shape,
};

/// The 1280x720 frame the cameras are asked for
pub const HD: FrameSize = FrameSize::new(1280, 720);

/// Text metrics with round numbers: 10px per character, 10px tall
pub struct FixedMetrics;

impl TextMetrics for FixedMetrics {
    fn text_size(&self, text: &str, _scale: f64, _thickness: i32) -> TextSize {
        TextSize {
            width: text.chars().count() as i32 * 10,
            height: 10,
            baseline: 4,
        }
    }
}

pub fn raw(x: i32, y: i32, width: i32, height: i32, weight: f64) -> RawDetection {
    RawDetection::new(BoundingBox::new(x, y, width, height), weight)
}

/// Assessment of `circle` on an HD frame with the default zone and radius limits
pub fn assess_hd(circle: Option<Circle>) -> CircleAssessment {
    let limits = RadiusLimits::for_frame(HD, 0.10, 0.25);
    CircleAssessment::new(circle, limits, &CenterZone::new(0.6), HD)
}

/// A packed BGR frame filled with one colour
pub fn solid_bgr(width: u32, height: u32, bgr: [u8; 3]) -> Vec<u8> {
    bgr.iter()
        .copied()
        .cycle()
        .take(width as usize * height as usize * 3)
        .collect()
}

/// All text strings of `overlay` in drawing order
pub fn texts(overlay: &Overlay) -> Vec<&str> {
    overlay
        .shapes()
        .iter()
        .filter_map(|shape| match shape {
            Shape::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

/// First text shape whose content starts with `prefix`
pub fn find_text<'a>(overlay: &'a Overlay, prefix: &str) -> Option<&'a Shape> {
    overlay
        .shapes()
        .iter()
        .find(|shape| matches!(shape, Shape::Text { text, .. } if text.starts_with(prefix)))
}
