use time::{macros::format_description, OffsetDateTime};

use super::{Color, Overlay, TextMetrics};
use crate::models::{FrameSize, PersonDetection, PixelPoint};

/// Annotation of the basic detector: box, weight and a running count
pub fn basic_overlay(detections: &[PersonDetection]) -> Overlay {
    let mut overlay = Overlay::new();

    for detection in detections {
        let bbox = &detection.bbox;
        overlay.rectangle(bbox.top_left(), bbox.bottom_right(), Color::GREEN, 2);
        overlay.text(
            format!("Person {:.2}", detection.confidence),
            PixelPoint::new(bbox.x, bbox.y - 10),
            0.5,
            Color::GREEN,
            2,
        );
    }

    overlay.text(
        format!("People detected: {}", detections.len()),
        PixelPoint::new(10, 30),
        0.7,
        Color::WHITE,
        2,
    );

    overlay
}

/// Box colour fading from red (low confidence) to green (high)
pub fn confidence_color(confidence: f64) -> Color {
    let c = if confidence.is_nan() {
        0.0
    } else {
        confidence.clamp(0.0, 1.0)
    };
    Color::bgr(0, (255.0 * c) as u8, (255.0 * (1.0 - c)) as u8)
}

/// Signed offset of a point from the frame centre, e.g. `X: +12 Y:-140`
pub fn position_label(offset: (i32, i32)) -> String {
    format!("X:{:+4} Y:{:+4}", offset.0, offset.1)
}

pub fn clock_text(now: OffsetDateTime) -> String {
    now.format(format_description!("[hour]:[minute]:[second]"))
        .unwrap_or_default()
}

/// Annotation of the people detector.
///
/// Draws a cross-hair through the frame centre, each detection with its
/// confidence and offset from the centre, the detection count, optionally the
/// frame rate, and a wall clock in the bottom-right corner.
pub fn people_overlay(
    frame: FrameSize,
    detections: &[PersonDetection],
    fps: Option<f64>,
    clock: &str,
    metrics: &dyn TextMetrics,
) -> Overlay {
    let mut overlay = Overlay::new();
    let center = frame.center();

    // Cross-hair, handy with the camera mounted overhead
    overlay.line(
        PixelPoint::new(center.x, 0),
        PixelPoint::new(center.x, frame.height),
        Color::CYAN,
        1,
    );
    overlay.line(
        PixelPoint::new(0, center.y),
        PixelPoint::new(frame.width, center.y),
        Color::CYAN,
        1,
    );

    for (i, detection) in detections.iter().enumerate() {
        let bbox = &detection.bbox;
        let color = confidence_color(detection.confidence);

        overlay.rectangle(bbox.top_left(), bbox.bottom_right(), color, 2);

        let person_center = bbox.center();
        overlay.circle(person_center, 5, Color::RED, super::FILLED);

        let label = format!("Person {}: {:.2}", i + 1, detection.confidence);
        let size = metrics.text_size(&label, 0.5, 2);
        overlay.filled_rectangle(
            PixelPoint::new(bbox.x, bbox.y - size.height - 10),
            PixelPoint::new(bbox.x + size.width, bbox.y),
            color,
        );
        overlay.text(label, PixelPoint::new(bbox.x, bbox.y - 5), 0.5, Color::WHITE, 2);

        overlay.text(
            position_label(person_center.offset_from(center)),
            PixelPoint::new(bbox.x, bbox.y + bbox.height + 20),
            0.4,
            Color::WHITE,
            1,
        );
    }

    overlay.text(
        format!("People detected: {}", detections.len()),
        PixelPoint::new(10, 30),
        0.7,
        Color::WHITE,
        2,
    );

    if let Some(fps) = fps {
        overlay.text(
            format!("FPS: {fps:.1}"),
            PixelPoint::new(10, 60),
            0.7,
            Color::GREEN,
            2,
        );
    }

    overlay.text(
        clock,
        PixelPoint::new(frame.width - 100, frame.height - 10),
        0.5,
        Color::WHITE,
        1,
    );

    overlay
}
