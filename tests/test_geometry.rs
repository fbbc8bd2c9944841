mod common;

use camdetect::detection::{central_circle, filter_and_rescale, keep_all};
use camdetect::ScaleFactors;
use common::*;

#[test]
fn scale_factors_map_working_frame_to_original() {
    let scale = ScaleFactors::between(HD, FrameSize::new(640, 480));
    assert_eq!(scale.x, 2.0);
    assert_eq!(scale.y, 1.5);

    let rescaled = scale.rescale(&BoundingBox::new(10, 21, 64, 129));
    assert_eq!(rescaled, BoundingBox::new(20, 31, 128, 193));
}

#[test]
fn rescale_truncates_fractional_pixels() {
    let scale = ScaleFactors::between(FrameSize::new(1366, 768), FrameSize::new(640, 480));
    let rescaled = scale.rescale(&BoundingBox::new(100, 100, 50, 50));
    // 213.4375, 160.0, 106.71875, 80.0
    assert_eq!(rescaled, BoundingBox::new(213, 160, 106, 80));
}

#[test]
fn filter_and_rescale_keeps_detections_at_threshold() {
    let scale = ScaleFactors::between(HD, FrameSize::new(640, 480));
    let detections = filter_and_rescale(
        &[raw(0, 0, 64, 128, 0.29), raw(10, 10, 64, 128, 0.3), raw(100, 50, 32, 64, 1.4)],
        0.3,
        scale,
    );

    assert_eq!(detections.len(), 2);
    assert_eq!(detections[0].bbox, BoundingBox::new(20, 15, 128, 192));
    assert_eq!(detections[0].confidence, 0.3);
    assert_eq!(detections[1].bbox, BoundingBox::new(200, 75, 64, 96));
}

#[test]
fn keep_all_leaves_coordinates_alone() {
    let detections = keep_all(&[raw(5, 6, 7, 8, 0.1)]);
    assert_eq!(
        detections,
        vec![PersonDetection {
            bbox: BoundingBox::new(5, 6, 7, 8),
            confidence: 0.1,
        }]
    );
}

#[test]
fn center_zone_membership_is_strict() {
    let zone = CenterZone::new(0.6);
    // Centre (640, 360), half extents 384 x 216
    assert!(zone.contains(PixelPoint::new(640, 360), HD));
    assert!(zone.contains(PixelPoint::new(640 + 383, 360), HD));
    assert!(!zone.contains(PixelPoint::new(640 + 384, 360), HD));
    assert!(zone.contains(PixelPoint::new(640 - 383, 360), HD));
    assert!(!zone.contains(PixelPoint::new(640 - 384, 360), HD));
    assert!(zone.contains(PixelPoint::new(640, 360 + 215), HD));
    assert!(!zone.contains(PixelPoint::new(640, 360 + 216), HD));
}

#[test]
fn center_zone_uses_fractional_extent_on_odd_frames() {
    let frame = FrameSize::new(641, 481);
    let zone = CenterZone::new(0.6);
    // Centre (320, 240), half width 192.3
    assert!(zone.contains(PixelPoint::new(320 + 192, 240), frame));
    assert!(!zone.contains(PixelPoint::new(320 + 193, 240), frame));
}

#[test]
fn center_zone_corners() {
    let (top_left, bottom_right) = CenterZone::new(0.6).corners(HD);
    assert_eq!(top_left, PixelPoint::new(256, 144));
    assert_eq!(bottom_right, PixelPoint::new(1024, 576));
}

#[test]
fn radius_limits_follow_short_side() {
    let limits = RadiusLimits::for_frame(HD, 0.10, 0.25);
    assert_eq!(limits, RadiusLimits { min: 72, max: 180 });
    assert!(limits.contains(72));
    assert!(limits.contains(180));
    assert!(!limits.contains(71));
    assert!(!limits.contains(181));
    assert_eq!(limits.min_center_distance(), 144.0);
}

#[test]
fn min_center_distance_never_zero() {
    let limits = RadiusLimits::for_frame(FrameSize::new(5, 5), 0.10, 0.25);
    assert_eq!(limits.min, 0);
    assert_eq!(limits.min_center_distance(), 1.0);
}

#[test]
fn central_circle_is_first_one_inside_the_zone() {
    let circles = [
        Circle::new(20, 20, 90),
        Circle::new(700, 400, 100),
        Circle::new(640, 360, 120),
    ];
    let picked = central_circle(&circles, &CenterZone::new(0.6), HD);
    assert_eq!(picked, Some(Circle::new(700, 400, 100)));

    assert_eq!(central_circle(&circles[..1], &CenterZone::new(0.6), HD), None);
    assert_eq!(central_circle(&[], &CenterZone::new(0.6), HD), None);
}

#[test]
fn assessment_requires_zone_and_radius() {
    assert!(assess_hd(Some(Circle::new(640, 360, 100))).ready);
    assert!(!assess_hd(Some(Circle::new(640, 360, 50))).ready);
    assert!(!assess_hd(Some(Circle::new(640, 360, 181))).ready);
    assert!(!assess_hd(Some(Circle::new(100, 100, 100))).ready);

    let none = assess_hd(None);
    assert!(!none.ready);
    assert_eq!(none.ready_circle(), None);
}

#[test]
fn raw_circles_round_half_to_even() {
    assert_eq!(Circle::from_raw(10.5, 11.5, 2.5), Circle::new(10, 12, 2));
    assert_eq!(Circle::from_raw(10.4, 11.6, 99.5), Circle::new(10, 12, 100));
}

#[test]
fn box_center_uses_integer_halves() {
    let bbox = BoundingBox::new(10, 20, 31, 65);
    assert_eq!(bbox.center(), PixelPoint::new(25, 52));
    assert_eq!(bbox.bottom_right(), PixelPoint::new(41, 85));
    assert_eq!(bbox.center().offset_from(HD.center()), (-615, -308));
}
