mod common;

use camdetect::overlay::{
    basic_overlay, circle_overlay, clock_text, confidence_color, people_overlay, position_label,
    Canvas, CircleHud, CircleStatus, HersheyMetrics, TextMetrics, FILLED,
};
use common::*;
use time::macros::datetime;

fn person(x: i32, y: i32, width: i32, height: i32, confidence: f64) -> PersonDetection {
    PersonDetection {
        bbox: BoundingBox::new(x, y, width, height),
        confidence,
    }
}

fn text_origin(overlay: &Overlay, prefix: &str) -> Option<PixelPoint> {
    match find_text(&overlay, prefix) {
        Some(Shape::Text { origin, .. }) => Some(*origin),
        _ => None,
    }
}

/// Canvas that remembers what it was asked to draw
#[derive(Default)]
struct RecordingCanvas {
    drawn: Vec<Shape>,
}

impl Canvas for RecordingCanvas {
    fn draw(&mut self, shape: &Shape) -> anyhow::Result<()> {
        self.drawn.push(shape.clone());
        Ok(())
    }
}

#[test]
fn basic_overlay_boxes_labels_and_count() {
    let overlay = basic_overlay(&[person(100, 50, 64, 128, 0.87), person(300, 40, 60, 120, 1.2)]);

    assert_eq!(overlay.shapes().len(), 5);
    assert_eq!(
        overlay.shapes()[0],
        Shape::Rectangle {
            top_left: PixelPoint::new(100, 50),
            bottom_right: PixelPoint::new(164, 178),
            color: Color::GREEN,
            thickness: 2,
        }
    );
    assert_eq!(text_origin(&overlay, "Person 0.87"), Some(PixelPoint::new(100, 40)));
    assert_eq!(text_origin(&overlay, "Person 1.20"), Some(PixelPoint::new(300, 30)));
    assert_eq!(texts(&overlay).last(), Some(&"People detected: 2"));
}

#[test]
fn confidence_colour_fades_from_red_to_green() {
    assert_eq!(confidence_color(0.75), Color::bgr(0, 191, 63));
    assert_eq!(confidence_color(0.0), Color::bgr(0, 0, 255));
    assert_eq!(confidence_color(1.7), Color::bgr(0, 255, 0));
    assert_eq!(confidence_color(-0.2), Color::bgr(0, 0, 255));
}

#[test]
fn position_label_is_signed_and_padded() {
    assert_eq!(position_label((0, 20)), "X:  +0 Y: +20");
    assert_eq!(position_label((-140, 7)), "X:-140 Y:  +7");
    assert_eq!(position_label((1234, -5)), "X:+1234 Y:  -5");
}

#[test]
fn clock_is_hours_minutes_seconds() {
    assert_eq!(clock_text(datetime!(2024-01-02 03:04:05 UTC)), "03:04:05");
}

#[test]
fn people_overlay_layout() {
    let detections = [person(600, 300, 80, 160, 0.75)];
    let overlay = people_overlay(HD, &detections, Some(12.345), "10:20:30", &FixedMetrics);
    let shapes = overlay.shapes();

    // Cross-hair first
    assert_eq!(
        shapes[0],
        Shape::Line {
            from: PixelPoint::new(640, 0),
            to: PixelPoint::new(640, 720),
            color: Color::CYAN,
            thickness: 1,
        }
    );
    assert_eq!(
        shapes[1],
        Shape::Line {
            from: PixelPoint::new(0, 360),
            to: PixelPoint::new(1280, 360),
            color: Color::CYAN,
            thickness: 1,
        }
    );

    let box_color = Color::bgr(0, 191, 63);
    assert!(shapes.contains(&Shape::Rectangle {
        top_left: PixelPoint::new(600, 300),
        bottom_right: PixelPoint::new(680, 460),
        color: box_color,
        thickness: 2,
    }));
    assert!(shapes.contains(&Shape::Circle {
        center: PixelPoint::new(640, 380),
        radius: 5,
        color: Color::RED,
        thickness: FILLED,
        antialiased: false,
    }));

    // "Person 1: 0.75" is 14 characters, 140x10 with the fixed metrics
    assert!(shapes.contains(&Shape::Rectangle {
        top_left: PixelPoint::new(600, 280),
        bottom_right: PixelPoint::new(740, 300),
        color: box_color,
        thickness: FILLED,
    }));
    assert_eq!(text_origin(&overlay, "Person 1: 0.75"), Some(PixelPoint::new(600, 295)));
    assert_eq!(text_origin(&overlay, "X:  +0 Y: +20"), Some(PixelPoint::new(600, 480)));

    assert_eq!(text_origin(&overlay, "People detected: 1"), Some(PixelPoint::new(10, 30)));
    assert_eq!(text_origin(&overlay, "FPS: 12.3"), Some(PixelPoint::new(10, 60)));
    assert_eq!(text_origin(&overlay, "10:20:30"), Some(PixelPoint::new(1180, 710)));
}

#[test]
fn people_overlay_hides_fps_when_disabled() {
    let overlay = people_overlay(HD, &[], None, "00:00:00", &FixedMetrics);
    assert!(find_text(&overlay, "FPS").is_none());
    assert_eq!(
        texts(&overlay),
        vec!["People detected: 0", "00:00:00"]
    );
}

fn hud<'a>(
    assessment: &'a CircleAssessment,
    zone: &'a CenterZone,
    measurement: Option<f64>,
) -> CircleHud<'a> {
    CircleHud {
        frame: HD,
        assessment,
        zone,
        measurement,
        fps: 24.96,
        min_radius_fraction: 0.10,
        max_radius_fraction: 0.25,
    }
}

#[test]
fn circle_overlay_guides_when_nothing_found() {
    let zone = CenterZone::new(0.6);
    let assessment = assess_hd(None);
    let overlay = circle_overlay(&hud(&assessment, &zone, None), &FixedMetrics);
    let shapes = overlay.shapes();

    assert_eq!(
        shapes[0],
        Shape::Rectangle {
            top_left: PixelPoint::new(256, 144),
            bottom_right: PixelPoint::new(1024, 576),
            color: Color::YELLOW,
            thickness: 2,
        }
    );
    assert!(shapes.contains(&Shape::Circle {
        center: PixelPoint::new(640, 360),
        radius: 72,
        color: Color::MAGENTA,
        thickness: 1,
        antialiased: true,
    }));
    assert!(shapes.contains(&Shape::Circle {
        center: PixelPoint::new(640, 360),
        radius: 180,
        color: Color::MAGENTA,
        thickness: 1,
        antialiased: true,
    }));

    assert!(find_text(&overlay, "Radius:").is_none());
    assert_eq!(
        text_origin(&overlay, "Detectable size: 20% to 50% of the image"),
        Some(PixelPoint::new(15, 65))
    );
    assert_eq!(text_origin(&overlay, "Press '+/-'"), Some(PixelPoint::new(15, 170)));

    match find_text(&overlay, "Waiting") {
        Some(Shape::Text { origin, color, .. }) => {
            assert_eq!(*origin, PixelPoint::new(10, 580));
            assert_eq!(*color, Color::ORANGE);
        }
        other => panic!("missing status text, got {other:?}"),
    }
    assert_eq!(text_origin(&overlay, "FPS: 25.0"), Some(PixelPoint::new(1160, 30)));
}

#[test]
fn circle_overlay_guidance_backgrounds_fit_text() {
    let zone = CenterZone::new(0.6);
    let assessment = assess_hd(None);
    let overlay = circle_overlay(&hud(&assessment, &zone, None), &FixedMetrics);

    // "Press 'Q' to quit" is 17 characters, drawn on the fourth line (y = 135)
    assert!(overlay.shapes().contains(&Shape::Rectangle {
        top_left: PixelPoint::new(10, 115),
        bottom_right: PixelPoint::new(190, 145),
        color: Color::BLACK,
        thickness: FILLED,
    }));
}

#[test]
fn circle_overlay_shows_ready_circle_details() {
    let zone = CenterZone::new(0.6);
    let assessment = assess_hd(Some(Circle::new(640, 360, 100)));
    let overlay = circle_overlay(&hud(&assessment, &zone, None), &FixedMetrics);

    assert!(overlay.shapes().contains(&Shape::Circle {
        center: PixelPoint::new(640, 360),
        radius: 100,
        color: Color::GREEN,
        thickness: 3,
        antialiased: false,
    }));
    assert_eq!(
        text_origin(&overlay, "Radius: 100px | Diameter: 200px"),
        Some(PixelPoint::new(560, 230))
    );
    assert!(find_text(&overlay, CircleStatus::Ready.message()).is_some());
}

#[test]
fn circle_overlay_shows_measurement_panel() {
    let zone = CenterZone::new(0.6);
    let assessment = assess_hd(Some(Circle::new(640, 360, 100)));
    let overlay = circle_overlay(&hud(&assessment, &zone, Some(18.0)), &FixedMetrics);

    assert!(find_text(&overlay, "Radius:").is_none());
    assert!(overlay.shapes().contains(&Shape::Rectangle {
        top_left: PixelPoint::new(10, 600),
        bottom_right: PixelPoint::new(1270, 710),
        color: Color::BLACK,
        thickness: FILLED,
    }));
    // 28 characters, centred
    assert_eq!(
        text_origin(&overlay, "Detected diameter = 18.00 cm"),
        Some(PixelPoint::new(500, 670))
    );
}

#[test]
fn out_of_bounds_circle_is_not_drawn() {
    let zone = CenterZone::new(0.6);
    let assessment = assess_hd(Some(Circle::new(640, 360, 40)));
    let overlay = circle_overlay(&hud(&assessment, &zone, Some(18.0)), &FixedMetrics);

    assert!(!overlay.shapes().iter().any(|s| matches!(
        s,
        Shape::Circle { radius: 40, .. }
    )));
    assert!(find_text(&overlay, "Detected diameter").is_none());
    match find_text(&overlay, CircleStatus::OutOfBounds.message()) {
        Some(Shape::Text { color, .. }) => assert_eq!(*color, Color::ORANGE),
        other => panic!("missing status text, got {other:?}"),
    }
}

#[test]
fn render_draws_every_shape_in_order() -> anyhow::Result<()> {
    let overlay = people_overlay(HD, &[person(1, 2, 3, 4, 0.5)], Some(1.0), "x", &HersheyMetrics);
    let mut canvas = RecordingCanvas::default();
    overlay.render(&mut canvas)?;
    assert_eq!(canvas.drawn, overlay.shapes());
    Ok(())
}

#[test]
fn hershey_metrics_grow_with_text_and_scale() {
    let small = HersheyMetrics.text_size("People", 0.5, 1);
    let large = HersheyMetrics.text_size("People", 1.0, 1);
    let longer = HersheyMetrics.text_size("People detected", 0.5, 1);
    assert!(large.width > small.width);
    assert!(large.height > small.height);
    assert!(longer.width > small.width);
}
