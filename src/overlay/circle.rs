use super::{Color, Overlay, TextMetrics, FILLED};
use crate::geometry::{CenterZone, CircleAssessment};
use crate::models::{FrameSize, PixelPoint};

/// Everything the circle guidance screen shows for one frame
#[derive(Debug, Clone, Copy)]
pub struct CircleHud<'a> {
    pub frame: FrameSize,
    pub assessment: &'a CircleAssessment,
    pub zone: &'a CenterZone,
    /// Last measured diameter, in centimetres
    pub measurement: Option<f64>,
    pub fps: f64,
    pub min_radius_fraction: f64,
    pub max_radius_fraction: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircleStatus {
    Ready,
    OutOfBounds,
    Waiting,
}

impl CircleStatus {
    pub fn of(assessment: &CircleAssessment) -> Self {
        if assessment.ready {
            CircleStatus::Ready
        } else if assessment.circle.is_some() {
            CircleStatus::OutOfBounds
        } else {
            CircleStatus::Waiting
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            CircleStatus::Ready => "CIRCLE DETECTED - ready to measure!",
            CircleStatus::OutOfBounds => "Circle detected but outside the zone or invalid size",
            CircleStatus::Waiting => "Waiting for a circle in the center...",
        }
    }

    pub fn color(self) -> Color {
        match self {
            CircleStatus::Ready => Color::GREEN,
            CircleStatus::OutOfBounds | CircleStatus::Waiting => Color::ORANGE,
        }
    }
}

fn guidance_lines(min_fraction: f64, max_fraction: f64) -> [String; 5] {
    [
        "PLACE THE HEAD IN THE CENTER OF THE YELLOW AREA".to_string(),
        format!(
            "Detectable size: {}% to {}% of the image",
            (min_fraction * 200.0) as i32,
            (max_fraction * 200.0) as i32
        ),
        "Press 'M' to MEASURE the diameter".to_string(),
        "Press 'Q' to quit".to_string(),
        "Press '+/-' to adjust sensitivity".to_string(),
    ]
}

pub fn circle_overlay(hud: &CircleHud<'_>, metrics: &dyn TextMetrics) -> Overlay {
    let mut overlay = Overlay::new();
    let frame = hud.frame;
    let center = frame.center();
    let limits = hud.assessment.limits;

    let (zone_top_left, zone_bottom_right) = hud.zone.corners(frame);
    overlay.rectangle(zone_top_left, zone_bottom_right, Color::YELLOW, 2);

    // Smallest and largest detectable sizes
    overlay.smooth_circle(center, limits.min, Color::MAGENTA, 1);
    overlay.smooth_circle(center, limits.max, Color::MAGENTA, 1);

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
    overlay.circle(center, 3, Color::CYAN, FILLED);

    if let Some(circle) = hud.assessment.ready_circle() {
        overlay.circle(circle.center(), circle.radius, Color::GREEN, 3);
        overlay.circle(circle.center(), 3, Color::RED, FILLED);
        overlay.line(center, circle.center(), Color::YELLOW, 2);

        match hud.measurement {
            Some(diameter_cm) => {
                let panel_top_left = PixelPoint::new(10, frame.height - 120);
                let panel_bottom_right = PixelPoint::new(frame.width - 10, frame.height - 10);
                overlay.filled_rectangle(panel_top_left, panel_bottom_right, Color::BLACK);
                overlay.rectangle(panel_top_left, panel_bottom_right, Color::GREEN, 3);

                let result = format!("Detected diameter = {diameter_cm:.2} cm");
                let size = metrics.text_size(&result, 1.2, 3);
                overlay.text(
                    result,
                    PixelPoint::new((frame.width - size.width) / 2, frame.height - 50),
                    1.2,
                    Color::GREEN,
                    3,
                );
            }
            None => {
                overlay.text(
                    format!("Radius: {}px | Diameter: {}px", circle.radius, circle.diameter()),
                    PixelPoint::new(circle.x - 80, circle.y - circle.radius - 30),
                    0.5,
                    Color::WHITE,
                    2,
                );
            }
        }
    }

    let mut y = 30;
    for line in guidance_lines(hud.min_radius_fraction, hud.max_radius_fraction) {
        let size = metrics.text_size(&line, 0.6, 2);
        overlay.filled_rectangle(
            PixelPoint::new(10, y - 20),
            PixelPoint::new(size.width + 20, y + 10),
            Color::BLACK,
        );
        overlay.text(line, PixelPoint::new(15, y), 0.6, Color::WHITE, 2);
        y += 35;
    }

    let status = CircleStatus::of(hud.assessment);
    overlay.text(
        status.message(),
        PixelPoint::new(10, frame.height - 140),
        0.7,
        status.color(),
        2,
    );

    overlay.text(
        format!("FPS: {:.1}", hud.fps),
        PixelPoint::new(frame.width - 120, 30),
        0.7,
        Color::GREEN,
        2,
    );

    overlay
}
