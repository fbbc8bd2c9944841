use std::sync::atomic::AtomicBool;

use anyhow::Result;
use opencv::core::Mat;
use tracing::{debug, info};

use super::{interrupt_flag, interrupted, report, shut_down, Display};
use crate::camera::{frame_size, CameraSource};
use crate::config::CircleOptions;
use crate::controls::Mode;
use crate::detection::{central_circle, hough::HoughCircleDetector};
use crate::geometry::{CenterZone, CircleAssessment, RadiusLimits};
use crate::overlay::{circle_overlay, CircleHud};
use crate::render::{MatCanvas, OpenCvMetrics};
use crate::session::CircleSession;
use crate::stats::FpsCounter;
use crate::summary;

const WINDOW: &str = "Circle Detector - Center";

/// Guide a circle (a head seen from above) into the centre zone and measure it on request.
pub fn run(options: CircleOptions) -> Result<()> {
    let mut camera = CameraSource::open(&options.camera)?;
    let mut detector = HoughCircleDetector::new(options.hough.clone())?;
    let display = Display::open(WINDOW)?;
    let interrupt = interrupt_flag();
    let mut session = CircleSession::new(&options.hough);

    println!("{}", "=".repeat(50));
    println!("Center Circle Detector");
    println!("{}", "=".repeat(50));
    println!("\nInstructions:");
    for line in Mode::Circle.help_lines() {
        println!("{line}");
    }
    println!("{}", "=".repeat(50));
    info!(source = camera.source(), param2 = session.param2(), "circle detector running");

    let result = capture_loop(&mut camera, &mut detector, &display, &interrupt, &mut session);

    shut_down(&mut camera, display);

    let summary = session.summary();
    for line in summary.lines() {
        println!("{line}");
    }
    if let Some(path) = &options.summary_json {
        summary::write_json(&summary, path)?;
        info!(path = %path.display(), "summary written");
    }
    println!("Detector stopped!");
    result
}

fn capture_loop(
    camera: &mut CameraSource,
    detector: &mut HoughCircleDetector,
    display: &Display,
    interrupt: &AtomicBool,
    session: &mut CircleSession,
) -> Result<()> {
    let config = detector.config().clone();
    let zone = CenterZone::new(config.zone_fraction);
    let mut fps = FpsCounter::new();
    let mut frame = Mat::default();

    loop {
        if interrupted(interrupt) {
            println!("\nInterrupted by user");
            return Ok(());
        }
        if !camera.read(&mut frame)? {
            println!("Error: could not read frame");
            return Ok(());
        }

        let size = frame_size(&frame);
        let limits =
            RadiusLimits::for_frame(size, config.min_radius_fraction, config.max_radius_fraction);
        let circles = detector.detect(&frame, session.param2(), limits)?;
        let assessment =
            CircleAssessment::new(central_circle(&circles, &zone, size), limits, &zone, size);
        debug!(found = circles.len(), ready = assessment.ready, "frame processed");

        let current_fps = fps.tick();
        let hud = CircleHud {
            frame: size,
            assessment: &assessment,
            zone: &zone,
            measurement: session.measurement(),
            fps: current_fps,
            min_radius_fraction: config.min_radius_fraction,
            max_radius_fraction: config.max_radius_fraction,
        };
        circle_overlay(&hud, &OpenCvMetrics).render(&mut MatCanvas::new(&mut frame))?;
        display.show(&frame)?;

        if let Some(action) = display.poll_action(Mode::Circle)? {
            if report(session.handle(action, &assessment)?) {
                return Ok(());
            }
        }
    }
}
