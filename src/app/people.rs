use std::sync::atomic::AtomicBool;

use anyhow::Result;
use opencv::core::Mat;
use tracing::{debug, info};

use super::{interrupt_flag, interrupted, report, shut_down, Display};
use crate::camera::{frame_size, with_frame_bytes, CameraSource};
use crate::config::PeopleOptions;
use crate::controls::Mode;
use crate::detection::{filter_and_rescale, hog::HogPeopleDetector};
use crate::geometry::ScaleFactors;
use crate::overlay::{clock_text, people_overlay};
use crate::render::{MatCanvas, OpenCvMetrics};
use crate::session::PeopleSession;
use crate::stats::now_local;
use crate::summary;

const WINDOW: &str = "People Detector - Advanced";

/// Detect people, annotate the full-size frame, and keep per-frame statistics.
pub fn run(options: PeopleOptions) -> Result<()> {
    let mut session = PeopleSession::new(options.show_fps, &options.screenshot_dir);
    session.check_screenshot_dir()?;

    let mut camera = CameraSource::open(&options.camera)?;
    let mut detector = HogPeopleDetector::new(options.hog.clone())?;
    let display = Display::open(WINDOW)?;
    let interrupt = interrupt_flag();

    println!("Advanced detector started!");
    println!("Controls:");
    for line in Mode::People.help_lines() {
        println!("{line}");
    }
    info!(source = camera.source(), "people detector running");

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
    detector: &mut HogPeopleDetector,
    display: &Display,
    interrupt: &AtomicBool,
    session: &mut PeopleSession,
) -> Result<()> {
    let mut frame = Mat::default();
    let min_confidence = detector.config().min_confidence;
    let working_size = detector.config().working_size;

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
        let raw = detector.detect(&frame)?;
        let detections =
            filter_and_rescale(&raw, min_confidence, ScaleFactors::between(size, working_size));
        debug!(raw = raw.len(), kept = detections.len(), "frame processed");

        session.record_frame(detections.len());

        let overlay = people_overlay(
            size,
            &detections,
            session.fps_display(),
            &clock_text(now_local()),
            &OpenCvMetrics,
        );
        overlay.render(&mut MatCanvas::new(&mut frame))?;

        session.tick_fps();
        display.show(&frame)?;

        if let Some(action) = display.poll_action(Mode::People)? {
            let outcome = with_frame_bytes(&frame, |bytes| session.handle(action, bytes))??;
            if report(outcome) {
                return Ok(());
            }
        }
    }
}
