use std::sync::atomic::AtomicBool;

use anyhow::Result;
use opencv::core::Mat;
use tracing::info;

use super::{interrupt_flag, interrupted, report, shut_down, Display};
use crate::camera::CameraSource;
use crate::config::BasicOptions;
use crate::controls::{Action, Mode};
use crate::detection::{hog::HogPeopleDetector, keep_all};
use crate::overlay::basic_overlay;
use crate::render::MatCanvas;
use crate::session::Outcome;

const WINDOW: &str = "People Detector";

/// Detect on a downscaled copy of each frame and show that copy annotated.
pub fn run(options: BasicOptions) -> Result<()> {
    let mut camera = CameraSource::open(&options.camera)?;
    let detector = HogPeopleDetector::new(options.hog)?;
    let display = Display::open(WINDOW)?;
    let interrupt = interrupt_flag();

    println!("Detector started! Press 'q' to quit");
    info!(source = camera.source(), "basic people detector running");

    let result = capture_loop(&mut camera, &detector, &display, &interrupt);

    shut_down(&mut camera, display);
    println!("Detector stopped!");
    result
}

fn capture_loop(
    camera: &mut CameraSource,
    detector: &HogPeopleDetector,
    display: &Display,
    interrupt: &AtomicBool,
) -> Result<()> {
    let mut frame = Mat::default();
    let mut working = Mat::default();

    loop {
        if interrupted(interrupt) {
            println!("\nInterrupted by user");
            return Ok(());
        }
        if !camera.read(&mut frame)? {
            println!("Error: could not read frame");
            return Ok(());
        }

        detector.resize_into(&frame, &mut working)?;
        let detections = keep_all(&detector.detect_working(&working)?);

        basic_overlay(&detections).render(&mut MatCanvas::new(&mut working))?;
        display.show(&working)?;

        let outcome = match display.poll_action(Mode::Basic)? {
            Some(Action::Quit) => Outcome::Quit,
            _ => Outcome::Continue,
        };
        if report(outcome) {
            return Ok(());
        }
    }
}
