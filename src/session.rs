//! Per-mode state that survives between frames, and what each key does to it.

use std::path::PathBuf;

use anyhow::Result;
use tracing::warn;

use crate::calibration::Calibration;
use crate::config::HoughConfig;
use crate::controls::{Action, Sensitivity};
use crate::geometry::CircleAssessment;
use crate::screenshot::ScreenshotWriter;
use crate::stats::{DetectionHistory, FpsCounter};
use crate::summary::{CircleSummary, PeopleSummary};

/// Result of applying an action
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Continue,
    /// Keep going and tell the user something on the console
    Notice(String),
    Quit,
}

/// Borrowed view of a packed BGR frame
#[derive(Debug, Clone, Copy)]
pub struct FrameBytes<'a> {
    pub width: u32,
    pub height: u32,
    pub bgr: &'a [u8],
}

pub struct PeopleSession {
    history: DetectionHistory,
    fps: FpsCounter,
    show_fps: bool,
    screenshots: ScreenshotWriter,
}

impl PeopleSession {
    pub fn new(show_fps: bool, screenshot_dir: impl Into<PathBuf>) -> Self {
        Self {
            history: DetectionHistory::new(),
            fps: FpsCounter::new(),
            show_fps,
            screenshots: ScreenshotWriter::new(screenshot_dir),
        }
    }

    pub fn history(&self) -> &DetectionHistory {
        &self.history
    }

    pub fn record_frame(&mut self, detections: usize) {
        self.history.record(detections);
    }

    pub fn tick_fps(&mut self) -> f64 {
        self.fps.tick()
    }

    /// Frame rate to draw, if the display is enabled
    pub fn fps_display(&self) -> Option<f64> {
        self.show_fps.then(|| self.fps.fps())
    }

    pub fn screenshots_taken(&self) -> u32 {
        self.screenshots.count()
    }

    /// Fails unless screenshots have an existing directory to go to
    pub fn check_screenshot_dir(&self) -> Result<()> {
        self.screenshots.check_dir()
    }

    /// Apply a key action; `frame` is the annotated frame currently on screen
    pub fn handle(&mut self, action: Action, frame: FrameBytes<'_>) -> Result<Outcome> {
        match action {
            Action::Quit => Ok(Outcome::Quit),
            Action::Screenshot => {
                match self.screenshots.save_bgr(frame.width, frame.height, frame.bgr) {
                    Ok(path) => {
                        let name = path
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_else(|| path.display().to_string());
                        Ok(Outcome::Notice(format!("Screenshot saved: {name}")))
                    }
                    Err(err) => {
                        warn!("screenshot failed: {err:#}");
                        Ok(Outcome::Notice(format!("Failed to save screenshot: {err:#}")))
                    }
                }
            }
            Action::ResetStats => {
                self.history.reset();
                self.fps.reset();
                Ok(Outcome::Notice("Statistics reset".to_string()))
            }
            _ => Ok(Outcome::Continue),
        }
    }

    pub fn summary(&self) -> PeopleSummary {
        PeopleSummary::from_history(&self.history)
    }
}

pub struct CircleSession {
    sensitivity: Sensitivity,
    calibration: Calibration,
    measurement: Option<f64>,
}

impl CircleSession {
    pub fn new(config: &HoughConfig) -> Self {
        Self {
            sensitivity: Sensitivity::new(config.param2),
            calibration: Calibration::new(config.reference_diameter_cm),
            measurement: None,
        }
    }

    pub fn param2(&self) -> i32 {
        self.sensitivity.param2()
    }

    /// Last measured diameter in centimetres
    pub fn measurement(&self) -> Option<f64> {
        self.measurement
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Apply a key action against what the current frame shows
    pub fn handle(&mut self, action: Action, assessment: &CircleAssessment) -> Result<Outcome> {
        let outcome = match action {
            Action::Quit => Outcome::Quit,
            Action::Measure => match (assessment.ready_circle(), assessment.circle) {
                (Some(circle), _) => match self.calibration.measure(&circle) {
                    Ok(diameter) => {
                        self.measurement = Some(diameter);
                        Outcome::Notice(format!(
                            "\n>>> MEASUREMENT DONE: Diameter = {diameter:.2} cm <<<"
                        ))
                    }
                    Err(err) => {
                        warn!("measurement failed: {err:#}");
                        Outcome::Notice(format!("ERROR: Measurement failed: {err:#}"))
                    }
                },
                (None, Some(_)) => Outcome::Notice(
                    "ERROR: Circle detected but not ready to measure (outside the zone or invalid size)."
                        .to_string(),
                ),
                (None, None) => Outcome::Notice(
                    "ERROR: No circle detected in the center. Position the head correctly."
                        .to_string(),
                ),
            },
            Action::IncreaseSensitivity => {
                let param2 = self.sensitivity.increase();
                Outcome::Notice(format!("Sensitivity increased. Param2: {param2}"))
            }
            Action::DecreaseSensitivity => {
                let param2 = self.sensitivity.decrease();
                Outcome::Notice(format!("Sensitivity decreased. Param2: {param2}"))
            }
            Action::ResetMeasurement => {
                self.measurement = None;
                self.calibration.reset();
                Outcome::Notice("Measurement reset".to_string())
            }
            Action::Screenshot | Action::ResetStats => Outcome::Continue,
        };
        Ok(outcome)
    }

    pub fn summary(&self) -> CircleSummary {
        CircleSummary {
            final_diameter_cm: self.measurement,
            px_per_cm: self.calibration.px_per_cm(),
            param2: self.param2(),
        }
    }
}
