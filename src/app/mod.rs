//! The three capture loops and what they share: the display window and
//! interrupt handling.

pub mod basic;
pub mod circle;
pub mod people;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Once, OnceLock};

use anyhow::{Context, Result};
use opencv::{core::Mat, highgui};
use tracing::warn;

use crate::camera::CameraSource;
use crate::controls::{Action, Mode};
use crate::session::Outcome;

/// A named display window
pub struct Display {
    name: String,
}

impl Display {
    pub fn open(name: &str) -> Result<Self> {
        highgui::named_window(name, highgui::WINDOW_AUTOSIZE)
            .with_context(|| format!("Failed to open window '{name}'"))?;
        Ok(Self {
            name: name.to_string(),
        })
    }

    pub fn show(&self, frame: &Mat) -> Result<()> {
        highgui::imshow(&self.name, frame).context("Failed to show frame")
    }

    /// Give the window a moment to draw and return the pressed key's action
    pub fn poll_action(&self, mode: Mode) -> Result<Option<Action>> {
        let key = highgui::wait_key(1)?;
        Ok(mode.action_for_key(key))
    }

    pub fn close(self) -> Result<()> {
        highgui::destroy_all_windows().context("Failed to close windows")
    }
}

static INTERRUPTED: OnceLock<Arc<AtomicBool>> = OnceLock::new();

/// Flag raised by Ctrl+C, installed once per process
pub fn interrupt_flag() -> Arc<AtomicBool> {
    static HANDLER: Once = Once::new();

    let flag = INTERRUPTED
        .get_or_init(|| Arc::new(AtomicBool::new(false)))
        .clone();
    HANDLER.call_once(|| {
        let handler_flag = flag.clone();
        if let Err(err) = ctrlc::set_handler(move || {
            handler_flag.store(true, Ordering::SeqCst);
        }) {
            warn!("Failed to install Ctrl+C handler: {err}");
        }
    });
    flag
}

pub fn interrupted(flag: &AtomicBool) -> bool {
    flag.load(Ordering::SeqCst)
}

/// Print any notice; true when the loop should stop
pub fn report(outcome: Outcome) -> bool {
    match outcome {
        Outcome::Quit => true,
        Outcome::Notice(message) => {
            println!("{message}");
            false
        }
        Outcome::Continue => false,
    }
}

/// Release the camera and close the window; failures are only logged so the
/// summary still gets printed
pub fn shut_down(camera: &mut CameraSource, display: Display) {
    if let Err(err) = camera.release() {
        warn!("{err:#}");
    }
    if let Err(err) = display.close() {
        warn!("{err:#}");
    }
}
