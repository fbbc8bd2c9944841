use anyhow::{ensure, Result};

use crate::models::Circle;

/// Rough pixel-to-centimetre conversion anchored on an assumed object size.
///
/// The first measured circle is taken to be `reference_diameter_cm` across;
/// its pixel diameter fixes the factor for every later measurement until
/// [`Calibration::reset`].
#[derive(Debug, Clone, PartialEq)]
pub struct Calibration {
    px_per_cm: Option<f64>,
    reference_diameter_cm: f64,
}

impl Calibration {
    pub fn new(reference_diameter_cm: f64) -> Self {
        Self {
            px_per_cm: None,
            reference_diameter_cm,
        }
    }

    pub fn px_per_cm(&self) -> Option<f64> {
        self.px_per_cm
    }

    pub fn is_calibrated(&self) -> bool {
        self.px_per_cm.is_some()
    }

    /// Factor for a circle of `radius_px`, calibrating on first use.
    pub fn factor(&mut self, radius_px: i32) -> Result<f64> {
        if let Some(factor) = self.px_per_cm {
            return Ok(factor);
        }
        ensure!(radius_px > 0, "cannot calibrate on a circle of radius {radius_px}");
        let factor = (radius_px * 2) as f64 / self.reference_diameter_cm;
        self.px_per_cm = Some(factor);
        Ok(factor)
    }

    /// Diameter of `circle` in centimetres
    pub fn measure(&mut self, circle: &Circle) -> Result<f64> {
        ensure!(circle.radius > 0, "cannot measure a circle of radius {}", circle.radius);
        let factor = self.factor(circle.radius)?;
        Ok(circle.diameter() as f64 / factor)
    }

    pub fn reset(&mut self) {
        self.px_per_cm = None;
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::new(18.0)
    }
}
