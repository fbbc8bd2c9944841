use anyhow::{Context, Result};
use opencv::{
    core::{Mat, Size, Vec3f, Vector},
    imgproc,
    prelude::*,
};
use tracing::debug;

use crate::config::HoughConfig;
use crate::geometry::RadiusLimits;
use crate::models::Circle;

/// Gray + blur preprocessing feeding the library's Hough gradient circle finder
pub struct HoughCircleDetector {
    config: HoughConfig,
    gray: Mat,
    blurred: Mat,
}

impl HoughCircleDetector {
    pub fn new(config: HoughConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            gray: Mat::default(),
            blurred: Mat::default(),
        })
    }

    pub fn config(&self) -> &HoughConfig {
        &self.config
    }

    /// Circles within `limits`, in the order the library reports them
    pub fn detect(&mut self, frame: &Mat, param2: i32, limits: RadiusLimits) -> Result<Vec<Circle>> {
        imgproc::cvt_color_def(frame, &mut self.gray, imgproc::COLOR_BGR2GRAY)
            .context("Failed to convert to grayscale")?;

        let kernel = self.config.blur_kernel;
        imgproc::gaussian_blur_def(
            &self.gray,
            &mut self.blurred,
            Size::new(kernel, kernel),
            self.config.blur_sigma,
        )
        .context("Failed to blur frame")?;

        let mut found = Vector::<Vec3f>::new();
        imgproc::hough_circles(
            &self.blurred,
            &mut found,
            imgproc::HOUGH_GRADIENT,
            self.config.dp,
            limits.min_center_distance(),
            self.config.param1,
            param2 as f64,
            limits.min,
            limits.max,
        )
        .context("Circle detection failed")?;

        let circles: Vec<Circle> = found
            .iter()
            .map(|c| Circle::from_raw(c[0], c[1], c[2]))
            .collect();
        debug!(count = circles.len(), param2, "circle detector returned");
        Ok(circles)
    }
}
