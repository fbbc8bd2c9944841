use anyhow::{Context, Result};
use opencv::{
    core::{Mat, Rect, Size, Vector},
    imgproc,
    objdetect::HOGDescriptor,
    prelude::*,
};
use tracing::debug;

use super::RawDetection;
use crate::config::HogConfig;
use crate::models::BoundingBox;

// Library defaults for merging overlapping windows
const GROUP_THRESHOLD: f64 = 2.0;

/// The library's pre-trained HOG + linear SVM pedestrian detector
pub struct HogPeopleDetector {
    hog: HOGDescriptor,
    config: HogConfig,
    working: Mat,
}

impl HogPeopleDetector {
    pub fn new(config: HogConfig) -> Result<Self> {
        config.validate()?;

        let mut hog = HOGDescriptor::default().context("Failed to create HOG descriptor")?;
        let people_svm = HOGDescriptor::get_default_people_detector()
            .context("Failed to load default people detector")?;
        hog.set_svm_detector(&people_svm)
            .context("Failed to install people detector")?;

        Ok(Self {
            hog,
            config,
            working: Mat::default(),
        })
    }

    pub fn config(&self) -> &HogConfig {
        &self.config
    }

    /// Resize `frame` to the working size into `dst`
    pub fn resize_into(&self, frame: &Mat, dst: &mut Mat) -> Result<()> {
        let size = self.config.working_size;
        imgproc::resize(
            frame,
            dst,
            Size::new(size.width, size.height),
            0.0,
            0.0,
            imgproc::INTER_LINEAR,
        )
        .context("Failed to resize frame")
    }

    /// Detect on a frame already at the working size
    pub fn detect_working(&self, working: &Mat) -> Result<Vec<RawDetection>> {
        let mut boxes = Vector::<Rect>::new();
        let mut weights = Vector::<f64>::new();
        let stride = self.config.win_stride;
        let padding = self.config.padding;

        self.hog
            .detect_multi_scale_weights(
                working,
                &mut boxes,
                &mut weights,
                self.config.hit_threshold,
                Size::new(stride, stride),
                Size::new(padding, padding),
                self.config.scale,
                GROUP_THRESHOLD,
                false,
            )
            .context("People detection failed")?;

        let detections: Vec<RawDetection> = boxes
            .iter()
            .zip(weights.iter())
            .map(|(r, weight)| {
                RawDetection::new(BoundingBox::new(r.x, r.y, r.width, r.height), weight)
            })
            .collect();
        debug!(count = detections.len(), "people detector returned");
        Ok(detections)
    }

    /// Resize `frame` and detect; boxes are in working-frame coordinates
    pub fn detect(&mut self, frame: &Mat) -> Result<Vec<RawDetection>> {
        let mut working = std::mem::take(&mut self.working);
        self.resize_into(frame, &mut working)?;
        let detections = self.detect_working(&working);
        self.working = working;
        detections
    }
}
