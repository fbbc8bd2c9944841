use std::path::PathBuf;

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use crate::models::FrameSize;

/// Camera source and the capture properties requested from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Device index (`0`), `/dev/videoN`, or any file/URI the capture backend opens
    pub source: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fps: Option<u32>,
}

impl CameraConfig {
    /// Default camera with no property overrides
    pub fn default_device() -> Self {
        Self {
            source: "0".to_string(),
            width: None,
            height: None,
            fps: None,
        }
    }

    /// Default camera asking for 1280x720
    pub fn hd() -> Self {
        Self {
            width: Some(1280),
            height: Some(720),
            ..Self::default_device()
        }
    }

    /// Zero-based device index when the source names a local camera
    pub fn device_index(&self) -> Option<i32> {
        parse_device_index(&self.source)
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self::default_device()
    }
}

/// Parse `0` or `/dev/video0` style sources.
pub fn parse_device_index(source: &str) -> Option<i32> {
    if let Ok(index) = source.parse::<i32>() {
        return (index >= 0).then_some(index);
    }
    let digits = source.strip_prefix("/dev/video")?;
    if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
        digits.parse().ok()
    } else {
        None
    }
}

/// Parameters for the library's multi-scale HOG people detector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HogConfig {
    /// Frames are resized to this size before detection
    pub working_size: FrameSize,
    pub win_stride: i32,
    pub padding: i32,
    pub scale: f64,
    /// Passed to the detector as its hit threshold
    pub hit_threshold: f64,
    /// Detections weighted below this are dropped (people mode)
    pub min_confidence: f64,
}

impl HogConfig {
    /// Settings of the basic detector: stricter hit threshold, no extra filtering
    pub fn basic() -> Self {
        Self {
            hit_threshold: 0.5,
            min_confidence: 0.0,
            ..Self::default()
        }
    }

    /// Settings of the people detector, filtering on the same value it detects with
    pub fn with_min_confidence(min_confidence: f64) -> Self {
        Self {
            hit_threshold: min_confidence,
            min_confidence,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.working_size.is_empty(),
            "working size must be positive, got {}x{}",
            self.working_size.width,
            self.working_size.height
        );
        ensure!(self.win_stride > 0, "window stride must be positive");
        ensure!(self.padding >= 0, "padding must not be negative");
        ensure!(self.scale > 1.0, "pyramid scale must be greater than 1, got {}", self.scale);
        ensure!(
            self.hit_threshold.is_finite(),
            "hit threshold must be a finite number, got {}",
            self.hit_threshold
        );
        ensure!(
            self.min_confidence.is_finite() && self.min_confidence >= 0.0,
            "minimum confidence must be a non-negative number, got {}",
            self.min_confidence
        );
        Ok(())
    }
}

impl Default for HogConfig {
    fn default() -> Self {
        Self {
            working_size: FrameSize::new(640, 480),
            win_stride: 8,
            padding: 16,
            scale: 1.05,
            hit_threshold: 0.3,
            min_confidence: 0.3,
        }
    }
}

pub const MIN_PARAM2: i32 = 10;
pub const MAX_PARAM2: i32 = 100;
pub const PARAM2_STEP: i32 = 5;

/// Parameters for the library's Hough circle transform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoughConfig {
    pub dp: f64,
    /// Upper Canny threshold
    pub param1: f64,
    /// Accumulator threshold, lower finds more circles
    pub param2: i32,
    pub blur_kernel: i32,
    pub blur_sigma: f64,
    /// Smallest radius as a fraction of the frame's short side
    pub min_radius_fraction: f64,
    /// Largest radius as a fraction of the frame's short side
    pub max_radius_fraction: f64,
    /// Fraction of each frame dimension covered by the centre zone
    pub zone_fraction: f64,
    /// Assumed real diameter of the measured object
    pub reference_diameter_cm: f64,
}

impl HoughConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.dp > 0.0, "dp must be positive");
        ensure!(self.param1 > 0.0, "param1 must be positive, got {}", self.param1);
        ensure!(
            (MIN_PARAM2..=MAX_PARAM2).contains(&self.param2),
            "param2 must be within {}..={}, got {}",
            MIN_PARAM2,
            MAX_PARAM2,
            self.param2
        );
        ensure!(
            self.blur_kernel > 0 && self.blur_kernel % 2 == 1,
            "blur kernel must be a positive odd number, got {}",
            self.blur_kernel
        );
        ensure!(
            self.min_radius_fraction > 0.0 && self.min_radius_fraction < self.max_radius_fraction,
            "radius fractions must satisfy 0 < min < max, got {} and {}",
            self.min_radius_fraction,
            self.max_radius_fraction
        );
        ensure!(
            self.max_radius_fraction <= 0.5,
            "max radius fraction cannot exceed half the frame, got {}",
            self.max_radius_fraction
        );
        ensure!(
            self.zone_fraction > 0.0 && self.zone_fraction <= 1.0,
            "zone fraction must be within (0, 1], got {}",
            self.zone_fraction
        );
        ensure!(
            self.reference_diameter_cm > 0.0,
            "reference diameter must be positive"
        );
        Ok(())
    }
}

impl Default for HoughConfig {
    fn default() -> Self {
        Self {
            dp: 1.0,
            param1: 50.0,
            param2: 30,
            blur_kernel: 9,
            blur_sigma: 2.0,
            min_radius_fraction: 0.10,
            max_radius_fraction: 0.25,
            zone_fraction: 0.60,
            reference_diameter_cm: 18.0,
        }
    }
}

/// Settings of the `basic` people detector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicOptions {
    pub camera: CameraConfig,
    pub hog: HogConfig,
}

impl Default for BasicOptions {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default_device(),
            hog: HogConfig::basic(),
        }
    }
}

/// Settings of the `people` detector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeopleOptions {
    pub camera: CameraConfig,
    pub hog: HogConfig,
    pub show_fps: bool,
    pub screenshot_dir: PathBuf,
    pub summary_json: Option<PathBuf>,
}

impl Default for PeopleOptions {
    fn default() -> Self {
        Self {
            camera: CameraConfig {
                fps: Some(30),
                ..CameraConfig::hd()
            },
            hog: HogConfig::default(),
            show_fps: true,
            screenshot_dir: PathBuf::from("."),
            summary_json: None,
        }
    }
}

/// Settings of the `circle` measurer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleOptions {
    pub camera: CameraConfig,
    pub hough: HoughConfig,
    pub summary_json: Option<PathBuf>,
}

impl Default for CircleOptions {
    fn default() -> Self {
        Self {
            camera: CameraConfig::hd(),
            hough: HoughConfig::default(),
            summary_json: None,
        }
    }
}
