//! OpenCV-backed camera capture.

use anyhow::{bail, Context, Result};
use opencv::{
    core::Mat,
    prelude::*,
    videoio::{self, VideoCapture},
};
use tracing::{debug, warn};

use crate::config::CameraConfig;
use crate::models::FrameSize;
use crate::session::FrameBytes;

pub struct CameraSource {
    capture: VideoCapture,
    source: String,
}

impl CameraSource {
    /// Open the configured device or stream and apply the requested properties
    pub fn open(config: &CameraConfig) -> Result<Self> {
        let capture = match config.device_index() {
            Some(index) => VideoCapture::new(index, videoio::CAP_ANY),
            None => VideoCapture::from_file(&config.source, videoio::CAP_ANY),
        }
        .with_context(|| format!("Could not open camera {}", config.source))?;

        if !capture.is_opened()? {
            bail!("Could not open camera {}", config.source);
        }

        let mut camera = Self {
            capture,
            source: config.source.clone(),
        };
        camera.configure(config)?;
        Ok(camera)
    }

    fn configure(&mut self, config: &CameraConfig) -> Result<()> {
        let requests = [
            (videoio::CAP_PROP_FRAME_WIDTH, config.width, "width"),
            (videoio::CAP_PROP_FRAME_HEIGHT, config.height, "height"),
            (videoio::CAP_PROP_FPS, config.fps, "fps"),
        ];
        for (prop, value, name) in requests {
            let Some(value) = value else { continue };
            if !self.capture.set(prop, value as f64)? {
                warn!(source = %self.source, "camera ignored {name}={value}");
            }
        }

        debug!(
            source = %self.source,
            width = self.capture.get(videoio::CAP_PROP_FRAME_WIDTH)?,
            height = self.capture.get(videoio::CAP_PROP_FRAME_HEIGHT)?,
            "camera opened"
        );
        Ok(())
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Read the next frame; `false` means the stream has ended or failed
    pub fn read(&mut self, frame: &mut Mat) -> Result<bool> {
        let ok = self.capture.read(frame).context("Failed to read frame")?;
        Ok(ok && !frame.empty())
    }

    pub fn release(&mut self) -> Result<()> {
        self.capture.release().context("Failed to release camera")
    }
}

pub fn frame_size(frame: &Mat) -> FrameSize {
    FrameSize::new(frame.cols(), frame.rows())
}

/// Run `f` over the packed BGR bytes of `frame`
pub fn with_frame_bytes<T>(frame: &Mat, f: impl FnOnce(FrameBytes<'_>) -> T) -> Result<T> {
    let packed;
    let frame = if frame.is_continuous() {
        frame
    } else {
        packed = frame.try_clone()?;
        &packed
    };

    let size = frame_size(frame);
    let bytes = FrameBytes {
        width: size.width as u32,
        height: size.height as u32,
        bgr: frame.data_bytes()?,
    };
    Ok(f(bytes))
}
