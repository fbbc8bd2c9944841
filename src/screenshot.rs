use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{anyhow, ensure, Context, Result};
use image::{codecs::jpeg::JpegEncoder, RgbImage};

pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Writes numbered JPEG screenshots (`screenshot_0001.jpg`, ...) into a directory
#[derive(Debug, Clone)]
pub struct ScreenshotWriter {
    dir: PathBuf,
    count: u32,
    quality: u8,
}

impl ScreenshotWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            count: 0,
            quality: DEFAULT_JPEG_QUALITY,
        }
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality.clamp(1, 100);
        self
    }

    pub fn check_dir(&self) -> Result<()> {
        ensure!(
            self.dir.is_dir(),
            "screenshot directory {} does not exist",
            self.dir.display()
        );
        Ok(())
    }

    /// Screenshots written so far
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn file_name(index: u32) -> String {
        format!("screenshot_{:04}.jpg", index)
    }

    /// Save a packed BGR frame and return the path written
    pub fn save_bgr(&mut self, width: u32, height: u32, bgr: &[u8]) -> Result<PathBuf> {
        let image = bgr_to_rgb_image(width, height, bgr)?;
        self.save(&image)
    }

    pub fn save(&mut self, image: &RgbImage) -> Result<PathBuf> {
        let path = self.dir.join(Self::file_name(self.count + 1));
        let file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);

        JpegEncoder::new_with_quality(&mut writer, self.quality)
            .encode_image(image)
            .map_err(|e| anyhow!("Failed to encode screenshot {}: {}", path.display(), e))?;

        self.count += 1;
        Ok(path)
    }
}

/// Reorder packed BGR bytes into an RGB image buffer
pub fn bgr_to_rgb_image(width: u32, height: u32, bgr: &[u8]) -> Result<RgbImage> {
    let expected = width as usize * height as usize * 3;
    ensure!(
        bgr.len() == expected,
        "frame buffer holds {} bytes, expected {} for {}x{} BGR",
        bgr.len(),
        expected,
        width,
        height
    );

    let rgb: Vec<u8> = bgr
        .chunks_exact(3)
        .flat_map(|px| [px[2], px[1], px[0]])
        .collect();
    RgbImage::from_raw(width, height, rgb)
        .ok_or_else(|| anyhow!("Failed to build {}x{} image", width, height))
}
