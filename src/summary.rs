use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::stats::DetectionHistory;

/// End-of-run statistics of the people detector
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeopleSummary {
    pub frames: usize,
    pub total_detections: usize,
    pub average_per_frame: Option<f64>,
}

impl PeopleSummary {
    pub fn from_history(history: &DetectionHistory) -> Self {
        Self {
            frames: history.len(),
            total_detections: history.total(),
            average_per_frame: history.average(),
        }
    }

    /// Console report; empty when no frame was processed
    pub fn lines(&self) -> Vec<String> {
        match self.average_per_frame {
            Some(average) => vec![
                "\nStatistics:".to_string(),
                format!("  Total frames processed: {}", self.frames),
                format!("  Average people per frame: {average:.2}"),
            ],
            None => Vec::new(),
        }
    }
}

/// End-of-run state of the circle measurer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleSummary {
    pub final_diameter_cm: Option<f64>,
    pub px_per_cm: Option<f64>,
    pub param2: i32,
}

impl CircleSummary {
    pub fn lines(&self) -> Vec<String> {
        match self.final_diameter_cm {
            Some(diameter) => vec![format!("\nFinal measurement: {diameter:.2} cm")],
            None => Vec::new(),
        }
    }
}

/// Write `summary` as pretty JSON to `path`
pub fn write_json<T: Serialize>(summary: &T, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, summary)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
