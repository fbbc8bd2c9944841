use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use camdetect::config::{
    BasicOptions, CameraConfig, CircleOptions, HogConfig, HoughConfig, PeopleOptions,
};

#[derive(Parser)]
#[command(name = "camdetect")]
#[command(about = "Webcam people and circle detection overlays")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Minimal people detector on a 640x480 view
    Basic(BasicArgs),
    /// People detector with position readout, statistics and screenshots
    People(PeopleArgs),
    /// Measure a circle held in the centre of the view
    Circle(CircleArgs),
}

#[derive(Args)]
struct CameraArgs {
    /// Camera index, /dev/videoN path, or video file/URI
    #[arg(long, value_name = "SRC", default_value = "0")]
    camera: String,
}

#[derive(Args)]
struct BasicArgs {
    #[command(flatten)]
    camera: CameraArgs,

    /// Detector hit threshold
    #[arg(long, default_value_t = 0.5)]
    threshold: f64,
}

#[derive(Args)]
struct PeopleArgs {
    #[command(flatten)]
    camera: CameraArgs,

    #[arg(long, default_value_t = 1280)]
    width: u32,

    #[arg(long, default_value_t = 720)]
    height: u32,

    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Detections weighted below this are ignored
    #[arg(long, default_value_t = 0.3)]
    min_confidence: f64,

    /// Hide the frame-rate readout
    #[arg(long)]
    no_fps: bool,

    /// Where 's' saves screenshots
    #[arg(long, value_name = "DIR", default_value = ".")]
    screenshot_dir: PathBuf,

    /// Write end-of-run statistics as JSON
    #[arg(long, value_name = "PATH")]
    summary_json: Option<PathBuf>,
}

#[derive(Args)]
struct CircleArgs {
    #[command(flatten)]
    camera: CameraArgs,

    #[arg(long, default_value_t = 1280)]
    width: u32,

    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Upper edge threshold of the circle detector
    #[arg(long, default_value_t = 50.0)]
    param1: f64,

    /// Accumulator threshold; lower finds more circles
    #[arg(long, default_value_t = 30)]
    param2: i32,

    /// Fraction of the frame covered by the centre zone
    #[arg(long, default_value_t = 0.6)]
    zone: f64,

    /// Write the final measurement as JSON
    #[arg(long, value_name = "PATH")]
    summary_json: Option<PathBuf>,
}

impl BasicArgs {
    fn into_options(self) -> BasicOptions {
        BasicOptions {
            camera: CameraConfig {
                source: self.camera.camera,
                ..CameraConfig::default_device()
            },
            hog: HogConfig {
                hit_threshold: self.threshold,
                ..HogConfig::basic()
            },
        }
    }
}

impl PeopleArgs {
    fn into_options(self) -> PeopleOptions {
        PeopleOptions {
            camera: CameraConfig {
                source: self.camera.camera,
                width: Some(self.width),
                height: Some(self.height),
                fps: Some(self.fps),
            },
            hog: HogConfig::with_min_confidence(self.min_confidence),
            show_fps: !self.no_fps,
            screenshot_dir: self.screenshot_dir,
            summary_json: self.summary_json,
        }
    }
}

impl CircleArgs {
    fn into_options(self) -> CircleOptions {
        CircleOptions {
            camera: CameraConfig {
                source: self.camera.camera,
                width: Some(self.width),
                height: Some(self.height),
                fps: None,
            },
            hough: HoughConfig {
                param1: self.param1,
                param2: self.param2,
                zone_fraction: self.zone,
                ..HoughConfig::default()
            },
            summary_json: self.summary_json,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::Basic(cmd) => {
            let options = cmd.into_options();
            options.hog.validate()?;
            run_basic(options)
        }
        Command::People(cmd) => {
            let options = cmd.into_options();
            options.hog.validate()?;
            run_people(options)
        }
        Command::Circle(cmd) => {
            let options = cmd.into_options();
            options.hough.validate()?;
            run_circle(options)
        }
    }
}

#[cfg(feature = "camera")]
fn run_basic(options: BasicOptions) -> anyhow::Result<()> {
    camdetect::app::basic::run(options)
}

#[cfg(feature = "camera")]
fn run_people(options: PeopleOptions) -> anyhow::Result<()> {
    camdetect::app::people::run(options)
}

#[cfg(feature = "camera")]
fn run_circle(options: CircleOptions) -> anyhow::Result<()> {
    camdetect::app::circle::run(options)
}

#[cfg(not(feature = "camera"))]
const NO_CAMERA: &str =
    "camdetect was built without camera support; rebuild with `--features camera`";

#[cfg(not(feature = "camera"))]
fn run_basic(_options: BasicOptions) -> anyhow::Result<()> {
    anyhow::bail!(NO_CAMERA)
}

#[cfg(not(feature = "camera"))]
fn run_people(_options: PeopleOptions) -> anyhow::Result<()> {
    anyhow::bail!(NO_CAMERA)
}

#[cfg(not(feature = "camera"))]
fn run_circle(_options: CircleOptions) -> anyhow::Result<()> {
    anyhow::bail!(NO_CAMERA)
}
