use crate::models::{BoundingBox, Circle, FrameSize, PixelPoint};

/// Per-axis factors mapping working-frame coordinates back to the original frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactors {
    pub x: f64,
    pub y: f64,
}

impl ScaleFactors {
    /// Factors from a `working` frame (the one detection ran on) to the `original` one
    pub fn between(original: FrameSize, working: FrameSize) -> Self {
        Self {
            x: original.width as f64 / working.width as f64,
            y: original.height as f64 / working.height as f64,
        }
    }

    /// Scale every component of `bbox`, truncating toward zero.
    pub fn rescale(&self, bbox: &BoundingBox) -> BoundingBox {
        BoundingBox {
            x: (bbox.x as f64 * self.x) as i32,
            y: (bbox.y as f64 * self.y) as i32,
            width: (bbox.width as f64 * self.x) as i32,
            height: (bbox.height as f64 * self.y) as i32,
        }
    }
}

/// Central rectangle of a frame covering `fraction` of each dimension
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterZone {
    pub fraction: f64,
}

impl CenterZone {
    pub fn new(fraction: f64) -> Self {
        Self { fraction }
    }

    /// True when `point` is strictly inside the zone of a `frame`-sized image
    pub fn contains(&self, point: PixelPoint, frame: FrameSize) -> bool {
        let center = frame.center();
        let half_width = frame.width as f64 * self.fraction / 2.0;
        let half_height = frame.height as f64 * self.fraction / 2.0;

        ((point.x - center.x).abs() as f64) < half_width
            && ((point.y - center.y).abs() as f64) < half_height
    }

    /// Pixel corners of the zone as drawn on screen
    pub fn corners(&self, frame: FrameSize) -> (PixelPoint, PixelPoint) {
        let center = frame.center();
        let zone_width = (frame.width as f64 * self.fraction) as i32;
        let zone_height = (frame.height as f64 * self.fraction) as i32;
        (
            PixelPoint::new(center.x - zone_width / 2, center.y - zone_height / 2),
            PixelPoint::new(center.x + zone_width / 2, center.y + zone_height / 2),
        )
    }
}

/// Range of circle radii worth reporting, derived from the frame size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadiusLimits {
    pub min: i32,
    pub max: i32,
}

impl RadiusLimits {
    /// Limits as fractions of the frame's short side, truncated to whole pixels
    pub fn for_frame(frame: FrameSize, min_fraction: f64, max_fraction: f64) -> Self {
        let side = frame.min_side() as f64;
        Self {
            min: (side * min_fraction) as i32,
            max: (side * max_fraction) as i32,
        }
    }

    pub fn contains(&self, radius: i32) -> bool {
        radius >= self.min && radius <= self.max
    }

    /// Minimum distance between detected centres; never zero
    pub fn min_center_distance(&self) -> f64 {
        (self.min * 2).max(1) as f64
    }
}

/// Where the central circle stands relative to the measurement conditions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleAssessment {
    pub circle: Option<Circle>,
    pub limits: RadiusLimits,
    pub ready: bool,
}

impl CircleAssessment {
    /// A circle is ready to measure when it sits in the zone with an allowed radius.
    pub fn new(
        circle: Option<Circle>,
        limits: RadiusLimits,
        zone: &CenterZone,
        frame: FrameSize,
    ) -> Self {
        let ready = circle.is_some_and(|c| {
            zone.contains(c.center(), frame) && limits.contains(c.radius)
        });
        Self {
            circle,
            limits,
            ready,
        }
    }

    pub fn ready_circle(&self) -> Option<Circle> {
        self.circle.filter(|_| self.ready)
    }
}
