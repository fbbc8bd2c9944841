use serde::{Deserialize, Serialize};

/// Width and height of a frame in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: i32,
    pub height: i32,
}

impl FrameSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Integer centre of the frame
    pub fn center(&self) -> PixelPoint {
        PixelPoint::new(self.width / 2, self.height / 2)
    }

    pub fn min_side(&self) -> i32 {
        self.width.min(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Signed offset of this point from `origin`
    pub fn offset_from(&self, origin: PixelPoint) -> (i32, i32) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// Axis-aligned box, top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl BoundingBox {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn top_left(&self) -> PixelPoint {
        PixelPoint::new(self.x, self.y)
    }

    pub fn bottom_right(&self) -> PixelPoint {
        PixelPoint::new(self.x + self.width, self.y + self.height)
    }

    /// Centre using integer halves of the size
    pub fn center(&self) -> PixelPoint {
        PixelPoint::new(self.x + self.width / 2, self.y + self.height / 2)
    }
}

/// A person found by the HOG detector, in original frame coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PersonDetection {
    pub bbox: BoundingBox,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Circle {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
}

impl Circle {
    pub const fn new(x: i32, y: i32, radius: i32) -> Self {
        Self { x, y, radius }
    }

    pub fn center(&self) -> PixelPoint {
        PixelPoint::new(self.x, self.y)
    }

    pub fn diameter(&self) -> i32 {
        self.radius * 2
    }

    /// Round raw library output to pixel values, ties to even.
    pub fn from_raw(x: f32, y: f32, radius: f32) -> Self {
        Self {
            x: x.round_ties_even() as i32,
            y: y.round_ties_even() as i32,
            radius: radius.round_ties_even() as i32,
        }
    }
}
