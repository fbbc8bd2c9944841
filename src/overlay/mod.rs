//! On-screen annotation.
//!
//! Each capture mode builds an [`Overlay`], a display list of [`Shape`]s laid
//! out in frame pixel coordinates. The list is drawn by a [`Canvas`]; text
//! placement that depends on rendered text extents asks a [`TextMetrics`].

pub mod circle;
pub mod people;

use anyhow::Result;

use crate::models::PixelPoint;

pub use circle::{circle_overlay, CircleHud, CircleStatus};
pub use people::{basic_overlay, clock_text, confidence_color, people_overlay, position_label};

/// Thickness value that fills a closed shape
pub const FILLED: i32 = -1;

/// Colour in blue, green, red order, as frames are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub b: u8,
    pub g: u8,
    pub r: u8,
}

impl Color {
    pub const fn bgr(b: u8, g: u8, r: u8) -> Self {
        Self { b, g, r }
    }

    pub const WHITE: Color = Color::bgr(255, 255, 255);
    pub const BLACK: Color = Color::bgr(0, 0, 0);
    pub const GREEN: Color = Color::bgr(0, 255, 0);
    pub const RED: Color = Color::bgr(0, 0, 255);
    pub const CYAN: Color = Color::bgr(255, 255, 0);
    pub const YELLOW: Color = Color::bgr(0, 255, 255);
    pub const MAGENTA: Color = Color::bgr(255, 0, 255);
    pub const ORANGE: Color = Color::bgr(0, 165, 255);
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line {
        from: PixelPoint,
        to: PixelPoint,
        color: Color,
        thickness: i32,
    },
    Rectangle {
        top_left: PixelPoint,
        bottom_right: PixelPoint,
        color: Color,
        thickness: i32,
    },
    Circle {
        center: PixelPoint,
        radius: i32,
        color: Color,
        thickness: i32,
        antialiased: bool,
    },
    /// `origin` is the bottom-left corner of the text
    Text {
        text: String,
        origin: PixelPoint,
        scale: f64,
        color: Color,
        thickness: i32,
    },
}

/// Rendered extent of a line of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSize {
    pub width: i32,
    pub height: i32,
    pub baseline: i32,
}

pub trait TextMetrics {
    fn text_size(&self, text: &str, scale: f64, thickness: i32) -> TextSize;
}

/// Approximate extents of the Hershey simplex font used on screen.
///
/// Good enough to lay out label backgrounds when the real renderer is not
/// around to ask.
#[derive(Debug, Clone, Copy, Default)]
pub struct HersheyMetrics;

impl TextMetrics for HersheyMetrics {
    fn text_size(&self, text: &str, scale: f64, thickness: i32) -> TextSize {
        let chars = text.chars().count() as f64;
        let thickness = thickness.max(1) as f64;
        TextSize {
            width: (chars * 20.0 * scale + thickness).round() as i32,
            height: (22.0 * scale).round() as i32,
            baseline: (9.0 * scale + thickness).round() as i32,
        }
    }
}

/// Something shapes can be drawn onto
pub trait Canvas {
    fn draw(&mut self, shape: &Shape) -> Result<()>;
}

/// Ordered list of shapes; later shapes are drawn over earlier ones
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    shapes: Vec<Shape>,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn line(&mut self, from: PixelPoint, to: PixelPoint, color: Color, thickness: i32) {
        self.push(Shape::Line {
            from,
            to,
            color,
            thickness,
        });
    }

    pub fn rectangle(
        &mut self,
        top_left: PixelPoint,
        bottom_right: PixelPoint,
        color: Color,
        thickness: i32,
    ) {
        self.push(Shape::Rectangle {
            top_left,
            bottom_right,
            color,
            thickness,
        });
    }

    pub fn filled_rectangle(&mut self, top_left: PixelPoint, bottom_right: PixelPoint, color: Color) {
        self.rectangle(top_left, bottom_right, color, FILLED);
    }

    pub fn circle(&mut self, center: PixelPoint, radius: i32, color: Color, thickness: i32) {
        self.push(Shape::Circle {
            center,
            radius,
            color,
            thickness,
            antialiased: false,
        });
    }

    pub fn smooth_circle(&mut self, center: PixelPoint, radius: i32, color: Color, thickness: i32) {
        self.push(Shape::Circle {
            center,
            radius,
            color,
            thickness,
            antialiased: true,
        });
    }

    pub fn text(
        &mut self,
        text: impl Into<String>,
        origin: PixelPoint,
        scale: f64,
        color: Color,
        thickness: i32,
    ) {
        self.push(Shape::Text {
            text: text.into(),
            origin,
            scale,
            color,
            thickness,
        });
    }

    pub fn render(&self, canvas: &mut dyn Canvas) -> Result<()> {
        for shape in &self.shapes {
            canvas.draw(shape)?;
        }
        Ok(())
    }
}
