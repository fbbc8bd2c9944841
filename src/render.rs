use anyhow::{Context, Result};
use opencv::{
    core::{Mat, Point, Scalar},
    imgproc,
};

use crate::models::PixelPoint;
use crate::overlay::{Canvas, Color, HersheyMetrics, Shape, TextMetrics, TextSize};

const FONT: i32 = imgproc::FONT_HERSHEY_SIMPLEX;

fn point(p: PixelPoint) -> Point {
    Point::new(p.x, p.y)
}

fn scalar(color: Color) -> Scalar {
    Scalar::new(color.b as f64, color.g as f64, color.r as f64, 0.0)
}

/// Draws overlay shapes straight onto a BGR frame
pub struct MatCanvas<'a> {
    frame: &'a mut Mat,
}

impl<'a> MatCanvas<'a> {
    pub fn new(frame: &'a mut Mat) -> Self {
        Self { frame }
    }
}

impl Canvas for MatCanvas<'_> {
    fn draw(&mut self, shape: &Shape) -> Result<()> {
        match shape {
            Shape::Line {
                from,
                to,
                color,
                thickness,
            } => imgproc::line(
                &mut *self.frame,
                point(*from),
                point(*to),
                scalar(*color),
                *thickness,
                imgproc::LINE_8,
                0,
            ),
            Shape::Rectangle {
                top_left,
                bottom_right,
                color,
                thickness,
            } => imgproc::rectangle_points(
                &mut *self.frame,
                point(*top_left),
                point(*bottom_right),
                scalar(*color),
                *thickness,
                imgproc::LINE_8,
                0,
            ),
            Shape::Circle {
                center,
                radius,
                color,
                thickness,
                antialiased,
            } => imgproc::circle(
                &mut *self.frame,
                point(*center),
                (*radius).max(0),
                scalar(*color),
                *thickness,
                if *antialiased {
                    imgproc::LINE_AA
                } else {
                    imgproc::LINE_8
                },
                0,
            ),
            Shape::Text {
                text,
                origin,
                scale,
                color,
                thickness,
            } => imgproc::put_text(
                &mut *self.frame,
                text,
                point(*origin),
                FONT,
                *scale,
                scalar(*color),
                *thickness,
                imgproc::LINE_8,
                false,
            ),
        }
        .context("Failed to draw overlay")
    }
}

/// Text extents as the library renders them
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenCvMetrics;

impl TextMetrics for OpenCvMetrics {
    fn text_size(&self, text: &str, scale: f64, thickness: i32) -> TextSize {
        let mut baseline = 0;
        match imgproc::get_text_size(text, FONT, scale, thickness, &mut baseline) {
            Ok(size) => TextSize {
                width: size.width,
                height: size.height,
                baseline,
            },
            Err(_) => HersheyMetrics.text_size(text, scale, thickness),
        }
    }
}
