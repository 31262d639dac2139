use super::context::DrawingContext;
use super::surface_size::SurfaceSize;
use crate::math::Rgb;

/// 2D drawing operations recorded by a canvas
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Fill rectangle with top-left corner at (x, y)
    Rect { x: i32, y: i32, width: u32, height: u32, color: Rgb },

    /// Line from (x1, y1) to (x2, y2) with stroke width in pixels
    Line { x1: i32, y1: i32, x2: i32, y2: i32, width: u32, color: Rgb },
}

/// In-memory RGBA target for the rendering surface.
///
/// Draw calls are recorded first and rasterized by [`Canvas::execute_ops`].
#[derive(Debug, Clone)]
pub struct Canvas {
    /// RGBA pixel buffer
    pixels: Vec<u8>,
    /// Pending draw operations
    operations: Vec<DrawOp>,
    /// Pen state used by the `DrawingContext` methods
    color: Rgb,
    stroke_width: u32,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create new transparent canvas
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            pixels: vec![0; size.buffer_size()],
            operations: Vec::new(),
            color: Rgb::BLACK,
            stroke_width: 1,
            width: size.width,
            height: size.height,
        }
    }

    /// Execute all pending operations and return new canvas
    pub fn execute_ops(&self) -> Self {
        let mut canvas = Self {
            pixels: self.pixels.clone(),
            operations: Vec::new(),
            color: self.color,
            stroke_width: self.stroke_width,
            width: self.width,
            height: self.height,
        };

        for op in &self.operations {
            canvas.execute_op(op);
        }

        canvas
    }

    fn execute_op(&mut self, op: &DrawOp) {
        match *op {
            DrawOp::Rect { x, y, width, height, color } => {
                self.fill_area(x, y, width, height, color.to_rgba8())
            }
            DrawOp::Line { x1, y1, x2, y2, width, color } => {
                self.stroke_line(x1, y1, x2, y2, width, color.to_rgba8())
            }
        }
    }

    /// Write one pixel; anything off the canvas is dropped
    fn set_pixel(&mut self, x: i32, y: i32, rgba: [u8; 4]) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }

        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[idx..idx + 4].copy_from_slice(&rgba);
    }

    fn fill_area(&mut self, x: i32, y: i32, width: u32, height: u32, rgba: [u8; 4]) {
        let x_start = x.max(0) as i64;
        let y_start = y.max(0) as i64;
        let x_end = (x as i64 + width as i64).min(self.width as i64);
        let y_end = (y as i64 + height as i64).min(self.height as i64);

        for py in y_start..y_end {
            for px in x_start..x_end {
                self.set_pixel(px as i32, py as i32, rgba);
            }
        }
    }

    fn stamp_disc(&mut self, cx: i32, cy: i32, radius: u32, rgba: [u8; 4]) {
        let r = radius as i32;
        let r_sq = r * r;

        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r_sq {
                    self.set_pixel(cx.saturating_add(dx), cy.saturating_add(dy), rgba);
                }
            }
        }
    }

    /// Bresenham walk over the part of the segment that can touch the canvas;
    /// strokes wider than one pixel stamp a disc per step, so a zero-length
    /// line still leaves a visible dot.
    fn stroke_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, width: u32, rgba: [u8; 4]) {
        let radius = width / 2;
        let margin = f64::from(radius);
        let window = (
            -margin,
            -margin,
            f64::from(self.width) - 1.0 + margin,
            f64::from(self.height) - 1.0 + margin,
        );
        let from = (f64::from(x1), f64::from(y1));
        let to = (f64::from(x2), f64::from(y2));
        let Some(((cx1, cy1), (cx2, cy2))) = clip_segment(from, to, window) else {
            return;
        };

        let (mut x, mut y) = (cx1.round() as i64, cy1.round() as i64);
        let (x2, y2) = (cx2.round() as i64, cy2.round() as i64);

        let dx = (x2 - x).abs();
        let dy = -(y2 - y).abs();
        let sx = if x < x2 { 1 } else { -1 };
        let sy = if y < y2 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            if radius == 0 {
                self.set_pixel(x as i32, y as i32, rgba);
            } else {
                self.stamp_disc(x as i32, y as i32, radius, rgba);
            }

            if x == x2 && y == y2 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Recorded operations not yet rasterized
    pub fn ops(&self) -> &[DrawOp] {
        &self.operations
    }

    /// Get pixel buffer
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA value at (x, y), if on the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(rgba)
    }

    /// Get canvas dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Liang-Barsky clip of `from -> to` against `(min_x, min_y, max_x, max_y)`.
/// Returns `None` when no part of the segment lies inside.
fn clip_segment(
    from: (f64, f64),
    to: (f64, f64),
    (min_x, min_y, max_x, max_y): (f64, f64, f64, f64),
) -> Option<((f64, f64), (f64, f64))> {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);

    let edges = [
        (-dx, from.0 - min_x),
        (dx, max_x - from.0),
        (-dy, from.1 - min_y),
        (dy, max_y - from.1),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            // parallel to this edge
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((
        (from.0 + t0 * dx, from.1 + t0 * dy),
        (from.0 + t1 * dx, from.1 + t1 * dy),
    ))
}

impl DrawingContext for Canvas {
    fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    fn set_stroke_width(&mut self, width: u32) {
        self.stroke_width = width;
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32) {
        self.operations.push(DrawOp::Rect { x, y, width, height, color: self.color });
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.operations.push(DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            width: self.stroke_width,
            color: self.color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
    const RED8: [u8; 4] = [255, 0, 0, 255];
    const EMPTY: [u8; 4] = [0, 0, 0, 0];

    fn canvas(width: u32, height: u32) -> Canvas {
        Canvas::new(SurfaceSize::new(width, height))
    }

    fn stroke(canvas: &mut Canvas, width: u32, from: (i32, i32), to: (i32, i32)) {
        canvas.set_color(RED);
        canvas.set_stroke_width(width);
        canvas.draw_line(from.0, from.1, to.0, to.1);
    }

    #[test]
    fn canvas_creation() {
        let canvas = canvas(100, 100);
        assert_eq!(canvas.dimensions(), (100, 100));
        assert_eq!(canvas.pixels().len(), 100 * 100 * 4);
        assert_eq!(canvas.pixel(0, 0), Some(EMPTY));
    }

    #[test]
    fn canvas_full_fill() {
        let mut canvas = canvas(10, 10);
        canvas.set_color(Rgb::WHITE);
        canvas.fill_rect(0, 0, 10, 10);
        let canvas = canvas.execute_ops();

        assert_eq!(canvas.pixel(0, 0), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(9, 9), Some([255, 255, 255, 255]));
    }

    #[test]
    fn canvas_rect_is_clipped() {
        let mut canvas = canvas(10, 10);
        canvas.set_color(RED);
        canvas.fill_rect(-5, 8, 8, 10);
        let canvas = canvas.execute_ops();

        assert_eq!(canvas.pixel(0, 8), Some(RED8));
        assert_eq!(canvas.pixel(2, 9), Some(RED8));
        assert_eq!(canvas.pixel(3, 9), Some(EMPTY));
        assert_eq!(canvas.pixel(0, 7), Some(EMPTY));
    }

    #[test]
    fn canvas_thin_line() {
        let mut canvas = canvas(50, 50);
        stroke(&mut canvas, 1, (10, 10), (20, 20));
        let canvas = canvas.execute_ops();

        assert_eq!(canvas.pixel(10, 10), Some(RED8));
        assert_eq!(canvas.pixel(15, 15), Some(RED8));
        assert_eq!(canvas.pixel(20, 20), Some(RED8));
        assert_eq!(canvas.pixel(11, 10), Some(EMPTY));
    }

    #[test]
    fn canvas_zero_length_thick_line_is_a_dot() {
        let mut canvas = canvas(20, 20);
        stroke(&mut canvas, 5, (10, 10), (10, 10));
        let canvas = canvas.execute_ops();

        assert_eq!(canvas.pixel(10, 10), Some(RED8));
        assert_eq!(canvas.pixel(12, 10), Some(RED8));
        assert_eq!(canvas.pixel(10, 8), Some(RED8));
        assert_eq!(canvas.pixel(13, 10), Some(EMPTY));
        assert_eq!(canvas.pixel(12, 12), Some(EMPTY));
    }

    #[test]
    fn canvas_line_partly_off_canvas() {
        let mut canvas = canvas(10, 10);
        stroke(&mut canvas, 1, (-20, 5), (30, 5));
        let canvas = canvas.execute_ops();

        for x in 0..10 {
            assert_eq!(canvas.pixel(x, 5), Some(RED8));
        }
        assert_eq!(canvas.pixel(0, 4), Some(EMPTY));
    }

    #[test]
    fn canvas_diagonal_clipped_on_both_ends() {
        let mut canvas = canvas(10, 10);
        stroke(&mut canvas, 1, (-10, -10), (20, 20));
        let canvas = canvas.execute_ops();

        for i in 0..10 {
            assert_eq!(canvas.pixel(i, i), Some(RED8));
        }
        assert_eq!(canvas.pixel(1, 0), Some(EMPTY));
    }

    #[test]
    fn canvas_extreme_endpoints_rasterize_quickly() {
        let mut canvas = canvas(10, 10);
        stroke(&mut canvas, 1, (i32::MIN, 5), (i32::MAX, 5));
        stroke(&mut canvas, 5, (3, i32::MAX), (3, i32::MIN));

        let start = Instant::now();
        let canvas = canvas.execute_ops();
        assert!(start.elapsed() < Duration::from_secs(1), "took {:?}", start.elapsed());

        for x in 0..10 {
            assert_eq!(canvas.pixel(x, 5), Some(RED8));
        }
        for y in 0..10 {
            assert_eq!(canvas.pixel(1, y), Some(RED8));
            assert_eq!(canvas.pixel(5, y), Some(RED8));
        }
        assert_eq!(canvas.pixel(6, 0), Some(EMPTY));
    }

    #[test]
    fn canvas_thick_line_just_off_edge_still_bleeds_in() {
        let mut canvas = canvas(10, 10);
        stroke(&mut canvas, 5, (-50, -2), (50, -2));
        let canvas = canvas.execute_ops();

        assert_eq!(canvas.pixel(4, 0), Some(RED8));
        assert_eq!(canvas.pixel(4, 1), Some(EMPTY));
    }

    #[test]
    fn canvas_line_entirely_outside_draws_nothing() {
        let mut canvas = canvas(10, 10);
        stroke(&mut canvas, 3, (i32::MIN, i32::MIN), (i32::MIN, i32::MAX));
        stroke(&mut canvas, 1, (-5, 20), (30, 12));
        let canvas = canvas.execute_ops();

        assert!(canvas.pixels().iter().all(|b| *b == 0));
        assert_eq!(canvas.pixel(10, 0), None);
    }

    #[test]
    fn canvas_records_pen_state() {
        let mut canvas = canvas(10, 10);
        canvas.set_color(RED);
        canvas.set_stroke_width(3);
        canvas.draw_line(0, 0, 5, 0);
        canvas.set_color(Rgb::WHITE);
        canvas.fill_rect(1, 1, 2, 2);

        assert_eq!(
            canvas.ops(),
            &[
                DrawOp::Line { x1: 0, y1: 0, x2: 5, y2: 0, width: 3, color: RED },
                DrawOp::Rect { x: 1, y: 1, width: 2, height: 2, color: Rgb::WHITE },
            ]
        );
    }

    #[test]
    fn clip_segment_reports_misses() {
        let window = (0.0, 0.0, 9.0, 9.0);
        assert_eq!(clip_segment((-5.0, -5.0), (-1.0, 20.0), window), None);
        let ((x1, y1), (x2, y2)) = clip_segment((-10.0, 4.0), (20.0, 4.0), window).unwrap();
        assert!(x1.abs() < 1e-9 && (x2 - 9.0).abs() < 1e-9, "{} {}", x1, x2);
        assert_eq!((y1, y2), (4.0, 4.0));
        assert_eq!(clip_segment((3.0, 3.0), (3.0, 3.0), window), Some(((3.0, 3.0), (3.0, 3.0))));
    }
}
