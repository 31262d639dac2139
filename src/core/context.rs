use crate::math::Rgb;

/// Drawing capability supplied by the host.
///
/// Coordinates are in pixel space and may fall outside the target; an
/// implementation clips silently instead of failing.
pub trait DrawingContext {
    /// Color used by subsequent fills and strokes
    fn set_color(&mut self, color: Rgb);

    /// Stroke width in pixels used by subsequent lines
    fn set_stroke_width(&mut self, width: u32);

    /// Fill an axis-aligned rectangle with the current color
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32);

    /// Stroke a line with the current color and width
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);
}
