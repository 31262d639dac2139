/// Point in pixel space: `w` columns from the left edge, `h` rows from the top.
///
/// Values outside the surface are legal; they simply land off-screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub w: i32,
    pub h: i32,
}

impl Pixel {
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }
}

impl From<(i32, i32)> for Pixel {
    fn from((w, h): (i32, i32)) -> Self {
        Self { w, h }
    }
}
