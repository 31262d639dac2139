use glam::DVec2;

/// Point in coordinate space, y growing upward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    pub const ORIGIN: Coord = Coord::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn as_dvec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Coord {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Coord> for DVec2 {
    fn from(c: Coord) -> Self {
        c.as_dvec2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_dvec2_conversion() {
        let coord = Coord::new(1.5, -2.25);
        let v: DVec2 = coord.into();
        assert_eq!(v, DVec2::new(1.5, -2.25));
        assert_eq!(Coord::from(v), coord);
    }

    #[test]
    fn test_coord_is_finite() {
        assert!(Coord::new(1e300, -1e300).is_finite());
        assert!(!Coord::new(f64::NAN, 0.0).is_finite());
        assert!(!Coord::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_origin_is_default() {
        assert_eq!(Coord::default(), Coord::ORIGIN);
    }
}
