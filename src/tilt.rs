/// Transform applied while the pointer is outside the card.
pub const REST_TRANSFORM: &str = "translateZ(0)";
/// Transform applied once the effect is switched off.
pub const OFF_TRANSFORM: &str = "none";
/// Viewports narrower than this start with the effect off.
pub const MIN_VIEWPORT_WIDTH: f64 = 720.0;

const MAX_ROTATE_X: f64 = 6.0;
const MAX_ROTATE_Y: f64 = 10.0;

/// Linearly maps `n` from `[in_min, in_max]` onto `[out_min, out_max]`.
pub fn map_range(n: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (n - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Card rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// `x`/`y` are relative to the card's top-left corner.
    ///
    /// Returns `None` for a degenerate (zero-sized) card.
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64) -> Option<Self> {
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        Some(Self {
            rotate_x: map_range(y, 0.0, height, MAX_ROTATE_X, -MAX_ROTATE_X),
            rotate_y: map_range(x, 0.0, width, -MAX_ROTATE_Y, MAX_ROTATE_Y),
        })
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg)",
            self.rotate_x, self.rotate_y
        )
    }
}

pub fn enabled_by_default(coarse_pointer: bool, viewport_width: f64) -> bool {
    !coarse_pointer && viewport_width >= MIN_VIEWPORT_WIDTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_range() {
        assert_eq!(map_range(0.0, 0.0, 100.0, -10.0, 10.0), -10.0);
        assert_eq!(map_range(50.0, 0.0, 100.0, -10.0, 10.0), 0.0);
        assert_eq!(map_range(100.0, 0.0, 100.0, 6.0, -6.0), -6.0);
    }

    #[test]
    fn test_corners() {
        let top_left = Tilt::from_pointer(0.0, 0.0, 400.0, 300.0).unwrap();
        assert_eq!(top_left.rotate_x, 6.0);
        assert_eq!(top_left.rotate_y, -10.0);

        let bottom_right = Tilt::from_pointer(400.0, 300.0, 400.0, 300.0).unwrap();
        assert_eq!(bottom_right.rotate_x, -6.0);
        assert_eq!(bottom_right.rotate_y, 10.0);

        let center = Tilt::from_pointer(200.0, 150.0, 400.0, 300.0).unwrap();
        assert_eq!(center.transform(), "perspective(1000px) rotateX(0deg) rotateY(0deg)");
    }

    #[test]
    fn test_degenerate_card() {
        assert_eq!(Tilt::from_pointer(10.0, 10.0, 0.0, 300.0), None);
        assert_eq!(Tilt::from_pointer(10.0, 10.0, 300.0, 0.0), None);
    }

    #[test]
    fn test_default_heuristic() {
        assert!(enabled_by_default(false, 1280.0));
        assert!(enabled_by_default(false, 720.0));
        assert!(!enabled_by_default(false, 719.0));
        assert!(!enabled_by_default(true, 1920.0));
    }
}
