use super::Vec3;

/// Axis-aligned bounding box in mesh space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds3 {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds3 {
    /// Inverted box that any `include` call will overwrite.
    pub const EMPTY: Bounds3 = Bounds3 {
        min: Vec3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
        max: Vec3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
    };

    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    #[inline]
    pub fn include(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    #[inline]
    pub fn size(self) -> Vec3 {
        if self.is_empty() { Vec3::zero() } else { self.max - self.min }
    }

    /// Inclusive containment with a small tolerance for float noise.
    #[inline]
    pub fn contains(self, p: Vec3, eps: f32) -> bool {
        p.x >= self.min.x - eps
            && p.y >= self.min.y - eps
            && p.z >= self.min.z - eps
            && p.x <= self.max.x + eps
            && p.y <= self.max.y + eps
            && p.z <= self.max.z + eps
    }
}

impl Default for Bounds3 {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl FromIterator<Vec3> for Bounds3 {
    fn from_iter<I: IntoIterator<Item = Vec3>>(iter: I) -> Self {
        let mut b = Bounds3::EMPTY;
        for p in iter {
            b.include(p);
        }
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_zero_size() {
        assert!(Bounds3::EMPTY.is_empty());
        assert_eq!(Bounds3::EMPTY.size(), Vec3::zero());
    }

    #[test]
    fn collects_points() {
        let b: Bounds3 = [Vec3::new(1.0, -1.0, 0.0), Vec3::new(-2.0, 3.0, 1.0)]
            .into_iter()
            .collect();
        assert_eq!(b.min, Vec3::new(-2.0, -1.0, 0.0));
        assert_eq!(b.max, Vec3::new(1.0, 3.0, 1.0));
        assert_eq!(b.size(), Vec3::new(3.0, 4.0, 1.0));
    }

    #[test]
    fn contains_with_tolerance() {
        let b = Bounds3::new(Vec3::zero(), Vec3::new(1.0, 1.0, 1.0));
        assert!(b.contains(Vec3::new(1.0, 1.0, 1.0), 0.0));
        assert!(b.contains(Vec3::new(1.0 + 1e-7, 0.5, 0.5), 1e-6));
        assert!(!b.contains(Vec3::new(1.1, 0.5, 0.5), 1e-6));
    }
}
