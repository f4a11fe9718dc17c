use crate::coords::Vec2;

/// Points closer than this are merged when a contour is cleaned.
const MERGE_EPS: f32 = 1e-6;
/// Contours with less absolute area than this are treated as degenerate.
const AREA_EPS: f32 = 1e-9;

/// A closed polygon ring.
///
/// The closing edge is implicit: the last point connects back to the first,
/// which is never repeated at the end.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    points: Vec<Vec2>,
}

impl Contour {
    /// Builds a contour, dropping consecutive duplicates and a repeated
    /// closing point.
    pub fn new(points: impl IntoIterator<Item = Vec2>) -> Self {
        let mut cleaned: Vec<Vec2> = Vec::new();
        for p in points {
            if cleaned.last().is_some_and(|&last| last.distance(p) <= MERGE_EPS) {
                continue;
            }
            cleaned.push(p);
        }
        while cleaned.len() > 1 && cleaned[0].distance(cleaned[cleaned.len() - 1]) <= MERGE_EPS {
            cleaned.pop();
        }
        Self { points: cleaned }
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shoelace area. Positive when the ring turns counter-clockwise with +Y up.
    pub fn signed_area(&self) -> f32 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f32 = (0..n)
            .map(|i| self.points[i].cross(self.points[(i + 1) % n]))
            .sum();
        twice * 0.5
    }

    /// Fewer than three distinct points, or no enclosed area.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3 || self.signed_area().abs() <= AREA_EPS
    }

    /// Even-odd point-in-polygon test.
    pub fn contains(&self, p: Vec2) -> bool {
        let n = self.points.len();
        let mut inside = false;
        let mut j = n.wrapping_sub(1);
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[j];
            if (a.y > p.y) != (b.y > p.y) {
                let x_at = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if p.x < x_at {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// Returns the ring with a positive (`true`) or negative signed area.
    fn oriented(&self, positive: bool) -> Self {
        if (self.signed_area() > 0.0) == positive { self.clone() } else { self.reversed() }
    }
}

/// One filled region: an outer ring plus the holes cut out of it.
///
/// Outer rings have a positive signed area and holes a negative one, so the
/// edge normal `(dy, -dx)` always points away from the filled side.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanarShape {
    pub outer: Contour,
    pub holes: Vec<Contour>,
}

impl PlanarShape {
    /// Shape without holes.
    pub fn solid(outer: Contour) -> Self {
        Self { outer: outer.oriented(true), holes: Vec::new() }
    }

    /// Outer ring first, then holes.
    pub fn contours(&self) -> impl Iterator<Item = &Contour> {
        std::iter::once(&self.outer).chain(self.holes.iter())
    }

    /// Filled area (outer minus holes).
    pub fn area(&self) -> f32 {
        self.outer.signed_area().abs() - self.holes.iter().map(|h| h.signed_area().abs()).sum::<f32>()
    }
}

/// Groups closed contours into filled shapes.
///
/// A contour nested inside an odd number of other contours is a hole and is
/// attached to the smallest contour that contains it. Degenerate contours are
/// dropped. Shapes come out in the order of their outer rings.
pub fn group_contours(contours: &[Contour]) -> Vec<PlanarShape> {
    let rings: Vec<&Contour> = contours.iter().filter(|c| !c.is_degenerate()).collect();

    let containers = |i: usize| -> Vec<usize> {
        let probe = rings[i].points()[0];
        (0..rings.len())
            .filter(|&j| j != i && rings[j].contains(probe))
            .collect()
    };

    let mut shapes: Vec<PlanarShape> = Vec::new();
    let mut outer_slot: Vec<Option<usize>> = vec![None; rings.len()];
    let mut holes: Vec<usize> = Vec::new();

    for i in 0..rings.len() {
        if containers(i).len() % 2 == 0 {
            outer_slot[i] = Some(shapes.len());
            shapes.push(PlanarShape::solid(rings[i].clone()));
        } else {
            holes.push(i);
        }
    }

    for h in holes {
        let parent = containers(h)
            .into_iter()
            .filter(|&j| outer_slot[j].is_some())
            .min_by(|&a, &b| {
                rings[a]
                    .signed_area()
                    .abs()
                    .total_cmp(&rings[b].signed_area().abs())
            });
        if let Some(slot) = parent.and_then(|j| outer_slot[j]) {
            shapes[slot].holes.push(rings[h].oriented(false));
        }
    }

    shapes
}
