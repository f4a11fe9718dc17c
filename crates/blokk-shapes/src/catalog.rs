//! The shipped shape palette.
//!
//! Registration order is part of the contract: the first entry is the
//! initial selection and consumers address shapes by position. Path data is
//! frozen; downstream rendering depends on the exact control points.

use crate::attributes::{format_number, Attributes};
use crate::definition::ShapeDefinition;
use crate::error::ShapeError;
use crate::kind::ShapeKind;
use crate::registry::ShapeRegistry;

pub const ROUNDED_CORNER: &str = "M0 1C0 0.447715 0.447715 0 1 0V0V1H0V1Z";
pub const TRIANGLE_CORNER: &str = "M0.5 0L0.496774 0.00645187L1 1H0L0.5 0Z";
pub const DIAGONAL_BL_TR: &str = "M1 0V1H0L1 0Z";
pub const DIAGONAL_TL_BR: &str = "M0 0V1H1L0 0Z";
pub const CURVED_CORNER_TL: &str = "M0 0V1H1V1C1 0.447715 0.552285 0 0 0V0Z";
pub const CURVED_CORNER_TR: &str = "M1 0V1H0V1C0 0.447715 0.447715 0 1 0V0Z";
pub const HALF_BLOCK_BOTTOM: &str = "M1 0.5V1H0V0.5H1Z";
pub const HALF_BLOCK_TOP: &str = "M1 0.5V0H0V0.5H1Z";

/// Number of shapes [`register_catalog`] adds.
pub const CATALOG_LEN: usize = 2 + PathVariant::ALL.len();

/// Unit-square path shapes, in registration order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PathVariant {
    RoundedCorner,
    TriangleCorner,
    DiagonalBlTr,
    DiagonalTlBr,
    CurvedCornerTl,
    CurvedCornerTr,
    HalfBlockBottom,
    HalfBlockTop,
}

impl PathVariant {
    pub const ALL: [PathVariant; 8] = [
        PathVariant::RoundedCorner,
        PathVariant::TriangleCorner,
        PathVariant::DiagonalBlTr,
        PathVariant::DiagonalTlBr,
        PathVariant::CurvedCornerTl,
        PathVariant::CurvedCornerTr,
        PathVariant::HalfBlockBottom,
        PathVariant::HalfBlockTop,
    ];

    /// Path data in the unit square.
    pub const fn d(self) -> &'static str {
        match self {
            PathVariant::RoundedCorner => ROUNDED_CORNER,
            PathVariant::TriangleCorner => TRIANGLE_CORNER,
            PathVariant::DiagonalBlTr => DIAGONAL_BL_TR,
            PathVariant::DiagonalTlBr => DIAGONAL_TL_BR,
            PathVariant::CurvedCornerTl => CURVED_CORNER_TL,
            PathVariant::CurvedCornerTr => CURVED_CORNER_TR,
            PathVariant::HalfBlockBottom => HALF_BLOCK_BOTTOM,
            PathVariant::HalfBlockTop => HALF_BLOCK_TOP,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PathVariant::RoundedCorner => "rounded-corner",
            PathVariant::TriangleCorner => "triangle-corner",
            PathVariant::DiagonalBlTr => "diagonal-bl-tr",
            PathVariant::DiagonalTlBr => "diagonal-tl-br",
            PathVariant::CurvedCornerTl => "curved-corner-tl",
            PathVariant::CurvedCornerTr => "curved-corner-tr",
            PathVariant::HalfBlockBottom => "half-block-bottom",
            PathVariant::HalfBlockTop => "half-block-top",
        }
    }

    pub fn attributes(self, x: f64, y: f64, size: f64) -> Attributes {
        Attributes::new().with("d", self.d()).with("transform", placement_transform(x, y, size))
    }
}

/// `translate(x,y) scale(size)`, applied after the unit-square path.
pub fn placement_transform(x: f64, y: f64, size: f64) -> String {
    format!(
        "translate({},{}) scale({})",
        format_number(x),
        format_number(y),
        format_number(size)
    )
}

pub fn rect_attributes(x: f64, y: f64, size: f64) -> Attributes {
    Attributes::new()
        .with("x", x)
        .with("y", y)
        .with("width", size)
        .with("height", size)
}

pub fn circle_attributes(x: f64, y: f64, size: f64) -> Attributes {
    Attributes::new()
        .with("cx", x + size / 2.0)
        .with("cy", y + size / 2.0)
        .with("r", size / 2.0)
}

/// Placeholder rect used before anything is selected.
pub fn default_shape() -> ShapeDefinition {
    ShapeDefinition::placeholder(ShapeKind::Rect, "default", rect_attributes)
}

/// Appends the shipped shapes: rect, circle, then every [`PathVariant`].
pub fn register_catalog(registry: &mut ShapeRegistry) -> Result<(), ShapeError> {
    registry.register_named(ShapeKind::Rect, "rect", rect_attributes)?;
    registry.register_named(ShapeKind::Circle, "circle", circle_attributes)?;
    for variant in PathVariant::ALL {
        registry.register_named(ShapeKind::Path, variant.name(), move |x, y, size| {
            variant.attributes(x, y, size)
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_formats_like_markup_numbers() {
        assert_eq!(placement_transform(0.0, 0.0, 1.0), "translate(0,0) scale(1)");
        assert_eq!(placement_transform(3.5, -2.0, 0.25), "translate(3.5,-2) scale(0.25)");
        assert_eq!(placement_transform(0.0, 0.0, 1e-7), "translate(0,0) scale(1e-7)");
        assert_eq!(placement_transform(1e21, 0.0, 1.0), "translate(1e+21,0) scale(1)");
    }

    #[test]
    fn circle_is_centered_in_cell() {
        let a = circle_attributes(10.0, 10.0, 4.0);
        assert_eq!(a.number("cx"), Some(12.0));
        assert_eq!(a.number("cy"), Some(12.0));
        assert_eq!(a.number("r"), Some(2.0));
        assert_eq!(a.names().collect::<Vec<_>>(), ["cx", "cy", "r"]);
    }

    #[test]
    fn rect_fills_cell() {
        let a = rect_attributes(1.0, 2.0, 3.0);
        assert_eq!(a.names().collect::<Vec<_>>(), ["x", "y", "width", "height"]);
        assert_eq!(a.number("height"), Some(3.0));
    }

    #[test]
    fn variant_names_are_unique() {
        let mut names: Vec<_> = PathVariant::ALL.iter().map(|v| v.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PathVariant::ALL.len());
    }

    #[test]
    fn default_shape_is_rect_placeholder() {
        let d = default_shape();
        assert_eq!(d.kind(), ShapeKind::Rect);
        assert!(d.is_placeholder());
        assert_eq!(d.attributes(1.0, 1.0, 2.0), rect_attributes(1.0, 1.0, 2.0));
    }
}
