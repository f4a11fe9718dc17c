use std::fmt;
use std::rc::Rc;

use blokk_engine::geometry::{extrude, ExtrudeOptions, Geometry};

use crate::attributes::Attributes;
use crate::error::ShapeError;
use crate::kind::ShapeKind;
use crate::markup;
use crate::outline::Outline;

/// Pure attribute builder: `(x, y, size) -> attributes`.
pub type AttributeBuilder = dyn Fn(f64, f64, f64) -> Attributes;

/// Shared handle to a definition. Identity (`Rc::ptr_eq`) is what the
/// selection tracks.
pub type ShapeRef = Rc<ShapeDefinition>;

/// One entry of the shape palette.
pub struct ShapeDefinition {
    kind: ShapeKind,
    name: String,
    index: Option<usize>,
    builder: Box<AttributeBuilder>,
    /// `None` for placeholders, which never produce geometry.
    outline: Option<Outline>,
}

impl ShapeDefinition {
    pub(crate) fn new(
        kind: ShapeKind,
        name: String,
        index: Option<usize>,
        builder: Box<AttributeBuilder>,
        outline: Option<Outline>,
    ) -> Self {
        Self { kind, name, index, builder, outline }
    }

    /// A definition whose geometry builder always yields `None`.
    pub fn placeholder(
        kind: ShapeKind,
        name: impl Into<String>,
        builder: impl Fn(f64, f64, f64) -> Attributes + 'static,
    ) -> Self {
        Self::new(kind, name.into(), None, Box::new(builder), None)
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Stable label used in logs and export file names.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registry position, `None` outside the registry.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Attributes placing the shape at `(x, y)` with uniform scale `size`.
    #[inline]
    pub fn attributes(&self, x: f64, y: f64, size: f64) -> Attributes {
        (self.builder)(x, y, size)
    }

    /// Outline sampled at registration, `None` for placeholders.
    #[inline]
    pub fn outline(&self) -> Option<&Outline> {
        self.outline.as_ref()
    }

    #[inline]
    pub fn is_placeholder(&self) -> bool {
        self.outline.is_none()
    }

    /// Self-closing SVG element for a placement.
    pub fn to_markup(&self, x: f64, y: f64, size: f64) -> String {
        markup::element(self.kind, &self.attributes(x, y, size))
    }

    /// Extrudes the outline to depth 1 without bevel.
    ///
    /// Each call builds fresh geometry; wrap the shape in
    /// [`CachedGeometry`](crate::CachedGeometry) to reuse it.
    pub fn build_geometry(&self) -> Result<Option<Geometry>, ShapeError> {
        self.build_geometry_with(&ExtrudeOptions::default())
    }

    pub fn build_geometry_with(&self, options: &ExtrudeOptions) -> Result<Option<Geometry>, ShapeError> {
        let Some(outline) = &self.outline else {
            return Ok(None);
        };
        extrude(outline.primary_shape(), options)
            .map(Some)
            .map_err(|source| ShapeError::Geometry { kind: self.kind, index: self.index, source })
    }
}

impl fmt::Debug for ShapeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeDefinition")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("index", &self.index)
            .field("placeholder", &self.is_placeholder())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blokk_engine::geometry::GeometryError;

    use crate::markup::document;

    fn unit_rect(x: f64, y: f64, size: f64) -> Attributes {
        Attributes::new().with("x", x).with("y", y).with("width", size).with("height", size)
    }

    fn registered_rect() -> ShapeDefinition {
        let markup = markup::element(ShapeKind::Rect, &unit_rect(0.0, 0.0, 1.0));
        let outline = Outline::from_svg(&document(&markup, 1)).unwrap();
        ShapeDefinition::new(ShapeKind::Rect, "rect".into(), Some(0), Box::new(unit_rect), Some(outline))
    }

    #[test]
    fn placeholder_has_no_geometry() {
        let d = ShapeDefinition::placeholder(ShapeKind::Rect, "default", unit_rect);
        assert!(d.is_placeholder());
        assert_eq!(d.build_geometry(), Ok(None));
        assert_eq!(d.build_geometry(), Ok(None));
    }

    #[test]
    fn markup_uses_placement() {
        let d = ShapeDefinition::placeholder(ShapeKind::Rect, "default", unit_rect);
        assert_eq!(d.to_markup(2.0, 3.0, 4.0), r#"<rect x="2" y="3" width="4" height="4" />"#);
    }

    #[test]
    fn each_build_is_fresh_and_equal() {
        let d = registered_rect();
        let a = d.build_geometry().unwrap().unwrap();
        let b = d.build_geometry().unwrap().unwrap();
        assert_eq!(a, b);
        assert_ne!(a.vertices().as_ptr(), b.vertices().as_ptr());
    }

    #[test]
    fn extrusion_failure_is_labeled() {
        let d = registered_rect();
        let err = d
            .build_geometry_with(&ExtrudeOptions { bevel_enabled: true, ..ExtrudeOptions::default() })
            .unwrap_err();
        assert_eq!(
            err,
            ShapeError::Geometry {
                kind: ShapeKind::Rect,
                index: Some(0),
                source: GeometryError::BevelUnsupported,
            }
        );
    }

    #[test]
    fn debug_skips_builder() {
        let s = format!("{:?}", registered_rect());
        assert!(s.contains("Rect"));
        assert!(s.contains(".."));
    }
}
