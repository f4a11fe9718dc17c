use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use crate::attributes::Attributes;
use crate::catalog;
use crate::definition::{ShapeDefinition, ShapeRef};
use crate::error::ShapeError;
use crate::kind::ShapeKind;
use crate::markup;
use crate::outline::{Outline, OutlineError};
use crate::selection::SelectedShape;

use blokk_engine::geometry::GeometryError;

/// Ordered, append-only palette of shapes plus the current selection.
///
/// Constructed once by the application and handed to consumers by
/// reference. Registration needs `&mut self`; everything else, including
/// changing the selection, works through `&self`.
///
/// Until the first shape is registered the selection holds the default
/// shape; the first registration then becomes the selection.
pub struct ShapeRegistry {
    shapes: Vec<ShapeRef>,
    default_shape: ShapeRef,
    selected: SelectedShape,
}

impl ShapeRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        let default_shape = Rc::new(catalog::default_shape());
        Self {
            shapes: Vec::new(),
            selected: SelectedShape::new(default_shape.clone()),
            default_shape,
        }
    }

    /// Registry holding the shipped catalog, first entry selected.
    pub fn with_catalog() -> Result<Self, ShapeError> {
        let mut registry = Self::new();
        catalog::register_catalog(&mut registry)?;
        log::debug!("shape catalog ready: {} shapes", registry.len());
        Ok(registry)
    }

    // ── registration ──────────────────────────────────────────────────────

    /// Registers a shape named after its element kind.
    pub fn register(
        &mut self,
        kind: ShapeKind,
        builder: impl Fn(f64, f64, f64) -> Attributes + 'static,
    ) -> Result<ShapeRef, ShapeError> {
        self.register_named(kind, kind.as_str(), builder)
    }

    /// Samples `builder` at `(0, 0, 1)`, extracts the outline and appends
    /// the definition.
    ///
    /// Fails without modifying the registry when the builder panics, the
    /// sample cannot be serialized, the markup yields no path, or the path
    /// encloses no area.
    pub fn register_named(
        &mut self,
        kind: ShapeKind,
        name: impl Into<String>,
        builder: impl Fn(f64, f64, f64) -> Attributes + 'static,
    ) -> Result<ShapeRef, ShapeError> {
        let name = name.into();
        let index = Some(self.shapes.len());

        let outline = sample_builder(&builder)
            .and_then(|sample| markup::validate(&sample).map(|()| sample))
            .map_err(|reason| ShapeError::Registration { kind, index, reason })
            .and_then(|sample| {
                let svg = markup::document(&markup::element(kind, &sample), 1);
                Outline::from_svg(&svg).map_err(|e| match e {
                    OutlineError::NoShape => ShapeError::Geometry {
                        kind,
                        index,
                        source: GeometryError::EmptyOutline,
                    },
                    other => ShapeError::Parse { kind, index, reason: other.to_string() },
                })
            })
            .inspect_err(|e| log::warn!("rejected shape `{name}`: {e}"))?;

        log::debug!(
            "registered shape #{} `{name}` ({kind}): {} path(s), {} outer points",
            self.shapes.len(),
            outline.path_count(),
            outline.primary_shape().outer.len()
        );

        let shape = Rc::new(ShapeDefinition::new(kind, name, index, Box::new(builder), Some(outline)));
        self.shapes.push(shape.clone());

        if self.shapes.len() == 1 && self.selected.is(&self.default_shape) {
            self.selected.set(shape.clone());
        }
        Ok(shape)
    }

    // ── sequence ──────────────────────────────────────────────────────────

    /// All registered shapes in registration order.
    #[inline]
    pub fn shapes(&self) -> &[ShapeRef] {
        &self.shapes
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, ShapeRef> {
        self.shapes.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&ShapeRef> {
        self.shapes.get(index)
    }

    /// The shape selected right after initialization.
    #[inline]
    pub fn first(&self) -> Option<&ShapeRef> {
        self.shapes.first()
    }

    /// Position of `shape` by identity.
    pub fn position(&self, shape: &ShapeRef) -> Option<usize> {
        self.shapes.iter().position(|s| Rc::ptr_eq(s, shape))
    }

    /// Fallback shape; never part of [`shapes`](Self::shapes).
    #[inline]
    pub fn default_shape(&self) -> &ShapeRef {
        &self.default_shape
    }

    // ── selection ─────────────────────────────────────────────────────────

    #[inline]
    pub fn selection(&self) -> &SelectedShape {
        &self.selected
    }

    #[inline]
    pub fn selected(&self) -> ShapeRef {
        self.selected.get()
    }

    /// Replaces the selection with any definition; returns the previous one.
    #[inline]
    pub fn select(&self, shape: ShapeRef) -> ShapeRef {
        self.selected.set(shape)
    }

    /// Selects the shape at `index`, or returns `None` when out of range.
    pub fn select_index(&self, index: usize) -> Option<ShapeRef> {
        let shape = self.shapes.get(index)?.clone();
        self.selected.set(shape.clone());
        Some(shape)
    }

    /// Registry position of the selection; `None` for the default shape
    /// and for definitions from elsewhere.
    pub fn selected_index(&self) -> Option<usize> {
        self.position(&self.selected.get())
    }
}

/// Evaluates the canonical sample, turning a builder panic into a reason.
fn sample_builder(builder: &dyn Fn(f64, f64, f64) -> Attributes) -> Result<Attributes, String> {
    panic::catch_unwind(AssertUnwindSafe(|| builder(0.0, 0.0, 1.0))).map_err(|payload| {
        let msg = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        format!("attribute builder panicked: {msg}")
    })
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a ShapeRegistry {
    type Item = &'a ShapeRef;
    type IntoIter = std::slice::Iter<'a, ShapeRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}

impl std::fmt::Debug for ShapeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeRegistry")
            .field("shapes", &self.shapes)
            .field("selected", &self.selected_index())
            .finish()
    }
}
