use std::cell::RefCell;
use std::rc::Rc;

use blokk_engine::geometry::{ExtrudeOptions, Geometry};

use crate::definition::ShapeRef;
use crate::error::ShapeError;

/// Memoizes the extrusion of one shape.
///
/// [`ShapeDefinition::build_geometry`](crate::ShapeDefinition::build_geometry)
/// rebuilds on every call; this wrapper builds once and hands out shared
/// handles until [`invalidate`](Self::invalidate). Errors are not cached.
#[derive(Debug)]
pub struct CachedGeometry {
    shape: ShapeRef,
    options: ExtrudeOptions,
    cached: RefCell<Option<Option<Rc<Geometry>>>>,
}

impl CachedGeometry {
    pub fn new(shape: ShapeRef) -> Self {
        Self::with_options(shape, ExtrudeOptions::default())
    }

    pub fn with_options(shape: ShapeRef, options: ExtrudeOptions) -> Self {
        Self { shape, options, cached: RefCell::new(None) }
    }

    #[inline]
    pub fn shape(&self) -> &ShapeRef {
        &self.shape
    }

    #[inline]
    pub fn is_cached(&self) -> bool {
        self.cached.borrow().is_some()
    }

    /// Cached geometry, building it on first use. `None` for placeholders.
    pub fn get(&self) -> Result<Option<Rc<Geometry>>, ShapeError> {
        if let Some(hit) = self.cached.borrow().as_ref() {
            return Ok(hit.clone());
        }
        let built = self.shape.build_geometry_with(&self.options)?.map(Rc::new);
        *self.cached.borrow_mut() = Some(built.clone());
        Ok(built)
    }

    pub fn invalidate(&self) {
        self.cached.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ShapeRegistry;

    #[test]
    fn second_get_returns_same_mesh() {
        let registry = ShapeRegistry::with_catalog().unwrap();
        let cache = CachedGeometry::new(registry.first().unwrap().clone());
        assert!(!cache.is_cached());

        let a = cache.get().unwrap().unwrap();
        let b = cache.get().unwrap().unwrap();
        assert!(Rc::ptr_eq(&a, &b));
        assert!(cache.is_cached());
    }

    #[test]
    fn invalidate_forces_rebuild() {
        let registry = ShapeRegistry::with_catalog().unwrap();
        let cache = CachedGeometry::new(registry.first().unwrap().clone());
        let a = cache.get().unwrap().unwrap();
        cache.invalidate();
        let b = cache.get().unwrap().unwrap();
        assert!(!Rc::ptr_eq(&a, &b));
        assert_eq!(*a, *b);
    }

    #[test]
    fn placeholder_caches_none() {
        let registry = ShapeRegistry::new();
        let cache = CachedGeometry::new(registry.default_shape().clone());
        assert!(cache.get().unwrap().is_none());
        assert!(cache.is_cached());
    }

    #[test]
    fn errors_are_not_cached() {
        let registry = ShapeRegistry::with_catalog().unwrap();
        let cache = CachedGeometry::with_options(
            registry.first().unwrap().clone(),
            ExtrudeOptions { bevel_enabled: true, ..ExtrudeOptions::default() },
        );
        assert!(cache.get().is_err());
        assert!(!cache.is_cached());
    }
}
