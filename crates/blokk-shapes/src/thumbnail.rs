//! Palette icons: a shape rasterized into a square pixmap with `resvg`.

use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg;

use crate::definition::ShapeDefinition;
use crate::error::ShapeError;
use crate::markup;

/// Thumbnail parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailOptions {
    /// Edge length in pixels.
    pub size: u32,
    /// CSS color the shape is filled with.
    pub fill: String,
}

impl Default for ThumbnailOptions {
    fn default() -> Self {
        Self { size: 64, fill: "#1f2933".to_string() }
    }
}

/// Rasterizes the unit-scale placement of `shape`.
///
/// The shape's unit square maps onto the whole pixmap; pixels outside the
/// shape stay transparent.
pub fn render_thumbnail(shape: &ShapeDefinition, options: &ThumbnailOptions) -> Result<Pixmap, ShapeError> {
    let kind = shape.kind();
    let body = format!(
        r#"<g fill="{}">{}</g>"#,
        markup::escape(&options.fill),
        shape.to_markup(0.0, 0.0, 1.0)
    );
    let svg = markup::document(&body, options.size);

    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default())
        .map_err(|e| ShapeError::Render { kind, reason: e.to_string() })?;
    let mut pixmap = Pixmap::new(options.size, options.size).ok_or_else(|| ShapeError::Render {
        kind,
        reason: format!("cannot allocate a {0}x{0} pixmap", options.size),
    })?;

    resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());
    log::trace!("rendered {}px thumbnail for `{}`", options.size, shape.name());
    Ok(pixmap)
}
