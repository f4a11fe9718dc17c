//! Blokk shapes: the palette of block shapes offered by the editor.
//!
//! Each [`ShapeDefinition`] pairs an SVG element kind with a pure attribute
//! builder `(x, y, size) -> Attributes`. At registration the builder is
//! sampled once at `(0, 0, 1)`, serialized to markup and parsed with `usvg`
//! into an [`Outline`]; 3D geometry is extruded from that outline on demand.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use blokk_shapes::ShapeRegistry;
//!
//! let registry = ShapeRegistry::with_catalog()?;
//! let selected = registry.selected();
//! let attrs = selected.attributes(10.0, 10.0, 4.0);
//! let mesh = selected.build_geometry()?;
//! ```
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`attributes`] | `Attributes`, `AttrValue` |
//! | [`kind`] | `ShapeKind` |
//! | [`markup`] | element and document serialization |
//! | [`outline`] | `Outline` extraction through `usvg` |
//! | [`definition`] | `ShapeDefinition`, `ShapeRef` |
//! | [`registry`] | `ShapeRegistry` |
//! | [`selection`] | `SelectedShape` |
//! | [`catalog`] | the shipped shapes and path constants |
//! | [`cache`] | `CachedGeometry` |
//! | [`thumbnail`] | palette icon rasterization |

pub mod attributes;
pub mod cache;
pub mod catalog;
pub mod definition;
pub mod error;
pub mod kind;
pub mod markup;
pub mod outline;
pub mod registry;
pub mod selection;
pub mod thumbnail;

pub use attributes::{AttrValue, Attributes};
pub use cache::CachedGeometry;
pub use catalog::PathVariant;
pub use definition::{ShapeDefinition, ShapeRef};
pub use error::ShapeError;
pub use kind::ShapeKind;
pub use outline::Outline;
pub use registry::ShapeRegistry;
pub use selection::{SelectedShape, SubscriptionId};
pub use thumbnail::{render_thumbnail, ThumbnailOptions};

/// Pixel buffer produced by [`render_thumbnail`].
pub use resvg::tiny_skia::Pixmap;
