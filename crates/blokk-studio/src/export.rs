//! Writes the palette to disk: PNG thumbnails, OBJ meshes, a JSON manifest.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{json, Value};

use blokk_engine::geometry::Geometry;
use blokk_shapes::{render_thumbnail, Pixmap, ShapeDefinition, ShapeRegistry, ThumbnailOptions};

/// Files written for one registered shape.
#[derive(Debug, Clone)]
pub struct ExportedShape {
    pub thumbnail: PathBuf,
    pub mesh: PathBuf,
}

/// Exports every registered shape and writes `catalog.json`.
pub fn export_catalog(registry: &ShapeRegistry, out_dir: &Path, thumbnail: &ThumbnailOptions) -> Result<Vec<ExportedShape>> {
    fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let mut exported = Vec::with_capacity(registry.len());
    let mut entries = Vec::with_capacity(registry.len());

    for (i, shape) in registry.iter().enumerate() {
        let stem = format!("{i:02}-{}", shape.name());
        let png = out_dir.join(format!("{stem}.png"));
        let obj = out_dir.join(format!("{stem}.obj"));

        let pixmap = render_thumbnail(shape, thumbnail)?;
        write_png(&pixmap, &png)?;

        let geometry = shape
            .build_geometry()?
            .with_context(|| format!("shape `{}` produced no geometry", shape.name()))?;
        let file = fs::File::create(&obj).with_context(|| format!("creating {}", obj.display()))?;
        let mut w = BufWriter::new(file);
        write_obj(&mut w, shape.name(), &geometry)?;
        w.flush()?;

        log::info!(
            "exported #{i} `{}`: {} triangles, volume {:.4}",
            shape.name(),
            geometry.triangle_count(),
            geometry.signed_volume()
        );

        entries.push(manifest_entry(shape, &geometry, &png, &obj));
        exported.push(ExportedShape { thumbnail: png, mesh: obj });
    }

    let manifest = json!({
        "shapes": entries,
        "selected": registry.selected_index(),
        "default": {
            "kind": registry.default_shape().kind().as_str(),
            "markup": registry.default_shape().to_markup(0.0, 0.0, 1.0),
        },
    });
    let manifest_path = out_dir.join("catalog.json");
    let text = serde_json::to_string_pretty(&manifest)?;
    fs::write(&manifest_path, text).with_context(|| format!("writing {}", manifest_path.display()))?;

    Ok(exported)
}

fn manifest_entry(shape: &ShapeDefinition, geometry: &Geometry, png: &Path, obj: &Path) -> Value {
    let attributes: serde_json::Map<String, Value> = shape
        .attributes(0.0, 0.0, 1.0)
        .iter()
        .map(|(name, value)| {
            let v = match value.as_number() {
                Some(n) => json!(n),
                None => json!(value.to_string()),
            };
            (name.to_string(), v)
        })
        .collect();

    json!({
        "index": shape.index(),
        "name": shape.name(),
        "kind": shape.kind().as_str(),
        "attributes": attributes,
        "markup": shape.to_markup(0.0, 0.0, 1.0),
        "vertices": geometry.vertex_count(),
        "triangles": geometry.triangle_count(),
        "thumbnail": file_name(png),
        "mesh": file_name(obj),
    })
}

fn file_name(p: &Path) -> String {
    p.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
}

/// Straight-alpha RGBA PNG of a premultiplied pixmap.
pub fn write_png(pixmap: &Pixmap, path: &Path) -> Result<()> {
    let image = image::RgbaImage::from_fn(pixmap.width(), pixmap.height(), |x, y| {
        let rgba = pixmap
            .pixel(x, y)
            .map(|p| p.demultiply())
            .map(|c| [c.red(), c.green(), c.blue(), c.alpha()])
            .unwrap_or([0; 4]);
        image::Rgba(rgba)
    });
    image.save(path).with_context(|| format!("writing {}", path.display()))
}

/// Wavefront OBJ with per-vertex normals; indices are 1-based.
pub fn write_obj<W: Write>(w: &mut W, name: &str, geometry: &Geometry) -> io::Result<()> {
    writeln!(w, "o {name}")?;
    for v in geometry.vertices() {
        let [x, y, z] = v.position;
        writeln!(w, "v {x} {y} {z}")?;
    }
    for v in geometry.vertices() {
        let [x, y, z] = v.normal;
        writeln!(w, "vn {x} {y} {z}")?;
    }
    for t in geometry.indices().chunks_exact(3) {
        let (a, b, c) = (t[0] + 1, t[1] + 1, t[2] + 1);
        writeln!(w, "f {a}//{a} {b}//{b} {c}//{c}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blokk_engine::coords::Vec3;
    use blokk_engine::geometry::Vertex;

    fn triangle() -> Geometry {
        let mut g = Geometry::new();
        let a = g.push_vertex(Vertex::new(Vec3::new(0.0, 0.0, 0.0), Vec3::Z));
        let b = g.push_vertex(Vertex::new(Vec3::new(1.0, 0.0, 0.0), Vec3::Z));
        let c = g.push_vertex(Vertex::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Z));
        g.push_triangle(a, b, c);
        g
    }

    #[test]
    fn obj_uses_one_based_indices() {
        let mut out = Vec::new();
        write_obj(&mut out, "tri", &triangle()).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "o tri");
        assert_eq!(lines[1], "v 0 0 0");
        assert_eq!(lines[4], "vn 0 0 1");
        assert_eq!(lines.last().copied(), Some("f 1//1 2//2 3//3"));
    }

    #[test]
    fn obj_line_counts() {
        let mut out = Vec::new();
        write_obj(&mut out, "tri", &triangle()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 3);
        assert_eq!(text.lines().filter(|l| l.starts_with("vn ")).count(), 3);
        assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 1);
    }

    #[test]
    fn manifest_entry_describes_shape() {
        let registry = ShapeRegistry::with_catalog().unwrap();
        let circle = &registry.shapes()[1];
        let g = circle.build_geometry().unwrap().unwrap();
        let v = manifest_entry(circle, &g, Path::new("out/01-circle.png"), Path::new("out/01-circle.obj"));

        assert_eq!(v["kind"], "circle");
        assert_eq!(v["index"], 1);
        assert_eq!(v["attributes"]["r"], 0.5);
        assert_eq!(v["thumbnail"], "01-circle.png");
        assert_eq!(v["markup"], r#"<circle cx="0.5" cy="0.5" r="0.5" />"#);
    }
}
