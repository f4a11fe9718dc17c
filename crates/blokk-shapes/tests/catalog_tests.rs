//! Contract of the shipped shape catalog.

use std::rc::Rc;

use blokk_shapes::catalog::{self, CATALOG_LEN};
use blokk_shapes::{Attributes, PathVariant, ShapeKind, ShapeRegistry};

fn registry() -> ShapeRegistry {
    ShapeRegistry::with_catalog().expect("catalog registers")
}

// ── order ─────────────────────────────────────────────────────────────────

#[test]
fn catalog_shapes_in_fixed_order() {
    let r = registry();
    // rect, circle, then the eight frozen path variants.
    assert_eq!(r.len(), 10);
    assert_eq!(CATALOG_LEN, 10);

    let kinds: Vec<ShapeKind> = r.iter().map(|s| s.kind()).collect();
    assert_eq!(kinds[0], ShapeKind::Rect);
    assert_eq!(kinds[1], ShapeKind::Circle);
    assert!(kinds[2..].iter().all(|&k| k == ShapeKind::Path));

    let path_data: Vec<String> = r.shapes()[2..]
        .iter()
        .map(|s| s.attributes(0.0, 0.0, 1.0).text("d").unwrap().to_string())
        .collect();
    let expected: Vec<&str> = PathVariant::ALL.iter().map(|v| v.d()).collect();
    assert_eq!(path_data, expected);
}

#[test]
fn indices_follow_registration_order() {
    let r = registry();
    for (i, s) in r.iter().enumerate() {
        assert_eq!(s.index(), Some(i));
        assert_eq!(r.position(s), Some(i));
    }
}

#[test]
fn frozen_path_constants() {
    assert_eq!(catalog::ROUNDED_CORNER, "M0 1C0 0.447715 0.447715 0 1 0V0V1H0V1Z");
    assert_eq!(catalog::TRIANGLE_CORNER, "M0.5 0L0.496774 0.00645187L1 1H0L0.5 0Z");
    assert_eq!(catalog::DIAGONAL_BL_TR, "M1 0V1H0L1 0Z");
    assert_eq!(catalog::DIAGONAL_TL_BR, "M0 0V1H1L0 0Z");
    assert_eq!(catalog::CURVED_CORNER_TL, "M0 0V1H1V1C1 0.447715 0.552285 0 0 0V0Z");
    assert_eq!(catalog::CURVED_CORNER_TR, "M1 0V1H0V1C0 0.447715 0.447715 0 1 0V0Z");
    assert_eq!(catalog::HALF_BLOCK_BOTTOM, "M1 0.5V1H0V0.5H1Z");
    assert_eq!(catalog::HALF_BLOCK_TOP, "M1 0.5V0H0V0.5H1Z");
}

// ── outlines / geometry ───────────────────────────────────────────────────

#[test]
fn every_shape_has_one_path_and_a_derived_shape() {
    for s in registry().iter() {
        let outline = s.outline().expect("registered shapes carry an outline");
        assert_eq!(outline.path_count(), 1, "{}", s.name());
        assert!(!outline.paths()[0].to_shapes().is_empty(), "{}", s.name());
    }
}

#[test]
fn every_shape_extrudes_to_unit_depth() {
    for s in registry().iter() {
        let g = s.build_geometry().unwrap().expect("registered shapes build geometry");
        let b = g.bounds();
        assert!((b.min.z - 0.0).abs() < 1e-6, "{}", s.name());
        assert!((b.max.z - 1.0).abs() < 1e-6, "{}", s.name());
        assert!(b.min.x >= -1e-5 && b.max.x <= 1.0 + 1e-5, "{}", s.name());
        assert!(g.signed_volume() > 0.0, "{} winds inward", s.name());
    }
}

#[test]
fn extruded_volumes_match_cell_coverage() {
    let r = registry();
    let volume = |i: usize| r.shapes()[i].build_geometry().unwrap().unwrap().signed_volume();

    assert!((volume(0) - 1.0).abs() < 1e-4, "rect");
    assert!((volume(1) - std::f32::consts::FRAC_PI_4).abs() < 0.01, "circle");
    assert!((volume(4) - 0.5).abs() < 1e-4, "diagonal bl-tr");
    assert!((volume(5) - 0.5).abs() < 1e-4, "diagonal tl-br");
    assert!((volume(8) - 0.5).abs() < 1e-4, "half block bottom");
    assert!((volume(9) - 0.5).abs() < 1e-4, "half block top");
}

#[test]
fn geometry_is_rebuilt_per_call() {
    let r = registry();
    let s = r.first().unwrap();
    let a = s.build_geometry().unwrap().unwrap();
    let b = s.build_geometry().unwrap().unwrap();
    assert_eq!(a, b);
    assert_ne!(a.vertices().as_ptr(), b.vertices().as_ptr());
}

// ── selection / default ───────────────────────────────────────────────────

#[test]
fn initial_selection_is_first_shape() {
    let r = registry();
    assert!(Rc::ptr_eq(&r.selected(), r.first().unwrap()));
    assert!(Rc::ptr_eq(&r.selected(), &r.shapes()[0]));
}

#[test]
fn default_shape_never_builds_geometry() {
    let r = registry();
    assert!(r.position(r.default_shape()).is_none());
    assert_eq!(r.default_shape().build_geometry(), Ok(None));
    r.select(r.default_shape().clone());
    r.select_index(3);
    assert_eq!(r.default_shape().build_geometry(), Ok(None));
}

#[test]
fn selecting_notifies_subscribers() {
    let r = registry();
    let seen = Rc::new(std::cell::RefCell::new(Vec::new()));
    let sink = seen.clone();
    r.selection().subscribe(move |s| sink.borrow_mut().push(s.index()));

    r.select_index(2);
    r.select(r.default_shape().clone());
    assert_eq!(*seen.borrow(), [Some(2), None]);
}

// ── attribute builders ────────────────────────────────────────────────────

#[test]
fn path_variants_place_with_transform() {
    let r = registry();
    let cases = [
        ((0.0, 0.0, 1.0), "translate(0,0) scale(1)"),
        ((10.0, 20.0, 4.0), "translate(10,20) scale(4)"),
        ((-3.5, 7.25, 0.5), "translate(-3.5,7.25) scale(0.5)"),
        ((0.0, 0.0, 1e-7), "translate(0,0) scale(1e-7)"),
        ((1e21, 0.0, 1.0), "translate(1e+21,0) scale(1)"),
        ((123456789012345680000.0, -0.0, 2.0), "translate(123456789012345680000,0) scale(2)"),
    ];
    for ((x, y, s), expected) in cases {
        for shape in &r.shapes()[2..] {
            let a = shape.attributes(x, y, s);
            let canonical = shape.attributes(0.0, 0.0, 1.0);
            assert_eq!(a.text("d"), canonical.text("d"));
            assert_eq!(a.text("transform").unwrap(), expected);
        }
    }
}

#[test]
fn circle_builder_scenario() {
    let mut r = ShapeRegistry::new();
    let circle = r
        .register(ShapeKind::Circle, |x, y, size| {
            Attributes::new()
                .with("cx", x + size / 2.0)
                .with("cy", y + size / 2.0)
                .with("r", size / 2.0)
        })
        .unwrap();
    let a = circle.attributes(10.0, 10.0, 4.0);
    assert_eq!(a, Attributes::new().with("cx", 12.0).with("cy", 12.0).with("r", 2.0));
}

#[test]
fn builders_are_deterministic() {
    for s in registry().iter() {
        assert_eq!(s.attributes(1.5, 2.5, 3.0), s.attributes(1.5, 2.5, 3.0));
    }
}

#[test]
fn markup_for_canonical_placements() {
    let r = registry();
    assert_eq!(r.shapes()[0].to_markup(0.0, 0.0, 1.0), r#"<rect x="0" y="0" width="1" height="1" />"#);
    assert_eq!(r.shapes()[1].to_markup(0.0, 0.0, 1.0), r#"<circle cx="0.5" cy="0.5" r="0.5" />"#);
    assert_eq!(
        r.shapes()[9].to_markup(2.0, 3.0, 4.0),
        r#"<path d="M1 0.5V0H0V0.5H1Z" transform="translate(2,3) scale(4)" />"#
    );
}

// ── append-only ───────────────────────────────────────────────────────────

#[test]
fn register_appends_without_reordering() {
    let mut r = registry();
    let before: Vec<_> = r.shapes().to_vec();

    let added = r.register(ShapeKind::Rect, catalog::rect_attributes).unwrap();

    assert_eq!(r.len(), before.len() + 1);
    assert!(Rc::ptr_eq(r.shapes().last().unwrap(), &added));
    for (old, now) in before.iter().zip(r.shapes()) {
        assert!(Rc::ptr_eq(old, now));
    }
    assert!(Rc::ptr_eq(&r.selected(), &before[0]));
}

#[test]
fn kind_can_be_given_as_element_name() {
    let mut r = registry();
    let kind: ShapeKind = "rect".parse().unwrap();
    let added = r.register(kind, catalog::rect_attributes).unwrap();
    assert_eq!(added.kind(), ShapeKind::Rect);
    assert_eq!(added.name(), "rect");
}
