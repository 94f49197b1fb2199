//! End-to-end rendering of DIMENSION entities into anonymous blocks

mod common;

use common::*;
use dxf_dimension_rs::entities::{Dimension, DimensionType, EntityType};
use dxf_dimension_rs::geometry::{ConstructionLine, TextBox};
use dxf_dimension_rs::render::compute_layout;
use dxf_dimension_rs::types::{CoordinateSystem, DxfVersion, Ucs, Vector3};
use dxf_dimension_rs::{CadDocument, DxfError, LineWeight, NotificationType};

const PASS: CoordinateSystem = CoordinateSystem::PassThrough;

#[test]
fn test_render_basic_horizontal_dimension() {
    let dim = Dimension::linear(Vector3::ZERO, Vector3::ZERO, Vector3::new(10.0, 0.0, 0.0), 0.0);
    let (doc, handle, block) = render_one(dim, PASS, None);

    assert_eq!(block, "*D1");
    let dim = dimension(&doc, handle);
    assert_eq!(dim.geometry, "*D1");
    assert_f64_eq(dim.actual_measurement.unwrap(), 10.0, TOL);
    assert_eq!(
        block_types(&doc, &block),
        ["MTEXT", "LINE", "LINE", "INSERT", "INSERT", "LINE", "LINE", "POINT", "POINT", "POINT"]
    );
    assert_eq!(block_texts(&doc, &block), ["10.0000"]);

    for entity in doc.block_entities(&block).unwrap() {
        if let EntityType::Point(point) = entity {
            assert_eq!(point.common.layer, "Defpoints");
        }
        if let EntityType::Insert(insert) = entity {
            assert_eq!(insert.block_name, "_CLOSEDFILLED");
        }
    }
    assert!(doc.block_records.contains("_CLOSEDFILLED"));
}

#[test]
fn test_render_twice_creates_new_block() {
    let mut doc = CadDocument::new();
    let handle = doc.add_entity(horizontal(10.0).into()).unwrap();
    assert_eq!(doc.render_dimension(handle, PASS, None).unwrap(), "*D1");
    assert_eq!(doc.render_dimension(handle, PASS, None).unwrap(), "*D2");
    assert_eq!(dimension(&doc, handle).geometry, "*D2");
}

#[test]
fn test_unimplemented_type_creates_no_block() {
    let mut doc = CadDocument::new();
    let handle = doc
        .add_entity(
            Dimension {
                defpoint3: Vector3::new(10.0, 0.0, 0.0),
                ..Dimension::new(DimensionType::Diameter)
            }
            .into(),
        )
        .unwrap();
    let blocks = doc.block_records.len();
    let err = doc.render_dimension(handle, PASS, None).unwrap_err();
    assert!(matches!(err, DxfError::NotImplemented(_)));
    assert_eq!(doc.block_records.len(), blocks);
    assert!(dimension(&doc, handle).geometry.is_empty());
}

#[test]
fn test_decimal_separator_and_template() {
    let dim = Dimension::linear(
        Vector3::new(0.0, 2.0, 0.0),
        Vector3::ZERO,
        Vector3::new(3.14159, 0.0, 0.0),
        0.0,
    );
    let mut style = simple_style();
    style.set("dimdsep", ',');
    let (doc, _, block) = render_one(dim.clone(), PASS, Some(&style));
    assert_eq!(block_texts(&doc, &block), ["3,14"]);

    style.set("dimpost", "<>mm");
    let (doc, _, block) = render_one(dim, PASS, Some(&style));
    assert_eq!(block_texts(&doc, &block), ["3,14mm"]);
}

#[test]
fn test_template_without_placeholder_fails() {
    let mut doc = CadDocument::new();
    let handle = doc.add_entity(horizontal(10.0).into()).unwrap();
    let mut style = simple_style();
    style.set("dimpost", "mm");
    let blocks = doc.block_records.len();
    let err = doc.render_dimension(handle, PASS, Some(&style)).unwrap_err();
    assert!(matches!(err, DxfError::InvalidValue(_)));
    assert_eq!(doc.block_records.len(), blocks);
}

#[test]
fn test_suppressed_text() {
    let (doc, _, block) = render_one(horizontal(10.0).with_text(" "), PASS, Some(&simple_style()));
    assert!(block_texts(&doc, &block).is_empty());
    assert_eq!(count_in_block(&doc, &block, "MTEXT"), 0);
    // no text to split the dimension line
    assert_eq!(count_in_block(&doc, &block, "LINE"), 3);
}

#[test]
fn test_explicit_text_is_verbatim() {
    let (doc, handle, block) =
        render_one(horizontal(10.0).with_text("ten"), PASS, Some(&simple_style()));
    assert_eq!(block_texts(&doc, &block), ["ten"]);
    assert_f64_eq(dimension(&doc, handle).actual_measurement.unwrap(), 10.0, TOL);
}

#[test]
fn test_measurement_factor() {
    let mut style = simple_style();
    style.set("dimlfac", 2.0);
    let (doc, handle, block) = render_one(horizontal(10.0), PASS, Some(&style));
    assert_eq!(block_texts(&doc, &block), ["20.00"]);
    // the stored measurement is the drawing distance
    assert_f64_eq(dimension(&doc, handle).actual_measurement.unwrap(), 10.0, TOL);
}

#[test]
fn test_narrow_dimension_places_text_outside() {
    let mut doc = CadDocument::new();
    let handle = doc.add_entity(horizontal(0.5).into()).unwrap();
    let layout = compute_layout(&doc, handle, PASS, Some(&simple_style())).unwrap();
    // gap + arrow + half text width beyond the second extension line
    assert_vec3_eq(&layout.update.text_midpoint, &Vector3::new(1.85, 3.0, 0.0), TOL);
    assert_eq!(layout.commands_of_type("MTEXT").count(), 1);
}

#[test]
fn test_user_arrow_block() {
    let mut doc = CadDocument::new();
    let handle = doc.add_entity(horizontal(10.0).into()).unwrap();
    let mut style = simple_style();
    style.set("dimblk", "MyArrow");
    let err = doc.render_dimension(handle, PASS, Some(&style)).unwrap_err();
    assert!(matches!(err, DxfError::UndefinedBlock(name) if name == "MyArrow"));

    doc.add_block("MyArrow").unwrap();
    let block = doc.render_dimension(handle, PASS, Some(&style)).unwrap();
    let inserts: Vec<_> = doc
        .block_entities(&block)
        .unwrap()
        .into_iter()
        .filter_map(|e| match e {
            EntityType::Insert(insert) => Some(insert.block_name.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(inserts, ["MyArrow", "MyArrow"]);
}

#[test]
fn test_undefined_dimstyle() {
    let mut doc = CadDocument::new();
    let handle = doc
        .add_entity(horizontal(10.0).with_style("Missing").into())
        .unwrap();
    let err = doc.render_dimension(handle, PASS, None).unwrap_err();
    assert!(matches!(err, DxfError::InvalidValue(_)));
}

#[test]
fn test_r12_document_uses_text() {
    let mut doc = CadDocument::with_version(DxfVersion::AC1009);
    let handle = doc.add_entity(horizontal(10.0).into()).unwrap();
    let block = doc
        .render_dimension(handle, PASS, Some(&simple_style()))
        .unwrap();
    assert_eq!(count_in_block(&doc, &block, "MTEXT"), 0);
    assert_eq!(count_in_block(&doc, &block, "TEXT"), 1);
    assert_eq!(block_texts(&doc, &block), ["10.00"]);
}

#[test]
fn test_extended_line_styles_by_version() {
    let mut style = simple_style();
    style
        .set("dimltex1", "DASHED")
        .set("dimlwe", 35i16)
        .set("dimltype", "CENTER")
        .set("dimlwd", 50i16);

    for (version, extended) in [
        (DxfVersion::AC1009, false),
        (DxfVersion::AC1014, false),
        (DxfVersion::AC1015, true),
        (DxfVersion::AC1032, true),
    ] {
        let mut doc = CadDocument::with_version(version);
        let handle = doc.add_entity(horizontal(10.0).into()).unwrap();
        let block = doc.render_dimension(handle, PASS, Some(&style)).unwrap();
        let lines: Vec<_> = doc
            .block_entities(&block)
            .unwrap()
            .into_iter()
            .filter_map(|e| match e {
                EntityType::Line(line) => Some(line.common.clone()),
                _ => None,
            })
            .collect();
        // ext1, ext2, both dimension line halves
        assert_eq!(lines.len(), 4, "{:?}", version);
        let (ext1, ext2, dim_lines) = (&lines[0], &lines[1], &lines[2..]);

        if extended {
            assert_eq!(ext1.linetype.as_deref(), Some("DASHED"));
            assert_eq!(ext1.line_weight, LineWeight::Value(35));
            assert_eq!(ext2.line_weight, LineWeight::Value(35));
        } else {
            assert_eq!(ext1.linetype, None, "{:?}", version);
            assert_ne!(ext1.line_weight, LineWeight::Value(35));
            assert_ne!(ext2.line_weight, LineWeight::Value(35));
        }
        assert_eq!(ext2.linetype, None);
        for common in dim_lines {
            // the dimension line linetype does not depend on the version
            assert_eq!(common.linetype.as_deref(), Some("CENTER"));
            assert_eq!(common.line_weight == LineWeight::Value(50), extended);
        }
    }
}

#[test]
fn test_suppressed_second_dimension_line() {
    let mut style = simple_style();
    style.set("dimsd2", true);
    let (doc, _, block) = render_one(horizontal(10.0), PASS, Some(&style));
    let lines: Vec<_> = doc
        .block_entities(&block)
        .unwrap()
        .into_iter()
        .filter_map(|e| match e {
            EntityType::Line(line) => Some((line.start, line.end)),
            _ => None,
        })
        .collect();
    // ext1, ext2, first half only
    assert_eq!(lines.len(), 3);
    let (start, end) = lines[2];
    assert_vec3_eq(&start, &Vector3::new(0.25, 3.0, 0.0), TOL);
    assert_f64_eq(end.x, 5.0 - 1.25 - 0.099, TOL);
}

#[test]
fn test_missing_text_style_warns() {
    let mut doc = CadDocument::new();
    doc.options.default_text_style = "Missing".to_string();
    let handle = doc.add_entity(horizontal(10.0).into()).unwrap();
    doc.render_dimension(handle, PASS, None).unwrap();
    assert!(doc.notifications.has_type(NotificationType::Warning));
}

#[test]
fn test_render_in_ucs_sets_extrusion() {
    let ucs = Ucs::new(Vector3::ZERO, Vector3::UNIT_X, Vector3::UNIT_Z).unwrap();
    let (doc, handle, block) = render_one(horizontal(10.0), ucs.into(), Some(&simple_style()));

    let dim = dimension(&doc, handle);
    let normal = Vector3::new(0.0, -1.0, 0.0);
    assert_vec3_eq(&dim.extrusion, &normal, TOL);
    assert_vec3_eq(&dim.defpoint, &Vector3::new(0.0, 0.0, 3.0), TOL);
    assert_vec3_eq(&dim.defpoint3, &Vector3::new(10.0, 0.0, 0.0), TOL);
    assert_f64_eq(dim.actual_measurement.unwrap(), 10.0, TOL);

    for entity in doc.block_entities(&block).unwrap() {
        match entity {
            EntityType::Insert(insert) => assert_vec3_eq(&insert.normal, &normal, TOL),
            // lines stay in WCS, all in the UCS xz-plane
            EntityType::Line(line) => {
                assert_f64_eq(line.start.y, 0.0, TOL);
                assert_f64_eq(line.end.y, 0.0, TOL);
            }
            _ => {}
        }
    }
}

#[test]
fn test_render_dimensions_batch() {
    let mut doc = CadDocument::new();
    let handles: Vec<_> = [4.0, 10.0, 20.0]
        .into_iter()
        .map(|length| doc.add_entity(horizontal(length).into()).unwrap())
        .collect();
    let blocks = doc.render_dimensions(&handles, PASS).unwrap();
    assert_eq!(blocks, ["*D1", "*D2", "*D3"]);
    for (handle, length) in handles.iter().zip([4.0, 10.0, 20.0]) {
        assert_f64_eq(dimension(&doc, *handle).actual_measurement.unwrap(), length, TOL);
    }
}

#[test]
fn test_render_dimensions_stops_at_failure() {
    let mut doc = CadDocument::new();
    let good = doc.add_entity(horizontal(10.0).into()).unwrap();
    let bad = doc
        .add_entity(Dimension::new(DimensionType::Ordinate).into())
        .unwrap();
    let err = doc.render_dimensions(&[good, bad], PASS).unwrap_err();
    assert!(matches!(err, DxfError::NotImplemented(_)));
    assert_eq!(dimension(&doc, good).geometry, "*D1");
    assert!(!doc.block_records.contains("*D2"));
}

#[test]
fn test_text_box_intersections() {
    let text_box = TextBox::new(Vector3::new(5.0, 0.0, 0.0), 2.0, 1.0, 0.0, 0.0);
    let miss = ConstructionLine::new(Vector3::new(0.0, 5.0, 0.0), Vector3::new(10.0, 5.0, 0.0));
    assert!(text_box.intersect(&miss).is_empty());

    let hit = ConstructionLine::new(Vector3::ZERO, Vector3::new(10.0, 0.0, 0.0));
    let points = text_box.intersect(&hit);
    assert_eq!(points.len(), 2);
    assert_vec3_eq(&points[0], &Vector3::new(4.0, 0.0, 0.0), TOL);
    assert_vec3_eq(&points[1], &Vector3::new(6.0, 0.0, 0.0), TOL);
}
