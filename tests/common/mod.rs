//! Shared test utilities for dxf-dimension-rs integration tests.
//!
//! Document builders, tolerance-based assertions and block inspection
//! helpers that all test crates import via `mod common;`.

#![allow(dead_code)]

use dxf_dimension_rs::entities::{Dimension, EntityType};
use dxf_dimension_rs::render::DimStyleOverride;
use dxf_dimension_rs::types::{CoordinateSystem, Handle, Vector3};
use dxf_dimension_rs::{CadDocument, DimStyle};

/// Install a test log subscriber, filtered by `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Default tolerance for floating-point comparisons.
pub const TOL: f64 = 1e-6;

// ===========================================================================
// Scalar & point assertions
// ===========================================================================

/// Check approximate equality of two f64 values within `tol`.
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

/// Assert two f64 values are approximately equal.
pub fn assert_f64_eq(a: f64, b: f64, tol: f64) {
    assert!(
        approx_eq(a, b, tol),
        "f64 mismatch: {a} vs {b} (delta={}, tol={tol})",
        (a - b).abs()
    );
}

/// Assert two Vector3 values are approximately equal component-wise.
pub fn assert_vec3_eq(a: &Vector3, b: &Vector3, tol: f64) {
    assert!(
        approx_eq(a.x, b.x, tol) && approx_eq(a.y, b.y, tol) && approx_eq(a.z, b.z, tol),
        "Vector3 mismatch: ({},{},{}) vs ({},{},{}) tol={tol}",
        a.x, a.y, a.z, b.x, b.y, b.z
    );
}

// ===========================================================================
// Builders
// ===========================================================================

/// Style with round numbers: arrow 0.25, gap 0.1, text height 0.5, no
/// extension line offsets, 2 decimal places.
pub fn simple_style() -> DimStyleOverride {
    let mut style = DimStyleOverride::new(DimStyle::standard());
    style
        .set("dimasz", 0.25)
        .set("dimgap", 0.1)
        .set("dimtxt", 0.5)
        .set("dimexo", 0.0)
        .set("dimexe", 0.0)
        .set("dimdec", 2i16);
    style
}

/// Horizontal dimension from (0,0) to (`length`,0), dimension line at y=3.
pub fn horizontal(length: f64) -> Dimension {
    Dimension::linear(
        Vector3::new(length / 2.0, 3.0, 0.0),
        Vector3::ZERO,
        Vector3::new(length, 0.0, 0.0),
        0.0,
    )
}

/// Add `dim` to a fresh document and render it with `style`.
pub fn render_one(
    dim: Dimension,
    cs: CoordinateSystem,
    style: Option<&DimStyleOverride>,
) -> (CadDocument, Handle, String) {
    init_tracing();
    let mut doc = CadDocument::new();
    let handle = doc.add_entity(dim.into()).unwrap();
    let block = doc.render_dimension(handle, cs, style).unwrap();
    (doc, handle, block)
}

// ===========================================================================
// Block inspection
// ===========================================================================

/// Entity type names of a block in drawing order.
pub fn block_types(doc: &CadDocument, block: &str) -> Vec<&'static str> {
    doc.block_entities(block)
        .unwrap()
        .into_iter()
        .map(EntityType::entity_type)
        .collect()
}

/// Count entities of `entity_type` in a block.
pub fn count_in_block(doc: &CadDocument, block: &str, entity_type: &str) -> usize {
    block_types(doc, block)
        .into_iter()
        .filter(|t| *t == entity_type)
        .count()
}

/// Text values of all TEXT and MTEXT entities of a block.
pub fn block_texts(doc: &CadDocument, block: &str) -> Vec<String> {
    doc.block_entities(block)
        .unwrap()
        .into_iter()
        .filter_map(|e| match e {
            EntityType::MText(t) => Some(t.value.clone()),
            EntityType::Text(t) => Some(t.value.clone()),
            _ => None,
        })
        .collect()
}

/// The rendered DIMENSION entity.
pub fn dimension(doc: &CadDocument, handle: Handle) -> &Dimension {
    doc.get_entity(handle)
        .and_then(EntityType::as_dimension)
        .expect("handle is not a DIMENSION")
}
