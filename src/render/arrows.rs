//! Standard arrow heads
//!
//! Every arrow is defined at unit size with its tip at the origin, pointing
//! along +x. Rendered arrows are block references to `_NAME` blocks which
//! are created on first use from these shapes.

use crate::types::{Matrix3, Vector3};
use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Closed filled arrow, the default of a new dimension style
pub const CLOSED_FILLED: &str = "";
/// Oblique stroke, drawn for tick marks
pub const OBLIQUE: &str = "OBLIQUE";

/// Geometry element of an arrow shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapePart {
    Line(Vector3, Vector3),
    /// Filled triangle or quadrilateral in DXF corner order
    Solid([Vector3; 4]),
    Circle { center: Vector3, radius: f64 },
}

impl ShapePart {
    /// Scale by `size`, rotate by `rotation` radians and move to `insert`
    pub fn placed(&self, insert: Vector3, size: f64, rotation: f64) -> ShapePart {
        let m = Matrix3::rotation_z(rotation);
        let place = |p: Vector3| insert + m * (p * size);
        match *self {
            ShapePart::Line(a, b) => ShapePart::Line(place(a), place(b)),
            ShapePart::Solid(corners) => ShapePart::Solid(corners.map(place)),
            ShapePart::Circle { center, radius } => ShapePart::Circle {
                center: place(center),
                radius: radius * size,
            },
        }
    }
}

/// Registry entry of a standard arrow
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    pub name: &'static str,
    /// Dimension line ends at the insert point instead of one arrow size
    /// behind it
    pub origin_zero: bool,
    /// DIMDLE extends the dimension line behind this arrow
    pub extension_allowed: bool,
    pub parts: Vec<ShapePart>,
}

impl Arrow {
    /// Name of the block definition holding the shape
    pub fn block_name(&self) -> String {
        block_name(self.name)
    }
}

fn p(x: f64, y: f64) -> Vector3 {
    Vector3::new(x, y, 0.0)
}

fn line(a: (f64, f64), b: (f64, f64)) -> ShapePart {
    ShapePart::Line(p(a.0, a.1), p(b.0, b.1))
}

fn triangle(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> ShapePart {
    ShapePart::Solid([p(a.0, a.1), p(b.0, b.1), p(c.0, c.1), p(c.0, c.1)])
}

fn outline(points: &[(f64, f64)]) -> Vec<ShapePart> {
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| line(*a, *b))
        .collect()
}

fn circle(x: f64, y: f64, radius: f64) -> ShapePart {
    ShapePart::Circle {
        center: p(x, y),
        radius,
    }
}

/// Arrow tip with the two wings at `(-1, ±half_width)`
fn wings(half_width: f64) -> [(f64, f64); 3] {
    [(0.0, 0.0), (-1.0, half_width), (-1.0, -half_width)]
}

fn arrow_shapes() -> Vec<(&'static str, Vec<ShapePart>)> {
    let closed = wings(1.0 / 6.0);
    let open30 = (15f64).to_radians().tan();
    let mut closed_lines = outline(&closed);
    closed_lines.push(line((-1.0, 0.0), (0.0, 0.0)));
    let box_outline = [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)];
    let mut box_blank = outline(&box_outline);
    box_blank.push(line((-1.0, 0.0), (-0.5, 0.0)));
    let datum = [(0.0, 0.5), (0.0, -0.5), (-1.0, 0.0)];
    let ez = wings(0.175);
    let mut ez_blank = outline(&ez);
    ez_blank.push(line((-1.0, 0.0), (0.0, 0.0)));

    vec![
        (CLOSED_FILLED, vec![triangle(closed[0], closed[1], closed[2])]),
        ("DOT", vec![circle(-0.5, 0.0, 0.5), triangle((-1.0, 0.0), (-0.5, 0.5), (-0.5, -0.5))]),
        ("DOTSMALL", vec![circle(0.0, 0.0, 1.0 / 16.0)]),
        ("DOTBLANK", vec![circle(-0.5, 0.0, 0.5)]),
        ("ORIGIN", vec![circle(0.0, 0.0, 0.5), line((-1.0, 0.0), (-0.5, 0.0))]),
        (
            "ORIGIN2",
            vec![
                circle(0.0, 0.0, 0.5),
                circle(0.0, 0.0, 0.25),
                line((-1.0, 0.0), (-0.5, 0.0)),
            ],
        ),
        (
            "OPEN",
            vec![line(closed[0], closed[1]), line(closed[0], closed[2]), line((-1.0, 0.0), (0.0, 0.0))],
        ),
        (
            "OPEN90",
            vec![line((0.0, 0.0), (-0.5, 0.5)), line((0.0, 0.0), (-0.5, -0.5)), line((-1.0, 0.0), (0.0, 0.0))],
        ),
        (
            "OPEN30",
            vec![line((0.0, 0.0), (-1.0, open30)), line((0.0, 0.0), (-1.0, -open30)), line((-1.0, 0.0), (0.0, 0.0))],
        ),
        ("CLOSED", closed_lines),
        ("SMALL", vec![circle(0.0, 0.0, 1.0 / 16.0)]),
        ("NONE", Vec::new()),
        (OBLIQUE, vec![line((-0.5, -0.5), (0.5, 0.5))]),
        (
            "BOXFILLED",
            vec![
                ShapePart::Solid([p(-0.5, -0.5), p(0.5, -0.5), p(-0.5, 0.5), p(0.5, 0.5)]),
                line((-1.0, 0.0), (-0.5, 0.0)),
            ],
        ),
        ("BOXBLANK", box_blank),
        ("CLOSEDBLANK", outline(&closed)),
        ("DATUMFILLED", vec![triangle(datum[0], datum[1], datum[2])]),
        ("DATUMBLANK", outline(&datum)),
        (
            "INTEGRAL",
            vec![
                line((-0.4, -0.5), (-0.1, -0.4)),
                line((-0.1, -0.4), (0.1, 0.4)),
                line((0.1, 0.4), (0.4, 0.5)),
            ],
        ),
        (
            "ARCHTICK",
            vec![ShapePart::Solid([p(-0.55, -0.45), p(-0.45, -0.55), p(0.45, 0.55), p(0.55, 0.45)])],
        ),
        ("EZ_ARROW", ez_blank),
        ("EZ_ARROW_BLANK", outline(&ez)),
        ("EZ_ARROW_FILLED", vec![triangle(ez[0], ez[1], ez[2])]),
    ]
}

/// Arrows attached at their origin; the same set allows DIMDLE extensions
const ORIGIN_ZERO: [&str; 6] = ["ARCHTICK", OBLIQUE, "NONE", "SMALL", "INTEGRAL", "DOTSMALL"];

/// All standard arrows in registry order
pub static ARROWS: Lazy<IndexMap<&'static str, Arrow>> = Lazy::new(|| {
    arrow_shapes()
        .into_iter()
        .map(|(name, parts)| {
            let origin_zero = ORIGIN_ZERO.contains(&name);
            let arrow = Arrow {
                name,
                origin_zero,
                extension_allowed: origin_zero,
                parts,
            };
            (name, arrow)
        })
        .collect()
});

/// Look up a standard arrow by normalized name
pub fn get(name: &str) -> Option<&'static Arrow> {
    ARROWS.get(name)
}

/// True for standard arrow names, false for user block names
pub fn is_arrow(name: &str) -> bool {
    ARROWS.contains_key(name)
}

/// Map a style value to a registry name
///
/// Standard arrows are matched case-insensitively with or without the
/// leading `_` of their block name; `CLOSEDFILLED` is the unnamed default.
/// Other names are user blocks and are kept verbatim.
pub fn normalize_name(name: &str) -> String {
    let trimmed = name.trim();
    let upper = trimmed.trim_start_matches('_').to_uppercase();
    if upper == "CLOSEDFILLED" {
        return CLOSED_FILLED.to_string();
    }
    if is_arrow(&upper) {
        upper
    } else {
        trimmed.to_string()
    }
}

/// Block name of a standard arrow
pub fn block_name(name: &str) -> String {
    if name == CLOSED_FILLED {
        "_CLOSEDFILLED".to_string()
    } else {
        format!("_{}", name)
    }
}

pub fn is_origin_zero(name: &str) -> bool {
    get(name).map(|a| a.origin_zero).unwrap_or(false)
}

/// True if DIMDLE may extend the dimension line behind arrow `name`
pub fn has_extension_line(name: &str) -> bool {
    get(name).map(|a| a.extension_allowed).unwrap_or(false)
}

/// Point where the dimension line meets an arrow placed at `insert`
pub fn connection_point(name: &str, insert: Vector3, size: f64, rotation: f64) -> Vector3 {
    if is_origin_zero(name) {
        insert
    } else {
        insert - Vector3::from_angle(rotation, size)
    }
}

/// Shape of arrow `name` at its final location, empty for unknown names
pub fn shape(name: &str, insert: Vector3, size: f64, rotation: f64) -> Vec<ShapePart> {
    get(name)
        .map(|arrow| {
            arrow
                .parts
                .iter()
                .map(|part| part.placed(insert, size, rotation))
                .collect()
        })
        .unwrap_or_default()
}
