//! Dimension rendering
//!
//! A DIMENSION entity is rendered into an anonymous block of primitive
//! entities. Rendering runs in two steps:
//!
//! - [`compute_layout`] resolves the dimension style and runs the layout
//!   engine for the dimension type. It only reads the document.
//! - [`CadDocument::render_dimension`] creates the block, replays the
//!   layout into it and updates the DIMENSION entity.
//!
//! Only linear dimensions (type 0 and 1) have a layout engine.
//!
//! [`CadDocument::render_dimension`]: crate::document::CadDocument::render_dimension

pub mod arrows;
pub mod context;
pub mod format;
pub mod layout;
pub mod linear;
pub mod style;

pub use context::DimensionContext;
pub use format::TextFormat;
pub use layout::{BlockLayout, DimensionLayout, DimensionUpdate, LayoutSink, RenderCommand};
pub use linear::LinearDimension;
pub use style::DimStyleOverride;

use crate::document::CadDocument;
use crate::entities::{DimensionType, EntityType};
use crate::error::{DxfError, Result};
use crate::types::{CoordinateSystem, Handle};
use tracing::debug;

/// Renderer selected by the dimension type code
#[derive(Debug, Clone)]
pub enum DimensionRenderer<'a> {
    Linear(LinearDimension<'a>),
    Angular(DimensionContext<'a>),
    Diameter(DimensionContext<'a>),
    Radius(DimensionContext<'a>),
    Angular3Point(DimensionContext<'a>),
    Ordinate(DimensionContext<'a>),
}

impl<'a> DimensionRenderer<'a> {
    /// Select the renderer for the type code of `ctx.dimension`
    ///
    /// Unknown type codes fail with [`DxfError::InvalidValue`].
    pub fn new(ctx: DimensionContext<'a>) -> Result<Self> {
        let code = ctx.dimension.dim_type();
        let dim_type = DimensionType::from_code(code)
            .ok_or_else(|| DxfError::InvalidValue(format!("unknown DIMENSION type: {}", code)))?;
        Ok(match dim_type {
            DimensionType::Linear | DimensionType::Aligned => {
                DimensionRenderer::Linear(LinearDimension::new(ctx)?)
            }
            DimensionType::Angular => DimensionRenderer::Angular(ctx),
            DimensionType::Diameter => DimensionRenderer::Diameter(ctx),
            DimensionType::Radius => DimensionRenderer::Radius(ctx),
            DimensionType::Angular3Point => DimensionRenderer::Angular3Point(ctx),
            DimensionType::Ordinate => DimensionRenderer::Ordinate(ctx),
        })
    }

    pub fn dimension_type(&self) -> DimensionType {
        match self {
            DimensionRenderer::Linear(_) => DimensionType::Linear,
            DimensionRenderer::Angular(_) => DimensionType::Angular,
            DimensionRenderer::Diameter(_) => DimensionType::Diameter,
            DimensionRenderer::Radius(_) => DimensionType::Radius,
            DimensionRenderer::Angular3Point(_) => DimensionType::Angular3Point,
            DimensionRenderer::Ordinate(_) => DimensionType::Ordinate,
        }
    }

    /// Run the layout engine
    ///
    /// Types without a layout engine fail with [`DxfError::NotImplemented`].
    pub fn layout(self) -> Result<DimensionLayout> {
        match self {
            DimensionRenderer::Linear(linear) => linear.layout(),
            other => Err(DxfError::NotImplemented(format!(
                "{:?} dimension rendering",
                other.dimension_type()
            ))),
        }
    }
}

/// Lay out the DIMENSION entity `handle` without modifying the document
///
/// `style` replaces the entity's own style and overrides if given.
pub fn compute_layout(
    doc: &CadDocument,
    handle: Handle,
    cs: CoordinateSystem,
    style: Option<&DimStyleOverride>,
) -> Result<DimensionLayout> {
    let entity = doc
        .get_entity(handle)
        .ok_or(DxfError::ObjectNotFound(handle.value()))?;
    let dimension = match entity {
        EntityType::Dimension(dimension) => dimension,
        other => {
            return Err(DxfError::InvalidValue(format!(
                "entity {} is a {}, not a DIMENSION",
                handle,
                other.entity_type()
            )))
        }
    };
    let style = match style {
        Some(style) => style.clone(),
        None => DimStyleOverride::for_dimension(doc, dimension)?,
    };
    debug!(%handle, dimstyle = style.style_name(), dimtype = dimension.dimtype, "layout dimension");
    let ctx = DimensionContext::new(doc, dimension, cs, style)?;
    DimensionRenderer::new(ctx)?.layout()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Dimension, Line};
    use crate::tables::DimStyle;
    use crate::types::Vector3;

    fn dimension(dim_type: DimensionType) -> Dimension {
        Dimension {
            defpoint2: Vector3::ZERO,
            defpoint3: Vector3::new(10.0, 0.0, 0.0),
            ..Dimension::new(dim_type)
        }
    }

    fn renderer<'a>(doc: &CadDocument, dim: &'a Dimension) -> Result<DimensionRenderer<'a>> {
        let style = DimStyleOverride::new(DimStyle::standard());
        DimensionRenderer::new(DimensionContext::new(doc, dim, CoordinateSystem::PassThrough, style)?)
    }

    #[test]
    fn test_linear_and_aligned_dispatch() {
        let doc = CadDocument::new();
        for dim_type in [DimensionType::Linear, DimensionType::Aligned] {
            let dim = dimension(dim_type);
            let r = renderer(&doc, &dim).unwrap();
            assert_eq!(r.dimension_type(), DimensionType::Linear);
            assert!(r.layout().is_ok());
        }
    }

    #[test]
    fn test_unimplemented_types() {
        let doc = CadDocument::new();
        for dim_type in [
            DimensionType::Angular,
            DimensionType::Diameter,
            DimensionType::Radius,
            DimensionType::Angular3Point,
            DimensionType::Ordinate,
        ] {
            let dim = dimension(dim_type);
            let r = renderer(&doc, &dim).unwrap();
            assert_eq!(r.dimension_type(), dim_type);
            assert!(matches!(r.layout(), Err(DxfError::NotImplemented(_))));
        }
    }

    #[test]
    fn test_unknown_type() {
        let doc = CadDocument::new();
        let mut dim = dimension(DimensionType::Linear);
        dim.dimtype = 7 | 32;
        assert!(matches!(renderer(&doc, &dim), Err(DxfError::InvalidValue(_))));
    }

    #[test]
    fn test_compute_layout_entity_checks() {
        let mut doc = CadDocument::new();
        let line = doc
            .add_entity(Line::from_points(Vector3::ZERO, Vector3::UNIT_X).into())
            .unwrap();
        let cs = CoordinateSystem::PassThrough;
        assert!(matches!(
            compute_layout(&doc, line, cs, None),
            Err(DxfError::InvalidValue(_))
        ));
        assert!(matches!(
            compute_layout(&doc, Handle::new(0xFFFF), cs, None),
            Err(DxfError::ObjectNotFound(0xFFFF))
        ));

        let dim = doc
            .add_entity(dimension(DimensionType::Linear).with_style("Missing").into())
            .unwrap();
        assert!(matches!(
            compute_layout(&doc, dim, cs, None),
            Err(DxfError::InvalidValue(_))
        ));
        let style = DimStyleOverride::new(DimStyle::standard());
        assert!(compute_layout(&doc, dim, cs, Some(&style)).is_ok());
    }
}
