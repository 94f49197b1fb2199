//! Resolved style and geometry context shared by all dimension renderers

use super::arrows;
use super::format::{TextFormat, MEASUREMENT_PLACEHOLDER};
use super::layout::RenderCommand;
use super::style::DimStyleOverride;
use crate::document::CadDocument;
use crate::entities::{
    Dimension, EntityCommon, Insert, Line, MText, Point, Text, TextHorizontalAlignment,
    TextVerticalAlignment,
};
use crate::error::{DxfError, Result};
use crate::notification::{Notification, NotificationType};
use crate::tables::dimstyle::decimal_separator;
use crate::types::{Color, CoordinateSystem, LineWeight, Vector3};
use tracing::warn;

/// Text override that suppresses the measurement text
const SUPPRESSED_TEXT: &str = " ";

/// Style variables resolved for one DIMENSION entity
///
/// Size variables are already multiplied by DIMSCALE.
#[derive(Debug, Clone)]
pub struct DimensionContext<'a> {
    pub dimension: &'a Dimension,
    pub style: DimStyleOverride,
    pub cs: CoordinateSystem,
    /// Lineweights and extension line linetypes are emitted (R2000+)
    pub supports_extended_styles: bool,
    pub supports_mtext: bool,
    pub defpoints_layer: String,
    pub user_location_override: bool,

    pub dim_scale: f64,
    pub measurement_factor: f64,

    // text
    pub text_style_name: String,
    pub text_height: f64,
    pub text_width_factor: f64,
    pub text_gap: f64,
    pub text_color: Color,
    /// 0 center, 1 next to ext1, 2 next to ext2, 3 above ext1, 4 above ext2
    pub text_halign: i16,
    /// 0 center, 4 below, any other value above the dimension line
    pub text_valign: i16,
    /// 0 dimension line follows the text, 1 text with leader, 2 free text
    pub text_movement_rule: i16,
    pub force_text_inside: bool,
    pub text_format: TextFormat,

    // arrows
    pub tick_size: f64,
    /// `None` when ticks replace the arrows
    pub arrow1_name: Option<String>,
    pub arrow2_name: Option<String>,
    pub arrow_size: f64,

    // dimension line
    pub dim_line_color: Color,
    pub dim_line_extension: f64,
    pub dim_linetype: Option<String>,
    pub dim_lineweight: LineWeight,
    pub suppress_dim1_line: bool,
    pub suppress_dim2_line: bool,

    // extension lines
    pub ext_line_color: Color,
    pub ext1_linetype: Option<String>,
    pub ext2_linetype: Option<String>,
    pub ext_lineweight: LineWeight,
    pub suppress_ext1_line: bool,
    pub suppress_ext2_line: bool,
    pub ext_line_extension: f64,
    pub ext_line_offset: f64,
    pub ext_line_fixed: bool,
    pub ext_line_length: f64,

    notifications: Vec<Notification>,
}

impl<'a> DimensionContext<'a> {
    /// Resolve `style` for `dimension`
    ///
    /// User arrow blocks must be defined in `doc`, otherwise this fails with
    /// [`DxfError::UndefinedBlock`].
    pub fn new(
        doc: &CadDocument,
        dimension: &'a Dimension,
        cs: CoordinateSystem,
        style: DimStyleOverride,
    ) -> Result<Self> {
        let mut notifications = Vec::new();
        let mut notify = |kind: NotificationType, message: String| {
            notifications.push(Notification::new(kind, message).for_entity(dimension.common.handle));
        };

        let mut dim_scale = style.get_f64("dimscale", 1.0);
        if dim_scale == 0.0 {
            warn!(handle = %dimension.common.handle, "DIMSCALE 0 replaced by 1");
            notify(NotificationType::Warning, "DIMSCALE 0 replaced by 1".to_string());
            dim_scale = 1.0;
        }
        for var in ["dimtih", "dimtoh"] {
            if style.get_bool(var, false) {
                notify(
                    NotificationType::NotSupported,
                    format!("{} ignored, use the text rotation", var.to_uppercase()),
                );
            }
        }

        let text_style_name = style
            .get_str("dimtxsty")
            .unwrap_or_else(|| doc.options.default_text_style.clone());
        let (fixed_height, text_width_factor) = match doc.text_styles.get(&text_style_name) {
            Some(text_style) => (text_style.height, text_style.width_factor),
            None => {
                notify(
                    NotificationType::Warning,
                    format!("undefined text style \"{}\"", text_style_name),
                );
                (0.0, 1.0)
            }
        };
        let text_height = if fixed_height > 0.0 {
            fixed_height
        } else {
            style.get_f64("dimtxt", 1.0) * dim_scale
        };

        let default_color = dimension.common.color;
        let color = |var: &str| {
            style
                .get(var)
                .and_then(|v| v.as_i16())
                .map(Color::from_index)
                .unwrap_or(default_color)
        };
        let weight = |var: &str| LineWeight::from_value(style.get_i16(var, LineWeight::ByBlock.value()));

        let tick_size = style.get_f64("dimtsz", 0.0) * dim_scale;
        let (arrow1_name, arrow2_name) = if tick_size > 0.0 {
            (None, None)
        } else {
            let (a1, a2) = style.arrow_names();
            for name in [&a1, &a2] {
                if !arrows::is_arrow(name) && !doc.block_records.contains(name) {
                    return Err(DxfError::UndefinedBlock(name.clone()));
                }
            }
            (Some(a1), Some(a2))
        };

        let text_format = TextFormat {
            rounding: style.get("dimrnd").and_then(|v| v.as_f64()).filter(|r| *r > 0.0),
            decimal_places: style.get("dimdec").and_then(|v| v.as_i16()).filter(|d| *d >= 0),
            suppress_zeros: style.get_i16("dimzin", 0),
            decimal_separator: style
                .get("dimdsep")
                .and_then(|v| decimal_separator(&v))
                .unwrap_or('.'),
            template: style.get_str("dimpost").unwrap_or_default(),
        };

        Ok(DimensionContext {
            dimension,
            cs,
            supports_extended_styles: doc.version.supports_extended_styles(),
            supports_mtext: doc.version.supports_mtext(),
            defpoints_layer: doc.options.defpoints_layer.clone(),
            user_location_override: dimension.user_location_override(),
            dim_scale,
            measurement_factor: style.get_f64("dimlfac", 1.0),
            text_style_name,
            text_height,
            text_width_factor,
            text_gap: style.get_f64("dimgap", 0.625) * dim_scale,
            text_color: color("dimclrt"),
            text_halign: style.get_i16("dimjust", 0),
            text_valign: style.get_i16("dimtad", 0),
            text_movement_rule: style.get_i16("dimtmove", 0),
            force_text_inside: style.get_bool("dimtix", false),
            text_format,
            tick_size,
            arrow1_name,
            arrow2_name,
            arrow_size: style.get_f64("dimasz", 0.25) * dim_scale,
            dim_line_color: color("dimclrd"),
            dim_line_extension: style.get_f64("dimdle", 0.0) * dim_scale,
            dim_linetype: style.get_str("dimltype"),
            dim_lineweight: weight("dimlwd"),
            suppress_dim1_line: style.get_bool("dimsd1", false),
            suppress_dim2_line: style.get_bool("dimsd2", false),
            ext_line_color: color("dimclre"),
            ext1_linetype: style.get_str("dimltex1"),
            ext2_linetype: style.get_str("dimltex2"),
            ext_lineweight: weight("dimlwe"),
            suppress_ext1_line: style.get_bool("dimse1", false),
            suppress_ext2_line: style.get_bool("dimse2", false),
            ext_line_extension: style.get_f64("dimexe", 0.0) * dim_scale,
            ext_line_offset: style.get_f64("dimexo", 0.0) * dim_scale,
            ext_line_fixed: style.get_bool("dimfxlon", false),
            ext_line_length: style.get_f64("dimfxl", 1.0) * dim_scale,
            style,
            notifications,
        })
    }

    pub fn requires_extrusion(&self) -> bool {
        self.cs.requires_extrusion()
    }

    /// Extrusion stamped on planar entities
    pub fn normal(&self) -> Vector3 {
        self.cs.uz()
    }

    pub fn wcs(&self, point: Vector3) -> Vector3 {
        self.cs.to_wcs(point)
    }

    pub fn ocs(&self, point: Vector3) -> Vector3 {
        self.cs.to_ocs(point)
    }

    /// Layer and color of the DIMENSION entity
    pub fn default_attributes(&self) -> EntityCommon {
        EntityCommon::with_layer(self.dimension.common.layer.clone()).with_color(self.dimension.common.color)
    }

    /// Display text for `measurement` (already multiplied by DIMLFAC)
    ///
    /// `" "` suppresses the text, `""` and `"<>"` format the measurement,
    /// anything else is shown verbatim.
    pub fn text_override(&self, measurement: f64) -> Result<String> {
        match self.dimension.text.as_str() {
            SUPPRESSED_TEXT => Ok(String::new()),
            "" | MEASUREMENT_PLACEHOLDER => self.text_format.format(measurement),
            text => Ok(text.to_string()),
        }
    }

    /// Estimated width of `text` from the character count
    pub fn text_width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.text_height * self.text_width_factor
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    // ─── command builders, points in the working coordinate system ───

    pub fn line(&self, start: Vector3, end: Vector3, common: EntityCommon) -> RenderCommand {
        RenderCommand::Line(Line {
            common,
            ..Line::from_points(self.wcs(start), self.wcs(end))
        })
    }

    pub fn point(&self, location: Vector3, common: EntityCommon) -> RenderCommand {
        RenderCommand::Point(Point {
            common,
            ..Point::at(self.wcs(location))
        })
    }

    /// Middle centered text, MTEXT if the version supports it
    pub fn text(&self, value: &str, pos: Vector3, rotation: f64, common: EntityCommon) -> RenderCommand {
        if self.supports_mtext {
            RenderCommand::MText(MText {
                common,
                height: self.text_height,
                rotation,
                style: self.text_style_name.clone(),
                attachment_point: self.dimension.attachment_point.unwrap_or_default(),
                normal: self.normal(),
                ..MText::with_value(value, self.wcs(pos))
            })
        } else {
            let mut text = Text {
                common,
                height: self.text_height,
                rotation,
                width_factor: self.text_width_factor,
                style: self.text_style_name.clone(),
                normal: self.normal(),
                ..Text::new(value)
            };
            text.set_pos(
                self.ocs(pos),
                TextHorizontalAlignment::Center,
                TextVerticalAlignment::Middle,
            );
            RenderCommand::Text(text)
        }
    }

    /// Reference to a standard arrow or a user block
    pub fn blockref(
        &self,
        name: &str,
        insert: Vector3,
        rotation: f64,
        scale: f64,
        common: EntityCommon,
    ) -> RenderCommand {
        let insert = Insert {
            common,
            ..Insert::new(name, self.ocs(insert))
                .with_uniform_scale(scale)
                .with_rotation(rotation)
                .with_normal(self.normal())
        };
        if arrows::is_arrow(name) {
            RenderCommand::ArrowBlockRef(insert)
        } else {
            RenderCommand::BlockRef(insert)
        }
    }

    /// Arrow drawn from its shape parts
    pub fn arrow_shape(
        &self,
        name: &str,
        insert: Vector3,
        rotation: f64,
        size: f64,
        common: &EntityCommon,
    ) -> Vec<RenderCommand> {
        arrows::shape(name, insert, size, rotation)
            .into_iter()
            .map(|part| {
                let part = match part {
                    arrows::ShapePart::Line(a, b) => arrows::ShapePart::Line(self.wcs(a), self.wcs(b)),
                    arrows::ShapePart::Solid(corners) => {
                        arrows::ShapePart::Solid(corners.map(|c| self.ocs(c)))
                    }
                    arrows::ShapePart::Circle { center, radius } => arrows::ShapePart::Circle {
                        center: self.ocs(center),
                        radius,
                    },
                };
                RenderCommand::from_shape(part, common.clone(), self.normal())
            })
            .collect()
    }
}
