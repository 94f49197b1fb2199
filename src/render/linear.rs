//! Linear dimension layout: rotated, horizontal, vertical and aligned
//!
//! The layout runs in a single pass. Construction in [`LinearDimension::new`]
//! intersects the dimension line with the extension lines, formats the
//! measurement and decides text and arrow placement; [`LinearDimension::layout`]
//! emits the primitives in their fixed order:
//!
//! 1. measurement text, with a leader if the text was moved away from the line
//! 2. extension line 1 and 2, unless suppressed
//! 3. arrows or ticks
//! 4. the dimension line, split around the text
//! 5. POINT entities at the defining points

use super::arrows;
use super::context::DimensionContext;
use super::layout::{DimensionLayout, DimensionUpdate, RenderCommand};
use crate::geometry::{ConstructionLine, ConstructionRay, TextBox};
use crate::types::Vector3;
use crate::error::Result;
use std::f64::consts::{FRAC_PI_2, PI};
use tracing::{debug, trace};

/// Text box gap factor, keeps the box border off the dimension line for
/// text placed exactly above or below it
const TEXT_BOX_GAP_FACTOR: f64 = 0.99;

/// Layout state of a linear dimension
#[derive(Debug, Clone)]
pub struct LinearDimension<'a> {
    ctx: DimensionContext<'a>,
    dim_line_angle: f64,
    ext_line_angle: f64,
    text_rotation: f64,
    ext1_line_start: Vector3,
    ext2_line_start: Vector3,
    dim_line_start: Vector3,
    dim_line_end: Vector3,
    measurement: f64,
    text: String,
    text_location: Option<Vector3>,
    /// Text midpoint stored back to the entity, before the vertical lift
    text_midpoint: Vector3,
    text_box: Option<TextBox>,
    text_outside: bool,
    required_text_space: Option<f64>,
    required_arrows_space: f64,
    arrows_outside: bool,
}

impl<'a> LinearDimension<'a> {
    /// Compute the dimension line, the measurement and the placement
    ///
    /// Fails with [`DxfError::Geometry`] if the dimension line is parallel
    /// to the extension lines and with [`DxfError::InvalidValue`] for a
    /// DIMPOST template without placeholder.
    ///
    /// [`DxfError::Geometry`]: crate::error::DxfError::Geometry
    /// [`DxfError::InvalidValue`]: crate::error::DxfError::InvalidValue
    pub fn new(ctx: DimensionContext<'a>) -> Result<Self> {
        let dimension = ctx.dimension;
        let dim_line_angle = dimension.angle;
        let ext_line_angle = dim_line_angle + FRAC_PI_2;
        let text_rotation = dimension.text_rotation.unwrap_or(match ctx.text_halign {
            3 | 4 => dim_line_angle + FRAC_PI_2,
            _ => dim_line_angle,
        });

        let ext1_line_start = dimension.defpoint2;
        let ext2_line_start = dimension.defpoint3;
        let ext1_ray = ConstructionRay::new(ext1_line_start, ext_line_angle);
        let ext2_ray = ConstructionRay::new(ext2_line_start, ext_line_angle);

        let dim_line_location = if ctx.user_location_override && ctx.text_movement_rule == 0 {
            dimension.text_midpoint
        } else {
            dimension.defpoint
        };
        let dim_line_ray = ConstructionRay::new(dim_line_location, dim_line_angle);
        let dim_line_start = dim_line_ray.intersect(&ext1_ray)?;
        let dim_line_end = dim_line_ray.intersect(&ext2_ray)?;

        let measurement = dim_line_start.distance(&dim_line_end);
        let text = ctx.text_override(measurement * ctx.measurement_factor)?;
        let required_arrows_space = 2.0 * ctx.arrow_size + ctx.text_gap;

        let mut dim = LinearDimension {
            dim_line_angle,
            ext_line_angle,
            text_rotation,
            ext1_line_start,
            ext2_line_start,
            dim_line_start,
            dim_line_end,
            measurement,
            text,
            text_location: None,
            text_midpoint: dimension.text_midpoint,
            text_box: None,
            text_outside: false,
            required_text_space: None,
            required_arrows_space,
            arrows_outside: required_arrows_space > measurement,
            ctx,
        };

        if !dim.text.is_empty() {
            let text_width = dim.ctx.text_width(&dim.text);
            let required = text_width + 2.0 * (dim.ctx.arrow_size + dim.ctx.text_gap);
            dim.required_text_space = Some(required);
            if !dim.ctx.force_text_inside {
                dim.text_outside = required > measurement;
            }
            let location = dim.locate_text(text_width);
            dim.text_location = Some(location);
            dim.text_box = Some(TextBox::new(
                location,
                text_width,
                dim.ctx.text_height,
                dim.text_rotation,
                dim.ctx.text_gap * TEXT_BOX_GAP_FACTOR,
            ));
        }
        trace!(
            measurement,
            text = %dim.text,
            text_outside = dim.text_outside,
            arrows_outside = dim.arrows_outside,
            "linear dimension"
        );
        Ok(dim)
    }

    /// Distance between the extension lines in drawing units, before DIMLFAC
    pub fn raw_measurement(&self) -> f64 {
        self.measurement
    }

    /// Measurement as displayed, multiplied by DIMLFAC
    pub fn scaled_measurement(&self) -> f64 {
        self.measurement * self.ctx.measurement_factor
    }

    pub fn dim_line_start(&self) -> Vector3 {
        self.dim_line_start
    }

    pub fn dim_line_end(&self) -> Vector3 {
        self.dim_line_end
    }

    /// Display text, empty if suppressed
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Middle point of the placed text
    pub fn text_location(&self) -> Option<Vector3> {
        self.text_location
    }

    pub fn text_box(&self) -> Option<&TextBox> {
        self.text_box.as_ref()
    }

    pub fn text_outside(&self) -> bool {
        self.text_outside
    }

    pub fn required_text_space(&self) -> Option<f64> {
        self.required_text_space
    }

    pub fn arrows_outside(&self) -> bool {
        self.arrows_outside
    }

    pub fn required_arrows_space(&self) -> f64 {
        self.required_arrows_space
    }

    /// Emit the primitives and the entity update
    pub fn layout(mut self) -> Result<DimensionLayout> {
        let mut commands = Vec::new();

        if let (Some(location), false) = (self.text_location, self.text.is_empty()) {
            self.add_measurement_text(&mut commands, location);
            if self.ctx.user_location_override && self.ctx.text_movement_rule == 1 {
                if let Some(text_box) = &self.text_box {
                    let target = self.dim_line_start.lerp(&self.dim_line_end, 0.5);
                    let [c0, c1, _, _] = text_box.corners;
                    let attribs = self.ctx.default_attributes();
                    commands.push(self.ctx.line(target, c0, attribs.clone()));
                    commands.push(self.ctx.line(c0, c1, attribs));
                }
            }
        }

        if !self.ctx.suppress_ext1_line {
            let (start, end) = self.extension_line_points(self.ext1_line_start, self.dim_line_start);
            let linetype = self.ctx.ext1_linetype.clone();
            commands.push(self.extension_line(start, end, linetype));
        }
        if !self.ctx.suppress_ext2_line {
            let (start, end) = self.extension_line_points(self.ext2_line_start, self.dim_line_end);
            let linetype = self.ctx.ext2_linetype.clone();
            commands.push(self.extension_line(start, end, linetype));
        }

        let (start, end) = self.add_arrows(&mut commands, self.dim_line_start, self.dim_line_end);
        self.add_dimension_line(&mut commands, start, end);

        let defpoints = [self.dim_line_start, self.ext1_line_start, self.ext2_line_start];
        for point in defpoints {
            let attribs = crate::entities::EntityCommon::with_layer(self.ctx.defpoints_layer.clone());
            commands.push(self.ctx.point(point, attribs));
        }

        let update = DimensionUpdate {
            defpoint: self.ctx.wcs(self.dim_line_start),
            defpoint2: self.ctx.wcs(self.ext1_line_start),
            defpoint3: self.ctx.wcs(self.ext2_line_start),
            text_midpoint: self.ctx.ocs(self.text_midpoint),
            extrusion: self.ctx.requires_extrusion().then(|| self.ctx.normal()),
            actual_measurement: self.measurement,
        };
        debug!(
            handle = %self.ctx.dimension.common.handle,
            commands = commands.len(),
            measurement = self.measurement,
            "linear dimension layout"
        );
        Ok(DimensionLayout {
            commands,
            update,
            notifications: self.ctx.take_notifications(),
        })
    }

    /// Unit vector from dimension line start to end
    ///
    /// Falls back to the dimension line angle for a zero-length measurement.
    fn dim_line_direction(&self) -> Vector3 {
        let delta = self.dim_line_end - self.dim_line_start;
        if delta.is_null() {
            Vector3::from_angle(self.dim_line_angle, 1.0)
        } else {
            delta.normalize()
        }
    }

    /// +1 above, 0 centered, -1 below the dimension line
    fn vertical_factor(&self) -> f64 {
        match self.ctx.text_valign {
            0 => 0.0,
            4 => -1.0,
            _ => 1.0,
        }
    }

    /// Distance of the text midpoint from the dimension line, positive above
    fn text_vertical_distance(&self) -> f64 {
        (self.ctx.text_height / 2.0 + self.ctx.text_gap) * self.vertical_factor()
    }

    /// Text midpoint; also records the unlifted location as `text_midpoint`
    /// unless the user placed the text
    fn locate_text(&mut self, text_width: f64) -> Vector3 {
        let start = self.dim_line_start;
        let end = self.dim_line_end;
        let direction = self.dim_line_direction();

        let (location, vdist) = if self.ctx.user_location_override {
            let location = self.ctx.dimension.text_midpoint;
            if self.ctx.text_movement_rule != 0 {
                return location;
            }
            (location, self.text_vertical_distance())
        } else {
            let offset = self.ctx.text_gap + self.ctx.arrow_size + text_width / 2.0;
            let location = match self.ctx.text_halign {
                1 if self.text_outside => start - direction * offset,
                1 => start + direction * offset,
                2 if self.text_outside => end + direction * offset,
                2 => end - direction * offset,
                halign @ (3 | 4) => {
                    let dist = self.ctx.text_gap + self.ctx.text_height / 2.0;
                    let shift = -direction * (dist * self.vertical_factor());
                    if halign == 3 {
                        start + shift
                    } else {
                        end + shift
                    }
                }
                _ if self.text_outside => end + direction * offset,
                _ => start.lerp(&end, 0.5),
            };
            self.text_midpoint = location;
            let vdist = match self.ctx.text_halign {
                3 | 4 => offset,
                _ => self.text_vertical_distance(),
            };
            (location, vdist)
        };
        location + direction.orthogonal() * vdist
    }

    fn add_measurement_text(&self, commands: &mut Vec<RenderCommand>, location: Vector3) {
        let attribs = self.ctx.default_attributes().with_color(self.ctx.text_color);
        commands.push(self.ctx.text(&self.text, location, self.text_rotation, attribs));
    }

    /// Extension line from the measurement point `start` to the dimension
    /// line point `end`, trimmed by DIMEXO or DIMFXL and extended by DIMEXE
    fn extension_line_points(&self, start: Vector3, end: Vector3) -> (Vector3, Vector3) {
        let delta = end - start;
        let direction = if delta.is_null() {
            Vector3::from_angle(self.ext_line_angle, 1.0)
        } else {
            delta.normalize()
        };
        let start = if self.ctx.ext_line_fixed {
            end - direction * self.ctx.ext_line_length
        } else {
            start + direction * self.ctx.ext_line_offset
        };
        (start, end + direction * self.ctx.ext_line_extension)
    }

    fn extension_line(&self, start: Vector3, end: Vector3, linetype: Option<String>) -> RenderCommand {
        let mut attribs = self.ctx.default_attributes().with_color(self.ctx.ext_line_color);
        if self.ctx.supports_extended_styles {
            attribs.linetype = linetype;
            attribs.line_weight = self.ctx.ext_lineweight;
        }
        self.ctx.line(start, end, attribs)
    }

    /// Arrows or ticks at both ends; returns the dimension line end points
    /// moved to the arrow connection points
    fn add_arrows(
        &self,
        commands: &mut Vec<RenderCommand>,
        mut start: Vector3,
        mut end: Vector3,
    ) -> (Vector3, Vector3) {
        let attribs = self.ctx.default_attributes().with_color(self.ctx.dim_line_color);
        let outside = self.arrows_outside;

        match (&self.ctx.arrow1_name, &self.ctx.arrow2_name) {
            (Some(arrow1), Some(arrow2)) => {
                let scale = self.ctx.arrow_size;
                let (mut start_angle, mut end_angle) = (self.dim_line_angle + PI, self.dim_line_angle);
                if outside {
                    std::mem::swap(&mut start_angle, &mut end_angle);
                }
                commands.push(self.ctx.blockref(arrow1, start, start_angle, scale, attribs.clone()));
                commands.push(self.ctx.blockref(arrow2, end, end_angle, scale, attribs.clone()));
                if !outside {
                    start = arrows::connection_point(arrow1, start, scale, start_angle);
                    end = arrows::connection_point(arrow2, end, scale, end_angle);
                }
            }
            _ => {
                let size = self.ctx.tick_size * 2.0;
                for insert in [start, end] {
                    commands.extend(self.ctx.arrow_shape(
                        arrows::OBLIQUE,
                        insert,
                        self.dim_line_angle,
                        size,
                        &attribs,
                    ));
                }
            }
        }

        if outside {
            let has_arrow_extension =
                |name: &Option<String>| name.as_deref().map_or(false, |n| arrows::is_arrow(n) && !arrows::is_origin_zero(n));
            let arrow_vector = self.dim_line_direction() * self.ctx.arrow_size;
            if has_arrow_extension(&self.ctx.arrow1_name) {
                let s = start - arrow_vector;
                commands.push(self.ctx.line(s, s - arrow_vector, attribs.clone()));
            }
            if has_arrow_extension(&self.ctx.arrow2_name) {
                let s = end + arrow_vector;
                commands.push(self.ctx.line(s, s + arrow_vector, attribs));
            }
        }
        (start, end)
    }

    /// Dimension line, extended by DIMDLE behind ticks and oblique arrows
    /// and split around the text box
    fn add_dimension_line(&self, commands: &mut Vec<RenderCommand>, start: Vector3, end: Vector3) {
        let allows_extension =
            |name: &Option<String>| name.as_deref().map_or(true, arrows::has_extension_line);
        let extension = self.dim_line_direction() * self.ctx.dim_line_extension;
        let start = if allows_extension(&self.ctx.arrow1_name) {
            start - extension
        } else {
            start
        };
        let end = if allows_extension(&self.ctx.arrow2_name) {
            end + extension
        } else {
            end
        };

        let mut attribs = self.ctx.default_attributes().with_color(self.ctx.dim_line_color);
        attribs.linetype = self.ctx.dim_linetype.clone();
        if self.ctx.supports_extended_styles {
            attribs.line_weight = self.ctx.dim_lineweight;
        }

        let crossings = self
            .text_box
            .as_ref()
            .map(|text_box| text_box.intersect(&ConstructionLine::new(start, end)))
            .unwrap_or_default();
        if let [a, b] = crossings.as_slice() {
            let (p1, p2) = if start.distance(a) < start.distance(b) {
                (*a, *b)
            } else {
                (*b, *a)
            };
            if !self.ctx.suppress_dim1_line {
                commands.push(self.ctx.line(start, p1, attribs.clone()));
            }
            if !self.ctx.suppress_dim2_line {
                commands.push(self.ctx.line(p2, end, attribs));
            }
        } else {
            commands.push(self.ctx.line(start, end, attribs));
        }
    }
}
