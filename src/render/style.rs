//! Dimension style with per-entity overrides

use super::arrows;
use crate::document::CadDocument;
use crate::entities::Dimension;
use crate::error::{DxfError, Result};
use crate::tables::{DimStyle, DimValue};
use indexmap::IndexMap;

/// A dimension style plus an ordered set of overridden variables
///
/// The style is a snapshot: changes to the document's style table after
/// construction do not affect an existing override.
#[derive(Debug, Clone, PartialEq)]
pub struct DimStyleOverride {
    style: DimStyle,
    overrides: IndexMap<String, DimValue>,
}

impl DimStyleOverride {
    /// Override without any overridden variables
    pub fn new(style: DimStyle) -> Self {
        DimStyleOverride {
            style,
            overrides: IndexMap::new(),
        }
    }

    /// Style of `dimension` with the overrides stored on the entity
    ///
    /// Fails with [`DxfError::InvalidValue`] if the style is not defined.
    pub fn for_dimension(doc: &CadDocument, dimension: &Dimension) -> Result<Self> {
        let style = doc.dim_styles.get(&dimension.dimstyle).ok_or_else(|| {
            DxfError::InvalidValue(format!("undefined dimension style \"{}\"", dimension.dimstyle))
        })?;
        Ok(DimStyleOverride {
            style: style.clone(),
            overrides: dimension.overrides.clone(),
        })
    }

    /// Name of the underlying style
    pub fn style_name(&self) -> &str {
        &self.style.name
    }

    /// Override a variable, names are case-insensitive
    pub fn set(&mut self, name: &str, value: impl Into<DimValue>) -> &mut Self {
        self.overrides.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    /// Remove an override, the style value applies again
    pub fn clear(&mut self, name: &str) -> Option<DimValue> {
        self.overrides.shift_remove(&name.to_ascii_lowercase())
    }

    /// Overridden variables in insertion order
    pub fn overrides(&self) -> impl Iterator<Item = (&str, &DimValue)> {
        self.overrides.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Look up a variable: override first, then the style
    pub fn get(&self, name: &str) -> Option<DimValue> {
        self.overrides
            .get(&name.to_ascii_lowercase())
            .cloned()
            .or_else(|| self.style.get(name))
    }

    pub fn get_f64(&self, name: &str, default: f64) -> f64 {
        self.get(name).and_then(|v| v.as_f64()).unwrap_or(default)
    }

    pub fn get_i16(&self, name: &str, default: i16) -> i16 {
        self.get(name).and_then(|v| v.as_i16()).unwrap_or(default)
    }

    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        self.get(name).and_then(|v| v.as_bool()).unwrap_or(default)
    }

    /// Text variable, `None` if unset
    pub fn get_str(&self, name: &str) -> Option<String> {
        match self.get(name)? {
            DimValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Arrow names of the first and second arrow
    ///
    /// DIMBLK1/DIMBLK2 apply if DIMSAH is set, DIMBLK otherwise. Empty names
    /// are the closed filled default.
    pub fn arrow_names(&self) -> (String, String) {
        let name = |var: &str| arrows::normalize_name(&self.get_str(var).unwrap_or_default());
        if self.get_bool("dimsah", false) {
            (name("dimblk1"), name("dimblk2"))
        } else {
            let both = name("dimblk");
            (both.clone(), both)
        }
    }

    /// Store the overrides on `dimension`, replacing its previous overrides
    pub fn commit(&self, dimension: &mut Dimension) {
        dimension.dimstyle = self.style.name.clone();
        dimension.overrides = self.overrides.clone();
    }
}
