//! Dimension style table entry

use super::TableEntry;
use crate::error::{DxfError, Result};
use crate::types::Handle;
use std::fmt;

/// Value of a dimension style variable
///
/// Per-entity overrides and [`DimStyle::get`] exchange values in this form;
/// the typed accessors convert between the numeric kinds the way DXF group
/// codes do (flags are integers, 0 is false).
#[derive(Debug, Clone, PartialEq)]
pub enum DimValue {
    Real(f64),
    Int(i16),
    Text(String),
}

impl DimValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DimValue::Real(v) => Some(*v),
            DimValue::Int(v) => Some(*v as f64),
            DimValue::Text(s) => s.trim().parse().ok(),
        }
    }

    pub fn as_i16(&self) -> Option<i16> {
        match self {
            DimValue::Int(v) => Some(*v),
            DimValue::Real(v) => Some(*v as i16),
            DimValue::Text(s) => s.trim().parse().ok(),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_i16().map(|v| v != 0)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DimValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for DimValue {
    fn from(v: f64) -> Self {
        DimValue::Real(v)
    }
}

impl From<i16> for DimValue {
    fn from(v: i16) -> Self {
        DimValue::Int(v)
    }
}

impl From<bool> for DimValue {
    fn from(v: bool) -> Self {
        DimValue::Int(v as i16)
    }
}

impl From<char> for DimValue {
    fn from(v: char) -> Self {
        DimValue::Text(v.to_string())
    }
}

impl From<&str> for DimValue {
    fn from(v: &str) -> Self {
        DimValue::Text(v.to_string())
    }
}

impl From<String> for DimValue {
    fn from(v: String) -> Self {
        DimValue::Text(v)
    }
}

impl fmt::Display for DimValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimValue::Real(v) => write!(f, "{}", v),
            DimValue::Int(v) => write!(f, "{}", v),
            DimValue::Text(s) => write!(f, "{:?}", s),
        }
    }
}

/// A dimension style table entry
///
/// Sizes are drawing units before DIMSCALE is applied. Arrow blocks are
/// referenced by name: `""` is the closed filled default, standard arrows
/// use their registry name (`"OPEN"`), user arrows their block name.
#[derive(Debug, Clone, PartialEq)]
pub struct DimStyle {
    /// Unique handle
    pub handle: Handle,
    /// Style name
    pub name: String,

    // ─── Dimension line ───
    /// Dimension line color (DIMCLRD, code 176)
    pub dimclrd: i16,
    /// Dimension line extension beyond ticks (DIMDLE, code 46)
    pub dimdle: f64,
    /// Dimension line increment for continuation (DIMDLI, code 43)
    pub dimdli: f64,
    /// Gap around dimension text (DIMGAP, code 147)
    pub dimgap: f64,
    /// Dimension line weight (DIMLWD, code 371)
    pub dimlwd: i16,
    /// Dimension line linetype name (DIMLTYPE)
    pub dimltype: Option<String>,
    /// Suppress first dimension line (DIMSD1, code 281)
    pub dimsd1: bool,
    /// Suppress second dimension line (DIMSD2, code 282)
    pub dimsd2: bool,

    // ─── Extension line ───
    /// Extension line color (DIMCLRE, code 177)
    pub dimclre: i16,
    /// Extension beyond the dimension line (DIMEXE, code 44)
    pub dimexe: f64,
    /// Offset from the measurement point (DIMEXO, code 42)
    pub dimexo: f64,
    /// Extension line weight (DIMLWE, code 372)
    pub dimlwe: i16,
    /// Extension line 1 linetype name (DIMLTEX1)
    pub dimltex1: Option<String>,
    /// Extension line 2 linetype name (DIMLTEX2)
    pub dimltex2: Option<String>,
    /// Suppress first extension line (DIMSE1, code 75)
    pub dimse1: bool,
    /// Suppress second extension line (DIMSE2, code 76)
    pub dimse2: bool,
    /// Fixed extension line length (DIMFXL, code 49)
    pub dimfxl: f64,
    /// Fixed extension line length on (DIMFXLON, code 290)
    pub dimfxlon: bool,

    // ─── Arrows ───
    /// Arrow size (DIMASZ, code 41)
    pub dimasz: f64,
    /// Arrow name for both ends (DIMBLK)
    pub dimblk: String,
    /// First arrow name (DIMBLK1)
    pub dimblk1: String,
    /// Second arrow name (DIMBLK2)
    pub dimblk2: String,
    /// Use DIMBLK1/DIMBLK2 instead of DIMBLK (DIMSAH, code 173)
    pub dimsah: bool,
    /// Center mark size (DIMCEN, code 141)
    pub dimcen: f64,
    /// Tick size, replaces arrows if > 0 (DIMTSZ, code 142)
    pub dimtsz: f64,

    // ─── Text ───
    /// Dimension text color (DIMCLRT, code 178)
    pub dimclrt: i16,
    /// Text height (DIMTXT, code 140)
    pub dimtxt: f64,
    /// Text horizontal justification (DIMJUST, code 280)
    pub dimjust: i16,
    /// Text vertical position (DIMTAD, code 77)
    pub dimtad: i16,
    /// Text inside horizontal (DIMTIH, code 73)
    pub dimtih: bool,
    /// Text outside horizontal (DIMTOH, code 74)
    pub dimtoh: bool,
    /// Force text inside extension lines (DIMTIX, code 174)
    pub dimtix: bool,
    /// Text movement rule (DIMTMOVE, code 279)
    pub dimtmove: i16,
    /// Text style name (DIMTXSTY)
    pub dimtxsty: Option<String>,

    // ─── Scale / units ───
    /// Overall scale factor (DIMSCALE, code 40)
    pub dimscale: f64,
    /// Linear measurement factor (DIMLFAC, code 144)
    pub dimlfac: f64,
    /// Decimal places, negative means undefined (DIMDEC, code 271)
    pub dimdec: i16,
    /// Rounding increment, 0 disables rounding (DIMRND, code 45)
    pub dimrnd: f64,
    /// Decimal separator (DIMDSEP, code 278)
    pub dimdsep: char,
    /// Zero suppression (DIMZIN, code 78)
    pub dimzin: i16,
    /// Prefix/suffix template containing `<>` (DIMPOST, code 3)
    pub dimpost: String,
}

impl DimStyle {
    /// Create a new dimension style with the imperial defaults of a new drawing
    pub fn new(name: impl Into<String>) -> Self {
        DimStyle {
            handle: Handle::NULL,
            name: name.into(),
            dimclrd: 0,
            dimdle: 0.0,
            dimdli: 0.38,
            dimgap: 0.09,
            dimlwd: -2,
            dimltype: None,
            dimsd1: false,
            dimsd2: false,
            dimclre: 0,
            dimexe: 0.18,
            dimexo: 0.0625,
            dimlwe: -2,
            dimltex1: None,
            dimltex2: None,
            dimse1: false,
            dimse2: false,
            dimfxl: 1.0,
            dimfxlon: false,
            dimasz: 0.18,
            dimblk: String::new(),
            dimblk1: String::new(),
            dimblk2: String::new(),
            dimsah: false,
            dimcen: 0.09,
            dimtsz: 0.0,
            dimclrt: 0,
            dimtxt: 0.18,
            dimjust: 0,
            dimtad: 0,
            dimtih: false,
            dimtoh: false,
            dimtix: false,
            dimtmove: 0,
            dimtxsty: None,
            dimscale: 1.0,
            dimlfac: 1.0,
            dimdec: 4,
            dimrnd: 0.0,
            dimdsep: '.',
            dimzin: 0,
            dimpost: String::new(),
        }
    }

    /// Create the standard dimension style
    pub fn standard() -> Self {
        Self::new("Standard")
    }

    /// Look up a variable by name (case-insensitive, e.g. `"dimasz"`)
    ///
    /// Unset optional names (`dimltype`, `dimtxsty`, ...) and unknown
    /// names return `None`.
    pub fn get(&self, name: &str) -> Option<DimValue> {
        let value: DimValue = match name.to_ascii_lowercase().as_str() {
            "dimclrd" => self.dimclrd.into(),
            "dimdle" => self.dimdle.into(),
            "dimdli" => self.dimdli.into(),
            "dimgap" => self.dimgap.into(),
            "dimlwd" => self.dimlwd.into(),
            "dimltype" => self.dimltype.clone()?.into(),
            "dimsd1" => self.dimsd1.into(),
            "dimsd2" => self.dimsd2.into(),
            "dimclre" => self.dimclre.into(),
            "dimexe" => self.dimexe.into(),
            "dimexo" => self.dimexo.into(),
            "dimlwe" => self.dimlwe.into(),
            "dimltex1" => self.dimltex1.clone()?.into(),
            "dimltex2" => self.dimltex2.clone()?.into(),
            "dimse1" => self.dimse1.into(),
            "dimse2" => self.dimse2.into(),
            "dimfxl" => self.dimfxl.into(),
            "dimfxlon" => self.dimfxlon.into(),
            "dimasz" => self.dimasz.into(),
            "dimblk" => self.dimblk.as_str().into(),
            "dimblk1" => self.dimblk1.as_str().into(),
            "dimblk2" => self.dimblk2.as_str().into(),
            "dimsah" => self.dimsah.into(),
            "dimcen" => self.dimcen.into(),
            "dimtsz" => self.dimtsz.into(),
            "dimclrt" => self.dimclrt.into(),
            "dimtxt" => self.dimtxt.into(),
            "dimjust" => self.dimjust.into(),
            "dimtad" => self.dimtad.into(),
            "dimtih" => self.dimtih.into(),
            "dimtoh" => self.dimtoh.into(),
            "dimtix" => self.dimtix.into(),
            "dimtmove" => self.dimtmove.into(),
            "dimtxsty" => self.dimtxsty.clone()?.into(),
            "dimscale" => self.dimscale.into(),
            "dimlfac" => self.dimlfac.into(),
            "dimdec" if self.dimdec >= 0 => self.dimdec.into(),
            "dimrnd" => self.dimrnd.into(),
            "dimdsep" => self.dimdsep.into(),
            "dimzin" => self.dimzin.into(),
            "dimpost" => self.dimpost.as_str().into(),
            _ => return None,
        };
        Some(value)
    }

    /// Set a variable by name
    ///
    /// Fails with [`DxfError::InvalidValue`] for unknown names and values
    /// of the wrong kind.
    pub fn set(&mut self, name: &str, value: DimValue) -> Result<()> {
        let key = name.to_ascii_lowercase();
        let invalid = || DxfError::InvalidValue(format!("{} = {}", name, value));
        let real = || value.as_f64().ok_or_else(invalid);
        let int = || value.as_i16().ok_or_else(invalid);
        let flag = || value.as_bool().ok_or_else(invalid);
        let text = || value.as_str().map(str::to_string).ok_or_else(invalid);
        match key.as_str() {
            "dimclrd" => self.dimclrd = int()?,
            "dimdle" => self.dimdle = real()?,
            "dimdli" => self.dimdli = real()?,
            "dimgap" => self.dimgap = real()?,
            "dimlwd" => self.dimlwd = int()?,
            "dimltype" => self.dimltype = Some(text()?),
            "dimsd1" => self.dimsd1 = flag()?,
            "dimsd2" => self.dimsd2 = flag()?,
            "dimclre" => self.dimclre = int()?,
            "dimexe" => self.dimexe = real()?,
            "dimexo" => self.dimexo = real()?,
            "dimlwe" => self.dimlwe = int()?,
            "dimltex1" => self.dimltex1 = Some(text()?),
            "dimltex2" => self.dimltex2 = Some(text()?),
            "dimse1" => self.dimse1 = flag()?,
            "dimse2" => self.dimse2 = flag()?,
            "dimfxl" => self.dimfxl = real()?,
            "dimfxlon" => self.dimfxlon = flag()?,
            "dimasz" => self.dimasz = real()?,
            "dimblk" => self.dimblk = text()?,
            "dimblk1" => self.dimblk1 = text()?,
            "dimblk2" => self.dimblk2 = text()?,
            "dimsah" => self.dimsah = flag()?,
            "dimcen" => self.dimcen = real()?,
            "dimtsz" => self.dimtsz = real()?,
            "dimclrt" => self.dimclrt = int()?,
            "dimtxt" => self.dimtxt = real()?,
            "dimjust" => self.dimjust = int()?,
            "dimtad" => self.dimtad = int()?,
            "dimtih" => self.dimtih = flag()?,
            "dimtoh" => self.dimtoh = flag()?,
            "dimtix" => self.dimtix = flag()?,
            "dimtmove" => self.dimtmove = int()?,
            "dimtxsty" => self.dimtxsty = Some(text()?),
            "dimscale" => self.dimscale = real()?,
            "dimlfac" => self.dimlfac = real()?,
            "dimdec" => self.dimdec = int()?,
            "dimrnd" => self.dimrnd = real()?,
            "dimdsep" => self.dimdsep = decimal_separator(&value).ok_or_else(invalid)?,
            "dimzin" => self.dimzin = int()?,
            "dimpost" => self.dimpost = text()?,
            _ => return Err(invalid()),
        }
        Ok(())
    }
}

/// DIMDSEP is stored as a character code in DXF and as a string in overrides
pub fn decimal_separator(value: &DimValue) -> Option<char> {
    match value {
        DimValue::Text(s) => s.chars().next(),
        DimValue::Int(code) => char::from_u32(u32::try_from(*code).ok()?),
        DimValue::Real(_) => None,
    }
}

impl Default for DimStyle {
    fn default() -> Self {
        Self::standard()
    }
}

impl TableEntry for DimStyle {
    fn handle(&self) -> Handle {
        self.handle
    }

    fn set_handle(&mut self, handle: Handle) {
        self.handle = handle;
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn is_standard(&self) -> bool {
        self.name.eq_ignore_ascii_case("Standard")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let style = DimStyle::standard();
        assert!(style.is_standard());
        assert_eq!(style.get("dimasz"), Some(DimValue::Real(0.18)));
        assert_eq!(style.get("DIMTAD"), Some(DimValue::Int(0)));
        assert_eq!(style.get("dimdsep"), Some(DimValue::Text(".".into())));
        assert_eq!(style.get("dimltype"), None);
        assert_eq!(style.get("nonsense"), None);
    }

    #[test]
    fn test_undefined_dimdec() {
        let mut style = DimStyle::standard();
        style.dimdec = -1;
        assert_eq!(style.get("dimdec"), None);
    }

    #[test]
    fn test_set_by_name() {
        let mut style = DimStyle::new("ISO-25");
        style.set("dimasz", 2.5.into()).unwrap();
        style.set("dimtix", true.into()).unwrap();
        style.set("dimdsep", DimValue::Int(44)).unwrap();
        style.set("dimblk", "open".into()).unwrap();
        assert_eq!(style.dimasz, 2.5);
        assert!(style.dimtix);
        assert_eq!(style.dimdsep, ',');
        assert_eq!(style.dimblk, "open");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut style = DimStyle::standard();
        assert!(matches!(
            style.set("dimasz", "big".into()),
            Err(DxfError::InvalidValue(_))
        ));
        assert!(style.set("dimunknown", 1.0.into()).is_err());
    }

    #[test]
    fn test_dim_value_conversions() {
        assert_eq!(DimValue::Int(3).as_f64(), Some(3.0));
        assert_eq!(DimValue::Real(2.9).as_i16(), Some(2));
        assert_eq!(DimValue::Int(0).as_bool(), Some(false));
        assert_eq!(DimValue::Text("x".into()).as_f64(), None);
        assert_eq!(DimValue::from(true), DimValue::Int(1));
    }
}
