//! # dxf-dimension-rs
//!
//! Renders linear DIMENSION entities of a DXF document into anonymous
//! blocks of primitive entities (lines, solids, text, arrow blocks and
//! defining points), the way CAD applications store the visual part of a
//! dimension.
//!
//! ## Quick Start
//!
//! ```rust
//! use dxf_dimension_rs::{CadDocument, CoordinateSystem, Dimension, Vector3};
//!
//! let mut doc = CadDocument::new();
//! let dim = Dimension::linear(
//!     Vector3::new(5.0, 3.0, 0.0),
//!     Vector3::new(0.0, 0.0, 0.0),
//!     Vector3::new(10.0, 0.0, 0.0),
//!     0.0,
//! );
//! let handle = doc.add_entity(dim.into())?;
//! let block = doc.render_dimension(handle, CoordinateSystem::PassThrough, None)?;
//! assert_eq!(block, "*D1");
//! # Ok::<(), dxf_dimension_rs::DxfError>(())
//! ```
//!
//! ## Architecture
//!
//! - `CadDocument` - entity database, symbol tables and rendering entry points
//! - `render` - style resolution, layout engine and the block sink
//! - `geometry` - construction lines, rays and text boxes
//! - `types` - vectors, handles and the UCS/OCS transforms
//!
//! Layouts are computed from a shared document reference, so many
//! dimensions can be laid out in parallel before they are written back.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod database;
pub mod document;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod notification;
pub mod render;
pub mod tables;
pub mod types;

// Re-export commonly used types
pub use document::{CadDocument, RenderOptions, MODEL_SPACE};
pub use error::{DxfError, Result};
pub use notification::{Notification, NotificationCollection, NotificationType};
pub use types::{
    BoundingBox3D, Color, CoordinateSystem, DxfVersion, Handle, LineWeight, Ocs, Ucs, Vector3,
};

// Re-export entity types
pub use entities::{
    Circle, Dimension, DimensionType, Entity, EntityType, Insert, Line, MText, Point, Solid, Text,
};

pub use geometry::{ConstructionLine, ConstructionRay, TextBox};
pub use render::{compute_layout, DimStyleOverride, DimensionLayout, DimensionRenderer};
pub use tables::{BlockRecord, DimStyle, DimValue, TextStyle};
