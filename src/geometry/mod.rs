//! Planar construction geometry for dimension layout
//!
//! Rays, bounded lines and text boxes live in the xy-plane of the working
//! coordinate system. Intersection results keep the z value of the receiver.

pub mod construction;
pub mod text_box;

pub use construction::{ConstructionLine, ConstructionRay};
pub use text_box::TextBox;
