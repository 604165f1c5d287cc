mod d_transformation;
mod geo_enums;
mod transformation;

/// Set of traits shared by the geometric primitives
pub mod geo_traits;

/// Set of geometric primitives
pub mod primitives;

#[doc(inline)]
pub use d_transformation::DTransformation;
#[doc(inline)]
pub use geo_enums::PanelRotation;
#[doc(inline)]
pub use transformation::Transformation;
