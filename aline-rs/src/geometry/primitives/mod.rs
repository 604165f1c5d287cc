mod point;
mod rect;
mod trapezoid;

#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use rect::Rect;
#[doc(inline)]
pub use trapezoid::Trapezoid;
