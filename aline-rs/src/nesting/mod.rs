mod ordering;
mod shelf_nester;

#[doc(inline)]
pub use ordering::placement_order;
#[doc(inline)]
pub use shelf_nester::FabricNester;
#[doc(inline)]
pub use shelf_nester::layout;
