mod cut_plan;
mod fabric;
mod fabric_layout;
mod measurements;
mod panel;
mod placement;
mod session;
mod split_ratios;

#[doc(inline)]
pub use cut_plan::CutPlan;
#[doc(inline)]
pub use fabric::Fabric;
#[doc(inline)]
pub use fabric_layout::FabricLayout;
#[doc(inline)]
pub use fabric_layout::LayoutRow;
#[doc(inline)]
pub use measurements::Measurements;
#[doc(inline)]
pub use measurements::SeamAllowances;
#[doc(inline)]
pub use panel::Panel;
#[doc(inline)]
pub use placement::LayoutPlacement;
#[doc(inline)]
pub use session::CalculatorSession;
#[doc(inline)]
pub use split_ratios::SplitRatios;
