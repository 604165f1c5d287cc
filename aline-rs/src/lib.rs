//! Panel geometry and fabric nesting engine for panelled A-line skirts.
//!
//! The pipeline is: body measurements are split into panel segments by the [`partition`] engine,
//! each pair of waist/hem segments becomes a dimensioned [`Panel`](entities::Panel) via the
//! [`panel_builder`], and the resulting panels are laid out on a bolt of fabric by the
//! [`nesting`] module to estimate the required yardage.
//! The [`cut_planner`] is independent and answers how many whole lengths of a fabric cut are
//! needed for a wanted length.

/// Entities to model skirts, panels, fabric and layouts
pub mod entities;

/// Typed validation errors
pub mod error;

/// Geometric primitives and transformations used to position panels on the fabric
pub mod geometry;

/// Importing inputs into and exporting results out of this library
pub mod io;

/// Greedy row (shelf) packing of panels onto a fabric bolt
pub mod nesting;

/// Splitting a circumference into panel segments
pub mod partition;

/// Building dimensioned panels from segment widths
pub mod panel_builder;

/// Straight-cut planning for a fixed fabric length
pub mod cut_planner;

/// Helper functions which do not belong to any specific module
pub mod util;
