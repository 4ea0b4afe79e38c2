//! deboor-spline
//! ===
//! A library for evaluating B-spline curves via the de Boor recursion,
//! and for the operations built on top of it: knot insertion, resizing,
//! splitting, and decomposition into Bézier segments.
//!
//! Curves are stored as a flat buffer of `dim`-dimensional single-precision
//! control points plus a knot vector, the same layout the algorithms in
//! this crate were translated from. Only curves are modeled — surfaces,
//! NURBS weights and derivatives are out of scope.
//!
//! # Example
//!
//! ```rust
//! use deboor_spline::{BSpline, KnotLayout};
//!
//! let spline = BSpline::new(3, 1, 4, KnotLayout::Clamped).unwrap();
//! let (net, _) = spline.evaluate(0.5).unwrap();
//! assert!(net.point()[0].is_finite());
//! ```

mod beziers;
mod deboor;
mod error;
mod insert;
mod resize;
mod split;
mod spline;
mod tolerance;

pub use deboor::{DeBoorNet, EvalResult};
pub use error::{Error, Result};
pub use spline::{BSpline, KnotLayout};
pub use tolerance::{fequals, fequals_slice, FLT_MAX_ABS_ERROR, FLT_MAX_REL_ERROR};
