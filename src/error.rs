use thiserror::Error;

/// Result alias used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the de Boor core. Every fallible operation returns
/// one of these instead of panicking; allocation failure has no variant
/// here since the global allocator already aborts the process on OOM.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// `dim` was requested as `0`; control points need at least one
    /// coordinate.
    #[error("dimension must be at least 1, got 0")]
    DimZero,

    /// The curve's degree must be strictly less than its control-point
    /// count.
    /// # Examples
    /// ```
    /// use deboor_spline::{BSpline, KnotLayout, Error};
    /// assert_eq!(
    ///     BSpline::new(3, 1, 3, KnotLayout::Clamped),
    ///     Err(Error::DegreeGeControlPoints { degree: 3, n_ctrlp: 3 }),
    /// );
    /// ```
    #[error("degree {degree} must be less than the control point count {n_ctrlp}")]
    DegreeGeControlPoints { degree: usize, n_ctrlp: usize },

    /// `u` fell outside the domain `[u_deg, u_{n_knots-order}]`, including
    /// the case where a boundary was reached without the multiplicity an
    /// open or clamped spline requires there.
    #[error("parameter {u} is outside the spline's defined domain")]
    UUndefined { u: f32 },

    /// Inserting `n` more copies of a knot whose multiplicity is already
    /// `s` would push the multiplicity past `order`. `s` is always the
    /// multiplicity *before* this operation; `n` is `0` at the one call
    /// site (the evaluator) that isn't itself an insertion and merely
    /// found a multiplicity already exceeding `order`.
    #[error("multiplicity {s} plus {n} more would exceed order {order}")]
    Multiplicity { s: usize, n: usize, order: usize },

    /// A computed buffer length or index over- or underflowed.
    #[error("a computed size or index overflowed")]
    OverUnderflow,

    /// An operation that forbids aliased source and destination received
    /// the same value for both.
    #[error("source and destination of an aliasing-sensitive operation are the same value")]
    InputEqOutput,
}
