use crate::error::{Error, Result};
use crate::tolerance::fequals_slice;

/// How a freshly constructed spline's knot vector should be initialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KnotLayout {
    /// Knots are left zeroed, for internal use (e.g. a scratch value about
    /// to be overwritten by a caller such as the resizer).
    Uninit,
    /// Knots spread uniformly across `[0, 1]`, `u_i = i / (n_knots - 1)`.
    Opened,
    /// Knots clamped at both ends (`order` repeats of `0` and of `1`) with
    /// a uniform interior.
    Clamped,
}

/// A B-spline curve: `degree`, a flat buffer of `dim`-dimensional control
/// points, and a knot vector. `order`, `n_ctrlp` and `n_knots` are derived
/// from these rather than stored, so they can never drift out of sync with
/// the buffers they describe.
#[derive(Clone, Debug, PartialEq)]
pub struct BSpline {
    pub(crate) degree: usize,
    pub(crate) dim: usize,
    pub(crate) ctrlp: Vec<f32>,
    pub(crate) knots: Vec<f32>,
}

impl BSpline {
    /// Construct a spline of the given `degree` and `dim`ension with
    /// `n_ctrlp` control points, initializing its knot vector per
    /// `layout`. Control points always start zeroed.
    pub fn new(degree: usize, dim: usize, n_ctrlp: usize, layout: KnotLayout) -> Result<BSpline> {
        if dim < 1 {
            return Err(Error::DimZero);
        }
        if degree >= n_ctrlp {
            return Err(Error::DegreeGeControlPoints { degree, n_ctrlp });
        }
        let order = degree.checked_add(1).ok_or(Error::OverUnderflow)?;
        let n_knots = n_ctrlp.checked_add(order).ok_or(Error::OverUnderflow)?;
        let n_ctrlp_floats = n_ctrlp.checked_mul(dim).ok_or(Error::OverUnderflow)?;

        let ctrlp = vec![0.0f32; n_ctrlp_floats];
        let mut knots = vec![0.0f32; n_knots];

        match layout {
            KnotLayout::Uninit => {}
            KnotLayout::Opened => {
                let denom = (n_knots - 1) as f32;
                for (i, k) in knots.iter_mut().enumerate() {
                    *k = i as f32 / denom;
                }
            }
            KnotLayout::Clamped => {
                for k in knots[..order].iter_mut() {
                    *k = 0.0;
                }
                for k in knots[n_knots - order..].iter_mut() {
                    *k = 1.0;
                }
                // Interior count is `n_knots - 2*order`; when it is zero
                // (`order == n_ctrlp`) the range below is empty and the
                // denominator, which would be zero, is never evaluated.
                let denom = (n_knots - 2 * degree - 1) as f32;
                for (j, i) in (order..n_knots - order).enumerate() {
                    knots[i] = (j + 1) as f32 / denom;
                }
            }
        }

        Ok(BSpline {
            degree,
            dim,
            ctrlp,
            knots,
        })
    }

    /// Builds a spline directly from caller-supplied buffers, checking
    /// only the structural invariants (not the knot vector's contents).
    pub fn from_buffers(degree: usize, dim: usize, ctrlp: Vec<f32>, knots: Vec<f32>) -> Result<BSpline> {
        if dim < 1 {
            return Err(Error::DimZero);
        }
        if ctrlp.len() % dim != 0 {
            return Err(Error::OverUnderflow);
        }
        let n_ctrlp = ctrlp.len() / dim;
        if degree >= n_ctrlp {
            return Err(Error::DegreeGeControlPoints { degree, n_ctrlp });
        }
        let order = degree + 1;
        let n_knots = n_ctrlp.checked_add(order).ok_or(Error::OverUnderflow)?;
        if knots.len() != n_knots {
            return Err(Error::OverUnderflow);
        }
        Ok(BSpline {
            degree,
            dim,
            ctrlp,
            knots,
        })
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn order(&self) -> usize {
        self.degree + 1
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn n_ctrlp(&self) -> usize {
        self.ctrlp.len() / self.dim
    }

    pub fn n_knots(&self) -> usize {
        self.knots.len()
    }

    pub fn knot(&self, i: usize) -> f32 {
        self.knots[i]
    }

    pub fn knots(&self) -> &[f32] {
        &self.knots
    }

    pub fn control_point(&self, i: usize) -> &[f32] {
        &self.ctrlp[i * self.dim..(i + 1) * self.dim]
    }

    pub fn control_points(&self) -> &[f32] {
        &self.ctrlp
    }

    /// Tolerant structural equality: same degree and dimension, and every
    /// control-point coordinate and knot pairwise `fequals`.
    ///
    /// This is deliberately weaker than `PartialEq` (which compares the
    /// underlying `f32` buffers bit for bit) — it is the comparison the
    /// "round-trip copy" property in the curve's testable contract relies
    /// on.
    pub fn equals(&self, other: &BSpline) -> bool {
        self.degree == other.degree
            && self.dim == other.dim
            && fequals_slice(&self.ctrlp, &other.ctrlp)
            && fequals_slice(&self.knots, &other.knots)
    }

    /// Deep-copies `src` into `self`, failing if `src` and `self` are the
    /// same value. `Clone` is the aliasing-free way to duplicate a spline;
    /// this method exists for callers that legitimately hold source and
    /// destination as separate bindings that might refer to the same
    /// underlying value.
    pub fn assign(&mut self, src: &BSpline) -> Result<()> {
        if std::ptr::eq(self, src) {
            return Err(Error::InputEqOutput);
        }
        self.degree = src.degree;
        self.dim = src.dim;
        self.ctrlp = src.ctrlp.clone();
        self.knots = src.knots.clone();
        Ok(())
    }
}
