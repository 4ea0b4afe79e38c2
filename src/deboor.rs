use crate::error::{Error, Result};
use crate::spline::BSpline;
use crate::tolerance::fequals;

/// Which of the three shapes an evaluation resolved to. Carries the same
/// information as the source's non-negative return code (`0`, `1`, `2`)
/// without overloading a single integer for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvalResult {
    /// An interior point computed by running the de Boor recursion;
    /// corresponds to return code `0`.
    Interior,
    /// `u` landed on the curve's first or last control point;
    /// corresponds to return code `1`.
    Endpoint,
    /// `u` landed on an interior knot whose multiplicity already equals
    /// `order`, so the curve has a discontinuity there and the net holds
    /// both the incoming and outgoing control point; corresponds to
    /// return code `2`.
    DoubleKnot,
}

/// One evaluation of a [`BSpline`] at a parameter `u`: the located span,
/// the knot multiplicity there, and the triangular net of intermediate
/// points the de Boor recursion produced.
#[derive(Clone, Debug, PartialEq)]
pub struct DeBoorNet {
    pub(crate) u: f32,
    pub(crate) k: usize,
    pub(crate) s: usize,
    pub(crate) h: usize,
    pub(crate) dim: usize,
    pub(crate) points: Vec<f32>,
    pub(crate) result: usize,
    pub(crate) n_points: usize,
}

impl DeBoorNet {
    /// The parameter actually evaluated, snapped to the matched knot under
    /// tolerant equality.
    pub fn u(&self) -> f32 {
        self.u
    }

    /// The knot index `k` such that `u` lies in the span `[u_k, u_{k+1})`.
    pub fn k(&self) -> usize {
        self.k
    }

    /// The multiplicity of `u` in the spline's knot vector.
    pub fn s(&self) -> usize {
        self.s
    }

    /// The number of de Boor recursion levels this evaluation required.
    pub fn h(&self) -> usize {
        self.h
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// The evaluated curve point. For [`EvalResult::DoubleKnot`] this is
    /// the second (outgoing) of the two control points the net holds; use
    /// [`DeBoorNet::pair`] to get both.
    pub fn point(&self) -> &[f32] {
        &self.points[self.result..self.result + self.dim]
    }

    /// Both control points of a [`EvalResult::DoubleKnot`] evaluation
    /// (incoming, outgoing), or `None` for any other result shape.
    pub fn pair(&self) -> Option<(&[f32], &[f32])> {
        if self.n_points != 2 {
            return None;
        }
        let (left, right) = self.points.split_at(self.dim);
        Some((left, right))
    }
}

impl BSpline {
    /// Evaluates the curve at `u`, running the de Boor recursion.
    ///
    /// Locates the span containing `u` by a linear scan that counts
    /// tolerant-equal knots into the multiplicity `s` before the scan
    /// breaks, then dispatches on `s` relative to `order`: full
    /// multiplicity collapses to an endpoint or a double-knot pair, and
    /// anything under `order` runs the triangular net recursion and
    /// returns its apex.
    pub fn evaluate(&self, u: f32) -> Result<(DeBoorNet, EvalResult)> {
        let deg = self.degree;
        let dim = self.dim;
        let order = self.order();
        let n_knots = self.n_knots();

        let mut k = 0usize;
        let mut s = 0usize;
        while k < n_knots {
            if fequals(u, self.knots[k]) {
                s += 1;
            } else if u < self.knots[k] {
                break;
            }
            k += 1;
        }

        if k == 0 || (k == n_knots && s == 0) {
            return Err(Error::UUndefined { u });
        }
        if s <= deg && (k <= deg || k > n_knots - deg + s - 1) {
            return Err(Error::UUndefined { u });
        }

        k -= 1;
        let u_k = self.knots[k];
        let u = if fequals(u, u_k) { u_k } else { u };
        let h = if deg < s { 0 } else { deg - s };

        if s > order {
            return Err(Error::Multiplicity { s, n: 0, order });
        }

        if s == order {
            if k == deg || k == n_knots - 1 {
                let p = if k == deg { 0 } else { k - s };
                let points = self.control_point(p).to_vec();
                let net = DeBoorNet {
                    u,
                    k,
                    s,
                    h,
                    dim,
                    points,
                    result: 0,
                    n_points: 1,
                };
                return Ok((net, EvalResult::Endpoint));
            }
            let from = k - s;
            let mut points = Vec::with_capacity(2 * dim);
            points.extend_from_slice(self.control_point(from));
            points.extend_from_slice(self.control_point(from + 1));
            let net = DeBoorNet {
                u,
                k,
                s,
                h,
                dim,
                points,
                result: dim,
                n_points: 2,
            };
            return Ok((net, EvalResult::DoubleKnot));
        }

        let fst = k - deg;
        let lst = k - s;
        let n = lst - fst + 1;
        let n_points = n * (n + 1) / 2;
        let mut points = vec![0.0f32; n_points * dim];
        points[..n * dim].copy_from_slice(&self.ctrlp[fst * dim..(lst + 1) * dim]);

        let mut idx_l = 0usize;
        let mut idx_r = dim;
        let mut idx_to = n * dim;
        for r in 1..=h {
            for i in fst + r..=lst {
                let u_i = self.knots[i];
                let denom = self.knots[i + deg - r + 1] - u_i;
                if denom == 0.0 {
                    return Err(Error::UUndefined { u });
                }
                let a = (u - u_i) / denom;
                let a_hat = 1.0 - a;
                for d in 0..dim {
                    points[idx_to + d] = a_hat * points[idx_l + d] + a * points[idx_r + d];
                }
                idx_l += dim;
                idx_r += dim;
                idx_to += dim;
            }
            idx_l += dim;
            idx_r += dim;
        }

        let result = (n_points - 1) * dim;
        let net = DeBoorNet {
            u,
            k,
            s,
            h,
            dim,
            points,
            result,
            n_points,
        };
        Ok((net, EvalResult::Interior))
    }
}
