use crate::deboor::DeBoorNet;
use crate::error::{Error, Result};
use crate::spline::BSpline;

fn copy_point(dst: &mut [f32], to_pt: usize, src: &[f32], from_pt: usize, dim: usize) {
    dst[to_pt * dim..(to_pt + 1) * dim].copy_from_slice(&src[from_pt * dim..(from_pt + 1) * dim]);
}

/// Casts a buffer index to the signed type the net-traversal cursors use,
/// failing rather than silently truncating on platforms where `usize`
/// outgrows `isize`.
fn to_isize(x: usize) -> Result<isize> {
    isize::try_from(x).map_err(|_| Error::OverUnderflow)
}

impl BSpline {
    /// Inserts `net.u` into the knot vector `n` times, using a de Boor
    /// net already computed by [`BSpline::evaluate`] at that parameter.
    ///
    /// Rewrites the control-point buffer by walking the net's triangular
    /// diagonal from its base toward the apex (`n` points), across the
    /// apex (`N - n` points copied verbatim), then back down toward the
    /// base (`n` points) — the two flanks of the region `n` successive
    /// single-knot insertions would affect.
    pub fn insert_knot_with_net(&self, net: &DeBoorNet, n: usize) -> Result<BSpline> {
        let order = self.order();
        if net.s + n > order {
            return Err(Error::Multiplicity {
                s: net.s,
                n,
                order,
            });
        }
        if n == 0 {
            return Ok(self.clone());
        }

        let deg = self.degree;
        let dim = self.dim;
        let k = net.k;
        let diag = net.h.checked_add(1).ok_or(Error::OverUnderflow)?; // N: net points on the contributing diagonal

        let n_ctrlp = self.n_ctrlp();
        let n_knots = self.n_knots();
        let new_n_ctrlp = n_ctrlp.checked_add(n).ok_or(Error::OverUnderflow)?;
        let new_n_knots = n_knots.checked_add(n).ok_or(Error::OverUnderflow)?;

        let new_ctrlp_len = new_n_ctrlp.checked_mul(dim).ok_or(Error::OverUnderflow)?;
        let mut new_ctrlp = vec![0.0f32; new_ctrlp_len];
        let mut new_knots = vec![0.0f32; new_n_knots];

        // 1. leading control points, verbatim.
        let lead = k.checked_sub(deg).ok_or(Error::OverUnderflow)?;
        new_ctrlp[..lead * dim].copy_from_slice(&self.ctrlp[..lead * dim]);

        // 2. trailing control points, shifted by n.
        let cidx = lead.checked_add(diag).ok_or(Error::OverUnderflow)?;
        let tail_len = n_ctrlp.checked_sub(cidx).ok_or(Error::OverUnderflow)?;
        let cidx_n = cidx.checked_add(n).ok_or(Error::OverUnderflow)?;
        new_ctrlp[cidx_n * dim..(cidx_n + tail_len) * dim]
            .copy_from_slice(&self.ctrlp[cidx * dim..(cidx + tail_len) * dim]);

        // 3. leading and trailing knots, verbatim and shifted by n.
        new_knots[..=k].copy_from_slice(&self.knots[..=k]);
        let kidx = k.checked_add(1).ok_or(Error::OverUnderflow)?;
        let knot_tail_len = n_knots.checked_sub(kidx).ok_or(Error::OverUnderflow)?;
        let kidx_n = kidx.checked_add(n).ok_or(Error::OverUnderflow)?;
        new_knots[kidx_n..kidx_n + knot_tail_len]
            .copy_from_slice(&self.knots[kidx..kidx + knot_tail_len]);

        // 5. the n newly inserted knots.
        for slot in new_knots[kidx..kidx_n].iter_mut() {
            *slot = net.u;
        }

        // 4. middle control points, from the net's diagonal.
        let pts = &net.points;
        let diag_isize = to_isize(diag)?;
        let mut from_pt: isize = 0;
        let mut to_pt: isize = to_isize(lead)?;
        let mut stride: isize = diag_isize;
        for _ in 0..n {
            copy_point(&mut new_ctrlp, to_pt as usize, pts, from_pt as usize, dim);
            from_pt = from_pt.checked_add(stride).ok_or(Error::OverUnderflow)?;
            to_pt = to_pt.checked_add(1).ok_or(Error::OverUnderflow)?;
            stride = stride.checked_sub(1).ok_or(Error::OverUnderflow)?;
        }

        let mid_len = diag.checked_sub(n).ok_or(Error::OverUnderflow)?;
        let f = from_pt as usize;
        let t = to_pt as usize;
        new_ctrlp[t * dim..(t + mid_len) * dim].copy_from_slice(&pts[f * dim..(f + mid_len) * dim]);

        from_pt = from_pt.checked_sub(1).ok_or(Error::OverUnderflow)?;
        to_pt = to_pt
            .checked_add(to_isize(mid_len)?)
            .ok_or(Error::OverUnderflow)?;
        let back_span = diag
            .checked_sub(n)
            .and_then(|v| v.checked_add(1))
            .ok_or(Error::OverUnderflow)?;
        stride = to_isize(back_span)?.checked_neg().ok_or(Error::OverUnderflow)?;
        for _ in 0..n {
            copy_point(&mut new_ctrlp, to_pt as usize, pts, from_pt as usize, dim);
            from_pt = from_pt.checked_add(stride).ok_or(Error::OverUnderflow)?;
            to_pt = to_pt.checked_add(1).ok_or(Error::OverUnderflow)?;
            stride = stride.checked_sub(1).ok_or(Error::OverUnderflow)?;
        }

        Ok(BSpline {
            degree: deg,
            dim,
            ctrlp: new_ctrlp,
            knots: new_knots,
        })
    }

    /// Evaluates at `u` and inserts the resulting knot `n` times, returning
    /// the new curve together with the knot index the inserted run starts
    /// at (`net.k + 1`).
    pub fn insert_knot(&self, u: f32, n: usize) -> Result<(BSpline, usize)> {
        let (net, _) = self.evaluate(u)?;
        let k = net.k;
        let inserted = self.insert_knot_with_net(&net, n)?;
        Ok((inserted, k + 1))
    }
}
