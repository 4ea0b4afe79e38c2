use crate::error::Result;
use crate::spline::BSpline;
use crate::tolerance::fequals;

impl BSpline {
    /// Decomposes the curve into a sequence of abutting Bézier segments:
    /// every knot ends up with multiplicity `order` (clamped ends
    /// included), so each span of the result collapses to an ordinary
    /// Bézier curve of the same degree.
    pub fn to_beziers(&self) -> Result<BSpline> {
        let deg = self.degree;
        let order = self.order();
        let mut cur = self.clone();

        let u_deg = cur.knot(deg);
        if !fequals(cur.knot(0), u_deg) {
            let (split, k) = cur.split(u_deg)?;
            let n = -(deg as isize) + (2 * deg as isize - k as isize);
            cur = split.resize(n, false)?;
        }

        let back_knot = cur.knot(cur.n_knots() - order);
        if !fequals(cur.knot(cur.n_knots() - 1), back_knot) {
            let (split, k) = cur.split(back_knot)?;
            let n = -(deg as isize) + (k as isize - (split.n_knots() as isize - order as isize));
            cur = split.resize(n, true)?;
        }

        let mut k = order;
        while k < cur.n_knots() - order {
            let u = cur.knot(k);
            let (split, new_k) = cur.split(u)?;
            cur = split;
            k = new_k + 1;
        }

        Ok(cur)
    }
}
